use crate::UserDraft;
use crate::validation::validate_draft;

use serde::Serialize;

/// Body of a create request. Only built from a draft that passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewUser {
    pub fn from_draft(draft: &UserDraft) -> Option<Self> {
        if !validate_draft(draft) {
            return None;
        }

        Some(Self {
            name: draft.name.clone().unwrap_or_default(),
            email: draft.email.clone().unwrap_or_default(),
            phone: draft.phone.clone().unwrap_or_default(),
        })
    }
}
