use crate::User;

use serde::{Deserialize, Serialize};

/// Which draft field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Email,
    Phone,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An in-progress create or edit payload.
///
/// Serializes as the partial user sent on update: absent fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserDraft {
    /// Blank draft used when the create dialog opens.
    pub fn blank() -> Self {
        Self {
            id: None,
            name: Some(String::new()),
            email: Some(String::new()),
            phone: Some(String::new()),
        }
    }

    pub fn field(&self, field: DraftField) -> Option<&str> {
        match field {
            DraftField::Name => self.name.as_deref(),
            DraftField::Email => self.email.as_deref(),
            DraftField::Phone => self.phone.as_deref(),
        }
    }

    /// Copy of this draft with one field replaced.
    pub fn with_field(&self, field: DraftField, value: String) -> Self {
        let mut draft = self.clone();
        match field {
            DraftField::Name => draft.name = Some(value),
            DraftField::Email => draft.email = Some(value),
            DraftField::Phone => draft.phone = Some(value),
        }
        draft
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id),
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            phone: Some(user.phone.clone()),
        }
    }
}
