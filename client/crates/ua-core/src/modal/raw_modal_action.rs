use crate::{
    CoreError, CoreResult, ModalAction, ModalDimmer, ModalSize, ModalState, ModalTarget, User,
    UserDraft, reduce,
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

pub const OPEN_MODAL: &str = "OPEN_MODAL";
pub const CLOSE_MODAL: &str = "CLOSE_MODAL";

/// Untyped modal action as it arrives from a message or script:
/// `{ "type": "OPEN_MODAL", "userToEdit": { ... }, "size": "small" }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModalAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub size: Option<ModalSize>,
    #[serde(default)]
    pub dimmer: Option<ModalDimmer>,
    #[serde(default)]
    pub user_to_remove: Option<User>,
    #[serde(default)]
    pub user_to_edit: Option<UserDraft>,
    #[serde(default)]
    pub user_to_create: Option<UserDraft>,
}

impl TryFrom<RawModalAction> for ModalAction {
    type Error = CoreError;

    #[track_caller]
    fn try_from(raw: RawModalAction) -> CoreResult<Self> {
        match raw.kind.as_str() {
            CLOSE_MODAL => Ok(ModalAction::Close),
            OPEN_MODAL => {
                let mut targets = Vec::with_capacity(1);
                if let Some(draft) = raw.user_to_create {
                    targets.push(ModalTarget::Create(draft));
                }
                if let Some(draft) = raw.user_to_edit {
                    targets.push(ModalTarget::Edit(draft));
                }
                if let Some(user) = raw.user_to_remove {
                    targets.push(ModalTarget::Remove(user));
                }

                if targets.len() != 1 {
                    return Err(CoreError::InvalidModalAction {
                        message: format!(
                            "{OPEN_MODAL} needs exactly one target, got {}",
                            targets.len()
                        ),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }

                Ok(ModalAction::Open {
                    target: targets.remove(0),
                    size: raw.size,
                    dimmer: raw.dimmer,
                })
            }
            other => Err(CoreError::UnknownModalAction {
                action: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Apply an untyped action. Unknown action types fail the dispatch and leave
/// the caller's state untouched.
///
/// Library entry point for embedders that receive modal actions as JSON
/// messages. The `ua` binary and `AppState` use the typed [`reduce`] directly.
pub fn reduce_raw(state: &ModalState, raw: RawModalAction) -> CoreResult<ModalState> {
    let action = ModalAction::try_from(raw)?;
    Ok(reduce(state, action))
}
