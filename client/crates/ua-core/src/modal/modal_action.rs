use crate::{ModalDimmer, ModalSize, ModalState, ModalTarget, OpenModal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Replace the whole modal state with this target and these hints.
    Open {
        target: ModalTarget,
        size: Option<ModalSize>,
        dimmer: Option<ModalDimmer>,
    },
    Close,
}

impl ModalAction {
    /// Open with the hints every dialog in the app uses.
    pub fn open(target: ModalTarget) -> Self {
        Self::Open {
            target,
            size: Some(ModalSize::Small),
            dimmer: Some(ModalDimmer::Blurring),
        }
    }
}

/// Modal reducer. `Open` is a full overwrite, never a merge: callers that edit
/// a draft pass the complete updated draft.
pub fn reduce(_state: &ModalState, action: ModalAction) -> ModalState {
    match action {
        ModalAction::Open {
            target,
            size,
            dimmer,
        } => ModalState::Open(OpenModal {
            target,
            size,
            dimmer,
        }),
        ModalAction::Close => ModalState::Closed,
    }
}
