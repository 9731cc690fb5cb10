use crate::{ModalDimmer, ModalSize, User, UserDraft};

/// The entity a dialog is working on. One dialog targets exactly one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalTarget {
    Create(UserDraft),
    Edit(UserDraft),
    Remove(User),
}

impl ModalTarget {
    pub fn draft(&self) -> Option<&UserDraft> {
        match self {
            Self::Create(draft) | Self::Edit(draft) => Some(draft),
            Self::Remove(_) => None,
        }
    }

    /// Same kind of target carrying a different draft. `Remove` has no draft
    /// and is returned unchanged.
    pub fn with_draft(&self, draft: UserDraft) -> Self {
        match self {
            Self::Create(_) => Self::Create(draft),
            Self::Edit(_) => Self::Edit(draft),
            Self::Remove(user) => Self::Remove(user.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenModal {
    pub target: ModalTarget,
    pub size: Option<ModalSize>,
    pub dimmer: Option<ModalDimmer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(OpenModal),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn target(&self) -> Option<&ModalTarget> {
        match self {
            Self::Open(open) => Some(&open.target),
            Self::Closed => None,
        }
    }

    pub fn user_to_create(&self) -> Option<&UserDraft> {
        match self.target() {
            Some(ModalTarget::Create(draft)) => Some(draft),
            _ => None,
        }
    }

    pub fn user_to_edit(&self) -> Option<&UserDraft> {
        match self.target() {
            Some(ModalTarget::Edit(draft)) => Some(draft),
            _ => None,
        }
    }

    pub fn user_to_remove(&self) -> Option<&User> {
        match self.target() {
            Some(ModalTarget::Remove(user)) => Some(user),
            _ => None,
        }
    }
}
