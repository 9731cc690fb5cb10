use crate::{DraftField, ServerErrorKind};

/// Where a server error is shown: next to a field, or in the general slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSlot {
    Field(DraftField),
    General,
}

/// Route a server error id to its display slot. Shared by create, update and
/// delete; everything that is not a duplicate-field error is general.
pub fn classify(error_id: Option<&str>) -> ErrorSlot {
    match ServerErrorKind::from_error_id(error_id) {
        ServerErrorKind::EmailAlreadyRegistered => ErrorSlot::Field(DraftField::Email),
        ServerErrorKind::NameAlreadyRegistered => ErrorSlot::Field(DraftField::Name),
        ServerErrorKind::PhoneAlreadyRegistered => ErrorSlot::Field(DraftField::Phone),
        ServerErrorKind::UserNotFound
        | ServerErrorKind::IdNotRegistered
        | ServerErrorKind::NoDataModified
        | ServerErrorKind::Other(_) => ErrorSlot::General,
    }
}
