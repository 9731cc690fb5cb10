use crate::{DraftField, ErrorSlot};

use serde::Serialize;

/// Server-side error text per form field plus one general slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub general: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, slot: ErrorSlot) -> Option<&str> {
        match slot {
            ErrorSlot::Field(DraftField::Name) => self.name.as_deref(),
            ErrorSlot::Field(DraftField::Email) => self.email.as_deref(),
            ErrorSlot::Field(DraftField::Phone) => self.phone.as_deref(),
            ErrorSlot::General => self.general.as_deref(),
        }
    }

    pub fn set(&mut self, slot: ErrorSlot, message: impl Into<String>) {
        *self.slot_mut(slot) = Some(message.into());
    }

    pub fn clear(&mut self, slot: ErrorSlot) {
        *self.slot_mut(slot) = None;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.general.is_none()
    }

    fn slot_mut(&mut self, slot: ErrorSlot) -> &mut Option<String> {
        match slot {
            ErrorSlot::Field(DraftField::Name) => &mut self.name,
            ErrorSlot::Field(DraftField::Email) => &mut self.email,
            ErrorSlot::Field(DraftField::Phone) => &mut self.phone,
            ErrorSlot::General => &mut self.general,
        }
    }
}
