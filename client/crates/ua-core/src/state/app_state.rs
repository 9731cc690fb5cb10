use crate::feedback::form::{self, FormMode};
use crate::{
    DraftField, Effect, ErrorSlot, Event, FieldErrors, ListState, ModalAction, ModalState,
    ModalTarget, MutationKind, NewUser, SortDirection, UserDraft, classify, reduce,
    validate_draft,
};

/// The whole client state. Transitions go through [`AppState::apply`], which
/// takes the old state and an event and returns the new state plus at most
/// one effect for the controller to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub modal: ModalState,
    pub list: ListState,
    pub errors: FieldErrors,
    /// Id of the user touched by the last successful mutation. Reset when a
    /// dialog opens.
    pub last_saved: Option<i64>,
}

impl AppState {
    pub fn new(sort: SortDirection) -> Self {
        Self {
            list: ListState::new(sort),
            ..Self::default()
        }
    }

    pub fn apply(mut self, event: Event) -> (Self, Option<Effect>) {
        let effect = match event {
            Event::SearchChanged(search) => Some(Effect::Fetch(self.list.set_search(search))),
            Event::DateRangeChanged(range) => Some(Effect::Fetch(self.list.set_range(range))),
            Event::QueryChanged(query) => Some(Effect::Fetch(self.list.set_query(query))),
            Event::Refresh => Some(Effect::Fetch(self.list.refresh())),
            Event::SortToggled => {
                self.list.toggle_sort();
                None
            }
            Event::FetchCompleted { seq, outcome } => {
                self.list.resolve(seq, outcome);
                None
            }

            Event::OpenCreate => {
                self.open(ModalTarget::Create(UserDraft::blank()));
                None
            }
            Event::OpenEdit(user) => {
                self.open(ModalTarget::Edit(UserDraft::from(&user)));
                None
            }
            Event::OpenRemove(user) => {
                self.open(ModalTarget::Remove(user));
                None
            }
            Event::FieldEdited { field, value } => {
                self.edit_field(field, &value);
                None
            }
            Event::Cancel => {
                self.close();
                None
            }
            Event::Submit => self.submit(),

            Event::MutationSucceeded { user_id, .. } => {
                self.close();
                self.last_saved = Some(user_id);
                Some(Effect::Fetch(self.list.refresh()))
            }
            Event::MutationFailed { kind, failure } => {
                let slot = match kind {
                    MutationKind::Delete => ErrorSlot::General,
                    MutationKind::Create | MutationKind::Update => {
                        classify(failure.error_id.as_deref())
                    }
                };
                let message = failure.display_message().to_string();

                if kind == MutationKind::Delete {
                    self.close();
                    self.errors.set(slot, message);
                    Some(Effect::Fetch(self.list.refresh()))
                } else {
                    self.errors.set(slot, message);
                    None
                }
            }
        };

        (self, effect)
    }

    pub fn form_mode(&self) -> Option<FormMode> {
        match self.modal.target()? {
            ModalTarget::Create(_) => Some(FormMode::Create),
            ModalTarget::Edit(_) => Some(FormMode::Edit),
            ModalTarget::Remove(_) => None,
        }
    }

    /// Inline error text for a field of the open form.
    pub fn feedback(&self, field: DraftField) -> Option<&str> {
        let mode = self.form_mode()?;
        let draft = self.modal.target()?.draft()?;
        form::field_feedback(mode, draft, &self.errors, field)
    }

    /// Whether the confirm button of the open dialog is enabled.
    pub fn can_submit(&self) -> bool {
        match self.modal.target() {
            Some(ModalTarget::Create(draft)) => validate_draft(draft),
            Some(ModalTarget::Edit(draft)) => draft.id.is_some() && validate_draft(draft),
            Some(ModalTarget::Remove(_)) => true,
            None => false,
        }
    }

    fn open(&mut self, target: ModalTarget) {
        self.errors.clear_all();
        self.last_saved = None;
        self.modal = reduce(&self.modal, ModalAction::open(target));
    }

    fn close(&mut self) {
        self.errors.clear_all();
        self.modal = reduce(&self.modal, ModalAction::Close);
    }

    fn edit_field(&mut self, field: DraftField, value: &str) {
        let ModalState::Open(open) = &self.modal else {
            return;
        };
        let Some(draft) = open.target.draft() else {
            return;
        };

        let updated = draft.with_field(field, form::normalize_input(field, value));
        let action = ModalAction::Open {
            target: open.target.with_draft(updated),
            size: open.size,
            dimmer: open.dimmer,
        };

        self.modal = reduce(&self.modal, action);
        self.errors.clear(ErrorSlot::Field(field));
    }

    fn submit(&self) -> Option<Effect> {
        if !self.can_submit() {
            return None;
        }

        match self.modal.target()? {
            ModalTarget::Create(draft) => NewUser::from_draft(draft).map(Effect::Create),
            ModalTarget::Edit(draft) => draft.id.map(|id| Effect::Update {
                id,
                draft: draft.clone(),
            }),
            ModalTarget::Remove(user) => Some(Effect::Delete { id: user.id }),
        }
    }
}
