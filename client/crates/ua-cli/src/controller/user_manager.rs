use crate::UsersApi;

use log::{debug, info, warn};
use tokio::sync::Mutex;
use ua_core::{
    AppState, DateRange, DraftField, Effect, Event, FetchRequest, ListQuery, MutationKind,
    ServerErrorKind, SortDirection,
};

/// Drives [`AppState`] against a [`UsersApi`].
///
/// Each event is applied to the state under the lock; the resulting effect
/// runs with the lock released, and its outcome is fed back as the next
/// event. Handlers may run concurrently: list responses carry the sequence
/// id of their request and only the latest one is applied.
pub struct UserManager<A: UsersApi> {
    api: A,
    state: Mutex<AppState>,
}

impl<A: UsersApi> UserManager<A> {
    pub fn new(api: A, sort: SortDirection) -> Self {
        Self {
            api,
            state: Mutex::new(AppState::new(sort)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> AppState {
        self.state.lock().await.clone()
    }

    /// Apply an event and run effects until the state settles.
    pub async fn dispatch(&self, event: Event) {
        let mut next = Some(event);

        while let Some(event) = next.take() {
            if let Some(effect) = self.transition(event).await {
                next = Some(self.perform(effect).await);
            }
        }
    }

    // =========================================================================
    // List
    // =========================================================================

    pub async fn refresh(&self) {
        self.dispatch(Event::Refresh).await;
    }

    pub async fn set_search(&self, search: impl Into<String>) {
        self.dispatch(Event::SearchChanged(search.into())).await;
    }

    pub async fn set_date_range(&self, range: Option<DateRange>) {
        self.dispatch(Event::DateRangeChanged(range)).await;
    }

    pub async fn set_query(&self, query: ListQuery) {
        self.dispatch(Event::QueryChanged(query)).await;
    }

    pub async fn toggle_sort(&self) {
        self.dispatch(Event::SortToggled).await;
    }

    // =========================================================================
    // Dialogs
    // =========================================================================

    pub async fn open_create(&self) {
        self.dispatch(Event::OpenCreate).await;
    }

    /// Open the edit dialog for a user in the loaded list. Returns false when
    /// the id is not in the list.
    pub async fn open_edit(&self, id: i64) -> bool {
        let user = self.state.lock().await.list.find(id).cloned();
        match user {
            Some(user) => {
                self.dispatch(Event::OpenEdit(user)).await;
                true
            }
            None => false,
        }
    }

    /// Open the remove confirmation for a user in the loaded list. Returns
    /// false when the id is not in the list.
    pub async fn open_remove(&self, id: i64) -> bool {
        let user = self.state.lock().await.list.find(id).cloned();
        match user {
            Some(user) => {
                self.dispatch(Event::OpenRemove(user)).await;
                true
            }
            None => false,
        }
    }

    pub async fn edit_field(&self, field: DraftField, value: impl Into<String>) {
        self.dispatch(Event::FieldEdited {
            field,
            value: value.into(),
        })
        .await;
    }

    pub async fn cancel(&self) {
        self.dispatch(Event::Cancel).await;
    }

    /// Confirm the open dialog. Returns false when the confirm button would
    /// be disabled, in which case nothing is sent.
    pub async fn submit(&self) -> bool {
        if !self.state.lock().await.can_submit() {
            debug!("Submit ignored: dialog closed or draft invalid");
            return false;
        }

        self.dispatch(Event::Submit).await;
        true
    }

    async fn transition(&self, event: Event) -> Option<Effect> {
        let mut state = self.state.lock().await;

        if let Event::FetchCompleted { seq, .. } = &event
            && !state.list.is_current(*seq)
        {
            debug!(
                "Discarding stale user list (seq {}, latest {})",
                seq,
                state.list.latest_seq()
            );
        }

        let current = std::mem::take(&mut *state);
        let (updated, effect) = current.apply(event);
        *state = updated;

        effect
    }

    async fn perform(&self, effect: Effect) -> Event {
        debug!("Running effect {:?}", effect);

        match effect {
            Effect::Fetch(request) => self.fetch(request).await,

            Effect::Create(new_user) => match self.api.create_user(&new_user).await {
                Ok(user) => {
                    info!("Created user {} ({})", user.id, user.email);
                    Event::MutationSucceeded {
                        kind: MutationKind::Create,
                        user_id: user.id,
                    }
                }
                Err(e) => self.mutation_failed(MutationKind::Create, e),
            },

            Effect::Update { id, draft } => match self.api.update_user(id, &draft).await {
                Ok(user) => {
                    info!("Updated user {}", user.id);
                    Event::MutationSucceeded {
                        kind: MutationKind::Update,
                        user_id: user.id,
                    }
                }
                Err(e) => self.mutation_failed(MutationKind::Update, e),
            },

            Effect::Delete { id } => match self.api.delete_user(id).await {
                Ok(()) => {
                    info!("Deleted user {}", id);
                    Event::MutationSucceeded {
                        kind: MutationKind::Delete,
                        user_id: id,
                    }
                }
                Err(e) => self.mutation_failed(MutationKind::Delete, e),
            },
        }
    }

    async fn fetch(&self, request: FetchRequest) -> Event {
        debug!("Fetching users '{}' (seq {})", request.query, request.seq);

        let outcome = match self.api.list_users(&request.query).await {
            Ok(users) => Ok(users),
            Err(e) => {
                let failure = e.failure();
                if failure.kind() == ServerErrorKind::UserNotFound {
                    debug!("No users match '{}'", request.query);
                } else {
                    warn!("Listing users failed: {}", e);
                }
                Err(failure)
            }
        };

        Event::FetchCompleted {
            seq: request.seq,
            outcome,
        }
    }

    fn mutation_failed(&self, kind: MutationKind, error: crate::ClientError) -> Event {
        warn!("User {} failed: {}", kind, error);
        Event::MutationFailed {
            kind,
            failure: error.failure(),
        }
    }
}
