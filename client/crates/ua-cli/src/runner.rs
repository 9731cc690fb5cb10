use crate::commands::Commands;
use crate::{UserManager, UsersApi};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, warn};
use serde_json::{Value, json};
use ua_core::feedback::form::{invalid_message, validate_field};
use ua_core::{
    AppState, CoreError, CoreResult, DateRange, DraftField, ErrorSlot, FieldErrors, ListQuery,
    SortDirection, parse_input_date,
};

/// JSON printed for a command, and whether it counts as a success.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub success: bool,
    pub output: Value,
}

impl CommandOutcome {
    fn ok(output: Value) -> Self {
        Self {
            success: true,
            output,
        }
    }

    fn failed(errors: &FieldErrors) -> Self {
        Self {
            success: false,
            output: json!({ "errors": errors }),
        }
    }

    fn general_error(message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::default();
        errors.set(ErrorSlot::General, message);
        Self::failed(&errors)
    }
}

/// Run one command against the manager.
pub async fn run<A: UsersApi>(manager: &UserManager<A>, command: Commands) -> CommandOutcome {
    debug!("Running {:?}", command);

    match command {
        Commands::List {
            search,
            from,
            to,
            sort,
        } => list(manager, search, from.as_deref(), to.as_deref(), sort).await,
        Commands::Create { name, email, phone } => create(manager, name, email, phone).await,
        Commands::Update {
            id,
            name,
            email,
            phone,
        } => update(manager, id, name, email, phone).await,
        Commands::Delete { id } => delete(manager, id).await,
    }
}

async fn list<A: UsersApi>(
    manager: &UserManager<A>,
    search: String,
    from: Option<&str>,
    to: Option<&str>,
    sort: Option<SortDirection>,
) -> CommandOutcome {
    let range = match date_range(from, to) {
        Ok(range) => range,
        Err(e) => {
            warn!("{}", e);
            return CommandOutcome::general_error(e.to_string());
        }
    };

    manager.set_query(ListQuery::new(search, range)).await;

    if let Some(sort) = sort
        && manager.snapshot().await.list.sort() != sort
    {
        manager.toggle_sort().await;
    }

    let state = manager.snapshot().await;
    CommandOutcome::ok(json!({
        "sort": state.list.sort(),
        "users": state.list.users(),
    }))
}

#[track_caller]
fn date_range(from: Option<&str>, to: Option<&str>) -> CoreResult<Option<DateRange>> {
    match (from, to) {
        (None, None) => Ok(None),
        (Some(start), None) => Ok(Some(DateRange::single(parse_input_date(start)?))),
        (Some(start), Some(end)) => Ok(Some(DateRange::between(
            parse_input_date(start)?,
            parse_input_date(end)?,
        ))),
        (None, Some(end)) => Err(CoreError::InvalidDate {
            value: format!("{end} (--to needs --from)"),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

async fn create<A: UsersApi>(
    manager: &UserManager<A>,
    name: String,
    email: String,
    phone: String,
) -> CommandOutcome {
    manager.open_create().await;
    manager.edit_field(DraftField::Name, name).await;
    manager.edit_field(DraftField::Email, email).await;
    manager.edit_field(DraftField::Phone, phone).await;

    let draft = manager
        .snapshot()
        .await
        .modal
        .user_to_create()
        .cloned()
        .unwrap_or_default();

    submit_form(manager, |state| {
        json!({
            "user_id": state.last_saved,
            "created": {
                "name": draft.name,
                "email": draft.email,
                "phone": draft.phone,
            }
        })
    })
    .await
}

async fn update<A: UsersApi>(
    manager: &UserManager<A>,
    id: i64,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> CommandOutcome {
    manager.refresh().await;
    if !manager.open_edit(id).await {
        return CommandOutcome::general_error(format!("User {id} not found."));
    }

    let edits = [
        (DraftField::Name, name),
        (DraftField::Email, email),
        (DraftField::Phone, phone),
    ];
    for (field, value) in edits {
        if let Some(value) = value {
            manager.edit_field(field, value).await;
        }
    }

    submit_form(manager, |_| json!({ "user_id": id })).await
}

async fn delete<A: UsersApi>(manager: &UserManager<A>, id: i64) -> CommandOutcome {
    manager.refresh().await;
    if !manager.open_remove(id).await {
        return CommandOutcome::general_error(format!("User {id} not found."));
    }

    manager.submit().await;

    let state = manager.snapshot().await;
    if state.errors.is_empty() {
        CommandOutcome::ok(json!({
            "deleted_id": id,
            "users": state.list.users(),
        }))
    } else {
        CommandOutcome::failed(&state.errors)
    }
}

/// Submit the open create/edit form. Validation failures are reported with
/// the same per-field messages the form shows; server failures leave the
/// dialog open with the classified slot filled.
async fn submit_form<A: UsersApi>(
    manager: &UserManager<A>,
    summary: impl FnOnce(&AppState) -> Value,
) -> CommandOutcome {
    if !manager.submit().await {
        return CommandOutcome::failed(&form_errors(&manager.snapshot().await));
    }

    let state = manager.snapshot().await;
    if state.modal.is_open() || !state.errors.is_empty() {
        return CommandOutcome::failed(&form_errors(&state));
    }

    let mut output = summary(&state);
    output["users"] = json!(state.list.users());
    CommandOutcome::ok(output)
}

/// The form's inline messages. A blank create field shows nothing in the
/// form but still blocks submission, so it is reported as invalid here.
fn form_errors(state: &AppState) -> FieldErrors {
    let mut errors = FieldErrors::default();
    let draft = state.modal.target().and_then(|target| target.draft());

    for field in [DraftField::Name, DraftField::Email, DraftField::Phone] {
        let message = state.feedback(field).or_else(|| {
            draft
                .filter(|draft| !validate_field(field, draft.field(field)))
                .map(|_| invalid_message(field))
        });
        if let Some(message) = message {
            errors.set(ErrorSlot::Field(field), message);
        }
    }
    if let Some(message) = state.errors.get(ErrorSlot::General) {
        errors.set(ErrorSlot::General, message);
    }
    errors
}
