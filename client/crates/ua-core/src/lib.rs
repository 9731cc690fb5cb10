pub mod error;
pub mod feedback;
pub mod list;
pub mod modal;
pub mod models;
pub mod state;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use feedback::api_failure::{ApiFailure, ServerErrorKind, UNKNOWN_ERROR_MESSAGE};
pub use feedback::error_slot::{ErrorSlot, classify};
pub use feedback::field_errors::FieldErrors;
pub use feedback::form::FormMode;
pub use list::date_range::{DateRange, format_path_date, parse_input_date};
pub use list::list_query::ListQuery;
pub use list::list_state::{FetchOutcome, FetchRequest, ListState, Resolution};
pub use list::sort_direction::SortDirection;
pub use list::sorting::sort_users;
pub use modal::modal_action::{ModalAction, reduce};
pub use modal::modal_display::{ModalDimmer, ModalSize};
pub use modal::modal_state::{ModalState, ModalTarget, OpenModal};
pub use modal::raw_modal_action::{RawModalAction, reduce_raw};
pub use models::new_user::NewUser;
pub use models::user::User;
pub use models::user_draft::{DraftField, UserDraft};
pub use state::app_state::AppState;
pub use state::effect::Effect;
pub use state::event::{Event, MutationKind};
pub use validation::validate_draft;
