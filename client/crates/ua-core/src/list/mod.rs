pub mod date_range;
pub mod list_query;
pub mod list_state;
pub mod sort_direction;
pub mod sorting;
