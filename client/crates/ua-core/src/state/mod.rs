pub mod app_state;
pub mod effect;
pub mod event;
