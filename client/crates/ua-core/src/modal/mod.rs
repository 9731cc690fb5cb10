pub mod modal_action;
pub mod modal_display;
pub mod modal_state;
pub mod raw_modal_action;
