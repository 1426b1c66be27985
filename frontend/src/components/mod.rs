// Yew components mounted into host elements by the enhancers.

pub mod modal_dialog;
pub mod notification_stack;
pub mod scroll_to_top_button;
