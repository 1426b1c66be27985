// One enhancer per page behavior. Each `init` returns `Ok(None)` when the
// markup it needs is absent.

pub mod animations;
pub mod forms;
pub mod header_toggle;
pub mod images;
pub mod interactions;
pub mod modal;
pub mod navigation;
pub mod scroll_effects;
