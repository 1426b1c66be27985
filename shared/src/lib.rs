//! Platform-independent behavior behind the site-enhance page scripts.
//!
//! Everything here is plain Rust: state machines, validation rules and the
//! small amount of arithmetic the enhancers need. The `frontend` crate owns
//! every DOM call and feeds events into these types.

pub mod accordion;
pub mod anchors;
pub mod config;
pub mod counter;
pub mod error;
pub mod header_toggle;
pub mod images;
pub mod menu;
pub mod modal;
pub mod notification;
pub mod reveal;
pub mod ripple;
pub mod scroll_spy;
pub mod submission;
pub mod styles;
pub mod timing;
pub mod validation;

pub use config::EnhanceConfig;
pub use error::{EnhanceError, Result};
