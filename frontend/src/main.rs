//! Browser-side enhancements for the marketing site.
//!
//! The page is server rendered; this binary only attaches behavior to the
//! markup that is already there.

mod app;
mod components;
mod config;
mod dom;
mod enhancers;
mod notifier;

fn main() {
    app::boot();
}
