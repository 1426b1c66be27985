//! Singleton modal dialog.
//!
//! A repeated `show` while the dialog is visible updates its text in place;
//! a `show` during the fade-out cancels the pending removal. Removal timers
//! carry a generation so a stale one cannot tear down a re-opened dialog.

/// `id` of the modal backdrop element.
pub const MODAL_ID: &str = "app-modal";
/// Delay before the fade-in starts, letting the initial styles apply.
pub const FADE_IN_DELAY_MS: u32 = 10;
/// Title used by privacy-policy triggers.
pub const PRIVACY_TITLE: &str = "Privacy Policy";
/// Body used by privacy-policy triggers.
pub const PRIVACY_CONTENT: &str = "Please review our privacy policy on the dedicated page.";
/// Candidate trigger links.
pub const PRIVACY_LINK_SELECTOR: &str = r#"a[href*="privacy"]"#;
/// Attribute that turns a privacy link into a modal trigger.
pub const MODAL_TRIGGER_ATTR: &str = "data-modal";

/// Whether a privacy link should be wired at all.
pub fn is_privacy_link(href: &str, text: &str) -> bool {
    href.contains("privacy.html") || text.to_lowercase().contains("privacy policy")
}

/// Lifecycle of the dialog node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    /// No node in the document.
    #[default]
    Hidden,
    /// Node present and visible.
    Shown,
    /// Fading out; the node is removed when the timer fires.
    Closing,
}

/// Result of [`ModalState::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// The node has to be created.
    Created,
    /// The node exists and its text changed.
    Updated,
    /// A pending close was cancelled.
    Reopened,
}

/// Token returned by [`ModalState::close`] and checked by
/// [`ModalState::finish_close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseToken(u64);

/// The dialog's state and text.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    phase: ModalPhase,
    title: String,
    content: String,
    generation: u64,
}

impl ModalState {
    /// Hidden dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Current title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current body text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the node should be visible.
    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Shown
    }

    /// Show the dialog with the given text.
    pub fn show(&mut self, title: &str, content: &str) -> ShowOutcome {
        self.title = title.to_string();
        self.content = content.to_string();
        let outcome = match self.phase {
            ModalPhase::Hidden => ShowOutcome::Created,
            ModalPhase::Shown => ShowOutcome::Updated,
            ModalPhase::Closing => {
                self.generation += 1;
                ShowOutcome::Reopened
            },
        };
        self.phase = ModalPhase::Shown;
        tracing::debug!(?outcome, "modal shown");
        outcome
    }

    /// Start fading out. Returns the token for the removal timer, or `None`
    /// if there is nothing to close.
    pub fn close(&mut self) -> Option<CloseToken> {
        if self.phase != ModalPhase::Shown {
            return None;
        }
        self.phase = ModalPhase::Closing;
        self.generation += 1;
        Some(CloseToken(self.generation))
    }

    /// Called when the removal timer fires. Returns `true` if the node must
    /// be removed now.
    pub fn finish_close(&mut self, token: CloseToken) -> bool {
        if self.phase != ModalPhase::Closing || token.0 != self.generation {
            return false;
        }
        self.phase = ModalPhase::Hidden;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_close_removes_after_delay() {
        let mut modal = ModalState::new();
        assert_eq!(modal.show(PRIVACY_TITLE, PRIVACY_CONTENT), ShowOutcome::Created);
        let token = modal.close().expect("close token");
        assert_eq!(modal.phase(), ModalPhase::Closing);
        assert!(modal.finish_close(token));
        assert_eq!(modal.phase(), ModalPhase::Hidden);
    }

    #[test]
    fn repeated_show_updates_text() {
        let mut modal = ModalState::new();
        modal.show("A", "first");
        assert_eq!(modal.show("B", "second"), ShowOutcome::Updated);
        assert_eq!(modal.title(), "B");
        assert_eq!(modal.content(), "second");
    }

    #[test]
    fn reopening_invalidates_pending_removal() {
        let mut modal = ModalState::new();
        modal.show("A", "a");
        let stale = modal.close().expect("close token");
        assert_eq!(modal.show("A", "a"), ShowOutcome::Reopened);
        assert!(!modal.finish_close(stale));
        assert!(modal.is_visible());
    }

    #[test]
    fn close_without_show_is_noop() {
        let mut modal = ModalState::new();
        assert!(modal.close().is_none());
    }

    #[test]
    fn privacy_links_match_href_or_text() {
        assert!(is_privacy_link("/privacy.html", "Read more"));
        assert!(is_privacy_link("/legal?privacy", "Our Privacy Policy"));
        assert!(!is_privacy_link("/privacy-center", "Settings"));
    }
}
