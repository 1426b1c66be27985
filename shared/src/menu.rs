//! Mobile navigation menu state machine.
//!
//! The frontend translates DOM events into [`MenuEvent`]s and applies the
//! returned [`MenuCommand`] to the nav, toggle and body elements.

use crate::config::EnhanceConfig;

/// Class toggled on `.navbar-collapse` while the menu is open.
pub const OPEN_CLASS: &str = "show";
/// Class placed on `<body>` to lock scrolling while the menu is open.
pub const SCROLL_LOCK_CLASS: &str = "u-no-scroll";

/// Whether the menu is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Initial state.
    #[default]
    Closed,
    /// Menu visible, body scroll locked.
    Open,
}

/// Inputs to the menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// The toggle control was clicked. Carries the measured header height.
    ToggleClicked {
        /// `offsetHeight` of the page header, if one exists.
        header_height: Option<f64>,
    },
    /// Escape pressed anywhere in the document.
    EscapePressed,
    /// A click landed outside both the menu and its toggle.
    OutsideClicked,
    /// A link inside the menu was clicked.
    LinkClicked,
    /// The delay scheduled by [`MenuCommand::ScheduleClose`] elapsed.
    DelayedClose,
    /// The viewport was resized (already debounced).
    Resized {
        /// New `innerWidth`.
        width: f64,
    },
}

/// DOM mutations the frontend should perform after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuCommand {
    /// Nothing changes.
    Nothing,
    /// Show the menu: add [`OPEN_CLASS`], `aria-expanded="true"`, lock the
    /// body and constrain the nav height.
    Open {
        /// Inline CSS height for the nav.
        nav_height: String,
    },
    /// Hide the menu and undo everything `Open` did.
    Close,
    /// Close after the given delay by feeding back [`MenuEvent::DelayedClose`].
    ScheduleClose {
        /// Delay in milliseconds.
        delay_ms: u32,
    },
}

/// Inline height that keeps the open menu inside the viewport.
pub fn nav_height_css(header_height: Option<f64>, fallback: f64) -> String {
    let height = header_height.filter(|h| *h > 0.0).unwrap_or(fallback);
    format!("calc(100vh - {height}px)")
}

/// The menu itself. One per page.
#[derive(Debug, Clone)]
pub struct Menu {
    state: MenuState,
    breakpoint_px: f64,
    default_header_height: f64,
    link_close_delay_ms: u32,
}

impl Menu {
    /// Closed menu using the thresholds from `config`.
    pub fn new(config: &EnhanceConfig) -> Self {
        Self {
            state: MenuState::Closed,
            breakpoint_px: config.breakpoint_px,
            default_header_height: config.default_header_height,
            link_close_delay_ms: config.link_close_delay_ms,
        }
    }

    /// Current state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// `true` while open.
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Advance the machine.
    pub fn handle(&mut self, event: MenuEvent) -> MenuCommand {
        match (self.state, event) {
            (MenuState::Closed, MenuEvent::ToggleClicked { header_height }) => {
                self.open(header_height)
            },
            (MenuState::Open, MenuEvent::ToggleClicked { .. }) => self.close(),
            (MenuState::Open, MenuEvent::EscapePressed)
            | (MenuState::Open, MenuEvent::OutsideClicked)
            | (MenuState::Open, MenuEvent::DelayedClose) => self.close(),
            (MenuState::Open, MenuEvent::LinkClicked) => MenuCommand::ScheduleClose {
                delay_ms: self.link_close_delay_ms,
            },
            (MenuState::Open, MenuEvent::Resized { width }) if width >= self.breakpoint_px => {
                self.close()
            },
            _ => MenuCommand::Nothing,
        }
    }

    /// Force the menu open.
    pub fn open(&mut self, header_height: Option<f64>) -> MenuCommand {
        self.state = MenuState::Open;
        tracing::debug!("menu opened");
        MenuCommand::Open {
            nav_height: nav_height_css(header_height, self.default_header_height),
        }
    }

    /// Force the menu closed.
    pub fn close(&mut self) -> MenuCommand {
        self.state = MenuState::Closed;
        tracing::debug!("menu closed");
        MenuCommand::Close
    }
}

/// `aria-expanded` value matching `state`.
pub fn aria_expanded(state: MenuState) -> &'static str {
    match state {
        MenuState::Open => "true",
        MenuState::Closed => "false",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu::new(&EnhanceConfig::default())
    }

    fn toggle() -> MenuEvent {
        MenuEvent::ToggleClicked {
            header_height: Some(64.0),
        }
    }

    #[test]
    fn toggle_twice_round_trips() {
        let mut menu = menu();
        assert_eq!(menu.handle(toggle()), MenuCommand::Open {
            nav_height: "calc(100vh - 64px)".to_string(),
        });
        assert_eq!(aria_expanded(menu.state()), "true");
        assert_eq!(menu.handle(toggle()), MenuCommand::Close);
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(aria_expanded(menu.state()), "false");
    }

    #[test]
    fn closing_events_are_ignored_while_closed() {
        let mut menu = menu();
        for event in [
            MenuEvent::EscapePressed,
            MenuEvent::OutsideClicked,
            MenuEvent::LinkClicked,
            MenuEvent::DelayedClose,
            MenuEvent::Resized { width: 1200.0 },
        ] {
            assert_eq!(menu.handle(event), MenuCommand::Nothing);
        }
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn escape_and_outside_click_close() {
        let mut menu = menu();
        menu.handle(toggle());
        assert_eq!(menu.handle(MenuEvent::EscapePressed), MenuCommand::Close);
        menu.handle(toggle());
        assert_eq!(menu.handle(MenuEvent::OutsideClicked), MenuCommand::Close);
    }

    #[test]
    fn link_click_schedules_delayed_close() {
        let mut menu = menu();
        menu.handle(toggle());
        assert_eq!(menu.handle(MenuEvent::LinkClicked), MenuCommand::ScheduleClose {
            delay_ms: 150
        });
        assert!(menu.is_open());
        assert_eq!(menu.handle(MenuEvent::DelayedClose), MenuCommand::Close);
    }

    #[test]
    fn resize_closes_only_at_breakpoint() {
        let mut menu = menu();
        menu.handle(toggle());
        assert_eq!(menu.handle(MenuEvent::Resized { width: 767.0 }), MenuCommand::Nothing);
        assert_eq!(menu.handle(MenuEvent::Resized { width: 768.0 }), MenuCommand::Close);
    }

    #[test]
    fn missing_or_zero_header_uses_fallback() {
        assert_eq!(nav_height_css(None, 80.0), "calc(100vh - 80px)");
        assert_eq!(nav_height_css(Some(0.0), 80.0), "calc(100vh - 80px)");
        assert_eq!(nav_height_css(Some(72.5), 80.0), "calc(100vh - 72.5px)");
    }
}
