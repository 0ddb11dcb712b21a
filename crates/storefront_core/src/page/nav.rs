//! Mobile nav menu state.
//!
//! The menu button toggles it; following a nav link or dismissing the
//! overlay closes it. No overlay of its own.

/// Open/closed state of the mobile nav links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Flips the menu, as the hamburger button does.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes the menu (nav link followed, overlay dismissed).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the menu is currently open.
    pub fn is_open(self) -> bool {
        self.open
    }
}
