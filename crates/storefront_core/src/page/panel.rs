//! Cart panel visibility state.
//!
//! Open/Closed is independent of cart contents. The dimming overlay has
//! no state of its own: it is visible exactly while the panel is open.

/// Observable cart panel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    /// Shows the panel.
    pub fn open(&mut self) {
        *self = Self::Open;
    }

    /// Hides the panel.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Whether the panel (and therefore the overlay) is visible.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
