//! # View Events
//!
//! Events related to view updates.
//! These events drive UI refreshing after the view model changes.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Full screen redraw required (mode change, resize, new result)
    FullRedrawRequired,

    /// Only the form area needs redrawing (typing, focus move)
    FormRedrawRequired,

    /// Status bar needs updating
    StatusBarUpdateRequired,
}
