//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an
//! update. The host owns the event loop and the timers; the panel core
//! only asks.

/// Side effect requested by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Arm the zero-delay single-shot rebuild timer and feed back
    /// `Msg::RebuildTick` at the next idle. At most one is outstanding;
    /// the model coalesces bursts before asking again.
    ScheduleRebuild,
    /// The row set or an editor changed; repaint
    Redraw,
    /// Surface a critical, user-visible notification (commit failures)
    Alert(String),
}
