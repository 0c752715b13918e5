//! Auto-refresh: reloads the dashboard on a user-selected interval.
//!
//! The scheduler is a plain state machine driven by timer ticks and
//! visibility notifications; browser timers, storage and reload live in
//! `crate::browser` behind the traits defined here.

pub mod indicator;
pub mod scheduler;

pub use indicator::RefreshIndicator;
pub use scheduler::{
    AutoRefreshScheduler, PreferenceStore, RefreshHost, RefreshView, Reloader, TimerDriver,
    Trigger, VisibilitySource,
};
