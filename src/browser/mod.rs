//! Browser-side collaborators for the refresh scheduler and history modal.
//! Everything that touches `window` or `document` lives here.

pub mod reload;
pub mod rows;
pub mod storage;
pub mod timers;
pub mod visibility;

pub use reload::PageReloader;
pub use rows::{bind_history_rows, body_attribute};
pub use storage::LocalPreferences;
pub use timers::BrowserTimers;
pub use visibility::{DocumentVisibility, VisibilityListener};
