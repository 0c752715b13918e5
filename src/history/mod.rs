//! IP change history for a single domain, paged newest first.

pub mod duration;
pub mod paginator;
pub mod types;

pub use duration::format_timestamp;
pub use paginator::{ActiveDuration, HistoryPaginator, PageView};
