use chrono::{DateTime, Utc};
use leptos::logging::warn;

use super::duration::format_duration;
use super::types::{parse_history, HistoryEvent};
use crate::config::HISTORY_PAGE_SIZE;

/// How long an IP stayed current before the next change replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveDuration {
    /// The newest event; its IP is still in use.
    Current,
    /// Span in milliseconds until the next-newer event.
    Span(i64),
}

impl ActiveDuration {
    pub fn label(&self) -> String {
        match self {
            ActiveDuration::Current => "Current".to_string(),
            ActiveDuration::Span(millis) => format_duration(*millis),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// 1-based position in the whole log, not reset per page.
    pub index: usize,
    pub ip: String,
    pub time: DateTime<Utc>,
    pub duration: ActiveDuration,
}

/// Everything the history modal needs to draw one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub title: String,
    pub page: usize,
    pub total_pages: usize,
    /// Empty when the log is empty; the modal shows its empty state.
    pub rows: Vec<HistoryRow>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// Paged, newest-first view over one domain's IP history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPaginator {
    events: Vec<HistoryEvent>,
    label: String,
    page: usize,
    page_size: usize,
    open: bool,
}

impl Default for HistoryPaginator {
    fn default() -> Self {
        Self::new(HISTORY_PAGE_SIZE)
    }
}

impl HistoryPaginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            events: Vec::new(),
            label: String::new(),
            page: 1,
            page_size: page_size.max(1),
            open: false,
        }
    }

    /// Load a raw oldest-first log and show its first page.
    /// A payload that does not parse is shown as an empty history.
    pub fn open(&mut self, raw: &str, label: impl Into<String>) {
        let mut events = match parse_history(raw) {
            Ok(events) => events,
            Err(e) => {
                warn!("Discarding unreadable history: {}", e);
                Vec::new()
            }
        };
        events.reverse();

        self.events = events;
        self.label = label.into();
        self.page = 1;
        self.open = true;
    }

    /// Hide the view. Loaded events stay until the next `open`.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns whether the page changed.
    pub fn previous_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        if self.page >= self.total_pages() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn total_pages(&self) -> usize {
        self.events.len().div_ceil(self.page_size).max(1)
    }

    #[cfg(test)]
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Events in display order, newest first.
    #[cfg(test)]
    pub fn events(&self) -> &[HistoryEvent] {
        &self.events
    }

    pub fn current_view(&self) -> PageView {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.events.len());

        let rows = (start..end)
            .map(|i| {
                let event = &self.events[i];
                let duration = match i.checked_sub(1) {
                    None => ActiveDuration::Current,
                    Some(newer) => ActiveDuration::Span(
                        (self.events[newer].time - event.time).num_milliseconds(),
                    ),
                };
                HistoryRow {
                    index: i + 1,
                    ip: event.ip.clone(),
                    time: event.time,
                    duration,
                }
            })
            .collect();

        let total_pages = self.total_pages();
        PageView {
            title: format!("IP History: {}", self.label),
            page: self.page,
            total_pages,
            rows,
            has_previous: self.page > 1,
            has_next: self.page < total_pages,
        }
    }
}
