use std::time::Duration;

use leptos::logging::{log, warn};

use super::indicator::RefreshIndicator;
use crate::error::DashboardError;

/// The two repeating triggers the scheduler runs while active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Fires every `interval_seconds` and reloads the page.
    Reload,
    /// Fires every second and advances the countdown.
    Countdown,
}

impl Trigger {
    pub const ALL: [Trigger; 2] = [Trigger::Reload, Trigger::Countdown];
}

/// Key-value persistence for the refresh preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), DashboardError>;
}

/// Registers repeating triggers. The driver calls back into
/// [`AutoRefreshScheduler::tick`] each time a scheduled trigger fires.
pub trait TimerDriver {
    fn schedule(&mut self, trigger: Trigger, period: Duration);
    fn cancel(&mut self, trigger: Trigger);
    fn is_scheduled(&self, trigger: Trigger) -> bool;
}

pub trait Reloader {
    fn reload(&self);
}

/// Receives indicator and interval-selector updates.
pub trait RefreshView {
    fn show_indicator(&mut self, indicator: RefreshIndicator);
    fn select_interval(&mut self, seconds: u32);
}

pub trait VisibilitySource {
    fn is_visible(&self) -> bool;
}

/// Collaborators the scheduler drives.
pub struct RefreshHost {
    pub store: Box<dyn PreferenceStore>,
    pub timers: Box<dyn TimerDriver>,
    pub reloader: Box<dyn Reloader>,
    pub view: Box<dyn RefreshView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Disabled,
    Active,
    Suspended,
}

/// Page auto-refresh with a live countdown.
///
/// Invariant: triggers are only scheduled in [`RefreshState::Active`], and
/// every transition cancels existing triggers before scheduling new ones.
/// The countdown and reload triggers are independent, so the countdown can
/// wrap slightly before or after the reload actually fires.
pub struct AutoRefreshScheduler {
    storage_key: String,
    interval_seconds: u32,
    visible: bool,
    seconds_remaining: u32,
    state: RefreshState,
    host: RefreshHost,
}

impl AutoRefreshScheduler {
    pub fn new(
        storage_key: impl Into<String>,
        host: RefreshHost,
        visibility: &dyn VisibilitySource,
    ) -> Self {
        Self {
            storage_key: storage_key.into(),
            interval_seconds: 0,
            visible: visibility.is_visible(),
            seconds_remaining: 0,
            state: RefreshState::Disabled,
            host,
        }
    }

    /// Load the persisted interval and start if it is positive.
    /// A missing or unreadable preference means disabled.
    pub fn initialize(&mut self) {
        let interval = self
            .host
            .store
            .load(&self.storage_key)
            .and_then(|raw| parse_preference(&raw))
            .unwrap_or(0);

        self.interval_seconds = interval;
        self.seconds_remaining = interval;
        if interval > 0 {
            log!("Auto-refresh restored at {}s", interval);
        }
        self.start();
        self.host.view.select_interval(interval);
    }

    /// Apply a user selection. The preference is written even when
    /// disabling.
    pub fn set_interval(&mut self, seconds: u32) {
        self.stop();
        self.interval_seconds = seconds;
        self.seconds_remaining = seconds;

        if let Err(e) = self
            .host
            .store
            .save(&self.storage_key, &seconds.to_string())
        {
            warn!("Failed to persist auto-refresh interval: {}", e);
        }

        self.start();
        self.host.view.select_interval(seconds);
    }

    /// Becoming visible restarts the countdown from the full interval;
    /// becoming hidden stops both triggers but keeps the remaining seconds.
    pub fn on_visibility_change(&mut self, visible: bool) {
        self.visible = visible;

        if visible {
            if self.interval_seconds > 0 {
                self.seconds_remaining = self.interval_seconds;
                self.start();
            }
        } else {
            self.stop();
            if self.interval_seconds > 0 {
                self.state = RefreshState::Suspended;
            }
            self.render();
        }
    }

    /// Handle one firing of a scheduled trigger.
    pub fn tick(&mut self, trigger: Trigger) {
        // Late ticks from a cancelled trigger are dropped.
        if !self.host.timers.is_scheduled(trigger) {
            return;
        }

        match trigger {
            Trigger::Reload => {
                if self.visible {
                    self.host.reloader.reload();
                }
            }
            Trigger::Countdown => {
                if self.visible && self.seconds_remaining > 0 {
                    self.seconds_remaining -= 1;
                    self.render();

                    if self.seconds_remaining == 0 {
                        self.seconds_remaining = self.interval_seconds;
                    }
                }
            }
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> RefreshState {
        self.state
    }

    #[cfg(test)]
    pub fn interval_seconds(&self) -> u32 {
        self.interval_seconds
    }

    #[cfg(test)]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    #[cfg(test)]
    pub fn is_scheduled(&self, trigger: Trigger) -> bool {
        self.host.timers.is_scheduled(trigger)
    }

    pub fn indicator(&self) -> RefreshIndicator {
        match self.state {
            RefreshState::Disabled => RefreshIndicator::Hidden,
            RefreshState::Suspended => RefreshIndicator::Paused,
            RefreshState::Active => RefreshIndicator::Countdown(self.seconds_remaining),
        }
    }

    fn start(&mut self) {
        self.stop();

        if self.interval_seconds == 0 {
            self.state = RefreshState::Disabled;
        } else if !self.visible {
            self.state = RefreshState::Suspended;
        } else {
            self.seconds_remaining = self.interval_seconds;
            let period = Duration::from_secs(u64::from(self.interval_seconds));
            self.host.timers.schedule(Trigger::Reload, period);
            self.host
                .timers
                .schedule(Trigger::Countdown, Duration::from_secs(1));
            self.state = RefreshState::Active;
        }

        self.render();
    }

    fn stop(&mut self) {
        for trigger in Trigger::ALL {
            if self.host.timers.is_scheduled(trigger) {
                self.host.timers.cancel(trigger);
            }
        }
    }

    fn render(&mut self) {
        let indicator = self.indicator();
        self.host.view.show_indicator(indicator);
    }
}

fn parse_preference(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}
