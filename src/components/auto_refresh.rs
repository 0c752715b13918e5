use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::browser::{
    BrowserTimers, DocumentVisibility, LocalPreferences, PageReloader, VisibilityListener,
};
use crate::config::interval_label;
use crate::refresh::{AutoRefreshScheduler, RefreshHost, RefreshIndicator, RefreshView};

/// Pushes scheduler output into the component's signals.
struct SignalView {
    indicator: WriteSignal<RefreshIndicator>,
    selected: WriteSignal<u32>,
}

impl RefreshView for SignalView {
    fn show_indicator(&mut self, indicator: RefreshIndicator) {
        self.indicator.set(indicator);
    }

    fn select_interval(&mut self, seconds: u32) {
        self.selected.set(seconds);
    }
}

/// Auto-refresh menu button with a live countdown.
///
/// Owns the page's single [`AutoRefreshScheduler`]. The saved interval is
/// restored on mount, and refreshing pauses while the tab is hidden.
#[component]
pub fn AutoRefreshControl(
    /// Interval choices in seconds; 0 means off.
    choices: Vec<u32>,
    /// localStorage key holding the saved interval.
    #[prop(into)]
    storage_key: String,
) -> impl IntoView {
    let (indicator, set_indicator) = signal(RefreshIndicator::Hidden);
    let (selected, set_selected) = signal(0u32);
    let (menu_open, set_menu_open) = signal(false);

    let scheduler = StoredValue::new_local(None::<AutoRefreshScheduler>);
    let visibility = StoredValue::new_local(None::<VisibilityListener>);
    let container = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let timers = BrowserTimers::new(move |trigger| {
            scheduler.update_value(|s| {
                if let Some(s) = s.as_mut() {
                    s.tick(trigger);
                }
            });
        });
        let host = RefreshHost {
            store: Box::new(LocalPreferences),
            timers: Box::new(timers),
            reloader: Box::new(PageReloader),
            view: Box::new(SignalView {
                indicator: set_indicator,
                selected: set_selected,
            }),
        };

        let mut s = AutoRefreshScheduler::new(storage_key.clone(), host, &DocumentVisibility);
        s.initialize();
        scheduler.set_value(Some(s));

        visibility.set_value(VisibilityListener::attach(move |visible| {
            scheduler.update_value(|s| {
                if let Some(s) = s.as_mut() {
                    s.on_visibility_change(visible);
                }
            });
        }));
    });

    // Close the menu on clicks outside the control
    let _ = window_event_listener(leptos::ev::click, move |ev| {
        let Some(root) = container.get_untracked() else {
            return;
        };
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !root.contains(target.as_ref()) {
            set_menu_open.set(false);
        }
    });

    let choose = move |seconds: u32| {
        set_menu_open.set(false);
        scheduler.update_value(|s| {
            if let Some(s) = s.as_mut() {
                s.set_interval(seconds);
            }
        });
    };

    view! {
        <div class="auto-refresh" node_ref=container>
            <style>{include_str!("auto_refresh.css")}</style>
            <button
                id="auto-refresh-btn"
                class="btn btn-icon"
                title="Auto-refresh"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "Auto"
            </button>

            <Show when=move || indicator.get().is_visible()>
                <span
                    id="auto-refresh-indicator"
                    class=move || {
                        if indicator.get().is_running() {
                            "auto-refresh-indicator running"
                        } else {
                            "auto-refresh-indicator paused"
                        }
                    }
                >
                    {move || indicator.get().to_string()}
                </span>
            </Show>

            <Show when=move || menu_open.get()>
                <div id="auto-refresh-menu" class="auto-refresh-menu">
                    {choices.iter().map(|&seconds| {
                        view! {
                            <button
                                class=move || {
                                    if selected.get() == seconds {
                                        "auto-refresh-option active"
                                    } else {
                                        "auto-refresh-option"
                                    }
                                }
                                data-interval=seconds.to_string()
                                on:click=move |_| choose(seconds)
                            >
                                {interval_label(seconds)}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
