//! Modal listing a domain's IP changes, newest first, 20 per page.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::history::{format_timestamp, ActiveDuration, HistoryPaginator, PageView};

/// Shared handle to the paginator so page rows can open the modal.
#[derive(Clone, Copy)]
pub struct HistoryContext {
    pub paginator: RwSignal<HistoryPaginator>,
}

impl HistoryContext {
    pub fn open(&self, raw: &str, label: String) {
        self.paginator.update(|p| p.open(raw, label));
    }
}

#[component]
pub fn HistoryModal() -> impl IntoView {
    let HistoryContext { paginator } = expect_context::<HistoryContext>();
    let page = Memo::new(move |_| paginator.with(|p| p.current_view()));
    let is_open = Memo::new(move |_| paginator.with(|p| p.is_open()));
    let backdrop = NodeRef::<leptos::html::Div>::new();

    let close = move || paginator.update(|p| p.close());

    let _ = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && is_open.get_untracked() {
            close();
        }
    });

    // Only clicks on the backdrop itself close the modal
    let on_backdrop_click = move |ev: leptos::ev::MouseEvent| {
        let (Some(target), Some(root)) = (ev.target(), backdrop.get_untracked()) else {
            return;
        };
        if JsValue::from(target) == JsValue::from(root) {
            close();
        }
    };

    view! {
        <div
            id="history-modal"
            class=move || if is_open.get() { "modal active" } else { "modal" }
            node_ref=backdrop
            on:click=on_backdrop_click
        >
            <style>{include_str!("history_modal.css")}</style>
            <div class="modal-content">
                <div class="modal-header">
                    <h3 id="modal-title">{move || page.get().title}</h3>
                    <button class="modal-close" title="Close" on:click=move |_| close()>
                        "\u{00d7}"
                    </button>
                </div>

                <div id="history-table-container">
                    {move || {
                        let current = page.get();
                        if current.is_empty() {
                            view! {
                                <div class="history-empty">
                                    <p>"No history available"</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            history_table(current).into_any()
                        }
                    }}
                </div>

                <div class="pagination">
                    <button
                        id="prev-page"
                        class="btn btn-small"
                        disabled=move || !page.get().has_previous
                        on:click=move |_| {
                            paginator.maybe_update(|p| p.previous_page());
                        }
                    >
                        "Previous"
                    </button>
                    <span id="page-info">{move || page.get().page_label()}</span>
                    <button
                        id="next-page"
                        class="btn btn-small"
                        disabled=move || !page.get().has_next
                        on:click=move |_| {
                            paginator.maybe_update(|p| p.next_page());
                        }
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn history_table(current: PageView) -> impl IntoView {
    view! {
        <table class="history-table">
            <thead>
                <tr>
                    <th class="col-num">"#"</th>
                    <th class="col-ip">"IP Address"</th>
                    <th class="col-time">"Changed At"</th>
                    <th class="col-duration">"Duration"</th>
                </tr>
            </thead>
            <tbody>
                {current.rows.into_iter().map(|row| {
                    let duration = match &row.duration {
                        ActiveDuration::Current => view! {
                            <span class="history-current-badge">"Current"</span>
                        }.into_any(),
                        span => span.label().into_any(),
                    };
                    view! {
                        <tr>
                            <td class="col-num">{row.index}</td>
                            <td class="col-ip">{row.ip}</td>
                            <td class="col-time">{format_timestamp(&row.time, &chrono::Local)}</td>
                            <td class="col-duration">{duration}</td>
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
