use leptos::logging::log;
use leptos::prelude::*;

use crate::browser::{bind_history_rows, body_attribute};
use crate::components::auto_refresh::AutoRefreshControl;
use crate::components::history_modal::{HistoryContext, HistoryModal};
use crate::config::{DashboardConfig, INTERVALS_ATTRIBUTE};
use crate::history::HistoryPaginator;

#[component]
pub fn App() -> impl IntoView {
    let config =
        DashboardConfig::with_interval_override(body_attribute(INTERVALS_ATTRIBUTE).as_deref());

    let history = HistoryContext {
        paginator: RwSignal::new(HistoryPaginator::new(config.page_size)),
    };
    provide_context(history);

    // Hook the history buttons of the server-rendered domain rows
    Effect::new(move |_| {
        let bound = bind_history_rows(move |raw, domain| history.open(&raw, domain));
        log!("Bound history for {} domain rows", bound);
    });

    view! {
        <AutoRefreshControl
            choices=config.interval_choices
            storage_key=config.storage_key
        />
        <HistoryModal />
    }
}
