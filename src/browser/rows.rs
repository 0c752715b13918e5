use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Read an attribute from `<body>`.
pub fn body_attribute(name: &str) -> Option<String> {
    web_sys::window()?.document()?.body()?.get_attribute(name)
}

/// Wire the history button of every server-rendered `tr[data-history]`
/// row to `on_open(raw_history, domain)`.
///
/// The payload and domain are read at click time. Returns the number of
/// rows bound.
pub fn bind_history_rows(on_open: impl Fn(String, String) + Clone + 'static) -> u32 {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(rows) = document.query_selector_all("tr[data-history]") else {
        return 0;
    };

    let mut bound = 0;
    for i in 0..rows.length() {
        let Some(row) = rows.get(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let Some(button) = row.query_selector(".history-btn").ok().flatten() else {
            continue;
        };

        let on_open = on_open.clone();
        let callback = Closure::wrap(Box::new(move || {
            let raw = row.get_attribute("data-history").unwrap_or_default();
            on_open(raw, row_domain(&row));
        }) as Box<dyn Fn()>);

        if button
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            bound += 1;
        }
        // Rows live as long as the page does
        callback.forget();
    }
    bound
}

fn row_domain(row: &web_sys::Element) -> String {
    row.query_selector(".domain-cell")
        .ok()
        .flatten()
        .and_then(|cell| cell.text_content())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "Unknown".to_string())
}
