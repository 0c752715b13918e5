use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::refresh::VisibilitySource;

/// Reads `document.hidden`. Without a document the page counts as visible.
pub struct DocumentVisibility;

impl DocumentVisibility {
    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }
}

impl VisibilitySource for DocumentVisibility {
    fn is_visible(&self) -> bool {
        Self::document().map(|doc| !doc.hidden()).unwrap_or(true)
    }
}

/// `visibilitychange` subscription, removed when dropped.
pub struct VisibilityListener {
    document: web_sys::Document,
    callback: Closure<dyn Fn()>,
}

impl VisibilityListener {
    pub fn attach(on_change: impl Fn(bool) + 'static) -> Option<Self> {
        let document = DocumentVisibility::document()?;
        let doc = document.clone();
        let callback =
            Closure::wrap(Box::new(move || on_change(!doc.hidden())) as Box<dyn Fn()>);

        if let Err(e) = document
            .add_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref())
        {
            web_sys::console::error_1(
                &format!("Failed to listen for visibility changes: {:?}", e).into(),
            );
            return None;
        }

        Some(Self { document, callback })
    }
}

impl Drop for VisibilityListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            "visibilitychange",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
