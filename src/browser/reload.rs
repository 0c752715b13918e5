use crate::refresh::Reloader;

pub struct PageReloader;

impl Reloader for PageReloader {
    fn reload(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                web_sys::console::error_1(&format!("Failed to reload page: {:?}", e).into());
            }
        }
    }
}
