use crate::error::DashboardError;
use crate::refresh::PreferenceStore;

/// Preferences kept in `window.localStorage`.
pub struct LocalPreferences;

impl LocalPreferences {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalPreferences {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), DashboardError> {
        let storage = Self::storage()
            .ok_or_else(|| DashboardError::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| DashboardError::Storage(format!("{:?}", e)))
    }
}
