//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings (theme name,
//! last visited route) to eframe's persistent storage as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Saves a setting to persistent storage.
    ///
    /// # Examples
    /// ```ignore
    /// SettingsCoordinator::save_setting(storage, "last_route", &"/vision".to_string());
    /// ```
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }

    /// Loads a setting from persistent storage with a custom default.
    ///
    /// Returns the deserialized value if found and valid, otherwise the
    /// provided default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn save_and_load_route() {
        let mut storage = MockStorage::new();

        SettingsCoordinator::save_setting(&mut storage, "last_route", &"/vision".to_string());

        let loaded: String =
            SettingsCoordinator::load_setting_or(Some(&storage), "last_route", "/".to_string());
        assert_eq!(loaded, "/vision");
    }

    #[test]
    fn missing_key_falls_back_to_default() {
        let storage = MockStorage::new();

        let loaded: String =
            SettingsCoordinator::load_setting_or(Some(&storage), "last_route", "/".to_string());
        assert_eq!(loaded, "/");
    }

    #[test]
    fn corrupt_value_falls_back_to_default() {
        let mut storage = MockStorage::new();
        storage.set_string("last_route", "not json".to_string());

        let loaded: String =
            SettingsCoordinator::load_setting_or(Some(&storage), "last_route", "/".to_string());
        assert_eq!(loaded, "/");
    }
}
