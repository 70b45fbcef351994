//! Local Cache
//!
//! Browser local storage stands in for settings the server does not keep.
//! Nothing here is authoritative and nothing is ever sent back to the server.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const THEME_KEY: &str = "admin_theme";
const PROFILE_KEY: &str = "adminProfile";

/// String key/value store (local storage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and for browsers with storage disabled
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

// ========================
// Theme
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored theme, `Light` when absent or unreadable
    pub fn load(store: &dyn KeyValueStore) -> Self {
        store
            .get(THEME_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(raw) => store.set(THEME_KEY, &raw),
            Err(e) => log::warn!("[Cache] theme not saved: {}", e),
        }
    }

    /// Flip, persist and return the new theme
    pub fn toggle(store: &dyn KeyValueStore) -> Self {
        let next = Self::load(store).toggled();
        next.save(store);
        next
    }
}

// ========================
// Profile
// ========================

/// Demo profile cache shown on the admin profile page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCache {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for ProfileCache {
    fn default() -> Self {
        Self {
            full_name: "Admin User".to_string(),
            email: "admin@collabhub.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            bio: String::new(),
            last_updated: None,
        }
    }
}

impl ProfileCache {
    /// Cached profile with blanks filled from the defaults; `None` if absent or corrupt
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        let raw = store.get(PROFILE_KEY)?;
        match serde_json::from_str::<ProfileCache>(&raw) {
            Ok(cached) => {
                let defaults = ProfileCache::default();
                Some(ProfileCache {
                    full_name: non_blank(cached.full_name, defaults.full_name),
                    email: non_blank(cached.email, defaults.email),
                    phone: non_blank(cached.phone, defaults.phone),
                    bio: cached.bio,
                    last_updated: cached.last_updated,
                })
            }
            Err(e) => {
                log::error!("[Cache] profile load error: {}", e);
                None
            }
        }
    }

    /// Stamp and persist
    pub fn save(&mut self, store: &dyn KeyValueStore, now: DateTime<Utc>) {
        self.last_updated = Some(now);
        match serde_json::to_string(self) {
            Ok(raw) => store.set(PROFILE_KEY, &raw),
            Err(e) => log::warn!("[Cache] profile not saved: {}", e),
        }
    }
}

fn non_blank(value: String, fallback: String) -> String {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_theme_defaults_and_toggles() {
        let store = MemoryStore::default();
        assert_eq!(Theme::load(&store), Theme::Light);
        assert_eq!(Theme::toggle(&store), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("\"dark\""));
        assert_eq!(Theme::toggle(&store), Theme::Light);
    }

    #[test]
    fn test_corrupt_theme_falls_back() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "purple");
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_profile_roundtrip_fills_blanks() {
        let store = MemoryStore::default();
        assert!(ProfileCache::load(&store).is_none());

        let now = Utc.with_ymd_and_hms(2026, 3, 15, 9, 30, 0).unwrap();
        let mut profile = ProfileCache {
            full_name: "Meera Iyer".into(),
            email: String::new(),
            phone: String::new(),
            bio: "Ops".into(),
            last_updated: None,
        };
        profile.save(&store, now);

        let loaded = ProfileCache::load(&store).unwrap();
        assert_eq!(loaded.full_name, "Meera Iyer");
        assert_eq!(loaded.email, "admin@collabhub.com");
        assert_eq!(loaded.last_updated, Some(now));
        assert!(store.get(PROFILE_KEY).unwrap().contains("\"fullName\""));
    }

    #[test]
    fn test_corrupt_profile_is_ignored() {
        let store = MemoryStore::default();
        store.set(PROFILE_KEY, "{not json");
        assert!(ProfileCache::load(&store).is_none());
        store.remove(PROFILE_KEY);
        assert!(store.get(PROFILE_KEY).is_none());
    }
}
