//! Browser Bindings
//!
//! Everything that touches `window`: location, local storage, Bootstrap
//! modals and server-embedded JSON.

use form_gateway::{KeyValueStore, PostSuccess, Theme};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["bootstrap", "Modal"], js_name = getInstance)]
    fn bootstrap_modal_instance(element: &web_sys::Element) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["bootstrap", "Modal"], js_name = getOrCreateInstance)]
    fn bootstrap_modal_create(element: &web_sys::Element) -> Result<JsValue, JsValue>;
}

// ========================
// Location
// ========================

pub fn origin() -> String {
    window().location().origin().unwrap_or_default()
}

pub fn pathname() -> String {
    window().location().pathname().unwrap_or_default()
}

pub fn reload() {
    if let Err(e) = window().location().reload() {
        log::error!("[Browser] reload failed: {:?}", e);
    }
}

pub fn navigate(url: &str) {
    if let Err(e) = window().location().set_href(url) {
        log::error!("[Browser] navigation to {} failed: {:?}", url, e);
    }
}

pub fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

// ========================
// Modals
// ========================

/// Hide a Bootstrap modal if the page has one open with this id
pub fn close_modal(id: &str) {
    if let Some(element) = document().get_element_by_id(id) {
        call_modal(bootstrap_modal_instance(&element), "hide");
    }
}

pub fn show_modal(id: &str) {
    if let Some(element) = document().get_element_by_id(id) {
        call_modal(bootstrap_modal_create(&element), "show");
    }
}

fn call_modal(instance: Result<JsValue, JsValue>, method: &str) {
    let instance = match instance {
        Ok(instance) if !instance.is_null() && !instance.is_undefined() => instance,
        Ok(_) => return,
        Err(e) => {
            log::warn!("[Browser] bootstrap unavailable: {:?}", e);
            return;
        }
    };
    let method = js_sys::Reflect::get(&instance, &JsValue::from_str(method))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    if let Some(method) = method {
        let _ = method.call0(&instance);
    }
}

/// Run the follow-up of a successful submission
pub fn perform(action: &PostSuccess) {
    log::debug!("[Browser] post-success {:?}", action);
    match action {
        PostSuccess::CloseModal(id) => close_modal(id),
        PostSuccess::ResetForm => {}
        PostSuccess::Reload => reload(),
        PostSuccess::Redirect(url) => navigate(url),
    }
}

/// Wait out the success notice
pub async fn notice_delay(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

// ========================
// Page data
// ========================

/// Parse a `<script type="application/json" id=...>` block
pub fn embedded_json<T: DeserializeOwned>(id: &str) -> Option<T> {
    let text = document().get_element_by_id(id)?.text_content()?;
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("[Browser] #{} is not valid JSON: {}", id, e);
            None
        }
    }
}

pub fn apply_theme(theme: Theme) {
    if let Some(body) = document().body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

// ========================
// Local storage
// ========================

/// `window.localStorage`; silently empty when storage is disabled
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        Self {
            storage: window().local_storage().ok().flatten(),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("[Browser] localStorage.setItem({}) failed", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}
