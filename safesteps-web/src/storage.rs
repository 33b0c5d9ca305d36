//! localStorage-backed settings and photo persistence.
use safesteps_game::{PhotoRole, Settings, SettingsStore};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::dom;

/// Key holding the serialized [`Settings`] blob.
pub const SETTINGS_KEY: &str = "parentSettings";

/// Per-game progress records wiped by the reset-progress action.
pub const PROGRESS_KEYS: [&str; 5] = [
    "circlesProgress",
    "sortingProgress",
    "scenariosProgress",
    "bubbleProgress",
    "decisionsProgress",
];

/// Storage key for a family photo slot.
#[must_use]
pub const fn photo_key(role: PhotoRole) -> &'static str {
    match role {
        PhotoRole::Mom => "parentPhoto_mom",
        PhotoRole::Dad => "parentPhoto_dad",
    }
}

/// Errors surfaced by the localStorage settings store.
#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write to localStorage: {0}")]
    WriteFailed(String),
    #[error(transparent)]
    Settings(#[from] safesteps_game::SettingsError),
}

/// Web implementation of the settings store using browser localStorage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSettingsStore;

impl LocalSettingsStore {
    fn storage() -> Result<web_sys::Storage, WebStorageError> {
        dom::local_storage().map_err(|e| WebStorageError::Unavailable(dom::js_error_message(&e)))
    }
}

impl SettingsStore for LocalSettingsStore {
    type Error = WebStorageError;

    fn load_settings(&self) -> Result<Settings, Self::Error> {
        let storage = Self::storage()?;
        let Ok(Some(raw)) = storage.get_item(SETTINGS_KEY) else {
            return Ok(Settings::default());
        };
        match Settings::from_json(&raw) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                // A corrupt blob must not lock parents out of the dashboard.
                log::warn!("stored settings unreadable, using defaults: {e}");
                Ok(Settings::default())
            }
        }
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), Self::Error> {
        let storage = Self::storage()?;
        let json = settings.to_json()?;
        storage
            .set_item(SETTINGS_KEY, &json)
            .map_err(|e| WebStorageError::WriteFailed(dom::js_error_message(&e)))
    }

    fn load_photo(&self, role: PhotoRole) -> Result<Option<String>, Self::Error> {
        let storage = Self::storage()?;
        Ok(storage.get_item(photo_key(role)).ok().flatten())
    }

    fn save_photo(&self, role: PhotoRole, data_uri: &str) -> Result<(), Self::Error> {
        let storage = Self::storage()?;
        storage
            .set_item(photo_key(role), data_uri)
            .map_err(|e| WebStorageError::WriteFailed(dom::js_error_message(&e)))
    }

    fn clear_photo(&self, role: PhotoRole) -> Result<(), Self::Error> {
        let storage = Self::storage()?;
        storage
            .remove_item(photo_key(role))
            .map_err(|e| WebStorageError::WriteFailed(dom::js_error_message(&e)))
    }

    fn reset_progress(&self) -> Result<(), Self::Error> {
        let storage = Self::storage()?;
        for key in PROGRESS_KEYS {
            storage
                .remove_item(key)
                .map_err(|e| WebStorageError::WriteFailed(dom::js_error_message(&e)))?;
        }
        Ok(())
    }
}

/// Serialize the settings and hand them to the browser as a JSON download.
///
/// # Errors
/// Returns an error if the blob or object URL cannot be created.
pub fn export_settings(settings: &Settings) -> Result<(), JsValue> {
    let json = settings
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = dom::document()
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("anchor element expected"))?;
    anchor.set_href(&url);
    anchor.set_download("safesteps-settings.json");
    anchor.click();
    Url::revoke_object_url(&url)
}
