use contracts::usecases::u508_preview_url_additions::PreviewConfig;
use wasm_bindgen::JsValue;

/// Global a page can define to override the default hooks and timings.
pub const CONFIG_GLOBAL: &str = "menuhinPreviewConfig";

/// Read `window.menuhinPreviewConfig`, falling back to defaults.
pub fn load_config() -> PreviewConfig {
    let Some(window) = web_sys::window() else {
        return PreviewConfig::default();
    };

    let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return PreviewConfig::default(),
    };

    match serde_wasm_bindgen::from_value::<PreviewConfig>(value) {
        Ok(config) => {
            log::debug!("Using preview config from window.{}", CONFIG_GLOBAL);
            config
        }
        Err(e) => {
            log::warn!("Ignoring invalid window.{}: {}", CONFIG_GLOBAL, e);
            PreviewConfig::default()
        }
    }
}
