//! Shared helpers for WASM API operations
//!
//! This module contains common patterns and utilities for serialization,
//! deserialization, error handling, and argument conversion across all API
//! operations.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::svg::SizeHint;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a warning message with [Iconic Button] prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [Iconic Button] prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_warn(msg: &str) {
    warn(&format!("[Iconic Button] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[Iconic Button] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Like [`deserialize`], but `undefined` and `null` yield `T::default()`
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript with automatic error handling.
///
/// Maps become plain objects and `None` becomes `null`, so the result can be
/// handed straight to the UI framework.
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| {
            let msg = format!("{}: {}", error_context, e);
            log_error(&msg);
            JsValue::from_str(&msg)
        })
}

// ============================================================================
// Argument Conversion Helpers
// ============================================================================

/// Read an optional icon size: strings and numbers are accepted, anything
/// else means no size.
pub fn size_hint_from_js(value: &JsValue) -> Option<SizeHint> {
    if let Some(text) = value.as_string() {
        return Some(SizeHint::Text(text));
    }
    value.as_f64().map(SizeHint::Number)
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert an operation error to a JsValue
pub fn operation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}
