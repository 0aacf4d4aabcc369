//! Session presence gate
//!
//! Login itself is an external collaborator; the dashboard only needs
//! a boolean "is a user present" signal to gate the processor views.
//! The marker lives in localStorage for the duration of the browser
//! session the user keeps it in.

use wasm_bindgen::prelude::*;
use web_sys::Storage;

const SESSION_KEY: &str = "reportlab_session";

fn local_storage() -> Result<Storage, JsValue> {
    web_sys::window()
        .ok_or("No window")?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("No localStorage"))
}

/// Whether an authenticated user is present
#[wasm_bindgen(js_name = hasActiveSession)]
pub fn has_active_session() -> bool {
    local_storage()
        .ok()
        .and_then(|storage| storage.get_item(SESSION_KEY).ok().flatten())
        .is_some()
}

/// Record a session marker after a successful login
#[wasm_bindgen(js_name = beginSession)]
pub fn begin_session(user: &str) -> Result<(), JsValue> {
    local_storage()?.set_item(SESSION_KEY, user)
}

/// Drop the session marker on logout
#[wasm_bindgen(js_name = endSession)]
pub fn end_session() -> Result<(), JsValue> {
    local_storage()?.remove_item(SESSION_KEY)
}
