//! Browser Dialogs
//!
//! Blocking `window.confirm` / `window.alert`.

/// Ask the user; `false` if there is no window or the prompt fails.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("alert failed: {}", message);
        }
    }
}
