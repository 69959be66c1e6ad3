//! Blocking user notifications.
//!
//! In the browser this is `window.alert`. Without a browser (native tests)
//! the message is logged instead so callers need no cfg branches.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::error::ControllerError;

/// Show `message` in a blocking dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("notify (no window): {message}");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {err:?}; message was: {message}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::warn!("notify: {message}");
    }
}

/// Notify the user about `outcome` when it is an error.
pub fn report(outcome: Result<(), ControllerError>) {
    if let Err(err) = outcome {
        alert(&err.to_string());
    }
}
