//! Deep-link dispatch.
//!
//! The terminal action of every submission path: open the prepared `wa.me`
//! URL in a new browsing context. Fire-and-forget — a blocked popup is not
//! detected, and nothing after dispatch depends on whether WhatsApp ever
//! received the message.

use gloo_console::log;

pub fn open_whatsapp(link: &str) {
    log!("dispatching WhatsApp deep link");
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(link, "_blank");
    }
}
