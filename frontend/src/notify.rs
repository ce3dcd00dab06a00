//! Transient user notifications.
//!
//! Every submission attempt surfaces exactly one notification: destructive
//! for a validation failure, normal for a post-dispatch confirmation. The
//! toast is injected straight into the document body and removes itself
//! after a few seconds; it never blocks the UI.

use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Clone, Copy, PartialEq)]
pub enum Severity {
    Normal,
    Destructive,
}

/// Shows an auto-dismissing toast with a bold title line and a description.
pub fn show_notification(title: &str, description: &str, severity: Severity) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_id(&format!("toast-{}", Uuid::new_v4()));

                if let Ok(title_el) = document.create_element("div") {
                    title_el.set_text_content(Some(title));
                    let title_el: HtmlElement = title_el.unchecked_into();
                    title_el.style().set_property("font-weight", "600").ok();
                    title_el.style().set_property("margin-bottom", "2px").ok();
                    html_toast.append_child(&title_el).ok();
                }
                if let Ok(desc_el) = document.create_element("div") {
                    desc_el.set_text_content(Some(description));
                    let desc_el: HtmlElement = desc_el.unchecked_into();
                    desc_el.style().set_property("font-size", "13px").ok();
                    desc_el.style().set_property("opacity", "0.9").ok();
                    html_toast.append_child(&desc_el).ok();
                }

                let background = match severity {
                    Severity::Normal => "rgba(22, 101, 52, 0.95)",
                    Severity::Destructive => "rgba(153, 27, 27, 0.95)",
                };
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "12px 20px").ok();
                style.set_property("border-radius", "6px").ok();
                style.set_property("max-width", "360px").ok();
                style.set_property("z-index", "10000").ok();
                style
                    .set_property("font-family", "system-ui, Arial, sans-serif")
                    .ok();
                style
                    .set_property("box-shadow", "0 4px 16px rgba(0,0,0,0.25)")
                    .ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3500).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
