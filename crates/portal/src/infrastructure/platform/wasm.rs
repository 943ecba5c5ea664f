//! Browser platform implementation backed by `web-sys`

use std::{future::Future, pin::Pin};

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, HtmlInputElement};

use crate::ports::outbound::{ClipboardCopy, PlatformPort};

#[derive(Clone, Copy, Default)]
pub struct WasmPlatform;

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn input(element_id: &str) -> Option<HtmlInputElement> {
    document()?
        .get_element_by_id(element_id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

impl PlatformPort for WasmPlatform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = ms.min(u32::MAX as u64) as u32;
        Box::pin(async move {
            gloo_timers::future::TimeoutFuture::new(ms).await;
        })
    }

    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn element_value(&self, element_id: &str) -> Option<String> {
        input(element_id).map(|el| el.value())
    }

    fn set_element_value(&self, element_id: &str, value: &str) {
        if let Some(el) = input(element_id) {
            el.set_value(value);
        }
    }

    fn copy_element_text(&self, element_id: &str) -> ClipboardCopy {
        let Some(el) = input(element_id) else {
            return ClipboardCopy::ElementMissing;
        };
        el.select();

        let Some(html_document) = document().and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        else {
            return ClipboardCopy::Failed;
        };
        match html_document.exec_command("copy") {
            Ok(true) => ClipboardCopy::Dispatched,
            Ok(false) | Err(_) => ClipboardCopy::Failed,
        }
    }

    fn install_stylesheet(&self, css: &str) {
        let Some(doc) = document() else {
            return;
        };
        let (Some(head), Ok(style)) = (doc.head(), doc.create_element("style")) else {
            tracing::warn!("Could not install stylesheet: no document head");
            return;
        };
        style.set_text_content(Some(css));
        if let Err(e) = head.append_child(&style) {
            tracing::warn!("Could not install stylesheet: {:?}", e);
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> WasmPlatform {
    WasmPlatform
}
