use crate::models::Navigator;
use dioxus::prelude::*;
use serde_json::Value;
use std::rc::Rc;
use url::Url;

/// Quotes a value as a JavaScript string literal.
fn js_string(raw: &str) -> String {
    Value::from(raw).to_string()
}

/// Keeps a scrollable pane showing its newest content.
pub trait PaneScroller {
    fn pin_to_bottom(&self, pane_id: &str);
}

/// Sets `scrollTop = scrollHeight` on the pane in the hosting webview.
pub struct DomScroller;

impl PaneScroller for DomScroller {
    fn pin_to_bottom(&self, pane_id: &str) {
        let id = js_string(pane_id);
        let _ = document::eval(&format!(
            "const el = document.getElementById({id}); if (el) {{ el.scrollTop = el.scrollHeight; }}"
        ));
    }
}

/// Shared scroller the views pick up from context.
#[derive(Clone)]
pub struct ScrollerHandle(Rc<dyn PaneScroller>);

impl ScrollerHandle {
    pub fn new(scroller: Rc<dyn PaneScroller>) -> Self {
        Self(scroller)
    }

    pub fn pin_to_bottom(&self, pane_id: &str) {
        self.0.pin_to_bottom(pane_id);
    }
}

impl PartialEq for ScrollerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The provided [`ScrollerHandle`], or a [`DomScroller`] when none is.
pub fn use_pane_scroller() -> ScrollerHandle {
    use_hook(|| {
        try_consume_context::<ScrollerHandle>()
            .unwrap_or_else(|| ScrollerHandle::new(Rc::new(DomScroller)))
    })
}

/// `window.open(url, "_blank")` in the hosting webview.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_in_new_tab(&self, url: &Url) {
        let target = js_string(url.as_str());
        let _ = document::eval(&format!("window.open({target}, \"_blank\");"));
    }
}
