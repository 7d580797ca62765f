//! Cross-browser fullscreen behind a single enter/exit/query contract.
//!
//! Browsers expose the API under different prefixes. Each prefix is a
//! [`FullscreenVendor`]; [`VENDORS`] lists them in the order they are tried.
//! The first vendor whose method exists on the target wins.

use gloo_events::EventListener;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenVendor {
    pub request: &'static str,
    pub exit: &'static str,
    pub element: &'static str,
    pub change_event: &'static str,
}

pub const VENDORS: [FullscreenVendor; 4] = [
    FullscreenVendor {
        request: "requestFullscreen",
        exit: "exitFullscreen",
        element: "fullscreenElement",
        change_event: "fullscreenchange",
    },
    FullscreenVendor {
        request: "webkitRequestFullscreen",
        exit: "webkitExitFullscreen",
        element: "webkitFullscreenElement",
        change_event: "webkitfullscreenchange",
    },
    FullscreenVendor {
        request: "mozRequestFullScreen",
        exit: "mozCancelFullScreen",
        element: "mozFullScreenElement",
        change_event: "mozfullscreenchange",
    },
    FullscreenVendor {
        request: "msRequestFullscreen",
        exit: "msExitFullscreen",
        element: "msFullscreenElement",
        change_event: "MSFullscreenChange",
    },
];

/// First vendor, in order, whose chosen method the target supports.
pub fn select_vendor<'a>(
    vendors: &'a [FullscreenVendor],
    method: impl Fn(&FullscreenVendor) -> &'static str,
    supports: impl Fn(&str) -> bool,
) -> Option<&'a FullscreenVendor> {
    vendors.iter().find(|vendor| supports(method(vendor)))
}

fn method_on(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

async fn invoke(target: &JsValue, name: &str) -> Result<(), JsValue> {
    let function = method_on(target, name)
        .ok_or_else(|| JsValue::from_str(&format!("{name} is not available")))?;
    let result = function.call0(target)?;
    // Older prefixes return undefined instead of a promise
    if let Ok(promise) = result.dyn_into::<Promise>() {
        JsFuture::from(promise).await?;
    }
    Ok(())
}

pub fn is_fullscreen(document: &Document, container: &Element) -> bool {
    let container: &JsValue = container.as_ref();
    VENDORS.iter().any(|vendor| {
        Reflect::get(document, &JsValue::from_str(vendor.element))
            .map(|current| &current == container)
            .unwrap_or(false)
    })
}

pub async fn enter(container: &Element) {
    let target: &JsValue = container.as_ref();
    let Some(vendor) = select_vendor(&VENDORS, |v| v.request, |name| method_on(target, name).is_some())
    else {
        log::warn!("Fullscreen is not supported by this browser");
        return;
    };

    if let Err(e) = invoke(target, vendor.request).await {
        log::warn!("Enter fullscreen failed: {:?}", e);
    }
}

pub async fn exit(document: &Document) {
    let target: &JsValue = document.as_ref();
    let Some(vendor) = select_vendor(&VENDORS, |v| v.exit, |name| method_on(target, name).is_some())
    else {
        log::warn!("Fullscreen exit is not supported by this browser");
        return;
    };

    if let Err(e) = invoke(target, vendor.exit).await {
        log::warn!("Exit fullscreen failed: {:?}", e);
    }
}

pub async fn toggle(document: &Document, container: &Element) {
    if is_fullscreen(document, container) {
        exit(document).await;
    } else {
        enter(container).await;
    }
}

pub struct UseFullscreenHandle {
    pub is_fullscreen: bool,
    pub toggle: Callback<()>,
}

/// Tracks whether `container_ref` is the fullscreen element and offers a toggle.
#[hook]
pub fn use_fullscreen(container_ref: &NodeRef) -> UseFullscreenHandle {
    let active = use_state(|| false);

    {
        let active = active.clone();
        use_effect_with(container_ref.clone(), move |container_ref| {
            let container_ref = container_ref.clone();
            let listeners: Vec<EventListener> = current_document()
                .map(|document| {
                    VENDORS
                        .iter()
                        .map(|vendor| {
                            let active = active.clone();
                            let container_ref = container_ref.clone();
                            let doc = document.clone();
                            EventListener::new(&document, vendor.change_event, move |_| {
                                let now = container_ref
                                    .cast::<Element>()
                                    .map(|container| is_fullscreen(&doc, &container))
                                    .unwrap_or(false);
                                active.set(now);
                            })
                        })
                        .collect()
                })
                .unwrap_or_default();
            move || drop(listeners)
        });
    }

    let on_toggle = {
        let container_ref = container_ref.clone();
        Callback::from(move |_| {
            let (Some(document), Some(container)) =
                (current_document(), container_ref.cast::<Element>())
            else {
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                toggle(&document, &container).await;
            });
        })
    };

    UseFullscreenHandle {
        is_fullscreen: *active,
        toggle: on_toggle,
    }
}

fn current_document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_api_is_preferred() {
        let picked = select_vendor(&VENDORS, |v| v.request, |_| true).unwrap();
        assert_eq!(picked.request, "requestFullscreen");
    }

    #[test]
    fn falls_back_in_declared_order() {
        let supported = ["mozRequestFullScreen", "msRequestFullscreen"];
        let picked = select_vendor(&VENDORS, |v| v.request, |name| supported.contains(&name)).unwrap();
        assert_eq!(picked.request, "mozRequestFullScreen");

        let picked = select_vendor(&VENDORS, |v| v.exit, |name| name == "webkitExitFullscreen").unwrap();
        assert_eq!(picked.change_event, "webkitfullscreenchange");
    }

    #[test]
    fn nothing_supported_yields_none() {
        assert!(select_vendor(&VENDORS, |v| v.request, |_| false).is_none());
    }

    #[test]
    fn every_vendor_has_a_change_event() {
        let events: Vec<_> = VENDORS.iter().map(|v| v.change_event).collect();
        assert_eq!(
            events,
            [
                "fullscreenchange",
                "webkitfullscreenchange",
                "mozfullscreenchange",
                "MSFullscreenChange"
            ]
        );
    }
}
