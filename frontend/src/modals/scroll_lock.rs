use yew::prelude::*;

/// Keeps the page behind an open dialog from scrolling. The body's previous
/// `overflow` value is put back when `locked` turns false or the caller unmounts.
#[hook]
pub fn use_scroll_lock(locked: bool) {
    use_effect_with(locked, |locked| {
        let body = locked
            .then(|| web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()))
            .flatten();

        let previous = body.as_ref().map(|body| {
            let style = body.style();
            let previous = style.get_property_value("overflow").unwrap_or_default();
            if let Err(e) = style.set_property("overflow", "hidden") {
                log::warn!("Could not lock page scroll: {:?}", e);
            }
            previous
        });

        move || {
            if let (Some(body), Some(previous)) = (body, previous) {
                let style = body.style();
                let restored = if previous.is_empty() {
                    style.remove_property("overflow").map(|_| ())
                } else {
                    style.set_property("overflow", &previous)
                };
                if let Err(e) = restored {
                    log::warn!("Could not restore page scroll: {:?}", e);
                }
            }
        }
    });
}
