use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

/// The parts of a keydown that matter for player shortcuts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub code: &'a str,
    pub modifier: bool,
    pub target_tag: Option<&'a str>,
    pub target_editable: bool,
}

const TYPING_TAGS: [&str; 3] = ["INPUT", "TEXTAREA", "SELECT"];

/// Space, `k` or `K` toggles playback unless the user is typing or holding a modifier.
pub fn toggles_playback(press: &KeyPress) -> bool {
    if press.modifier {
        return false;
    }
    let typing = press.target_editable
        || press
            .target_tag
            .is_some_and(|tag| TYPING_TAGS.contains(&tag.to_ascii_uppercase().as_str()));
    if typing {
        return false;
    }
    press.code == "Space" || press.key == "k" || press.key == "K"
}

#[hook]
pub fn use_keyboard_controls(on_toggle_play: Callback<()>, enabled: bool) {
    use_effect_with((on_toggle_play, enabled), |(on_toggle_play, enabled)| {
        let listener = if *enabled {
            web_sys::window()
                .and_then(|window| window.document())
                .map(|document| {
                    let on_toggle_play = on_toggle_play.clone();
                    // Not passive: Space must not scroll the page
                    let options = EventListenerOptions::enable_prevent_default();
                    EventListener::new_with_options(&document, "keydown", options, move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        let target = event
                            .target()
                            .and_then(|t| t.dyn_into::<HtmlElement>().ok());
                        let tag = target.as_ref().map(|t| t.tag_name());
                        let key = event.key();
                        let code = event.code();
                        let press = KeyPress {
                            key: &key,
                            code: &code,
                            modifier: event.alt_key() || event.ctrl_key() || event.meta_key(),
                            target_tag: tag.as_deref(),
                            target_editable: target.as_ref().is_some_and(|t| t.is_content_editable()),
                        };
                        if toggles_playback(&press) {
                            event.prevent_default();
                            on_toggle_play.emit(());
                        }
                    })
                })
        } else {
            None
        };
        move || drop(listener)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press<'a>(key: &'a str, code: &'a str) -> KeyPress<'a> {
        KeyPress {
            key,
            code,
            ..Default::default()
        }
    }

    #[test]
    fn space_and_k_toggle() {
        assert!(toggles_playback(&press(" ", "Space")));
        assert!(toggles_playback(&press("k", "KeyK")));
        assert!(toggles_playback(&press("K", "KeyK")));
        assert!(!toggles_playback(&press("j", "KeyJ")));
        assert!(!toggles_playback(&press("Enter", "Enter")));
    }

    #[test]
    fn modifiers_disable_shortcuts() {
        let mut ctrl_k = press("k", "KeyK");
        ctrl_k.modifier = true;
        assert!(!toggles_playback(&ctrl_k));
    }

    #[test]
    fn typing_targets_are_ignored() {
        for tag in ["INPUT", "TEXTAREA", "SELECT", "input"] {
            let mut space = press(" ", "Space");
            space.target_tag = Some(tag);
            assert!(!toggles_playback(&space), "{tag} should swallow the shortcut");
        }

        let mut editable = press("k", "KeyK");
        editable.target_tag = Some("DIV");
        editable.target_editable = true;
        assert!(!toggles_playback(&editable));

        let mut button = press(" ", "Space");
        button.target_tag = Some("BUTTON");
        assert!(toggles_playback(&button));
    }
}
