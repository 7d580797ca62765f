use gloo_events::EventListener;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

/// Attaches `handler` to a media event of the element behind `video_ref` for
/// as long as the calling component is mounted.
///
/// The handler is captured when the listener attaches. It should read live
/// values from the element it is given, or dispatch into a reducer, rather
/// than read component state.
#[hook]
pub fn use_media_event<F>(video_ref: &NodeRef, event: &'static str, handler: F)
where
    F: Fn(&HtmlVideoElement) + 'static,
{
    use_effect_with((video_ref.clone(), event), move |(video_ref, event)| {
        let listener = video_ref.cast::<HtmlVideoElement>().map(|video| {
            let target = video.clone();
            EventListener::new(&video, *event, move |_| handler(&target))
        });
        move || drop(listener)
    });
}

/// Starts playback, dropping a rejected play promise (autoplay policy and friends).
pub fn play_quietly(video: &HtmlVideoElement) {
    match video.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("play() rejected: {:?}", e);
            }
        }),
        Err(e) => log::debug!("play() threw: {:?}", e),
    }
}

pub fn pause_quietly(video: &HtmlVideoElement) {
    if let Err(e) = video.pause() {
        log::debug!("pause() threw: {:?}", e);
    }
}

/// Asks the element to flip between playing and paused. State follows from
/// the resulting `playing`/`pause` event, never from this call.
pub fn toggle_play(video: &HtmlVideoElement) {
    if video.paused() {
        play_quietly(video);
    } else {
        pause_quietly(video);
    }
}
