//! Muted hover/focus previews on list and sidebar cards.

use crate::player::media::{pause_quietly, play_quietly, use_media_event};
use std::rc::Rc;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreviewClock {
    pub duration: Option<f64>,
    pub remaining: Option<f64>,
    pub is_playing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewAction {
    Metadata(f64),
    TimeUpdate(f64),
    Play,
    Pause,
    Ended,
    Stop,
}

impl PreviewClock {
    pub fn apply(self, action: PreviewAction) -> Self {
        match action {
            PreviewAction::Metadata(duration) => {
                // First usable duration wins; `loadeddata` repeats it
                if self.duration.is_some() || !duration.is_finite() || duration <= 0.0 {
                    self
                } else {
                    Self {
                        duration: Some(duration),
                        remaining: Some(duration),
                        ..self
                    }
                }
            }
            PreviewAction::TimeUpdate(current_time) => match self.duration {
                Some(duration) => Self {
                    remaining: Some((duration - current_time).max(0.0)),
                    ..self
                },
                None => self,
            },
            PreviewAction::Play => Self {
                is_playing: true,
                ..self
            },
            PreviewAction::Pause => Self {
                is_playing: false,
                ..self
            },
            PreviewAction::Ended => Self {
                is_playing: false,
                remaining: self.duration,
                ..self
            },
            PreviewAction::Stop => Self {
                remaining: self.duration,
                ..self
            },
        }
    }

    /// Countdown while previewing, total length otherwise.
    pub fn badge_seconds(&self) -> Option<f64> {
        if self.is_playing {
            self.remaining
        } else {
            self.duration
        }
    }
}

impl Reducible for PreviewClock {
    type Action = PreviewAction;

    fn reduce(self: Rc<Self>, action: PreviewAction) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub struct UseVideoPreviewHandle {
    pub video_ref: NodeRef,
    pub clock: PreviewClock,
    pub start: Callback<()>,
    pub stop: Callback<()>,
}

#[hook]
pub fn use_video_preview() -> UseVideoPreviewHandle {
    let video_ref = use_node_ref();
    let clock = use_reducer(PreviewClock::default);

    // `muted` as an attribute does not reliably set the property
    use_effect_with(video_ref.clone(), |video_ref| {
        if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
            video.set_muted(true);
        }
        || ()
    });

    let on_metadata = {
        let dispatcher = clock.dispatcher();
        move |video: &HtmlVideoElement| dispatcher.dispatch(PreviewAction::Metadata(video.duration()))
    };
    use_media_event(&video_ref, "loadedmetadata", on_metadata.clone());
    use_media_event(&video_ref, "loadeddata", on_metadata);

    let dispatcher = clock.dispatcher();
    use_media_event(&video_ref, "timeupdate", move |video| {
        dispatcher.dispatch(PreviewAction::TimeUpdate(video.current_time()))
    });
    let dispatcher = clock.dispatcher();
    use_media_event(&video_ref, "play", move |_| dispatcher.dispatch(PreviewAction::Play));
    let dispatcher = clock.dispatcher();
    use_media_event(&video_ref, "pause", move |_| dispatcher.dispatch(PreviewAction::Pause));
    let dispatcher = clock.dispatcher();
    use_media_event(&video_ref, "ended", move |video| {
        dispatcher.dispatch(PreviewAction::Ended);
        video.set_current_time(0.0);
    });

    let start = {
        let video_ref = video_ref.clone();
        Callback::from(move |_| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_muted(true);
                video.set_current_time(0.0);
                play_quietly(&video);
            }
        })
    };

    let stop = {
        let video_ref = video_ref.clone();
        let dispatcher = clock.dispatcher();
        Callback::from(move |_| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                pause_quietly(&video);
                video.set_current_time(0.0);
                dispatcher.dispatch(PreviewAction::Stop);
            }
        })
    };

    UseVideoPreviewHandle {
        video_ref,
        clock: *clock,
        start,
        stop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: f64) -> PreviewClock {
        PreviewClock::default().apply(PreviewAction::Metadata(duration))
    }

    #[test]
    fn metadata_sets_duration_once() {
        let clock = loaded(42.0).apply(PreviewAction::Metadata(10.0));
        assert_eq!(clock.duration, Some(42.0));
        assert_eq!(clock.remaining, Some(42.0));
    }

    #[test]
    fn unusable_duration_is_ignored() {
        assert_eq!(loaded(f64::NAN).duration, None);
        assert_eq!(loaded(f64::INFINITY).duration, None);
        assert_eq!(loaded(0.0).duration, None);
    }

    #[test]
    fn countdown_never_goes_negative() {
        let clock = loaded(30.0)
            .apply(PreviewAction::Play)
            .apply(PreviewAction::TimeUpdate(12.0));
        assert_eq!(clock.remaining, Some(18.0));

        let overshoot = clock.apply(PreviewAction::TimeUpdate(31.0));
        assert_eq!(overshoot.remaining, Some(0.0));
    }

    #[test]
    fn leaving_resets_countdown_to_full_length() {
        let clock = loaded(30.0)
            .apply(PreviewAction::Play)
            .apply(PreviewAction::TimeUpdate(12.0))
            .apply(PreviewAction::Pause)
            .apply(PreviewAction::Stop);
        assert!(!clock.is_playing);
        assert_eq!(clock.remaining, Some(30.0));
    }

    #[test]
    fn ended_stops_and_resets() {
        let clock = loaded(30.0)
            .apply(PreviewAction::Play)
            .apply(PreviewAction::TimeUpdate(30.0))
            .apply(PreviewAction::Ended);
        assert!(!clock.is_playing);
        assert_eq!(clock.remaining, Some(30.0));
    }

    #[test]
    fn badge_shows_remaining_only_while_playing() {
        let idle = loaded(90.0);
        assert_eq!(idle.badge_seconds(), Some(90.0));

        let playing = idle
            .apply(PreviewAction::Play)
            .apply(PreviewAction::TimeUpdate(30.0));
        assert_eq!(playing.badge_seconds(), Some(60.0));
    }
}
