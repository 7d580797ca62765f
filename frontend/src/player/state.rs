//! Discrete playback state mirrored from native media events.
//!
//! Nothing in here starts or stops playback. The element does that and then
//! tells us through its events; the UI only ever reflects what the browser
//! reported.

use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Ready,
    Playing,
    Paused,
    Buffering,
}

impl PlaybackState {
    /// Play/pause buttons are inert until the element can play and while it stalls.
    pub fn controls_enabled(self) -> bool {
        !matches!(self, PlaybackState::Idle | PlaybackState::Buffering)
    }

    pub fn is_playing(self) -> bool {
        self == PlaybackState::Playing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    CanPlay,
    Playing,
    Pause,
    Waiting,
    TimeUpdate,
}

impl MediaEvent {
    pub fn event_name(self) -> &'static str {
        match self {
            MediaEvent::CanPlay => "canplay",
            MediaEvent::Playing => "playing",
            MediaEvent::Pause => "pause",
            MediaEvent::Waiting => "waiting",
            MediaEvent::TimeUpdate => "timeupdate",
        }
    }

    /// The event as seen from an element whose `paused` flag is `element_paused`.
    ///
    /// A paused element still fires `timeupdate` when scrubbed, which says
    /// nothing about playback, so those are dropped.
    pub fn observed(self, element_paused: bool) -> Option<Self> {
        match self {
            MediaEvent::TimeUpdate if element_paused => None,
            event => Some(event),
        }
    }
}

/// Playback state plus the one-shot `timeupdate` promotion.
///
/// An autoplaying element may already be running before listeners attach, in
/// which case `playing` was missed. The first `timeupdate` from a running
/// element covers that; later ones are ignored. Callers filter through
/// [`MediaEvent::observed`] so a paused element being scrubbed never counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackMachine {
    pub state: PlaybackState,
    time_update_seen: bool,
}

impl PlaybackMachine {
    pub fn apply(self, event: MediaEvent) -> Self {
        let mut next = self;
        next.state = match event {
            MediaEvent::CanPlay => PlaybackState::Ready,
            MediaEvent::Playing => PlaybackState::Playing,
            MediaEvent::Pause => PlaybackState::Paused,
            MediaEvent::Waiting => PlaybackState::Buffering,
            MediaEvent::TimeUpdate => {
                if self.time_update_seen {
                    self.state
                } else {
                    next.time_update_seen = true;
                    PlaybackState::Playing
                }
            }
        };
        next
    }
}

impl Reducible for PlaybackMachine {
    type Action = MediaEvent;

    fn reduce(self: Rc<Self>, action: MediaEvent) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            if next.state != self.state {
                log::debug!("Playback {:?} -> {:?} on {:?}", self.state, next.state, action);
            }
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[MediaEvent]) -> PlaybackState {
        events
            .iter()
            .fold(PlaybackMachine::default(), |m, e| m.apply(*e))
            .state
    }

    #[test]
    fn starts_idle() {
        assert_eq!(PlaybackMachine::default().state, PlaybackState::Idle);
    }

    #[test]
    fn native_events_drive_transitions() {
        use MediaEvent::*;
        assert_eq!(run(&[CanPlay]), PlaybackState::Ready);
        assert_eq!(run(&[CanPlay, Playing]), PlaybackState::Playing);
        assert_eq!(run(&[CanPlay, Playing, Pause]), PlaybackState::Paused);
        assert_eq!(run(&[CanPlay, Playing, Waiting]), PlaybackState::Buffering);
        assert_eq!(run(&[CanPlay, Playing, Waiting, Playing]), PlaybackState::Playing);
    }

    #[test]
    fn paused_only_becomes_playing_on_playing_event() {
        use MediaEvent::*;
        let paused = [CanPlay, Playing, TimeUpdate, Pause];
        assert_eq!(run(&paused), PlaybackState::Paused);

        // Further time updates (seeking while paused) do not flip the state
        let mut seeking = paused.to_vec();
        seeking.push(TimeUpdate);
        assert_eq!(run(&seeking), PlaybackState::Paused);

        let mut resumed = paused.to_vec();
        resumed.push(Playing);
        assert_eq!(run(&resumed), PlaybackState::Playing);
    }

    #[test]
    fn first_time_update_recovers_missed_autoplay() {
        use MediaEvent::*;
        assert_eq!(run(&[CanPlay, TimeUpdate]), PlaybackState::Playing);
    }

    #[test]
    fn scrubbing_a_paused_element_stays_ready() {
        use MediaEvent::*;
        let machine = [CanPlay.observed(true), TimeUpdate.observed(true)]
            .into_iter()
            .flatten()
            .fold(PlaybackMachine::default(), |m, e| m.apply(e));
        assert_eq!(machine.state, PlaybackState::Ready);

        // Playback starting afterwards still goes through `playing`
        assert_eq!(machine.apply(Playing).state, PlaybackState::Playing);
    }

    #[test]
    fn only_paused_time_updates_are_dropped() {
        use MediaEvent::*;
        assert_eq!(TimeUpdate.observed(true), None);
        assert_eq!(TimeUpdate.observed(false), Some(TimeUpdate));
        assert_eq!(Pause.observed(true), Some(Pause));
        assert_eq!(CanPlay.observed(true), Some(CanPlay));
    }

    #[test]
    fn stalled_element_stays_buffering() {
        use MediaEvent::*;
        assert_eq!(
            run(&[CanPlay, Playing, TimeUpdate, Waiting, TimeUpdate]),
            PlaybackState::Buffering
        );
    }

    #[test]
    fn controls_disabled_while_idle_or_buffering() {
        assert!(!PlaybackState::Idle.controls_enabled());
        assert!(!PlaybackState::Buffering.controls_enabled());
        assert!(PlaybackState::Ready.controls_enabled());
        assert!(PlaybackState::Playing.controls_enabled());
        assert!(PlaybackState::Paused.controls_enabled());
    }

    #[test]
    fn event_names_match_dom() {
        let names: Vec<_> = [
            MediaEvent::CanPlay,
            MediaEvent::Playing,
            MediaEvent::Pause,
            MediaEvent::Waiting,
            MediaEvent::TimeUpdate,
        ]
        .iter()
        .map(|e| e.event_name())
        .collect();
        assert_eq!(names, ["canplay", "playing", "pause", "waiting", "timeupdate"]);
    }
}
