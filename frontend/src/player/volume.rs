/// Snapshot of an element's `volume` and `muted` properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeState {
    pub volume: f64,
    pub muted: bool,
}

impl Default for VolumeState {
    fn default() -> Self {
        Self {
            volume: 1.0,
            muted: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    Muted,
    Low,
    High,
}

impl VolumeState {
    /// Slider input. Zero mutes; anything above zero unmutes.
    pub fn with_slider(self, value: f64) -> Self {
        let volume = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        Self {
            volume,
            muted: volume == 0.0,
        }
    }

    /// Mute button. Unmuting a silent element brings it back to full volume.
    pub fn toggled_mute(self) -> Self {
        if self.muted {
            Self {
                volume: if self.volume == 0.0 { 1.0 } else { self.volume },
                muted: false,
            }
        } else {
            Self {
                muted: true,
                ..self
            }
        }
    }

    /// What the slider and fill bar show.
    pub fn effective(self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    pub fn level(self) -> VolumeLevel {
        if self.muted || self.volume == 0.0 {
            VolumeLevel::Muted
        } else if self.volume < 0.5 {
            VolumeLevel::Low
        } else {
            VolumeLevel::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_to_zero_mutes_then_above_zero_unmutes() {
        let muted = VolumeState::default().with_slider(0.0);
        assert!(muted.muted);
        assert_eq!(muted.volume, 0.0);

        let restored = muted.with_slider(0.4);
        assert!(!restored.muted);
        assert_eq!(restored.volume, 0.4);
    }

    #[test]
    fn slider_is_clamped() {
        assert_eq!(VolumeState::default().with_slider(1.7).volume, 1.0);
        let below = VolumeState::default().with_slider(-0.3);
        assert_eq!(below.volume, 0.0);
        assert!(below.muted);
        assert!(VolumeState::default().with_slider(f64::NAN).muted);
    }

    #[test]
    fn unmuting_silent_element_resets_to_full_volume() {
        let silent = VolumeState {
            volume: 0.0,
            muted: true,
        };
        assert_eq!(
            silent.toggled_mute(),
            VolumeState {
                volume: 1.0,
                muted: false
            }
        );
    }

    #[test]
    fn mute_toggle_keeps_volume() {
        let state = VolumeState {
            volume: 0.3,
            muted: false,
        };
        let muted = state.toggled_mute();
        assert!(muted.muted);
        assert_eq!(muted.volume, 0.3);
        assert_eq!(muted.toggled_mute(), state);
    }

    #[test]
    fn icon_levels() {
        let at = |volume, muted| VolumeState { volume, muted }.level();
        assert_eq!(at(0.8, true), VolumeLevel::Muted);
        assert_eq!(at(0.0, false), VolumeLevel::Muted);
        assert_eq!(at(0.2, false), VolumeLevel::Low);
        assert_eq!(at(0.5, false), VolumeLevel::High);
    }

    #[test]
    fn muted_slider_shows_zero() {
        let state = VolumeState {
            volume: 0.7,
            muted: true,
        };
        assert_eq!(state.effective(), 0.0);
    }
}
