//! Scrub-bar geometry.

/// Pointer position over the bar as a fraction of its width, clamped to [0, 1].
pub fn seek_fraction(client_x: f64, bar_left: f64, bar_width: f64) -> f64 {
    if bar_width <= 0.0 || !bar_width.is_finite() {
        return 0.0;
    }
    ((client_x - bar_left) / bar_width).clamp(0.0, 1.0)
}

pub fn seek_time(fraction: f64, duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        fraction * duration
    } else {
        0.0
    }
}

pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        (current_time / duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_clamps_outside_the_bar() {
        assert_eq!(seek_fraction(50.0, 100.0, 200.0), 0.0);
        assert_eq!(seek_fraction(400.0, 100.0, 200.0), 1.0);
        assert_eq!(seek_fraction(150.0, 100.0, 200.0), 0.25);
    }

    #[test]
    fn zero_width_bar_seeks_to_start() {
        assert_eq!(seek_fraction(150.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn seek_time_scales_duration() {
        assert_eq!(seek_time(0.5, 120.0), 60.0);
        assert_eq!(seek_time(0.5, f64::NAN), 0.0);
    }

    #[test]
    fn percent_is_zero_without_duration() {
        assert_eq!(progress_percent(10.0, 0.0), 0.0);
        assert_eq!(progress_percent(30.0, 120.0), 25.0);
    }
}
