pub const SPEED_OPTIONS: [f64; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

fn index_of(rate: f64) -> Option<usize> {
    SPEED_OPTIONS
        .iter()
        .position(|option| (option - rate).abs() < f64::EPSILON)
}

/// Next option after `current`, wrapping. Rates outside the menu start over.
pub fn next_rate(current: f64) -> f64 {
    let next = index_of(current).map_or(0, |i| (i + 1) % SPEED_OPTIONS.len());
    SPEED_OPTIONS[next]
}

pub fn is_selected(option: f64, current: f64) -> bool {
    (option - current).abs() < f64::EPSILON
}

pub fn format_rate(rate: f64) -> String {
    format!("{rate}x")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_options_and_wraps() {
        assert_eq!(next_rate(0.5), 0.75);
        assert_eq!(next_rate(1.0), 1.25);
        assert_eq!(next_rate(2.0), 0.5);
    }

    #[test]
    fn unknown_rate_restarts_cycle() {
        assert_eq!(next_rate(3.0), 0.5);
    }

    #[test]
    fn labels() {
        assert_eq!(format_rate(1.0), "1x");
        assert_eq!(format_rate(0.75), "0.75x");
        assert_eq!(format_rate(2.0), "2x");
    }

    #[test]
    fn selection_matches_current_rate() {
        assert!(is_selected(1.25, 1.25));
        assert!(!is_selected(1.0, 1.25));
        assert!(!is_selected(1.0, 3.0));
    }
}
