//! Manual adjustment and `mm:ss` formatting of a duration in minutes.

/// Jump to the next whole minute, dropping any fractional remainder.
pub fn increment(minutes: f64) -> f64 {
    minutes.floor() + 1.0
}

/// Drop to the previous whole minute, never below zero.
pub fn decrement(minutes: f64) -> f64 {
    if minutes > 1.0 {
        minutes.ceil() - 1.0
    } else {
        0.0
    }
}

/// Split a duration into whole minutes and rounded seconds.
///
/// Seconds that round up to 60 carry into the minutes.
pub fn split_minutes(minutes: f64) -> (u64, u64) {
    let minutes = minutes.max(0.0);
    let mins = minutes.floor();
    let seconds = ((minutes - mins) * 60.0).round() as u64;
    if seconds >= 60 {
        (mins as u64 + 1, 0)
    } else {
        (mins as u64, seconds)
    }
}

/// Render a duration as `mm:ss`, zero-padding both parts below 10.
pub fn format_duration(minutes: f64) -> String {
    let (mins, seconds) = split_minutes(minutes);
    format!("{:02}:{:02}", mins, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_discards_fraction() {
        assert_eq!(increment(46.5), 47.0);
        assert_eq!(increment(46.0), 47.0);
        assert_eq!(increment(0.0), 1.0);
    }

    #[test]
    fn decrement_goes_to_previous_whole_minute() {
        assert_eq!(decrement(46.5), 46.0);
        assert_eq!(decrement(46.0), 45.0);
        assert_eq!(decrement(1.5), 1.0);
    }

    #[test]
    fn decrement_clamps_at_zero() {
        assert_eq!(decrement(1.0), 0.0);
        assert_eq!(decrement(0.5), 0.0);
        assert_eq!(decrement(0.0), 0.0);
    }

    #[test]
    fn formats_whole_minutes() {
        assert_eq!(format_duration(46.0), "46:00");
        assert_eq!(format_duration(0.0), "00:00");
    }

    #[test]
    fn pads_minutes_and_seconds() {
        assert_eq!(split_minutes(5.1), (5, 6));
        assert_eq!(format_duration(5.1), "05:06");
        assert_eq!(format_duration(7.5), "07:30");
    }

    #[test]
    fn long_workouts_keep_all_minute_digits() {
        assert_eq!(format_duration(126.25), "126:15");
    }

    #[test]
    fn seconds_rounding_to_sixty_carries() {
        // guard only: form inputs always land on whole or half minutes
        assert_eq!(format_duration(9.999), "10:00");
    }
}
