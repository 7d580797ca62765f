use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses the timestamp shapes the backend is known to emit.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn format_iso8601_date(iso_date: &str) -> String {
    match parse_timestamp(iso_date) {
        Some(datetime) => datetime.format("%b %-d, %Y").to_string(),
        None => iso_date.to_string(),
    }
}

/// "3 minutes ago" style text, relative to `now`.
pub fn format_time_ago(iso_date: &str, now: DateTime<Utc>) -> String {
    let Some(datetime) = parse_timestamp(iso_date) else {
        return iso_date.to_string();
    };

    let seconds = now.signed_duration_since(datetime).num_seconds().max(0) as f64;
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;

    if seconds < 45.0 {
        "a few seconds ago".to_string()
    } else if seconds < 90.0 {
        "a minute ago".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes ago", minutes.round() as i64)
    } else if minutes < 90.0 {
        "an hour ago".to_string()
    } else if hours < 22.0 {
        format!("{} hours ago", hours.round() as i64)
    } else if hours < 36.0 {
        "a day ago".to_string()
    } else if days < 26.0 {
        format!("{} days ago", days.round() as i64)
    } else if days < 46.0 {
        "a month ago".to_string()
    } else if days < 320.0 {
        format!("{} months ago", (days / 30.4).round() as i64)
    } else if days < 548.0 {
        "a year ago".to_string()
    } else {
        format!("{} years ago", (days / 365.0).round() as i64)
    }
}

pub fn time_ago(iso_date: &str) -> String {
    format_time_ago(iso_date, Utc::now())
}

/// Seconds as `M:SS`; anything unusable renders as a placeholder.
pub fn format_time(seconds: Option<f64>) -> String {
    match seconds {
        Some(time) if time.is_finite() && time >= 0.0 => {
            let total = time.floor() as u64;
            format!("{}:{:02}", total / 60, total % 60)
        }
        _ => "–:–".to_string(),
    }
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Single uppercase letter shown in avatar bubbles.
pub fn avatar_initial(user_id: &str) -> String {
    user_id
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(iso: &str) -> DateTime<Utc> {
        parse_timestamp(iso).unwrap()
    }

    #[test]
    fn parses_all_backend_timestamp_shapes() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-02"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-02T00:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-02T02:00:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-02T00:00:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-02 00:00:00"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(Some(125.0)), "2:05");
        assert_eq!(format_time(Some(0.0)), "0:00");
        assert_eq!(format_time(Some(59.9)), "0:59");
        assert_eq!(format_time(Some(3600.0)), "60:00");
    }

    #[test]
    fn format_time_placeholder_for_unusable_input() {
        assert_eq!(format_time(None), "–:–");
        assert_eq!(format_time(Some(f64::NAN)), "–:–");
        assert_eq!(format_time(Some(f64::INFINITY)), "–:–");
        assert_eq!(format_time(Some(-1.0)), "–:–");
    }

    #[test]
    fn time_ago_buckets() {
        let now = at("2024-06-01T12:00:00Z");
        assert_eq!(format_time_ago("2024-06-01T11:59:30Z", now), "a few seconds ago");
        assert_eq!(format_time_ago("2024-06-01T11:59:00Z", now), "a minute ago");
        assert_eq!(format_time_ago("2024-06-01T11:50:00Z", now), "10 minutes ago");
        assert_eq!(format_time_ago("2024-06-01T11:00:00Z", now), "an hour ago");
        assert_eq!(format_time_ago("2024-06-01T07:00:00Z", now), "5 hours ago");
        assert_eq!(format_time_ago("2024-05-31T12:00:00Z", now), "a day ago");
        assert_eq!(format_time_ago("2024-05-25T12:00:00Z", now), "7 days ago");
        assert_eq!(format_time_ago("2024-03-01T12:00:00Z", now), "3 months ago");
        assert_eq!(format_time_ago("2023-06-01T12:00:00Z", now), "a year ago");
        assert_eq!(format_time_ago("2021-06-01T12:00:00Z", now), "3 years ago");
    }

    #[test]
    fn time_ago_keeps_unparseable_input() {
        let now = at("2024-06-01T12:00:00Z");
        assert_eq!(format_time_ago("not a date", now), "not a date");
    }

    #[test]
    fn pluralize_matches_count() {
        assert_eq!(pluralize(0, "comment", "comments"), "0 comments");
        assert_eq!(pluralize(1, "comment", "comments"), "1 comment");
        assert_eq!(pluralize(2, "comment", "comments"), "2 comments");
    }

    #[test]
    fn avatar_initial_is_uppercase_first_char() {
        assert_eq!(avatar_initial("john_smith"), "J");
        assert_eq!(avatar_initial(""), "");
    }

    #[test]
    fn date_only_formatting() {
        assert_eq!(format_iso8601_date("2024-01-02T10:00:00Z"), "Jan 2, 2024");
        assert_eq!(format_iso8601_date("garbage"), "garbage");
    }
}
