//! Analytics summary routes.
//!
//! Read-only aside from the event-recording hook; the admin dashboard polls
//! the summary endpoint on a fixed interval, so responses are briefly
//! cached under a named key.

pub mod record_event;
pub mod summary;

/// Bucketed relative age for the recent-events feed:
/// < 1 min "Just now", < 60 min "Nm ago", < 24 h "Nh ago", else "Nd ago".
pub fn format_relative_age(age: chrono::Duration) -> String {
    let minutes = age.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = age.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", age.num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn relative_age_buckets() {
        assert_eq!(format_relative_age(Duration::seconds(30)), "Just now");
        assert_eq!(format_relative_age(Duration::minutes(5)), "5m ago");
        assert_eq!(format_relative_age(Duration::minutes(90)), "1h ago");
        assert_eq!(format_relative_age(Duration::hours(50)), "2d ago");
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(format_relative_age(Duration::seconds(59)), "Just now");
        assert_eq!(format_relative_age(Duration::minutes(59)), "59m ago");
        assert_eq!(format_relative_age(Duration::minutes(60)), "1h ago");
        assert_eq!(format_relative_age(Duration::hours(23)), "23h ago");
        assert_eq!(format_relative_age(Duration::hours(24)), "1d ago");
    }
}
