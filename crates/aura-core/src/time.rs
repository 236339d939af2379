use jiff::Timestamp;

/// Coarse "how long ago" label for dashboard lists.
///
/// Uses the largest whole unit that fits: days, then hours, then minutes.
/// Anything under a minute (or in the future) is "Just now".
pub fn time_ago(then: Timestamp, now: Timestamp) -> String {
    let elapsed = now.as_second() - then.as_second();
    let minutes = elapsed.div_euclid(60);
    let hours = elapsed.div_euclid(3_600);
    let days = elapsed.div_euclid(86_400);

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if minutes > 0 {
        format!("{minutes}m ago")
    } else {
        "Just now".to_string()
    }
}
