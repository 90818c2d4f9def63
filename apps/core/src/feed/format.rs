/// Relative age of a post, as shown on its card.
///
/// Both arguments are milliseconds since the epoch. Future timestamps read as `ahora`.
pub fn time_ago(created_at: i64, now: i64) -> String {
    let seconds = (now - created_at).max(0) / 1000;
    if seconds < 60 {
        return "ahora".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("hace {}m", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("hace {}h", hours);
    }
    format!("hace {}d", hours / 24)
}
