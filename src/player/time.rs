//! Time label formatting.

/// Format a position in seconds as `MM:SS`.
///
/// Non-finite input (NaN, unknown or infinite duration) formats as `00:00`,
/// negative input clamps to zero, and fractions are truncated. There is no
/// hour field: minutes keep counting past 59.
///
/// # Examples
///
/// ```
/// use vidctl::format_time;
///
/// assert_eq!(format_time(65.0), "01:05");
/// assert_eq!(format_time(f64::NAN), "00:00");
/// assert_eq!(format_time(3661.0), "61:01");
/// ```
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "00:00".to_string();
    }
    let total_secs = seconds.max(0.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Whole seconds as written into range inputs (`max`, `value`).
pub(crate) fn whole_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "0".to_string();
    }
    (seconds.max(0.0).floor() as u64).to_string()
}
