//! Display formatting for distances and durations.

/// Formats a distance in meters for instruction text.
///
/// Under 1 m renders whole centimeters, under 100 m renders meters with one
/// decimal, and anything longer renders whole meters.
///
/// ```
/// use wayfinder_server::instructions::format_distance;
///
/// assert_eq!(format_distance(0.45), "45 cm");
/// assert_eq!(format_distance(5.0), "5.0 m");
/// assert_eq!(format_distance(123.4), "123 m");
/// ```
pub fn format_distance(meters: f64) -> String {
    if meters < 1.0 {
        format!("{:.0} cm", meters * 100.0)
    } else if meters < 100.0 {
        format!("{:.1} m", meters)
    } else {
        format!("{:.0} m", meters)
    }
}

/// Formats a duration in seconds: whole seconds under a minute, otherwise
/// minutes rounded up.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{:.0} s", seconds)
    } else {
        format!("{} min", (seconds / 60.0).ceil() as u64)
    }
}
