//! Game clock formatting for live feeds

/// Converts an ISO-8601 clock such as `PT11M32.00S` into `11:32`.
///
/// Values in any other shape are returned unchanged.
pub fn format_game_clock(raw: &str) -> String {
    parse_iso_clock(raw).unwrap_or_else(|| raw.to_string())
}

fn parse_iso_clock(raw: &str) -> Option<String> {
    let rest = raw.strip_prefix("PT")?;
    let (minutes, rest) = rest.split_once('M')?;
    let seconds = rest.strip_suffix('S')?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: f64 = seconds.parse().ok()?;
    if !(0.0..60.0).contains(&seconds) {
        return None;
    }
    Some(format!("{minutes}:{:02}", seconds.floor() as u32))
}
