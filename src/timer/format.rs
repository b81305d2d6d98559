//! Text shown on the label for a given remaining time

/// Format remaining seconds as `m:ss`. Minutes are never padded.
pub fn format_countdown(timer: u32) -> String {
    let minutes = timer / 60;
    let seconds = timer % 60;
    format!("{}:{:02}", minutes, seconds)
}
