// Powerline separators; terminals without a patched font show boxes.
pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const SEP_LEFT: &str = "\u{e0b2}";

pub const DATABASE: &str = "⛁";
pub const CURSOR: &str = "❯";
pub const DOT: &str = "•";

pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[must_use]
pub fn spinner_frame(frame_count: u64) -> &'static str {
    // Usize cast is lossless after the modulo.
    SPINNER[(frame_count % SPINNER.len() as u64) as usize]
}
