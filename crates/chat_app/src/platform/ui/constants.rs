pub const ASSISTANT_NAME: &str = "Aurora";
pub const MODEL_LABEL: &str = "Flash";
pub const BANNER_TEXT: &str = "Meet Aurora Pro. Our most capable model is now available to try.";
pub const WELCOME_GREETING: &str = "Hello, Daniel";
pub const DISCLAIMER: &str = "Aurora can make mistakes, so double-check it.";

pub const PROMPT: &str = "› ";

/// Shown in the ticker when no stage has been announced yet.
pub const FALLBACK_STAGE: &str = "Just a sec";

pub const SPINNER_GLYPHS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const SETTLE_GLYPH: &str = "✦";

pub const RULE_WIDTH: usize = 64;

/// Width the ticker line is padded to so a shorter stage name
/// overwrites a longer one cleanly.
pub const TICKER_WIDTH: usize = 48;
