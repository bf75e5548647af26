use chat_core::ChatViewModel;
use colored::Colorize;

use super::constants::*;

/// Prints the static chrome once at startup. Everything below it is
/// appended by the transcript renderer as the conversation advances.
pub fn print_chrome(view: &ChatViewModel) {
    println!();
    println!("{}", rule());
    println!("  {}  {}", ASSISTANT_NAME.bold(), MODEL_LABEL.dimmed());
    println!("{}", rule());
    println!("  {}", BANNER_TEXT.italic());
    if view.welcome_visible {
        println!();
        println!("  {}", WELCOME_GREETING.cyan().bold());
    }
    println!();
    println!("  {}", DISCLAIMER.dimmed());
    println!();
}

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}
