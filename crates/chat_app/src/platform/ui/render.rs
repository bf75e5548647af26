use std::io::{self, Write};

use chat_core::{
    Author, AvatarAnimator, ChatViewModel, MessageId, MessageView, Playback, ResourceLink,
    SPARK_SWEEP, SPINNER_FADE_OUT, SPINNER_LOOP,
};
use chrono::Local;
use colored::Colorize;

use super::constants::*;

/// Appends completed rows to the terminal transcript and runs the
/// loading ticker. Rows are identified by their monotonically
/// increasing message id, so re-rendering the whole view model never
/// reprints anything.
pub struct TranscriptPrinter {
    last_printed: MessageId,
    animator: AvatarAnimator,
    ticker_active: bool,
    settle_pending: bool,
    frame: usize,
}

impl TranscriptPrinter {
    pub fn new() -> Self {
        Self {
            last_printed: 0,
            animator: AvatarAnimator::default(),
            ticker_active: false,
            settle_pending: false,
            frame: 0,
        }
    }

    /// Applies a fresh view model: maps avatar playback onto ticker
    /// state, then appends any newly completed messages.
    pub fn render(&mut self, view: &ChatViewModel) {
        for playback in self.animator.observe(view.loading) {
            self.apply(playback);
        }
        self.print_new_messages(view);
    }

    /// Advances the ticker one frame. Call on a timer while loading.
    pub fn tick(&mut self, view: &ChatViewModel) {
        if !self.ticker_active {
            return;
        }
        let line = ticker_line(&view.current_stage, self.frame);
        self.frame = self.frame.wrapping_add(1);
        print!("\r{}", line.dimmed());
        let _ = io::stdout().flush();
    }

    fn apply(&mut self, playback: Playback) {
        if playback.segment == SPINNER_LOOP && playback.looped {
            self.ticker_active = true;
            self.frame = 0;
        } else if playback.segment == SPINNER_FADE_OUT {
            if self.ticker_active {
                clear_ticker_line();
                self.ticker_active = false;
            }
        } else if playback.segment == SPARK_SWEEP {
            self.settle_pending = true;
        }
        // The spark intro and hold layer on top of the spinner on a
        // real canvas; a character terminal has nowhere to put them.
    }

    fn print_new_messages(&mut self, view: &ChatViewModel) {
        for message in &view.messages {
            if message.id <= self.last_printed {
                continue;
            }
            if message.pending {
                // The placeholder keeps its id when the reply lands,
                // so the watermark stays below it until then.
                break;
            }
            self.last_printed = message.id;
            if message.author == Author::Assistant {
                self.print_reply(message);
            }
            // User rows were already echoed at the prompt.
        }
    }

    fn print_reply(&mut self, message: &MessageView) {
        let marker = if self.settle_pending {
            self.settle_pending = false;
            format!("{} ", SETTLE_GLYPH.yellow())
        } else {
            String::new()
        };
        println!();
        println!("{marker}{}", ASSISTANT_NAME.cyan().bold());
        for line in message.content.lines() {
            println!("  {line}");
        }
        if let Some(resource) = message.resource {
            print_resource_card(&resource);
        }
        println!();
    }
}

fn print_resource_card(resource: &ResourceLink) {
    let date = Local::now().format("%b %e, %Y");
    println!();
    println!("  ┌{}", "─".repeat(RULE_WIDTH / 2));
    println!("  │ {} {}", SETTLE_GLYPH, resource.label.bold());
    println!("  │ {}", format!("{date} · {}", resource.url).dimmed());
    println!("  └{}", "─".repeat(RULE_WIDTH / 2));
}

fn ticker_line(stage: &str, frame: usize) -> String {
    let glyph = SPINNER_GLYPHS[frame % SPINNER_GLYPHS.len()];
    let label = if stage.is_empty() {
        FALLBACK_STAGE
    } else {
        stage
    };
    format!("{glyph} {label:<width$}", width = TICKER_WIDTH)
}

fn clear_ticker_line() {
    print!("\r{:width$}\r", "", width = TICKER_WIDTH + 2);
    let _ = io::stdout().flush();
}
