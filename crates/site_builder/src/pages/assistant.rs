//! The assistant demo's presentational shell: the chrome the interactive
//! front end draws around the conversation, rendered as an inert page.

use maud::html;
use site_engine::SitePage;

use crate::content;

pub fn page() -> SitePage {
    SitePage::with_slug(
        "index",
        content::ASSISTANT_NAME,
        html! {
            div class="shell" {
                aside class="sidebar" {
                    @for &(glyph, label) in content::SIDEBAR_ENTRIES {
                        div class="entry" title=(label) { (glyph) }
                    }
                }
                div class="chat-main" {
                    header class="chat-header" {
                        span class="model" { (content::ASSISTANT_NAME) }
                        span { (content::MODEL_LABEL) }
                    }
                    div class="notice" { (content::BANNER_TEXT) }
                    div class="welcome" {
                        span class="greeting" { (content::WELCOME_GREETING) }
                    }
                    div class="chat-input" { (content::INPUT_PLACEHOLDER) }
                    p class="disclaimer" { (content::DISCLAIMER) }
                }
            }
        },
    )
}
