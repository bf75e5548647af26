//! Shared document shell for every generated page.

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Single embedded stylesheet so the output needs no asset pipeline.
const STYLESHEET: &str = "\
:root { --ink: #1f1f1f; --muted: #5f6368; --accent: #0b57d0; --paper: #ffffff; --wash: #f0f4f9; }
* { box-sizing: border-box; }
body { margin: 0; color: var(--ink); background: var(--paper); font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; line-height: 1.6; }
a { color: var(--accent); text-decoration: none; }
a:hover { text-decoration: underline; }
.site-header { position: sticky; top: 0; background: var(--paper); border-bottom: 1px solid #e0e3e7; padding: 0.75rem 1.5rem; display: flex; justify-content: space-between; align-items: center; }
.site-nav a { margin-left: 1.25rem; color: var(--muted); }
.hero { display: flex; gap: 2rem; align-items: center; padding: 4rem 1.5rem; max-width: 960px; margin: 0 auto; }
.hero h1 { font-size: 2.4rem; margin: 0 0 0.5rem; }
.hero .tagline { color: var(--muted); max-width: 32rem; }
.hero-portrait { width: 180px; height: 180px; border-radius: 50%; background: var(--wash); display: flex; align-items: center; justify-content: center; font-size: 3rem; }
.button { display: inline-block; background: var(--accent); color: #fff; border-radius: 999px; padding: 0.6rem 1.4rem; margin-right: 0.75rem; }
.button.secondary { background: var(--wash); color: var(--accent); }
.section { max-width: 960px; margin: 0 auto; padding: 3rem 1.5rem; }
.section h2 { font-size: 1.6rem; margin-bottom: 1.5rem; }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.25rem; }
.card { background: var(--wash); border-radius: 12px; padding: 1.25rem; }
.card .glyph { font-size: 1.8rem; }
.card h3 { margin: 0.5rem 0; font-size: 1.1rem; }
.card p { color: var(--muted); margin: 0; }
.tag { display: inline-block; background: var(--paper); border: 1px solid #dadce0; border-radius: 999px; padding: 0.1rem 0.7rem; margin: 0.5rem 0.35rem 0 0; font-size: 0.8rem; color: var(--muted); }
.publication { border-left: 3px solid var(--accent); padding-left: 1rem; margin-bottom: 1.5rem; }
.publication .venue { color: var(--muted); font-size: 0.9rem; }
.newsletter { display: flex; gap: 0.75rem; margin-top: 1rem; }
.newsletter input { flex: 1; border: 1px solid #dadce0; border-radius: 8px; padding: 0.6rem 0.9rem; }
.site-footer { border-top: 1px solid #e0e3e7; color: var(--muted); text-align: center; padding: 1.5rem; margin-top: 3rem; }
.shell { display: flex; min-height: 100vh; background: var(--wash); }
.sidebar { width: 72px; background: var(--paper); border-right: 1px solid #e0e3e7; padding: 1rem 0.5rem; text-align: center; }
.sidebar .entry { margin-bottom: 1.25rem; color: var(--muted); font-size: 1.2rem; }
.chat-main { flex: 1; display: flex; flex-direction: column; max-width: 840px; margin: 0 auto; padding: 0 1.5rem; }
.chat-header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 0; color: var(--muted); }
.chat-header .model { font-weight: 600; color: var(--ink); }
.notice { background: #fef7e0; border: 1px solid #f9dd9b; border-radius: 8px; padding: 0.75rem 1rem; margin-bottom: 1rem; }
.welcome { flex: 1; display: flex; align-items: center; justify-content: center; font-size: 2rem; }
.welcome .greeting { background: linear-gradient(90deg, #4285f4, #9b72cb, #d96570); -webkit-background-clip: text; background-clip: text; color: transparent; }
.chat-input { background: var(--paper); border: 1px solid #dadce0; border-radius: 999px; padding: 0.9rem 1.4rem; color: var(--muted); margin-bottom: 0.5rem; }
.disclaimer { text-align: center; color: var(--muted); font-size: 0.8rem; padding-bottom: 1rem; }
";

/// Wraps page content in the common document chrome.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders a page body into a complete HTML document string.
pub fn render_document(title: &str, content: Markup) -> String {
    layout(title, content).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_doctype_title_and_content() {
        let doc = render_document("Hello Page", html! { p { "body text" } });

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Hello Page</title>"));
        assert!(doc.contains("<p>body text</p>"));
        assert!(doc.contains("<style>"));
    }

    #[test]
    fn titles_are_escaped() {
        let doc = render_document("A < B & C", html! {});

        assert!(doc.contains("<title>A &lt; B &amp; C</title>"));
    }
}
