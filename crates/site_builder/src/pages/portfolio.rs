//! The academic portfolio page. One long scroll: hero, about, research
//! areas, projects, publications, contact, footer. The header navigation
//! links to section ids on the same page; everything else links out.

use maud::html;
use site_engine::SitePage;

use crate::content::{PROFILE, PROJECTS, PUBLICATIONS, RESEARCH_AREAS};

pub fn page(build_year: i32) -> SitePage {
    SitePage::new(
        PROFILE.name,
        html! {
            header class="site-header" {
                span { (PROFILE.name) }
                nav class="site-nav" {
                    a href="#about" { "About" }
                    a href="#research" { "Research" }
                    a href="#projects" { "Projects" }
                    a href="#publications" { "Publications" }
                    a href="#contact" { "Contact" }
                }
            }
            section class="hero" {
                div {
                    h1 { (PROFILE.name) }
                    p { (PROFILE.title_line) }
                    p class="tagline" { (PROFILE.tagline) }
                    p {
                        a class="button" href="#contact" { "Get in touch" }
                        a class="button secondary" href="#publications" { "View publications" }
                    }
                }
                div class="hero-portrait" { "👩‍🏫" }
            }
            section class="section" id="about" {
                h2 { "About" }
                @for paragraph in PROFILE.about {
                    p { (paragraph) }
                }
            }
            section class="section" id="research" {
                h2 { "Research areas" }
                div class="cards" {
                    @for area in RESEARCH_AREAS {
                        div class="card" {
                            div class="glyph" { (area.glyph) }
                            h3 { (area.title) }
                            p { (area.description) }
                        }
                    }
                }
            }
            section class="section" id="projects" {
                h2 { "Projects" }
                div class="cards" {
                    @for project in PROJECTS {
                        div class="card" {
                            h3 { (project.title) }
                            p { (project.description) }
                            div {
                                @for tag in project.tags {
                                    span class="tag" { (tag) }
                                }
                            }
                        }
                    }
                }
            }
            section class="section" id="publications" {
                h2 { "Selected publications" }
                @for publication in PUBLICATIONS {
                    div class="publication" {
                        h3 { (publication.title) }
                        p class="venue" {
                            (publication.venue) " · " (publication.year)
                            " · " (publication.citations) " citations"
                        }
                    }
                }
                a href=(PROFILE.publication_index_url) { "View all publications" }
            }
            section class="section" id="contact" {
                h2 { "Contact" }
                p {
                    "Interested in collaboration or graduate supervision? Reach \
                     out directly or subscribe for group updates."
                }
                div class="newsletter" {
                    input type="email" placeholder="you@example.com" aria-label="Email address";
                    span class="button" { "Subscribe" }
                }
                p {
                    a href=(format!("mailto:{}", PROFILE.email)) { (PROFILE.email) }
                    " · " (PROFILE.office)
                }
            }
            footer class="site-footer" {
                p {
                    "© " (build_year) " " (PROFILE.name) " · "
                    a href=(PROFILE.university_url) { (PROFILE.university) }
                }
            }
        },
    )
}
