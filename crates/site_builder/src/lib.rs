//! Content of the two published pages and their assembly order.
pub mod content;
pub mod pages;

use site_engine::SitePage;

/// All pages of the site, in publish order.
pub fn site_pages(build_year: i32) -> Vec<SitePage> {
    vec![pages::assistant::page(), pages::portfolio::page(build_year)]
}
