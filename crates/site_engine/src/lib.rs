//! Site engine: page assembly, link auditing and output mechanisms.
mod build;
mod html;
mod links;
mod persist;
mod slug;
mod types;

pub use build::{build_site, BuildError, BuildSummary, PageRecord};
pub use html::{layout, render_document};
pub use links::{audit_document, extract_links, AuditError, AuditSummary, ExtractedLink, LinkKind};
pub use persist::{ensure_output_dir, AtomicDirWriter, PersistError, WrittenFile};
pub use slug::page_slug;
pub use types::SitePage;
