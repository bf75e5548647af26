//! Build orchestration: audit every page, write it atomically, then record
//! the manifest describing what was published.

use std::path::{Path, PathBuf};

use serde_json::json;
use sha2::{Digest, Sha256};
use site_logging::{site_debug, site_info};

use crate::links::{audit_document, AuditError};
use crate::persist::{AtomicDirWriter, PersistError};
use crate::types::SitePage;

const MANIFEST_FILENAME: &str = "manifest.json";

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("page {page}: {source}")]
    Audit {
        page: String,
        #[source]
        source: AuditError,
    },
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// One published page as the manifest records it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub slug: String,
    pub filename: String,
    pub bytes: u64,
    pub checksum: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub page_count: usize,
    pub total_bytes: u64,
    pub pages: Vec<PageRecord>,
    pub manifest_path: PathBuf,
}

/// Audits and writes every page into `output_dir`, then the manifest.
///
/// The audit runs before anything is written: a single bad link fails the
/// whole build and leaves the output directory untouched.
pub fn build_site(pages: &[SitePage], output_dir: &Path) -> Result<BuildSummary, BuildError> {
    for page in pages {
        let summary = audit_document(&page.document).map_err(|source| BuildError::Audit {
            page: page.slug.clone(),
            source,
        })?;
        site_debug!(
            "page {} audited: {} anchors ({} fragments, {} external)",
            page.slug,
            summary.anchors,
            summary.fragments,
            summary.external
        );
    }

    let writer = AtomicDirWriter::new(output_dir);
    site_info!(
        "publishing {} pages into {}",
        pages.len(),
        writer.dir().display()
    );
    let mut records = Vec::with_capacity(pages.len());
    let mut total_bytes: u64 = 0;
    for page in pages {
        let written = writer.write(&page.filename(), page.document.as_bytes())?;
        site_info!("wrote {} ({} bytes)", written.path.display(), written.bytes);
        total_bytes += written.bytes;
        records.push(PageRecord {
            slug: page.slug.clone(),
            filename: page.filename(),
            bytes: written.bytes,
            checksum: short_hash(&page.document),
        });
    }

    let manifest = json!({
        "page_count": records.len(),
        "total_bytes": total_bytes,
        "pages": records.iter().map(|record| {
            json!({
                "slug": record.slug,
                "filename": record.filename,
                "bytes": record.bytes,
                "checksum": record.checksum,
            })
        }).collect::<Vec<_>>()
    });
    let manifest_file = writer.write(MANIFEST_FILENAME, manifest.to_string().as_bytes())?;

    Ok(BuildSummary {
        page_count: records.len(),
        total_bytes,
        pages: records,
        manifest_path: manifest_file.path,
    })
}

fn short_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
