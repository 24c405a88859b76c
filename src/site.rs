//! Injecting the UDF section across a built documentation tree.

use crate::error::{Error, Result};
use crate::html::Node;
use crate::page::inject_section;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Pages whose site-relative path contains this marker receive the UDF section.
pub const FUNCTIONS_PAGE_MARKER: &str = "functions.html";

/// Outcome of a site-wide injection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub updated: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Find every functions page under `root`, sorted by path.
///
/// Build output is usually gitignored, so ignore files are not honoured.
pub async fn find_function_pages(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::io(
            root,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let root = root.to_path_buf();
    let pages = tokio::task::spawn_blocking(move || {
        let mut pages: Vec<_> = WalkBuilder::new(&root)
            .standard_filters(false)
            .build()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_some_and(|t| t.is_file()))
            .map(ignore::DirEntry::into_path)
            .filter(|p| is_function_page(&root, p))
            .collect();
        pages.sort();
        pages
    })
    .await
    .map_err(|e| Error::io("<walker>", std::io::Error::other(e)))?;

    Ok(pages)
}

fn is_function_page(root: &Path, page: &Path) -> bool {
    page.strip_prefix(root)
        .is_ok_and(|rel| rel.to_string_lossy().contains(FUNCTIONS_PAGE_MARKER))
}

/// Inject `section` into one page file, writing the result to `output`.
pub async fn inject_file(input: &Path, output: &Path, section: &Node) -> Result<()> {
    let page = tokio::fs::read_to_string(input)
        .await
        .map_err(|e| Error::io(input, e))?;
    let rewritten = inject_section(&page, section)?;
    tokio::fs::write(output, rewritten)
        .await
        .map_err(|e| Error::io(output, e))
}

/// Inject `section` in place into every functions page under `root`.
///
/// A page that cannot be rewritten is logged and counted; the walk carries on.
pub async fn inject_site(root: &Path, section: &Node) -> Result<SiteReport> {
    let mut report = SiteReport::default();

    for page in find_function_pages(root).await? {
        match inject_file(&page, &page, section).await {
            Ok(()) => {
                tracing::info!(page = %page.display(), "Injected UDF section");
                report.updated.push(page);
            }
            Err(e) => {
                tracing::error!(page = %page.display(), "UDFs: {}", e);
                report.failed.push(page);
            }
        }
    }

    Ok(report)
}
