//! Rewriting built documentation pages.
//!
//! Pages are streamed through `lol_html`, so everything outside the touched
//! elements is emitted byte for byte.

use crate::error::{Error, Result};
use crate::fetch::{UdfSource, collect_projects};
use crate::html::Node;
use crate::render::render_section;
use lol_html::html_content::ContentType;
use lol_html::{RewriteStrSettings, element, rewrite_str};
use std::cell::Cell;

const SECTION_SELECTOR: &str = "#udfs";
const BODY_SELECTOR: &str = ".body";
const SOURCE_LINK_SELECTOR: &str = "a.reference.external";

/// Replace the page's `udfs` section with `section`.
///
/// Any element with id `udfs` is dropped, then `section` is appended as the
/// last child of the first `.body` element. Applying this to its own output
/// leaves a single section.
pub fn inject_section(page: &str, section: &Node) -> Result<String> {
    let markup = section.to_string();
    let appended = Cell::new(false);

    let output = rewrite_str(
        page,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!(SECTION_SELECTOR, |el| {
                    el.remove();
                    Ok(())
                }),
                element!(BODY_SELECTOR, |el| {
                    if !appended.get() {
                        el.append(&markup, ContentType::Html);
                        appended.set(true);
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    )?;

    if !appended.get() {
        return Err(Error::MissingBody);
    }
    Ok(output)
}

/// Point every `[source]` link at the notebook viewer on `host`.
///
/// Links become `//{host}/jnr.php?path=/notebooks/lib/{path}` and are forced
/// visible with an inline `display: inline` style.
pub fn rewrite_source_links(page: &str, host: &str, path: &str) -> Result<String> {
    let href = format!("//{}/jnr.php?path=/notebooks/lib/{}", host, path);

    let output = rewrite_str(
        page,
        RewriteStrSettings {
            element_content_handlers: vec![element!(SOURCE_LINK_SELECTOR, |el| {
                let style = match el.get_attribute("style") {
                    Some(existing) if !existing.trim().is_empty() => format!(
                        "{}; display: inline",
                        existing.trim().trim_end_matches(';')
                    ),
                    _ => "display: inline".to_string(),
                };
                el.set_attribute("style", &style)?;
                el.set_attribute("href", &href)?;
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    )?;

    Ok(output)
}

/// Fetch every project and render the `udfs` section.
pub async fn render_udfs<S: UdfSource>(source: &S) -> Result<Node> {
    let entries = collect_projects(source).await?;
    tracing::info!(projects = entries.len(), "Rendering UDF section");
    Ok(render_section(&entries))
}

/// Fetch, render, and inject the `udfs` section into one page.
pub async fn inject_udfs<S: UdfSource>(page: &str, source: &S) -> Result<String> {
    let section = render_udfs(source).await?;
    inject_section(page, &section)
}
