//! Fetching projects and their UDFs from the functions API.
//!
//! Projects are processed strictly one at a time: the function list for a
//! project is awaited before the next request is issued. A project whose
//! function list fails to load, or comes back empty, is skipped.

mod http;

pub use http::HttpSource;

use crate::error::Result;
use crate::types::{Project, ProjectId, ProjectUdfs, Udf};

/// Port the documentation server is usually reached on.
pub const DEFAULT_DOCS_PORT: u16 = 8008;

/// Port the functions API listens on next to it.
pub const DEFAULT_API_PORT: u16 = 9000;

/// Port substitution used to derive the API origin from a page origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRule {
    pub docs_port: u16,
    pub api_port: u16,
}

impl Default for PortRule {
    fn default() -> Self {
        Self {
            docs_port: DEFAULT_DOCS_PORT,
            api_port: DEFAULT_API_PORT,
        }
    }
}

/// Derive the API origin from the origin the documentation is served from.
///
/// Only the first `:{docs_port}` is replaced; an origin without it is
/// returned as-is.
pub fn api_origin(page_origin: &str, rule: PortRule) -> String {
    let from = format!(":{}", rule.docs_port);
    let to = format!(":{}", rule.api_port);
    page_origin
        .trim_end_matches('/')
        .replacen(&from, &to, 1)
}

/// Somewhere projects and their UDFs can be read from.
#[allow(async_fn_in_trait)]
pub trait UdfSource {
    /// List every project, in API order.
    async fn projects(&self) -> Result<Vec<Project>>;

    /// List the UDFs of one project, in API order.
    async fn functions(&self, project: &ProjectId) -> Result<Vec<Udf>>;
}

/// Collect every project that has at least one UDF.
///
/// A failure listing projects aborts the whole run. A failure listing one
/// project's functions only drops that project.
pub async fn collect_projects<S: UdfSource>(source: &S) -> Result<Vec<ProjectUdfs>> {
    let projects = source.projects().await?;
    tracing::debug!(count = projects.len(), "Fetched project list");

    let mut collected = Vec::with_capacity(projects.len());
    for project in projects {
        let udfs = match source.functions(&project.id).await {
            Ok(udfs) => udfs,
            Err(e) => {
                tracing::warn!(project = %project.id, "Skipping project: {}", e);
                continue;
            }
        };

        if udfs.is_empty() {
            tracing::debug!(project = %project.id, "Skipping project without UDFs");
            continue;
        }

        tracing::debug!(project = %project.id, udfs = udfs.len(), "Fetched UDFs");
        collected.push(ProjectUdfs { project, udfs });
    }

    Ok(collected)
}
