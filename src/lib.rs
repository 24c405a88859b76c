pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod html;
pub mod logging;
pub mod page;
pub mod render;
pub mod site;
pub mod types;

pub use error::{Error, Result};
pub use fetch::{HttpSource, UdfSource, collect_projects};
pub use page::{inject_section, inject_udfs, render_udfs, rewrite_source_links};
pub use types::{Parameter, Project, ProjectId, ProjectUdfs, Udf};
