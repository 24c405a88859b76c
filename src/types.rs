//! Wire types returned by the functions API.

use serde::Deserialize;
use std::fmt;

/// Identifier of a project. The API sends either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawId")]
pub struct ProjectId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

impl From<RawId> for ProjectId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Str(s) => Self(s),
        }
    }
}

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for ProjectId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

/// A namespace of UDFs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(default)]
    pub module_name: Option<String>,
}

/// A user-defined function as documented by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Udf {
    pub name: String,
    #[serde(default)]
    pub module_name: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Positional order of the signature.
    #[serde(default)]
    pub ordered_function_params: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub description: String,
}

/// Response envelope shared by every API endpoint: `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Vec<T>,
}

/// A project together with its non-empty list of UDFs, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUdfs {
    pub project: Project,
    pub udfs: Vec<Udf>,
}
