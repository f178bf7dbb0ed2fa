//! Small shapes shared by several endpoints

use serde::{Deserialize, Serialize};

/// Identifier of a resource created by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Id of the created resource
    pub id: String,
}

/// Version information returned by the API root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiInfo {
    /// API version
    #[serde(default)]
    pub version: String,

    /// API name
    #[serde(default)]
    pub name: String,
}
