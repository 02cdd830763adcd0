use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JavaVersion {
    /// Runtime component name, e.g. `java-runtime-gamma` or `jre-legacy`.
    pub component: String,
    pub major_version: u32,
}
