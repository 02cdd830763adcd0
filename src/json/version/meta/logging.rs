use serde::{Deserialize, Serialize};

use super::download::IdDownload;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Logging {
    pub client: LoggingInstance,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LoggingInstance {
    /// JVM flag template, e.g. `-Dlog4j.configurationFile=${path}`.
    pub argument: String,
    #[serde(rename = "type")]
    pub logging_type: String,
    pub file: IdDownload,
}

impl LoggingInstance {
    /// The JVM flag with `${path}` pointing at the downloaded config file.
    pub fn jvm_argument(&self, config_path: &str) -> String {
        self.argument.replace("${path}", config_path)
    }
}
