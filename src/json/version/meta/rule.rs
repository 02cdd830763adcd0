use serde::{Deserialize, Serialize};

/// A conditional `allow`/`disallow` entry attached to libraries and arguments.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<Os>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Features>,
}

/// Operating system condition. An absent field matches anything.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Os {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Regular expression searched in the live OS version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Regular expression matched against the whole live architecture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
}

/// Launcher feature condition. An absent field matches anything.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Features {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_demo_user: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_custom_resolution: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_quick_plays_support: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_quick_play_singleplayer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_quick_play_multiplayer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_quick_play_realms: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Allow,
    Disallow,
}

impl Rule {
    /// The parsed action. Anything that is not `allow` is treated as `disallow`.
    pub fn action(&self) -> Action {
        if self.action == "allow" {
            Action::Allow
        } else {
            Action::Disallow
        }
    }
}
