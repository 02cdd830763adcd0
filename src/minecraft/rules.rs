use log::{trace, warn};
use regex::Regex;

use crate::json::version::meta::{
    arguments::Argument,
    library::Library,
    rule::{Action, Features, Os, Rule},
};

use super::{TARGET_ARCH, TARGET_OS};

/// The platform and launcher state rules are evaluated against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    /// Launcher OS name: `windows`, `osx` or `linux`.
    pub os_name: String,
    pub os_version: String,
    pub os_arch: String,
    pub features: FeatureSet,
}

/// Launcher feature flags, all off by default.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FeatureSet {
    pub is_demo_user: bool,
    pub has_custom_resolution: bool,
    pub has_quick_plays_support: bool,
    pub is_quick_play_singleplayer: bool,
    pub is_quick_play_multiplayer: bool,
    pub is_quick_play_realms: bool,
}

impl Environment {
    pub fn new(
        os_name: impl Into<String>,
        os_version: impl Into<String>,
        os_arch: impl Into<String>,
    ) -> Self {
        Self {
            os_name: os_name.into(),
            os_version: os_version.into(),
            os_arch: os_arch.into(),
            features: FeatureSet::default(),
        }
    }

    /// The machine this process runs on, with every feature off.
    pub fn current() -> Self {
        Self::new(
            TARGET_OS,
            sysinfo::System::os_version().unwrap_or_default(),
            TARGET_ARCH,
        )
    }

    pub fn with_features(mut self, features: FeatureSet) -> Self {
        self.features = features;
        self
    }

    /// Word size substituted for `${arch}` in native classifiers.
    pub fn native_arch(&self) -> &'static str {
        if self.os_arch.contains("64") {
            "64"
        } else {
            "32"
        }
    }
}

impl Rule {
    /// Whether every condition present on this rule holds in `env`.
    pub fn matches(&self, env: &Environment) -> bool {
        let os = self.os.as_ref().map_or(true, |os| os.matches(env));
        let features = self
            .features
            .as_ref()
            .map_or(true, |features| features.matches(&env.features));
        os && features
    }
}

impl Os {
    pub fn matches(&self, env: &Environment) -> bool {
        if let Some(name) = &self.name {
            if name != &env.os_name {
                return false;
            }
        }
        if let Some(version) = &self.version {
            if !pattern_matches(version, &env.os_version, false) {
                return false;
            }
        }
        if let Some(arch) = &self.arch {
            if !pattern_matches(arch, &env.os_arch, true) {
                return false;
            }
        }
        true
    }
}

impl Features {
    pub fn matches(&self, flags: &FeatureSet) -> bool {
        let wanted = [
            (self.is_demo_user, flags.is_demo_user),
            (self.has_custom_resolution, flags.has_custom_resolution),
            (self.has_quick_plays_support, flags.has_quick_plays_support),
            (self.is_quick_play_singleplayer, flags.is_quick_play_singleplayer),
            (self.is_quick_play_multiplayer, flags.is_quick_play_multiplayer),
            (self.is_quick_play_realms, flags.is_quick_play_realms),
        ];
        wanted
            .iter()
            .all(|(condition, actual)| condition.map_or(true, |c| c == *actual))
    }
}

fn pattern_matches(pattern: &str, value: &str, whole: bool) -> bool {
    let compiled = if whole {
        Regex::new(&format!("^(?:{pattern})$"))
    } else {
        Regex::new(pattern)
    };

    match compiled {
        Ok(re) => re.is_match(value),
        Err(e) => {
            warn!("Ignoring rule with invalid pattern {:?}: {}", pattern, e);
            false
        }
    }
}

pub trait ParseRule {
    /// Folds the rules over `env`.
    ///
    /// No rules means allowed. Otherwise the state starts at disallowed and
    /// every matching rule overwrites it with its own action, so the last
    /// matching rule wins.
    fn is_allowed(&self, env: &Environment) -> bool;
}

impl ParseRule for [Rule] {
    fn is_allowed(&self, env: &Environment) -> bool {
        if self.is_empty() {
            return true;
        }

        let mut allowed = false;
        for rule in self {
            if rule.matches(env) {
                allowed = rule.action() == Action::Allow;
                trace!("Rule {:?} matched, allowed = {}", rule, allowed);
            }
        }
        allowed
    }
}

impl ParseRule for Library {
    fn is_allowed(&self, env: &Environment) -> bool {
        self.rules.is_allowed(env)
    }
}

impl ParseRule for Argument {
    fn is_allowed(&self, env: &Environment) -> bool {
        self.rules.is_allowed(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rule(value: serde_json::Value) -> Rule {
        serde_json::from_value(value).unwrap()
    }

    fn windows() -> Environment {
        Environment::new("windows", "10.0", "x86_64")
    }

    fn osx() -> Environment {
        Environment::new("osx", "10.5.8", "x86_64")
    }

    #[test]
    fn unconditional_rule_matches_everything() {
        let rule = rule(json!({ "action": "allow" }));
        assert!(rule.matches(&windows()));
        assert!(rule.matches(&osx()));
        assert!(rule.matches(&Environment::new("linux", "", "aarch64")));
    }

    #[test]
    fn os_name_must_be_equal() {
        let rule = rule(json!({ "action": "allow", "os": { "name": "osx" } }));
        assert!(rule.matches(&osx()));
        assert!(!rule.matches(&windows()));
    }

    #[test]
    fn os_version_is_a_pattern() {
        let rule = rule(json!({ "action": "disallow", "os": { "name": "osx", "version": "^10\\.5\\.\\d$" } }));
        assert!(rule.matches(&osx()));
        assert!(!rule.matches(&Environment::new("osx", "10.15.7", "x86_64")));
    }

    #[test]
    fn os_arch_must_match_whole_value() {
        let rule = rule(json!({ "action": "allow", "os": { "arch": "x86" } }));
        assert!(rule.matches(&Environment::new("windows", "10.0", "x86")));
        assert!(!rule.matches(&windows()));
    }

    #[test]
    fn invalid_pattern_never_matches() {
        let rule = rule(json!({ "action": "allow", "os": { "version": "(" } }));
        assert!(!rule.matches(&windows()));
    }

    #[test]
    fn features_compare_with_environment_flags() {
        let rule = rule(json!({ "action": "allow", "features": { "has_custom_resolution": true } }));
        assert!(!rule.matches(&windows()));

        let env = windows().with_features(FeatureSet {
            has_custom_resolution: true,
            ..FeatureSet::default()
        });
        assert!(rule.matches(&env));
    }

    #[test]
    fn no_rules_allow() {
        let rules: Vec<Rule> = Vec::new();
        assert!(rules.is_allowed(&windows()));
    }

    #[test]
    fn rules_start_disallowed() {
        let rules = vec![rule(json!({ "action": "allow", "os": { "name": "osx" } }))];
        assert!(rules.is_allowed(&osx()));
        assert!(!rules.is_allowed(&windows()));
    }

    #[test]
    fn last_matching_rule_wins() {
        let rules = vec![
            rule(json!({ "action": "allow" })),
            rule(json!({ "action": "disallow", "os": { "name": "osx" } })),
        ];
        assert!(rules.is_allowed(&windows()));
        assert!(!rules.is_allowed(&osx()));

        let reallowed = vec![
            rule(json!({ "action": "disallow", "os": { "name": "osx" } })),
            rule(json!({ "action": "allow" })),
        ];
        assert!(reallowed.is_allowed(&osx()));
    }

    #[test]
    fn native_arch_follows_word_size() {
        assert_eq!(windows().native_arch(), "64");
        assert_eq!(Environment::new("windows", "10.0", "x86").native_arch(), "32");
    }

    #[test]
    fn current_environment_uses_target_constants() {
        let env = Environment::current();
        assert_eq!(env.os_name, TARGET_OS);
        assert_eq!(env.os_arch, TARGET_ARCH);
        assert_eq!(env.features, FeatureSet::default());
    }
}
