//! Provisioning configuration domain models.

use std::collections::HashSet;
use std::path::{Component, Path};

use serde::Deserialize;

use crate::domain::AppError;

/// Configuration for one provisioning run.
///
/// Every field has a compiled-in default reproducing the Arquisoft `wichat_0` roster,
/// so an empty TOML document (or no document at all) yields a runnable configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvisionConfig {
    /// Template repository in `owner/name` form.
    #[serde(default = "default_template")]
    pub template: String,
    /// Organization that receives the forks.
    #[serde(default = "default_organization")]
    pub organization: String,
    /// Literal replaced by the target name in allow-listed files.
    #[serde(default = "default_template_name")]
    pub template_name: String,
    /// Commit message used when pushing the rewritten files.
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
    /// Fixed wait after a fork before the repository is referenced again.
    #[serde(default = "default_settle_delay_secs")]
    pub settle_delay_secs: u64,
    /// Keep the working copy on disk when the push fails.
    #[serde(default)]
    pub preserve_on_push_failure: bool,
    /// Ordered list of repository names to create.
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,
    /// Relative paths eligible for substitution.
    #[serde(default = "default_rewrite_files")]
    pub rewrite_files: Vec<String>,
    /// Visibility polling after a fork.
    #[serde(default)]
    pub provisioning: ProvisioningPoll,
}

/// Bounded polling for a freshly forked repository.
///
/// With `poll_attempts = 0` the pipeline falls back to the fixed settle delay.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvisioningPoll {
    #[serde(default)]
    pub poll_attempts: u32,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for ProvisioningPoll {
    fn default() -> Self {
        Self { poll_attempts: 0, poll_interval_secs: default_poll_interval_secs() }
    }
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            organization: default_organization(),
            template_name: default_template_name(),
            commit_message: default_commit_message(),
            settle_delay_secs: default_settle_delay_secs(),
            preserve_on_push_failure: false,
            targets: default_targets(),
            rewrite_files: default_rewrite_files(),
            provisioning: ProvisioningPoll::default(),
        }
    }
}

impl ProvisionConfig {
    /// Parse a TOML document, filling omitted fields with the compiled-in defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let config: ProvisionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce sane repository or directory names.
    pub fn validate(&self) -> Result<(), AppError> {
        let well_formed = matches!(
            self.template.split_once('/'),
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
        );
        if !well_formed {
            return Err(AppError::config_error(format!(
                "template must be in 'owner/name' form, got '{}'",
                self.template
            )));
        }
        if self.organization.trim().is_empty() {
            return Err(AppError::config_error("organization must not be empty"));
        }
        if self.template_name.is_empty() {
            return Err(AppError::config_error("template_name must not be empty"));
        }
        if self.commit_message.trim().is_empty() {
            return Err(AppError::config_error("commit_message must not be empty"));
        }

        for target in &self.targets {
            validate_target_name(target)?;
        }
        for file in &self.rewrite_files {
            validate_rewrite_path(file)?;
        }
        Ok(())
    }

    /// Target names that occur more than once, in first-seen order.
    pub fn duplicate_targets(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.targets
            .iter()
            .filter(|name| !seen.insert(name.as_str()) && reported.insert(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}

fn validate_target_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(AppError::InvalidTargetName(name.to_string()));
    }
    Ok(())
}

fn validate_rewrite_path(entry: &str) -> Result<(), AppError> {
    let path = Path::new(entry);
    if entry.is_empty() || path.is_absolute() || entry.starts_with('/') {
        return Err(AppError::config_error(format!(
            "rewrite_files entry '{}' must be a relative path",
            entry
        )));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(AppError::config_error(format!(
            "rewrite_files entry '{}' must not contain '..'",
            entry
        )));
    }
    Ok(())
}

fn default_template() -> String {
    "Arquisoft/wichat_0".to_string()
}

fn default_organization() -> String {
    "Arquisoft".to_string()
}

fn default_template_name() -> String {
    "wichat_0".to_string()
}

fn default_commit_message() -> String {
    "Customize repository".to_string()
}

fn default_settle_delay_secs() -> u64 {
    3
}

fn default_poll_interval_secs() -> u64 {
    2
}

fn default_targets() -> Vec<String> {
    const LANGS: [(&str, u8); 2] = [("es", 6), ("en", 3)];
    let mut targets = Vec::new();
    for (lang, groups) in LANGS {
        for group in 1..=groups {
            for team in ['a', 'b', 'c'] {
                targets.push(format!("wichat_{}{}{}", lang, group, team));
            }
        }
    }
    targets
}

fn default_rewrite_files() -> Vec<String> {
    [
        "docker-compose.yml",
        "README.md",
        "docs/README.md",
        ".github/workflows/release.yml",
        "webapp/packages.json",
        "users/userservice/package.json",
        "users/authservice/package.json",
        "gatewayservice/package.json",
        "llmservice/package.json",
        "docs/index.adoc",
        "sonar-project.properties",
        "webapp/public/index.html",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
