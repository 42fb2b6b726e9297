use std::ffi::OsString;
use std::process::Command;

use tracing::debug;

use crate::domain::{AppError, RepositoryRef};
use crate::ports::GitHub;

/// `GitHub` port backed by the `gh` CLI.
#[derive(Debug, Clone)]
pub struct GitHubCommandAdapter {
    program: OsString,
}

impl Default for GitHubCommandAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubCommandAdapter {
    pub fn new() -> Self {
        Self { program: OsString::from("gh") }
    }

    /// Use a specific executable instead of `gh` from `PATH`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }

    fn run_gh(&self, args: &[&str]) -> Result<String, AppError> {
        let rendered = format!("gh {}", args.join(" "));
        debug!(command = %rendered, "running gh");

        let output = Command::new(&self.program).args(args).output().map_err(|e| {
            AppError::external("gh", &rendered, format!("Failed to execute gh CLI: {}", e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let details = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(AppError::external("gh", rendered, details));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn patch_field(&self, repo: &RepositoryRef, field: &str) -> Result<(), AppError> {
        let endpoint = repo.api_path();
        self.run_gh(&["api", &endpoint, "--method", "PATCH", "--field", field])?;
        Ok(())
    }
}

impl GitHub for GitHubCommandAdapter {
    fn fork_repository(&self, template: &str, target: &RepositoryRef) -> Result<(), AppError> {
        let org = format!("--org={}", target.organization);
        let fork_name = format!("--fork-name={}", target.name);
        self.run_gh(&["repo", "fork", template, "--clone=false", &org, &fork_name])?;
        Ok(())
    }

    fn clear_template_flag(&self, repo: &RepositoryRef) -> Result<(), AppError> {
        self.patch_field(repo, "is_template=false")
    }

    fn set_description(&self, repo: &RepositoryRef, description: &str) -> Result<(), AppError> {
        self.patch_field(repo, &format!("description={}", description))
    }

    fn repository_exists(&self, repo: &RepositoryRef) -> Result<bool, AppError> {
        let output = match self.run_gh(&["api", &repo.api_path()]) {
            Ok(output) => output,
            Err(e) if is_not_found(&e) => {
                debug!(repository = %repo, error = %e, "repository not visible yet");
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        let json: serde_json::Value =
            serde_json::from_str(&output).map_err(|e| AppError::ParseError {
                what: "repository JSON".into(),
                details: format!("Failed to parse gh api output: {}", e),
            })?;
        let full_name = json["full_name"].as_str().unwrap_or_default();
        Ok(full_name.eq_ignore_ascii_case(&repo.to_string()))
    }
}

/// `gh api` reports a missing repository as `Not Found (HTTP 404)` on stderr.
fn is_not_found(err: &AppError) -> bool {
    match err {
        AppError::ExternalToolError { details, .. } => {
            details.contains("HTTP 404") || details.contains("Not Found")
        }
        _ => false,
    }
}
