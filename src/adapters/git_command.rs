use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::Git;

/// `Git` port backed by the `git` CLI.
///
/// Each invocation sets its own working directory; the process-wide current
/// directory is never touched.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    program: OsString,
}

impl Default for GitCommandAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCommandAdapter {
    pub fn new() -> Self {
        Self { program: OsString::from("git") }
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<String, AppError> {
        let rendered = format!("git {}", args.join(" "));
        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        debug!(command = %rendered, cwd = ?cwd, "running git");

        let output = command
            .output()
            .map_err(|e| AppError::external("git", &rendered, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::external(
                "git",
                rendered,
                if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Git for GitCommandAdapter {
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), AppError> {
        let destination = destination.to_str().ok_or_else(|| {
            AppError::config_error(format!(
                "Clone destination contains invalid unicode: {}",
                destination.display()
            ))
        })?;
        self.run(&["clone", url, destination], None)?;
        Ok(())
    }

    fn add_all(&self, work_dir: &Path) -> Result<(), AppError> {
        self.run(&["add", "."], Some(work_dir))?;
        Ok(())
    }

    fn commit(&self, work_dir: &Path, message: &str) -> Result<(), AppError> {
        self.run(&["commit", "-m", message], Some(work_dir))?;
        Ok(())
    }

    fn push(&self, work_dir: &Path) -> Result<(), AppError> {
        self.run(&["push"], Some(work_dir))?;
        Ok(())
    }
}
