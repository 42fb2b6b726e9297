//! forkfleet: provision many repositories from one GitHub template.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::path::{Path, PathBuf};

use adapters::{GitCommandAdapter, GitHubCommandAdapter, ThreadSleeper};
use app::AppContext;

pub use app::commands::provision::ProvisionOptions;
pub use app::commands::provision::rewrite::rewrite_files;
pub use app::init_logging;
pub use domain::{
    AppError, ProvisionConfig, RunReport, StageOutcome, TargetReport, TargetStage, TargetState,
};

/// Fork, customize and push every configured target using the `gh` and `git` CLIs.
///
/// # Arguments
/// * `config_path` - Optional TOML file overriding the compiled-in configuration
/// * `work_dir` - Directory for working copies; defaults to the current directory
///
/// Per-target failures are recorded in the returned report. `Err` is reserved for
/// problems that abort the whole run: an unusable configuration or a rewrite failure.
pub fn provision(
    config_path: Option<&Path>,
    work_dir: Option<PathBuf>,
) -> Result<RunReport, AppError> {
    let config = app::config::load_config(config_path)?;
    let work_dir = match work_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    if !work_dir.is_dir() {
        return Err(AppError::config_error(format!(
            "Work directory does not exist: {}",
            work_dir.display()
        )));
    }

    let ctx =
        AppContext::new(GitHubCommandAdapter::new(), GitCommandAdapter::new(), ThreadSleeper);
    app::commands::provision::execute(&ctx, &config, &ProvisionOptions { work_dir })
}
