//! Provision command: fork, customize and push every configured target.
//!
//! Targets are processed one at a time. Per target the stages run in a fixed order:
//! fork, clear template flag, describe, clone, rewrite, push, cleanup. A fork or clone
//! failure skips the rest of that target; other remote failures are recorded and the
//! target carries on. Rewrite errors are not contained and abort the run.

pub mod rewrite;
mod stages;

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, info_span, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, ProvisionConfig, RepositoryRef, RunReport, StageOutcome, TargetReport, TargetStage,
    TargetState,
};
use crate::ports::{Git, GitHub, Sleeper};

/// Options for `provision`.
#[derive(Debug, Clone)]
pub struct ProvisionOptions {
    /// Directory under which working copies are created.
    pub work_dir: PathBuf,
}

/// Execute the pipeline for every configured target.
pub fn execute<H, G, S>(
    ctx: &AppContext<H, G, S>,
    config: &ProvisionConfig,
    options: &ProvisionOptions,
) -> Result<RunReport, AppError>
where
    H: GitHub,
    G: Git,
    S: Sleeper,
{
    let mut report = RunReport::default();

    for name in &config.targets {
        let span = info_span!("target", repo = %name);
        let _entered = span.enter();

        info!("Processing repository: {}", name);
        let target = provision_target(ctx, config, &options.work_dir, name)?;
        if target.state != TargetState::Skipped {
            info!("Repository '{}' setup completed.", name);
        }
        report.targets.push(target);
    }

    debug!(
        total = report.targets.len(),
        completed = report.completed(),
        skipped = report.skipped(),
        "provisioning finished"
    );
    Ok(report)
}

fn provision_target<H, G, S>(
    ctx: &AppContext<H, G, S>,
    config: &ProvisionConfig,
    work_dir: &Path,
    name: &str,
) -> Result<TargetReport, AppError>
where
    H: GitHub,
    G: Git,
    S: Sleeper,
{
    let repo = RepositoryRef::new(config.organization.as_str(), name);
    let mut report = TargetReport::new(name);

    let forked = stages::fork(ctx.github(), &config.template, &repo);
    let fork_ok = forked.is_success();
    report.record(TargetStage::Fork, forked);
    if !fork_ok {
        warn!("Skipping repository '{}' due to forking error.", name);
        report.state = TargetState::Skipped;
        return Ok(report);
    }
    report.state = TargetState::Forked;

    stages::await_provisioning(
        ctx.github(),
        ctx.sleeper(),
        &repo,
        Duration::from_secs(config.settle_delay_secs),
        &config.provisioning,
    );

    report.record(TargetStage::ClearTemplate, stages::clear_template(ctx.github(), &repo));
    report.record(TargetStage::Describe, stages::describe(ctx.github(), &repo));

    let local_path = work_dir.join(name);
    let cloned = stages::clone(ctx.git(), &repo, &local_path);
    let clone_ok = cloned.is_success();
    report.record(TargetStage::Clone, cloned);
    if !clone_ok {
        warn!("Skipping repository '{}' due to cloning error.", name);
        report.state = TargetState::Skipped;
        return Ok(report);
    }
    report.state = TargetState::Cloned;

    report.rewritten_files =
        rewrite::rewrite_files(&local_path, &config.rewrite_files, &config.template_name, name)?;
    report.record(TargetStage::Rewrite, StageOutcome::Succeeded);
    report.state = TargetState::Rewritten;

    let pushed = stages::push(ctx.git(), &local_path, &repo, &config.commit_message);
    let push_ok = pushed.is_success();
    report.record(TargetStage::Push, pushed);
    if push_ok {
        report.state = TargetState::Pushed;
    } else if config.preserve_on_push_failure {
        warn!("Keeping working copy '{}' for manual recovery.", local_path.display());
        report.record(TargetStage::Cleanup, StageOutcome::Skipped);
        report.state = TargetState::Preserved;
        return Ok(report);
    }

    let cleaned = stages::cleanup(&local_path);
    if cleaned.is_success() {
        report.state = TargetState::Cleaned;
    }
    report.record(TargetStage::Cleanup, cleaned);
    Ok(report)
}
