//! Individual pipeline stages.
//!
//! Remote-mutation stages never return `Err`: failures are logged and folded into a
//! `StageOutcome` so the pipeline decides what to skip.

use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::domain::{ProvisioningPoll, RepositoryRef, StageOutcome};
use crate::ports::{Git, GitHub, Sleeper};

pub(crate) fn fork(github: &impl GitHub, template: &str, target: &RepositoryRef) -> StageOutcome {
    match github.fork_repository(template, target) {
        Ok(()) => {
            info!("Forked repository '{}' as '{}'.", template, target);
            StageOutcome::Succeeded
        }
        Err(e) => {
            error!("Failed to fork repository: {}", e);
            StageOutcome::failed(e)
        }
    }
}

/// Give the platform time to finish creating the fork.
///
/// Polls for visibility when configured, otherwise sleeps for the fixed settle delay.
pub(crate) fn await_provisioning(
    github: &impl GitHub,
    sleeper: &impl Sleeper,
    repo: &RepositoryRef,
    settle: Duration,
    poll: &ProvisioningPoll,
) {
    if poll.poll_attempts == 0 {
        sleeper.sleep(settle);
        return;
    }

    let interval = Duration::from_secs(poll.poll_interval_secs);
    for attempt in 1..=poll.poll_attempts {
        match github.repository_exists(repo) {
            Ok(true) => {
                info!(attempt, "Repository '{}' is available.", repo);
                return;
            }
            Ok(false) => {}
            Err(e) => warn!(attempt, "Visibility check for '{}' failed: {}", repo, e),
        }
        if attempt < poll.poll_attempts {
            sleeper.sleep(interval);
        }
    }
    warn!(
        "Repository '{}' still not visible after {} checks; continuing anyway.",
        repo, poll.poll_attempts
    );
}

pub(crate) fn clear_template(github: &impl GitHub, repo: &RepositoryRef) -> StageOutcome {
    match github.clear_template_flag(repo) {
        Ok(()) => {
            info!("Removed template status from repository '{}'.", repo);
            StageOutcome::Succeeded
        }
        Err(e) => {
            error!("Failed to remove template status for '{}': {}", repo, e);
            StageOutcome::failed(e)
        }
    }
}

pub(crate) fn describe(github: &impl GitHub, repo: &RepositoryRef) -> StageOutcome {
    let description = repo.pages_url();
    match github.set_description(repo, &description) {
        Ok(()) => {
            info!("Updated description for '{}' to '{}'.", repo, description);
            StageOutcome::Succeeded
        }
        Err(e) => {
            error!("Failed to update description for '{}': {}", repo, e);
            StageOutcome::failed(e)
        }
    }
}

pub(crate) fn clone(git: &impl Git, repo: &RepositoryRef, local_path: &Path) -> StageOutcome {
    match git.clone_repository(&repo.clone_url(), local_path) {
        Ok(()) => {
            info!("Cloned repository '{}' locally.", repo);
            StageOutcome::Succeeded
        }
        Err(e) => {
            error!("Failed to clone repository '{}': {}", repo, e);
            StageOutcome::failed(e)
        }
    }
}

/// Stage, commit and push. Stops at the first failing git call.
pub(crate) fn push(
    git: &impl Git,
    local_path: &Path,
    repo: &RepositoryRef,
    message: &str,
) -> StageOutcome {
    let result = git
        .add_all(local_path)
        .and_then(|()| git.commit(local_path, message))
        .and_then(|()| git.push(local_path));

    match result {
        Ok(()) => {
            info!("Pushed changes to '{}'.", repo);
            StageOutcome::Succeeded
        }
        Err(e) => {
            error!("Failed to push changes for '{}': {}", repo, e);
            StageOutcome::failed(e)
        }
    }
}

pub(crate) fn cleanup(local_path: &Path) -> StageOutcome {
    match fs::remove_dir_all(local_path) {
        Ok(()) => StageOutcome::Succeeded,
        Err(e) => {
            error!("Failed to remove working copy '{}': {}", local_path.display(), e);
            StageOutcome::failed(e)
        }
    }
}
