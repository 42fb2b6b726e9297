use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::{AppError, RepositoryRef};
use crate::ports::GitHub;
use crate::testing::Journal;

/// In-memory `GitHub` port that records every call.
#[derive(Debug, Default)]
pub struct FakeGitHub {
    journal: Journal,
    fail_fork: HashSet<String>,
    fail_patch: HashSet<String>,
    invisible_polls: u32,
    failing_polls: u32,
    polls: Mutex<u32>,
    pub descriptions: Mutex<Vec<(String, String)>>,
}

impl FakeGitHub {
    pub fn new(journal: Journal) -> Self {
        Self { journal, ..Self::default() }
    }

    pub fn failing_fork(mut self, name: &str) -> Self {
        self.fail_fork.insert(name.to_string());
        self
    }

    pub fn failing_patch(mut self, name: &str) -> Self {
        self.fail_patch.insert(name.to_string());
        self
    }

    /// Report repositories as missing for the first `polls` visibility checks.
    pub fn visible_after(mut self, polls: u32) -> Self {
        self.invisible_polls = polls;
        self
    }

    /// Make the first `polls` visibility checks fail outright.
    pub fn erroring_polls(mut self, polls: u32) -> Self {
        self.failing_polls = polls;
        self
    }

    pub fn poll_count(&self) -> u32 {
        *self.polls.lock().unwrap()
    }

    fn fail(name: &str, what: &str) -> AppError {
        AppError::external("gh", format!("gh {} {}", what, name), "simulated failure")
    }
}

impl GitHub for FakeGitHub {
    fn fork_repository(&self, _template: &str, target: &RepositoryRef) -> Result<(), AppError> {
        self.journal.push(format!("fork {}", target.name));
        if self.fail_fork.contains(&target.name) {
            return Err(Self::fail(&target.name, "repo fork"));
        }
        Ok(())
    }

    fn clear_template_flag(&self, repo: &RepositoryRef) -> Result<(), AppError> {
        self.journal.push(format!("clear-template {}", repo.name));
        if self.fail_patch.contains(&repo.name) {
            return Err(Self::fail(&repo.name, "api PATCH"));
        }
        Ok(())
    }

    fn set_description(&self, repo: &RepositoryRef, description: &str) -> Result<(), AppError> {
        self.journal.push(format!("describe {}", repo.name));
        if self.fail_patch.contains(&repo.name) {
            return Err(Self::fail(&repo.name, "api PATCH"));
        }
        self.descriptions.lock().unwrap().push((repo.name.clone(), description.to_string()));
        Ok(())
    }

    fn repository_exists(&self, repo: &RepositoryRef) -> Result<bool, AppError> {
        self.journal.push(format!("poll {}", repo.name));
        let mut polls = self.polls.lock().unwrap();
        *polls += 1;
        if *polls <= self.failing_polls {
            return Err(Self::fail(&repo.name, "api"));
        }
        Ok(*polls > self.invisible_polls)
    }
}
