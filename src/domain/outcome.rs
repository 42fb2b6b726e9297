//! Per-stage and per-target results of a provisioning run.

use std::fmt;

/// The seven ordered stages applied to every target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetStage {
    Fork,
    ClearTemplate,
    Describe,
    Clone,
    Rewrite,
    Push,
    Cleanup,
}

impl TargetStage {
    pub const ALL: [TargetStage; 7] = [
        TargetStage::Fork,
        TargetStage::ClearTemplate,
        TargetStage::Describe,
        TargetStage::Clone,
        TargetStage::Rewrite,
        TargetStage::Push,
        TargetStage::Cleanup,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetStage::Fork => "fork",
            TargetStage::ClearTemplate => "clear-template",
            TargetStage::Describe => "describe",
            TargetStage::Clone => "clone",
            TargetStage::Rewrite => "rewrite",
            TargetStage::Push => "push",
            TargetStage::Cleanup => "cleanup",
        }
    }
}

impl fmt::Display for TargetStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one stage. Failures carry the rendered error so reports stay `Clone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Succeeded,
    Failed { error: String },
    Skipped,
}

impl StageOutcome {
    pub fn failed(error: impl fmt::Display) -> Self {
        StageOutcome::Failed { error: error.to_string() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StageOutcome::Succeeded)
    }
}

/// Where a target ended up in the per-target state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Start,
    Forked,
    Cloned,
    Rewritten,
    Pushed,
    Cleaned,
    /// Left early after a fork or clone failure.
    Skipped,
    /// Push failed and the working copy was kept for manual recovery.
    Preserved,
}

/// Everything the pipeline did for one target name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub name: String,
    pub stages: Vec<(TargetStage, StageOutcome)>,
    pub state: TargetState,
    pub rewritten_files: Vec<String>,
}

impl TargetReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Vec::new(),
            state: TargetState::Start,
            rewritten_files: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, stage: TargetStage, outcome: StageOutcome) {
        self.stages.push((stage, outcome));
    }

    /// Outcome recorded for `stage`, if the stage was reached.
    pub fn outcome(&self, stage: TargetStage) -> Option<&StageOutcome> {
        self.stages.iter().find(|(s, _)| *s == stage).map(|(_, o)| o)
    }

    /// Stages in the order they were attempted.
    pub fn attempted(&self) -> Vec<TargetStage> {
        self.stages.iter().map(|(s, _)| *s).collect()
    }

    /// True when every attempted stage succeeded and the target was cleaned up.
    pub fn is_complete(&self) -> bool {
        self.state == TargetState::Cleaned && self.stages.iter().all(|(_, o)| o.is_success())
    }
}

/// Ordered reports for every configured target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub targets: Vec<TargetReport>,
}

impl RunReport {
    pub fn target(&self, name: &str) -> Option<&TargetReport> {
        self.targets.iter().find(|t| t.name == name)
    }

    pub fn completed(&self) -> usize {
        self.targets.iter().filter(|t| t.is_complete()).count()
    }

    pub fn skipped(&self) -> usize {
        self.targets.iter().filter(|t| t.state == TargetState::Skipped).count()
    }
}
