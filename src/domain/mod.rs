pub mod config;
pub mod error;
pub mod outcome;
pub mod repository;

pub use config::{ProvisionConfig, ProvisioningPoll};
pub use error::AppError;
pub use outcome::{RunReport, StageOutcome, TargetReport, TargetStage, TargetState};
pub use repository::RepositoryRef;
