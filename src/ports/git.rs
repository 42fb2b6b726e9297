use std::path::Path;

use crate::domain::AppError;

/// Version-control operations on a working copy.
///
/// Every operation that acts on an existing working copy takes it as an explicit
/// directory; implementations must not rely on the process working directory.
pub trait Git {
    /// Full clone of `url` into `destination`.
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), AppError>;

    /// Stage every change in the working copy.
    fn add_all(&self, work_dir: &Path) -> Result<(), AppError>;

    /// Commit staged changes with a message.
    fn commit(&self, work_dir: &Path, message: &str) -> Result<(), AppError>;

    /// Push the current branch to its upstream.
    fn push(&self, work_dir: &Path) -> Result<(), AppError>;
}
