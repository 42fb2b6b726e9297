use crate::domain::{AppError, RepositoryRef};

/// Hosting-platform operations needed to provision a repository.
pub trait GitHub {
    /// Create `target` as a fork of `template` without cloning it locally.
    fn fork_repository(&self, template: &str, target: &RepositoryRef) -> Result<(), AppError>;

    /// Clear the "is a template" flag on a repository.
    fn clear_template_flag(&self, repo: &RepositoryRef) -> Result<(), AppError>;

    /// Replace the repository description.
    fn set_description(&self, repo: &RepositoryRef, description: &str) -> Result<(), AppError>;

    /// Check whether the repository is visible through the API yet.
    fn repository_exists(&self, repo: &RepositoryRef) -> Result<bool, AppError>;
}
