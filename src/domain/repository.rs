//! Identity of a repository on the hosting platform.

use std::fmt;

/// A repository addressed by organization and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub organization: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> Self {
        Self { organization: organization.into(), name: name.into() }
    }

    /// REST path used by `gh api`.
    pub fn api_path(&self) -> String {
        format!("/repos/{}/{}", self.organization, self.name)
    }

    /// HTTPS remote used for cloning.
    pub fn clone_url(&self) -> String {
        format!("https://github.com/{}/{}.git", self.organization, self.name)
    }

    /// GitHub Pages URL, used as the repository description.
    pub fn pages_url(&self) -> String {
        format!("https://{}.github.io/{}/", self.organization, self.name)
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.name)
    }
}
