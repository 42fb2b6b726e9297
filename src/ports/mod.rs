mod git;
mod github;
mod sleeper;

pub use git::Git;
pub use github::GitHub;
pub use sleeper::Sleeper;
