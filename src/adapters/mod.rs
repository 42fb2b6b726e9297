pub mod git_command;
pub mod github_command;
pub mod thread_sleeper;

pub use git_command::GitCommandAdapter;
pub use github_command::GitHubCommandAdapter;
pub use thread_sleeper::ThreadSleeper;
