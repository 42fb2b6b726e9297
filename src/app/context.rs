use crate::ports::{Git, GitHub, Sleeper};

/// Application context holding the ports a provisioning run talks through.
pub struct AppContext<H: GitHub, G: Git, S: Sleeper> {
    github: H,
    git: G,
    sleeper: S,
}

impl<H: GitHub, G: Git, S: Sleeper> AppContext<H, G, S> {
    /// Create a new application context.
    pub fn new(github: H, git: G, sleeper: S) -> Self {
        Self { github, git, sleeper }
    }

    /// Hosting-platform port.
    pub fn github(&self) -> &H {
        &self.github
    }

    /// Version-control port.
    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }
}
