use std::time::Duration;

/// Blocking wait, injectable so tests never sleep.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}
