//! Concrete operator installed by the binary entry point.

/// Source of environment settings (`MARATHON_HOST`, ...).
pub type EnvLookup = fn(&str) -> Option<String>;

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Infrastructure-backed implementation of
/// [`OperatorPort`](crate::port::inbound::operator::port::OperatorPort).
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    env: EnvLookup,
}

impl Default for Operator {
    fn default() -> Self {
        Self::new()
    }
}

impl Operator {
    /// Operator reading the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self { env: process_env }
    }

    /// Operator reading environment settings through `env`.
    #[must_use]
    pub fn with_env(env: EnvLookup) -> Self {
        Self { env }
    }

    pub(super) fn env(&self) -> EnvLookup {
        self.env
    }
}
