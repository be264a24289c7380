//! Async command pattern for side effects.
//!
//! Commands represent async operations that run outside the main event loop.
//! The page returns commands from its update funnel, and the App spawns them.
//! Results flow back to the page over its message channel; a command that
//! completes after the page is gone sends into a closed channel and the
//! send error is discarded.

use async_trait::async_trait;

/// Async command that performs side effects.
#[async_trait]
pub trait Command: Send + 'static {
    /// Human-readable name for logging and status display.
    fn name(&self) -> String;

    /// Execute the command.
    async fn execute(self: Box<Self>) -> color_eyre::Result<()>;
}

/// Result from a page's `update()`.
///
/// `update()` is the single funnel: it is the only place that can spawn
/// commands, close the app, or report errors.
pub enum UpdateResult {
    /// No action needed
    Idle,
    /// Spawn these commands
    Commands(Vec<Box<dyn Command>>),
    /// Close the application
    Close,
    /// Report an error
    Error(String),
}

impl<T: Command> From<T> for UpdateResult {
    fn from(value: T) -> Self {
        Self::Commands(vec![Box::new(value)])
    }
}
