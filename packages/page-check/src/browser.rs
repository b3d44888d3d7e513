//! Browser abstraction used by the page check.
//!
//! [`Browser`] hands out sessions; a [`BrowserSession`] is consumed by
//! [`BrowserSession::quit`], so a released session cannot be used again.

use async_trait::async_trait;

use crate::error::BoxError;

/// Launches browser sessions.
#[async_trait]
pub trait Browser: Sync {
    /// Session type produced by [`Browser::launch`].
    type Session: BrowserSession;

    /// Starts a new session with the given command-line arguments.
    async fn launch(&self, args: &[String]) -> Result<Self::Session, BoxError>;
}

/// A live browser session.
#[async_trait]
pub trait BrowserSession: Send {
    /// Navigates to `url` and waits for the page to load.
    async fn goto(&mut self, url: &str) -> Result<(), BoxError>;

    /// Returns the source of the currently rendered page.
    async fn page_source(&mut self) -> Result<String, BoxError>;

    /// Ends the session and releases the browser process.
    async fn quit(self) -> Result<(), BoxError>;
}
