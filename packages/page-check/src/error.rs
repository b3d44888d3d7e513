//! Verification error types.

use thiserror::Error;

/// Error type carried across the browser seam.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while verifying the contacts page.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The browser session could not be created
    #[error("Failed to start browser session: {0}")]
    SessionStart(#[source] BoxError),

    /// Loading the target page failed
    #[error("Failed to load '{url}': {source}")]
    Navigation {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The rendered page source could not be read
    #[error("Failed to read page source: {0}")]
    PageSource(#[source] BoxError),

    /// An expected contact is absent from the page source
    #[error("Test contact {name} not found in page source")]
    MissingContact { name: String },

    /// Ending the browser session failed
    #[error("Failed to quit browser session: {0}")]
    SessionQuit(#[source] BoxError),
}
