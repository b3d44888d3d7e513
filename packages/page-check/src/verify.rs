//! End-to-end page verification.
//!
//! `verify_page` walks a session through launch, navigation and the
//! contact check, then quits it. Once launch succeeded the session is
//! quit on every path, whether the check passed or failed.

use tracing::{debug, info, warn};

use crate::browser::{Browser, BrowserSession};
use crate::check::check_page_source;
use crate::config::VerifyConfig;
use crate::error::VerifyError;

/// Result of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    /// Page that was checked
    pub url: String,
    /// Number of contacts found
    pub verified: usize,
}

impl VerifyReport {
    /// Human-readable confirmation printed after a successful run.
    pub fn confirmation(&self) -> String {
        format!(
            "Test completed successfully. All {} test contacts were verified.",
            self.verified
        )
    }
}

/// Verifies that every expected contact is rendered on `config.target_url`.
///
/// # Errors
/// - [`VerifyError::SessionStart`] if no session could be launched; nothing
///   is quit in that case.
/// - [`VerifyError::Navigation`], [`VerifyError::PageSource`] or
///   [`VerifyError::MissingContact`] if the check fails.
/// - [`VerifyError::SessionQuit`] if the check passed but the session could
///   not be released.
pub async fn verify_page<B: Browser>(
    browser: &B,
    config: &VerifyConfig,
) -> Result<VerifyReport, VerifyError> {
    let mut session = browser
        .launch(&config.browser_args)
        .await
        .map_err(VerifyError::SessionStart)?;
    debug!("Browser session started");

    let outcome = inspect(&mut session, config).await;
    let released = session.quit().await;
    debug!("Browser session released");

    match (outcome, released) {
        (Ok(report), Ok(())) => {
            info!(
                "Verified {} contacts on {}",
                report.verified, report.url
            );
            Ok(report)
        }
        (Ok(_), Err(err)) => Err(VerifyError::SessionQuit(err)),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(quit_err)) => {
            warn!("Failed to quit browser session after failed check: {}", quit_err);
            Err(err)
        }
    }
}

async fn inspect<S: BrowserSession>(
    session: &mut S,
    config: &VerifyConfig,
) -> Result<VerifyReport, VerifyError> {
    debug!("Loading {}", config.target_url);
    session
        .goto(&config.target_url)
        .await
        .map_err(|source| VerifyError::Navigation {
            url: config.target_url.clone(),
            source,
        })?;

    let source = session
        .page_source()
        .await
        .map_err(VerifyError::PageSource)?;
    debug!("Page source is {} bytes", source.len());

    let verified = check_page_source(&source, &config.expected)?;
    Ok(VerifyReport {
        url: config.target_url.clone(),
        verified,
    })
}
