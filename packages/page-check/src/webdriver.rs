//! WebDriver-backed browser sessions.

use async_trait::async_trait;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tracing::debug;

use crate::browser::{Browser, BrowserSession};
use crate::error::BoxError;

/// Builds the capabilities for a Firefox session started with `args`.
pub fn firefox_capabilities(args: &[String]) -> Capabilities {
    let mut caps = Capabilities::new();
    caps.insert("browserName".to_string(), json!("firefox"));
    caps.insert("moz:firefoxOptions".to_string(), json!({ "args": args }));
    caps
}

/// Requests Firefox sessions from a WebDriver server such as geckodriver.
#[derive(Debug, Clone)]
pub struct WebDriverBrowser {
    webdriver_url: String,
}

impl WebDriverBrowser {
    /// Creates a browser that talks to the WebDriver server at `webdriver_url`.
    pub fn new(webdriver_url: impl Into<String>) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
        }
    }

    pub fn webdriver_url(&self) -> &str {
        &self.webdriver_url
    }
}

#[async_trait]
impl Browser for WebDriverBrowser {
    type Session = WebDriverSession;

    async fn launch(&self, args: &[String]) -> Result<WebDriverSession, BoxError> {
        debug!("Requesting session from {} with {:?}", self.webdriver_url, args);
        let mut builder = ClientBuilder::native();
        builder.capabilities(firefox_capabilities(args));
        let client = builder.connect(&self.webdriver_url).await?;
        Ok(WebDriverSession { client })
    }
}

/// A session on a WebDriver server.
pub struct WebDriverSession {
    client: Client,
}

#[async_trait]
impl BrowserSession for WebDriverSession {
    async fn goto(&mut self, url: &str) -> Result<(), BoxError> {
        self.client.goto(url).await?;
        Ok(())
    }

    async fn page_source(&mut self) -> Result<String, BoxError> {
        Ok(self.client.source().await?)
    }

    async fn quit(self) -> Result<(), BoxError> {
        self.client.close().await?;
        Ok(())
    }
}
