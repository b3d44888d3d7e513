//! Verification configuration.

/// Page the demo application serves its contact list on.
pub const DEFAULT_TARGET_URL: &str = "http://10.48.10.170";

/// Address of a locally running WebDriver server (geckodriver).
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Browser launch arguments used for every session.
pub const DEFAULT_BROWSER_ARGS: [&str; 3] = ["--headless", "--no-sandbox", "--disable-dev-shm-usage"];

/// Generator for the contact names expected on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedContacts {
    /// Name prefix shared by all seeded contacts
    pub prefix: String,
    /// Number of contacts, numbered from 0
    pub count: usize,
}

impl ExpectedContacts {
    /// Expected names in check order: `"{prefix} 0"`, `"{prefix} 1"`, ...
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.count).map(move |i| format!("{} {}", self.prefix, i))
    }
}

impl Default for ExpectedContacts {
    fn default() -> Self {
        Self {
            prefix: "Test Name".to_string(),
            count: 10,
        }
    }
}

/// Verification configuration.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Page to load
    pub target_url: String,
    /// WebDriver server the browser session is requested from
    pub webdriver_url: String,
    /// Browser launch arguments
    pub browser_args: Vec<String>,
    /// Contacts that must appear in the page source
    pub expected: ExpectedContacts,
}

impl VerifyConfig {
    /// Creates a configuration targeting `target_url` with default settings otherwise.
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            ..Default::default()
        }
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            browser_args: DEFAULT_BROWSER_ARGS.iter().map(|s| s.to_string()).collect(),
            expected: ExpectedContacts::default(),
        }
    }
}
