//! Smoke check for the contacts demo page.
//!
//! Launches a headless browser through a WebDriver server, loads the
//! target page and verifies that every seeded test contact appears in the
//! rendered page source.

pub mod browser;
pub mod check;
pub mod config;
pub mod error;
pub mod verify;
pub mod webdriver;

pub use browser::{Browser, BrowserSession};
pub use check::{check_names, check_page_source};
pub use config::{ExpectedContacts, VerifyConfig};
pub use error::{BoxError, VerifyError};
pub use verify::{verify_page, VerifyReport};
pub use webdriver::WebDriverBrowser;
