//! Checks that seeded test contacts render on the demo page.
//!
//! Requires a WebDriver server (geckodriver) reachable at `--webdriver`.

use anyhow::Context;
use clap::Parser;
use page_check::config::{DEFAULT_TARGET_URL, DEFAULT_WEBDRIVER_URL};
use page_check::{verify_page, ExpectedContacts, VerifyConfig, WebDriverBrowser};

/// Command-line arguments for the page check.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Page listing the contacts
    #[arg(long, default_value = DEFAULT_TARGET_URL)]
    url: String,

    /// WebDriver server to request the browser session from
    #[arg(long, default_value = DEFAULT_WEBDRIVER_URL)]
    webdriver: String,

    /// Number of seeded contacts expected on the page
    #[arg(long, default_value_t = 10)]
    count: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt::init();

    let config = VerifyConfig {
        target_url: args.url,
        webdriver_url: args.webdriver,
        expected: ExpectedContacts {
            count: args.count,
            ..Default::default()
        },
        ..Default::default()
    };
    let browser = WebDriverBrowser::new(config.webdriver_url.clone());

    tracing::info!(
        "Checking {} through WebDriver at {}",
        config.target_url,
        browser.webdriver_url()
    );
    let report = verify_page(&browser, &config)
        .await
        .with_context(|| format!("Page check failed for {}", config.target_url))?;
    println!("{}", report.confirmation());

    Ok(())
}
