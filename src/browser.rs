//! Chromium session bootstrap.
//!
//! Launches a headful browser with the automation-detection flags stripped,
//! keeps the CDP event handler pumping on its own task and hands out the one
//! page the whole run mutates.

use anyhow::{anyhow, Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use log::warn;
use tokio::task::JoinHandle;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Ubuntu Chromium/97.0.4649.106 Chrome/97.0.4649.106 Safari/537.36";

pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Page,
}

impl BrowserSession {
    /// Launches Chromium and opens a blank page. The browser runs headful so
    /// a human can satisfy an OTP challenge mid-run.
    pub async fn launch() -> Result<Self> {
        let config = BrowserConfig::builder()
            .with_head()
            .viewport(None)
            .arg("--disable-blink-features=AutomationControlled")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--enable-javascript")
            .arg(format!("--user-agent={}", USER_AGENT))
            .build()
            .map_err(|e| anyhow!("failed to configure browser: {}", e))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch browser")?;
        let handler_task = tokio::spawn(async move { while (handler.next().await).is_some() {} });

        let page = browser
            .new_page("about:blank")
            .await
            .context("failed to open page")?;

        Ok(BrowserSession {
            browser,
            handler_task,
            page,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Releases the browser. Called on every exit path, success or not.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Browser did not close cleanly: {}", e);
        }
        self.handler_task.abort();
    }
}
