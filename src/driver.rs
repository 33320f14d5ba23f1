//! The browser-automation surface the workflow consumes.
//!
//! [`PageDriver`] names the handful of page primitives the crawl needs:
//! navigate, click, fill, bounded waits, text/attribute/input reads and a
//! full-page screenshot. [`CdpPage`] implements it over a live
//! `chromiumoxide::Page`; tests script a mock instead.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use thiserror::Error;

/// How often the polling waits re-probe the page.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Default ceiling for element lookups behind `click`/`fill`/reads.
const ELEMENT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("browser protocol error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),
    #[error("could not deserialize page result: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no element matches {0:?}")]
    MissingElement(String),
    #[error("element {selector:?} has no {name:?} attribute")]
    MissingAttribute { selector: String, name: String },
    #[error("element {0:?} rendered no text")]
    MissingText(String),
    #[error("timed out after {timeout:?} waiting for {what}")]
    WaitTimeout { what: String, timeout: Duration },
}

/// Page primitives consumed by the login and scrape phases. Any automation
/// layer offering equivalents suffices; production uses [`CdpPage`].
#[async_trait]
pub trait PageDriver: Send + Sync {
    async fn goto(&self, url: &str) -> Result<(), DriverError>;

    /// Waits for the selector, then clicks it.
    async fn click(&self, selector: &str) -> Result<(), DriverError>;

    /// Clicks the first visible element whose text contains `text`.
    async fn click_text(&self, text: &str) -> Result<(), DriverError>;

    /// Waits for the selector, clicks it and types `value` into it.
    async fn fill(&self, selector: &str, value: &str) -> Result<(), DriverError>;

    async fn wait_for_selector(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), DriverError>;

    /// Probes the rendered page text for `needle`. Returns `Ok(false)` when
    /// the text never appears within `timeout`; absence is an expected
    /// outcome, not a failure.
    async fn wait_for_text(&self, needle: &str, timeout: Duration) -> Result<bool, DriverError>;

    /// Waits until the page URL starts with `url`. Expiry is
    /// [`DriverError::WaitTimeout`] so callers can treat it as an outcome.
    async fn wait_for_url(&self, url: &str, timeout: Duration) -> Result<(), DriverError>;

    async fn current_url(&self) -> Result<String, DriverError>;

    async fn inner_text(&self, selector: &str) -> Result<String, DriverError>;

    /// Inner text of every element matching `selector`, in document order.
    async fn inner_texts(&self, selector: &str) -> Result<Vec<String>, DriverError>;

    async fn attribute(&self, selector: &str, name: &str) -> Result<String, DriverError>;

    /// Live value of an input element (the `value` property, not the
    /// attribute).
    async fn input_value(&self, selector: &str) -> Result<String, DriverError>;

    async fn screenshot_full_page(&self) -> Result<Vec<u8>, DriverError>;
}

/// [`PageDriver`] over a Chrome DevTools Protocol page.
pub struct CdpPage {
    page: Page,
}

impl CdpPage {
    pub fn new(page: Page) -> Self {
        CdpPage { page }
    }

    /// JS string literal for embedding a selector into an evaluated snippet.
    fn js_str(s: &str) -> String {
        serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
    }
}

#[async_trait]
impl PageDriver for CdpPage {
    async fn goto(&self, url: &str) -> Result<(), DriverError> {
        self.page.goto(url).await?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<(), DriverError> {
        self.wait_for_selector(selector, ELEMENT_TIMEOUT).await?;
        let element = self.page.find_element(selector).await?;
        element.click().await?;
        Ok(())
    }

    async fn click_text(&self, text: &str) -> Result<(), DriverError> {
        let js = format!(
            r#"(function() {{
  const needle = {needle};
  const nodes = document.querySelectorAll('button, a, [role="button"], span, div');
  for (const el of nodes) {{
    const txt = (el.innerText || '').trim();
    if (txt === needle || txt.includes(needle)) {{
      el.click();
      return true;
    }}
  }}
  return false;
}})()"#,
            needle = Self::js_str(text)
        );
        let deadline = std::time::Instant::now() + ELEMENT_TIMEOUT;
        loop {
            let clicked: bool = self.page.evaluate(js.clone()).await?.into_value()?;
            if clicked {
                return Ok(());
            }
            if std::time::Instant::now() >= deadline {
                return Err(DriverError::MissingElement(format!("text={}", text)));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<(), DriverError> {
        self.wait_for_selector(selector, ELEMENT_TIMEOUT).await?;
        let element = self.page.find_element(selector).await?;
        element.click().await?;
        element.type_str(value).await?;
        Ok(())
    }

    async fn wait_for_selector(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), DriverError> {
        let deadline = std::time::Instant::now() + timeout;
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if std::time::Instant::now() >= deadline {
                return Err(DriverError::WaitTimeout {
                    what: format!("selector {}", selector),
                    timeout,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn wait_for_text(&self, needle: &str, timeout: Duration) -> Result<bool, DriverError> {
        let js = format!(
            "!!(document.body && document.body.innerText.includes({}))",
            Self::js_str(needle)
        );
        let deadline = std::time::Instant::now() + timeout;
        loop {
            let present: bool = self.page.evaluate(js.clone()).await?.into_value()?;
            if present {
                return Ok(true);
            }
            if std::time::Instant::now() >= deadline {
                return Ok(false);
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn wait_for_url(&self, url: &str, timeout: Duration) -> Result<(), DriverError> {
        let deadline = std::time::Instant::now() + timeout;
        loop {
            if let Some(current) = self.page.url().await? {
                if current.starts_with(url) {
                    return Ok(());
                }
            }
            if std::time::Instant::now() >= deadline {
                return Err(DriverError::WaitTimeout {
                    what: format!("url {}", url),
                    timeout,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn current_url(&self) -> Result<String, DriverError> {
        self.page
            .url()
            .await?
            .ok_or_else(|| DriverError::MissingText("page url".to_string()))
    }

    async fn inner_text(&self, selector: &str) -> Result<String, DriverError> {
        self.wait_for_selector(selector, ELEMENT_TIMEOUT).await?;
        let element = self.page.find_element(selector).await?;
        element
            .inner_text()
            .await?
            .ok_or_else(|| DriverError::MissingText(selector.to_string()))
    }

    async fn inner_texts(&self, selector: &str) -> Result<Vec<String>, DriverError> {
        let mut texts = Vec::new();
        for element in self.page.find_elements(selector).await? {
            if let Some(text) = element.inner_text().await? {
                texts.push(text);
            }
        }
        Ok(texts)
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<String, DriverError> {
        self.wait_for_selector(selector, ELEMENT_TIMEOUT).await?;
        let element = self.page.find_element(selector).await?;
        element
            .attribute(name)
            .await?
            .ok_or_else(|| DriverError::MissingAttribute {
                selector: selector.to_string(),
                name: name.to_string(),
            })
    }

    async fn input_value(&self, selector: &str) -> Result<String, DriverError> {
        self.wait_for_selector(selector, ELEMENT_TIMEOUT).await?;
        let js = format!(
            "(function() {{ const el = document.querySelector({}); return el ? el.value : null; }})()",
            Self::js_str(selector)
        );
        let value: Option<String> = self.page.evaluate(js).await?.into_value()?;
        value.ok_or_else(|| DriverError::MissingElement(selector.to_string()))
    }

    async fn screenshot_full_page(&self) -> Result<Vec<u8>, DriverError> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(true)
            .build();
        Ok(self.page.screenshot(params).await?)
    }
}
