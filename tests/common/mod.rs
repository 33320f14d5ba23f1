//! Scripted [`PageDriver`] used by the integration tests. Reads come from
//! fixed maps, navigation succeeds only for URLs the script allows, and
//! every interaction lands in a call log so tests can assert ordering.

// Each test binary compiles its own copy; not every binary uses every helper.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use upwork_crawler::driver::{DriverError, PageDriver};

#[derive(Default)]
pub struct MockPage {
    /// selector -> inner text of the first match
    pub texts: HashMap<String, String>,
    /// selector -> inner text of every match, in order
    pub text_lists: HashMap<String, Vec<String>>,
    /// (selector, attribute name) -> value
    pub attributes: HashMap<(String, String), String>,
    /// selector -> live input value
    pub input_values: HashMap<String, String>,
    /// text fragments "visible" on the page after the form submits
    pub visible_texts: Vec<String>,
    /// URLs the page is allowed to reach; anything else times out
    pub reachable_urls: Vec<String>,
    pub calls: Mutex<Vec<String>>,
    pub url: Mutex<String>,
}

impl MockPage {
    pub fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_text(&mut self, selector: &str, text: &str) {
        self.texts.insert(selector.to_string(), text.to_string());
    }

    pub fn set_attribute(&mut self, selector: &str, name: &str, value: &str) {
        self.attributes
            .insert((selector.to_string(), name.to_string()), value.to_string());
    }

    pub fn set_input(&mut self, selector: &str, value: &str) {
        self.input_values
            .insert(selector.to_string(), value.to_string());
    }
}

#[async_trait]
impl PageDriver for MockPage {
    async fn goto(&self, url: &str) -> Result<(), DriverError> {
        self.record(format!("goto {}", url));
        *self.url.lock().unwrap() = url.to_string();
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<(), DriverError> {
        self.record(format!("click {}", selector));
        Ok(())
    }

    async fn click_text(&self, text: &str) -> Result<(), DriverError> {
        self.record(format!("click_text {}", text));
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<(), DriverError> {
        self.record(format!("fill {} = {}", selector, value));
        Ok(())
    }

    async fn wait_for_selector(
        &self,
        selector: &str,
        _timeout: Duration,
    ) -> Result<(), DriverError> {
        self.record(format!("wait_for_selector {}", selector));
        Ok(())
    }

    async fn wait_for_text(&self, needle: &str, _timeout: Duration) -> Result<bool, DriverError> {
        self.record(format!("wait_for_text {}", needle));
        Ok(self.visible_texts.iter().any(|t| t.contains(needle)))
    }

    async fn wait_for_url(&self, url: &str, timeout: Duration) -> Result<(), DriverError> {
        self.record(format!("wait_for_url {}", url));
        if self.reachable_urls.iter().any(|u| u == url) {
            *self.url.lock().unwrap() = url.to_string();
            Ok(())
        } else {
            Err(DriverError::WaitTimeout {
                what: format!("url {}", url),
                timeout,
            })
        }
    }

    async fn current_url(&self) -> Result<String, DriverError> {
        Ok(self.url.lock().unwrap().clone())
    }

    async fn inner_text(&self, selector: &str) -> Result<String, DriverError> {
        self.texts
            .get(selector)
            .cloned()
            .ok_or_else(|| DriverError::MissingElement(selector.to_string()))
    }

    async fn inner_texts(&self, selector: &str) -> Result<Vec<String>, DriverError> {
        Ok(self.text_lists.get(selector).cloned().unwrap_or_default())
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<String, DriverError> {
        self.attributes
            .get(&(selector.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| DriverError::MissingAttribute {
                selector: selector.to_string(),
                name: name.to_string(),
            })
    }

    async fn input_value(&self, selector: &str) -> Result<String, DriverError> {
        self.input_values
            .get(selector)
            .cloned()
            .ok_or_else(|| DriverError::MissingElement(selector.to_string()))
    }

    async fn screenshot_full_page(&self) -> Result<Vec<u8>, DriverError> {
        self.record("screenshot".to_string());
        Ok(Vec::new())
    }
}
