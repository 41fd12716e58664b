use anyhow::{anyhow, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        Self::launch_with_size(1280, 900)
    }

    /// Narrow sizes put the site in its mobile layout.
    pub fn launch_with_size(width: u32, height: u32) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((width, height)))
            .build()
            .map_err(|e| anyhow!("launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn has_element(&self, selector: &str) -> bool {
        self.tab.find_element(selector).is_ok()
    }

    pub fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        element.type_into(text)?;
        Ok(())
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Poll until `selector` contains `needle`; re-renders are asynchronous.
    pub fn wait_for_text(&self, selector: &str, needle: &str) -> Result<String> {
        for _ in 0..50 {
            if let Ok(text) = self.find_element(selector) {
                if text.contains(needle) {
                    return Ok(text);
                }
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        anyhow::bail!("`{selector}` never contained `{needle}`")
    }

    /// Evaluate a JS expression and return its JSON value.
    pub fn eval(&self, expression: &str) -> Result<serde_json::Value> {
        let result = self.tab.evaluate(expression, false)?;
        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Poll until a JS expression evaluates to `expected`.
    pub fn wait_for_value(&self, expression: &str, expected: &serde_json::Value) -> Result<()> {
        let mut last = serde_json::Value::Null;
        for _ in 0..50 {
            last = self.eval(expression)?;
            if &last == expected {
                return Ok(());
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        anyhow::bail!("`{expression}` stayed at {last}, expected {expected}")
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }
}
