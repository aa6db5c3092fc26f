use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Headless Chrome with one tab per page.
pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        Self::with_window(None)
    }

    /// Narrow viewport, so the navbar shows the mobile menu toggle.
    pub fn launch_mobile() -> Result<Self> {
        Self::with_window(Some((390, 844)))
    }

    fn with_window(window_size: Option<(u32, u32)>) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(window_size)
            .build()
            .map_err(|e| anyhow::anyhow!("launch options: {e}"))?;

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

    /// Inner text of the first element matching `selector`.
    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.tab.find_elements(selector)?.len())
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

    /// Current `value` of a form control.
    pub fn value(&self, selector: &str) -> Result<String> {
        let js = format!(
            "document.querySelector({}).value",
            serde_json::to_string(selector)?
        );
        let result = self.tab.evaluate(&js, false)?;
        match result.value {
            Some(serde_json::Value::String(value)) => Ok(value),
            other => anyhow::bail!("{selector} has no string value: {other:?}"),
        }
    }

    pub fn exists(&self, selector: &str) -> bool {
        self.tab.find_element(selector).is_ok()
    }

    /// Poll until nothing matches `selector`.
    pub fn wait_until_gone(&self, selector: &str, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while self.exists(selector) {
            if Instant::now() > deadline {
                anyhow::bail!("{selector} still present after {timeout:?}");
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        Ok(())
    }

    /// Once the splash screen is gone the client has hydrated and its
    /// timers are running.
    pub fn wait_for_app(&self) -> Result<()> {
        self.wait_until_gone(".loading_screen", Duration::from_secs(30))
    }
}
