//! Host-page side effects: user acknowledgements and full reloads.
//!
//! A successful login reloads the page so any session-dependent markup is
//! rebuilt from scratch. During server rendering both operations are no-ops.

#[cfg(test)]
#[path = "host_page_test.rs"]
mod host_page_test;

use std::sync::Arc;

/// Browser page the site is running in.
pub trait HostPage: Send + Sync {
    /// Tell the reader something happened (a blocking alert in the browser).
    fn acknowledge(&self, message: &str);
    /// Reload the current document.
    fn reload(&self);
}

/// Host page for the current build.
pub fn for_environment() -> Arc<dyn HostPage> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserHostPage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(NoopHostPage)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHostPage;

impl HostPage for NoopHostPage {
    fn acknowledge(&self, message: &str) {
        log::debug!("acknowledge skipped outside the browser: {message}");
    }

    fn reload(&self) {
        log::debug!("reload skipped outside the browser");
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHostPage;

#[cfg(feature = "hydrate")]
impl HostPage for BrowserHostPage {
    fn acknowledge(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn reload(&self) {
        if let Some(window) = web_sys::window() {
            if window.location().reload().is_err() {
                log::warn!("page reload failed");
            }
        }
    }
}
