//! Server state and configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::page::PageOptions;
use crate::print::PrintTrigger;
use crate::view::Branding;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Delay before the browser print dialog opens
    pub print_delay: Duration,
    /// Whether rendered pages open the print dialog on their own
    pub auto_print: bool,
    /// Kiosk branding
    pub branding: Branding,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            print_delay: PrintTrigger::DEFAULT_DELAY,
            auto_print: true,
            branding: Branding::default(),
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Read once per request.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(config: ServerConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Page options derived from the configuration.
    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            branding: self.config.branding.clone(),
            print_delay: self.config.auto_print.then_some(self.config.print_delay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_options_auto_print() {
        let state = AppState::new(ServerConfig::default());
        assert_eq!(
            state.page_options().print_delay,
            Some(Duration::from_millis(800))
        );
    }

    #[test]
    fn test_page_options_preview() {
        let state = AppState::new(ServerConfig {
            auto_print: false,
            ..Default::default()
        });
        assert_eq!(state.page_options().print_delay, None);
    }
}
