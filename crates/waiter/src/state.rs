//! Application state shared across handlers.

use std::sync::Arc;

use comandera_core::Menu;

use crate::config::WaiterConfig;
use crate::pos::PosClient;
use crate::roster::CustomerRoster;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the immutable menu, the POS backend client, and the
/// customer roster.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WaiterConfig,
    menu: Menu,
    pos: PosClient,
    roster: CustomerRoster,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Waiter configuration
    /// * `menu` - The menu loaded at startup
    #[must_use]
    pub fn new(config: WaiterConfig, menu: Menu) -> Self {
        let pos = PosClient::new(&config.pos);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                menu,
                pos,
                roster: CustomerRoster::new(),
            }),
        }
    }

    /// Get a reference to the waiter configuration.
    #[must_use]
    pub fn config(&self) -> &WaiterConfig {
        &self.inner.config
    }

    /// Get a reference to the menu.
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.inner.menu
    }

    /// Get a reference to the POS backend client.
    #[must_use]
    pub fn pos(&self) -> &PosClient {
        &self.inner.pos
    }

    /// Get a reference to the customer roster.
    #[must_use]
    pub fn roster(&self) -> &CustomerRoster {
        &self.inner.roster
    }
}
