use reqwest::Client;
use tracing::{info, warn};

use crate::{client, config::Config, models::Skip, selection::Selection};

/// Observable fetch lifecycle for one view activation.
///
/// The states are mutually exclusive and transition exactly once per fetch:
/// `Loading` to either `Failed` or `Ready`, never interleaved or repeated
/// without a fresh activation.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// Request in flight; initial state
    Loading,
    /// Fetch failed; message is suitable for end-user display
    Failed { message: String },
    /// Fetch succeeded
    Ready { skips: Vec<Skip> },
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::Loading
    }
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The error message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// The fetched records; empty unless the state is `Ready`.
    pub fn skips(&self) -> &[Skip] {
        match self {
            Self::Ready { skips } => skips,
            _ => &[],
        }
    }
}

/// View-level holder for one skip-selection screen: the fetch state plus
/// the current selection.
///
/// A consumer creates the browser, calls [`activate`](Self::activate) once
/// per view activation, and reads the settled state. There is no implicit
/// fetch tied to construction, no retry, and no polling; a user-driven
/// reload is a fresh activation.
#[derive(Debug, Default)]
pub struct SkipBrowser {
    state: CatalogState,
    selection: Selection,
}

impl SkipBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Perform the single outbound fetch for this view activation and
    /// settle the catalog state from its result.
    pub async fn activate(&mut self, client: &Client, config: &Config) -> &CatalogState {
        match client::fetch_skips(client, config).await {
            Ok(skips) => {
                info!(count = skips.len(), postcode = %config.location.postcode, "skip catalog loaded");
                self.state = CatalogState::Ready { skips };
            }
            Err(e) => {
                warn!(error = %e, "skip catalog fetch failed");
                self.state = CatalogState::Failed {
                    message: e.user_message(),
                };
            }
        }
        &self.state
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn skips(&self) -> &[Skip] {
        self.state.skips()
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Skip> {
        self.skips().iter().find(|s| s.id == id)
    }

    /// First record with the given size, if any.
    pub fn find_by_size(&self, size: u32) -> Option<&Skip> {
        self.skips().iter().find(|s| s.size == size)
    }

    /// Replace the current selection with the given record.
    pub fn select(&mut self, skip: Skip) {
        self.selection.select(skip);
    }

    pub fn selected(&self) -> Option<&Skip> {
        self.selection.current()
    }

    pub fn is_selected(&self, skip: &Skip) -> bool {
        self.selection.is_selected(skip)
    }
}
