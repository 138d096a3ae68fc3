use crate::models::Listing;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the listing dataset
#[derive(Debug, Error)]
pub enum ListingStoreError {
    #[error("Failed to read listing file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse listing file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Read-only, ordered listing collection loaded once at startup
///
/// The store is immutable after load and safe to share across concurrent
/// filter invocations without coordination.
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    /// Load listings from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ListingStoreError> {
        let raw = std::fs::read_to_string(path)?;
        let listings: Vec<Listing> = serde_json::from_str(&raw)?;
        Ok(Self { listings })
    }

    /// Load listings, degrading to an empty collection on failure
    ///
    /// The filter engine treats an empty collection as a valid input, so
    /// a missing or malformed dataset downgrades the service rather than
    /// preventing startup.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(store) => {
                tracing::info!("Loaded {} listings", store.len());
                store
            }
            Err(e) => {
                tracing::error!(
                    "Failed to load listings from {}, serving an empty collection: {}",
                    path.as_ref().display(),
                    e
                );
                Self::empty()
            }
        }
    }

    /// An empty store
    pub fn empty() -> Self {
        Self { listings: Vec::new() }
    }

    /// All listings in dataset order
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
