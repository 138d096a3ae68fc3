// Service exports
pub mod listings;
pub mod overpass;
pub mod translator;

pub use listings::{ListingStore, ListingStoreError};
pub use overpass::{OverpassClient, OverpassError};
pub use translator::{TranslatorClient, TranslatorError};
