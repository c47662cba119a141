pub mod catalog;
pub use catalog::{CatalogSource, FixtureSource, VideoSource};

pub mod local;
pub use local::LocalProvider;

pub mod provider;
pub use provider::{ProviderError, VideoProvider};
