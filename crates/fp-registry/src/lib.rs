mod client;
mod de;
mod model;

pub use client::{
    DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT, REGISTRY_URL_ENV, RegistryClient,
    parse_finality_providers, registry_url,
};
pub use model::{Description, FinalityProvider};
