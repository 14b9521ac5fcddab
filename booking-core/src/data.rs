//! Catalog sources.
use crate::catalog::{Catalog, CatalogError};

/// Name of the ticket-modal tier catalog.
pub const TICKET_TIERS: &str = "ticket_tiers";
/// Name of the registration-page ticket type catalog.
pub const REGISTRATION_TYPES: &str = "registration_types";

/// Abstracts where catalogs come from.
/// Platform-specific implementations should provide this
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the catalog registered under `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is unknown or cannot be parsed.
    fn load_catalog(&self, name: &str) -> Result<Catalog, Self::Error>;
}

/// Mock catalogs compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogs;

impl EmbeddedCatalogs {
    /// Names accepted by [`CatalogLoader::load_catalog`].
    #[must_use]
    pub const fn names() -> &'static [&'static str] {
        &[TICKET_TIERS, REGISTRATION_TYPES]
    }

    fn source(name: &str) -> Option<&'static str> {
        match name {
            TICKET_TIERS => Some(include_str!("../assets/ticket_tiers.json")),
            REGISTRATION_TYPES => Some(include_str!("../assets/registration_types.json")),
            _ => None,
        }
    }
}

impl CatalogLoader for EmbeddedCatalogs {
    type Error = CatalogError;

    fn load_catalog(&self, name: &str) -> Result<Catalog, Self::Error> {
        let text = Self::source(name).ok_or_else(|| CatalogError::Unknown(name.to_string()))?;
        Catalog::from_json(text)
    }
}
