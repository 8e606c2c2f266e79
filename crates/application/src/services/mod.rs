mod zone_catalog;

pub use zone_catalog::ZoneCatalog;
