pub mod config;
pub mod logging;

pub mod enrich;
pub mod error;
pub mod event;
pub mod query;
pub mod schema;
pub mod slot;

pub use config::{ParamsConfig, RawConfig, WhiteList};
pub use enrich::{enrich_properties, process_event};
pub use error::EnrichError;
pub use event::Event;
pub use slot::ConfigSlot;
