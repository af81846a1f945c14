pub mod catalog;
pub mod event;

pub use catalog::{EventCatalog, NumericColumn};
pub use event::SeismicEvent;
