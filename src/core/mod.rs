//! Core module containing the domain types, selection logic, and errors

pub mod criteria;
pub mod error;
pub mod events;
pub mod restaurant;
pub mod selector;
pub mod validation;

pub use criteria::FilterCriteria;
pub use error::{
    ConfigError, DinewheelError, DinewheelResult, SelectionError, StorageError, StoreError,
    ValidationError,
};
pub use events::{EventBus, EventEnvelope, StoreEvent};
pub use restaurant::{Restaurant, RestaurantDraft};
pub use selector::{filter_matching, pick_random};
