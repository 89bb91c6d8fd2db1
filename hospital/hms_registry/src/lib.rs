//! The hospital registry owns every patient and doctor, hands out IDs, keeps
//! the emergency queue and drives snapshot saves.
pub mod error;
pub mod hospital;
pub mod ids;

pub use error::RegistryError;
pub use hospital::{Booking, Hospital};
pub use ids::IdCounter;
