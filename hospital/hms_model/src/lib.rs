//! Domain model for the hospital record manager.
//!
//! The entities here know nothing about files or menus. A [`Patient`] tracks
//! its own admission state, medical history and pending tests; a [`Doctor`]
//! tracks its appointment queue. Wall-clock time enters only through the
//! [`Clock`] trait so every history entry is reproducible under test.
//!
//! ```
//! use hms_model::{FixedClock, Patient, PatientId, RoomType};
//!
//! let clock = FixedClock::new("2025-01-01 09:00:00");
//! let mut p = Patient::new(PatientId(1), "A", 30, "555-0001");
//! p.admit(RoomType::Icu, &clock).unwrap();
//! assert!(p.admit(RoomType::Private, &clock).is_err());
//! assert_eq!(p.history(), vec!["Admitted to ICU on 2025-01-01 09:00:00"]);
//! ```
pub mod clock;
pub mod department;
pub mod doctor;
pub mod error;
pub mod ids;
pub mod label;
pub mod patient;
pub mod room;

pub use clock::{Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use department::Department;
pub use doctor::Doctor;
pub use error::{AdmissionError, LabelError};
pub use ids::{DoctorId, PatientId};
pub use label::LabelTable;
pub use patient::{Admission, Patient};
pub use room::RoomType;
