use hms_model::{DoctorId, PatientId, RoomType};

/// Failures of a registry operation. None of them leave the registry in a
/// partially updated state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Patient ID '{0}' not found")]
    PatientNotFound(PatientId),

    #[error("Doctor ID '{0}' not found")]
    DoctorNotFound(DoctorId),

    #[error("Patient '{name}' is already admitted to {room}")]
    AlreadyAdmitted {
        id: PatientId,
        name: String,
        room: RoomType,
    },

    #[error("Patient '{name}' is not admitted")]
    NotAdmitted { id: PatientId, name: String },
}
