use crate::room::RoomType;

/// Rejected admission state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    #[error("already admitted to {room}")]
    AlreadyAdmitted { room: RoomType },

    #[error("not admitted")]
    NotAdmitted,
}

/// A display label or menu index that maps to no enumeration variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    #[error("unknown {kind} '{label}'")]
    UnknownLabel { kind: &'static str, label: String },

    #[error("invalid {kind} choice {index}, expected 0-{max}")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        max: usize,
    },
}
