use std::collections::VecDeque;

use crate::clock::Clock;
use crate::error::AdmissionError;
use crate::ids::PatientId;
use crate::label::LabelTable;
use crate::room::RoomType;

/// Admission state. A room type exists only while admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Admission {
    #[default]
    NotAdmitted,
    Admitted(RoomType),
}

impl Admission {
    pub const ADMITTED: &'static str = "Admitted";
    pub const NOT_ADMITTED: &'static str = "Not Admitted";
    pub const NO_ROOM: &'static str = "None";

    pub fn room(self) -> Option<RoomType> {
        match self {
            Admission::Admitted(room) => Some(room),
            Admission::NotAdmitted => None,
        }
    }

    pub fn status_label(self) -> &'static str {
        match self {
            Admission::Admitted(_) => Self::ADMITTED,
            Admission::NotAdmitted => Self::NOT_ADMITTED,
        }
    }

    pub fn room_label(self) -> &'static str {
        self.room().map_or(Self::NO_ROOM, RoomType::label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    id: PatientId,
    name: String,
    age: u32,
    contact: String,
    admission: Admission,
    // Oldest entry first; `history()` reverses for display.
    history: Vec<String>,
    pending_tests: VecDeque<String>,
}

impl Patient {
    /// A freshly registered, not yet admitted patient.
    pub fn new(
        id: PatientId,
        name: impl Into<String>,
        age: u32,
        contact: impl Into<String>,
    ) -> Self {
        Self::restore(id, name, age, contact, Admission::NotAdmitted)
    }

    /// Rebuild a patient from persisted fields. History and pending tests are
    /// not persisted, so they start empty.
    pub fn restore(
        id: PatientId,
        name: impl Into<String>,
        age: u32,
        contact: impl Into<String>,
        admission: Admission,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            contact: contact.into(),
            admission,
            history: Vec::new(),
            pending_tests: VecDeque::new(),
        }
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn admission(&self) -> Admission {
        self.admission
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self.admission, Admission::Admitted(_))
    }

    pub fn admit(&mut self, room: RoomType, clock: &dyn Clock) -> Result<(), AdmissionError> {
        if let Admission::Admitted(current) = self.admission {
            return Err(AdmissionError::AlreadyAdmitted { room: current });
        }
        self.admission = Admission::Admitted(room);
        self.add_medical_record(format!("Admitted to {room} on {}", clock.stamp()));
        Ok(())
    }

    pub fn discharge(&mut self, clock: &dyn Clock) -> Result<(), AdmissionError> {
        if !self.is_admitted() {
            return Err(AdmissionError::NotAdmitted);
        }
        self.admission = Admission::NotAdmitted;
        self.add_medical_record(format!("Discharged from hospital on {}", clock.stamp()));
        Ok(())
    }

    pub fn add_medical_record(&mut self, record: impl Into<String>) {
        self.history.push(record.into());
    }

    pub fn request_test(&mut self, test: impl Into<String>, clock: &dyn Clock) {
        let test = test.into();
        self.add_medical_record(format!("Requested test: {test} on {}", clock.stamp()));
        self.pending_tests.push_back(test);
    }

    /// Runs the oldest pending test. `None` when nothing is pending, in which
    /// case the history is left alone.
    pub fn perform_test(&mut self, clock: &dyn Clock) -> Option<String> {
        let test = self.pending_tests.pop_front()?;
        self.add_medical_record(format!("Performed test: {test} on {}", clock.stamp()));
        Some(test)
    }

    pub fn pending_tests(&self) -> impl Iterator<Item = &str> {
        self.pending_tests.iter().map(String::as_str)
    }

    /// Medical history, most recent entry first.
    pub fn history(&self) -> Vec<&str> {
        self.history.iter().rev().map(String::as_str).collect()
    }
}
