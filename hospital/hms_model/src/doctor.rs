use std::collections::VecDeque;

use crate::department::Department;
use crate::ids::{DoctorId, PatientId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    id: DoctorId,
    name: String,
    department: Department,
    queue: VecDeque<PatientId>,
    // Appointments restored from the doctor file; their queue entries were not persisted.
    carried_over: u32,
}

impl Doctor {
    pub fn new(id: DoctorId, name: impl Into<String>, department: Department) -> Self {
        Self::restore(id, name, department, 0)
    }

    /// Rebuild a doctor from a persisted row. Only the aggregate appointment
    /// count survives a reload; the queue itself starts empty.
    pub fn restore(
        id: DoctorId,
        name: impl Into<String>,
        department: Department,
        appointment_count: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department,
            queue: VecDeque::new(),
            carried_over: appointment_count,
        }
    }

    pub fn id(&self) -> DoctorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn schedule_appointment(&mut self, patient: PatientId) {
        self.queue.push_back(patient);
    }

    /// Next waiting patient in booking order, or `None` when the queue is empty.
    pub fn see_next_patient(&mut self) -> Option<PatientId> {
        self.queue.pop_front()
    }

    /// Outstanding appointments: live queue entries plus any count carried
    /// over from a previous session.
    pub fn appointment_count(&self) -> u32 {
        let queued = u32::try_from(self.queue.len()).unwrap_or(u32::MAX);
        self.carried_over.saturating_add(queued)
    }

    pub fn waiting(&self) -> impl Iterator<Item = PatientId> + '_ {
        self.queue.iter().copied()
    }
}
