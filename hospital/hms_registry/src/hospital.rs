use std::collections::VecDeque;

use hms_model::{
    AdmissionError, Clock, Department, Doctor, DoctorId, Patient, PatientId, RoomType,
};
use hms_store::{Record, SnapshotStore, StoreError};

use crate::error::RegistryError;
use crate::ids::IdCounter;

/// Names of the two parties of a confirmed appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub doctor: String,
    pub patient: String,
}

/// Owns every patient and doctor plus the emergency queue.
///
/// Lookups are linear scans by ID; IDs are unique because they only come
/// from the registry's own counters (or from a file whose duplicate rows were
/// dropped on load).
pub struct Hospital<S> {
    store: S,
    clock: Box<dyn Clock>,
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    // Plain references: an ID may appear more than once.
    emergencies: VecDeque<PatientId>,
    patient_ids: IdCounter,
    doctor_ids: IdCounter,
}

impl<S: SnapshotStore> Hospital<S> {
    /// Load both collections from `store`. Unreadable data is logged and
    /// treated as empty; the registry is always usable afterwards.
    pub fn open(store: S, clock: impl Clock + 'static) -> Self {
        let patients: Vec<Patient> = load_or_empty(&store);
        let doctors: Vec<Doctor> = load_or_empty(&store);

        let mut patient_ids = IdCounter::new();
        for p in &patients {
            patient_ids.observe(p.id().0);
        }
        let mut doctor_ids = IdCounter::new();
        for d in &doctors {
            doctor_ids.observe(d.id().0);
        }
        log::info!(
            "loaded {} patient(s) and {} doctor(s)",
            patients.len(),
            doctors.len()
        );

        Self {
            store,
            clock: Box::new(clock),
            patients,
            doctors,
            emergencies: VecDeque::new(),
            patient_ids,
            doctor_ids,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id() == id)
    }

    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id() == id)
    }

    pub fn pending_emergencies(&self) -> impl Iterator<Item = PatientId> + '_ {
        self.emergencies.iter().copied()
    }

    /// Register a patient under the next free ID and save the patient file.
    /// A failed save is logged; the patient stays registered in memory.
    pub fn register_patient(
        &mut self,
        name: impl Into<String>,
        age: u32,
        contact: impl Into<String>,
    ) -> PatientId {
        let id = PatientId(self.patient_ids.next_id());
        self.patients.push(Patient::new(id, name, age, contact));
        log::debug!("registered patient {id}");
        self.persist(&self.patients);
        id
    }

    /// Add a doctor under the next free ID and save the doctor file.
    pub fn add_doctor(&mut self, name: impl Into<String>, department: Department) -> DoctorId {
        let id = DoctorId(self.doctor_ids.next_id());
        self.doctors.push(Doctor::new(id, name, department));
        log::debug!("added doctor {id} ({department})");
        self.persist(&self.doctors);
        id
    }

    pub fn admit_patient(
        &mut self,
        id: PatientId,
        room: RoomType,
    ) -> Result<&Patient, RegistryError> {
        let patient = find_patient_mut(&mut self.patients, id)?;
        patient
            .admit(room, self.clock.as_ref())
            .map_err(|e| admission_error(patient, e))?;
        log::debug!("admitted patient {id} to {room}");
        Ok(&*patient)
    }

    pub fn discharge_patient(&mut self, id: PatientId) -> Result<&Patient, RegistryError> {
        let patient = find_patient_mut(&mut self.patients, id)?;
        patient
            .discharge(self.clock.as_ref())
            .map_err(|e| admission_error(patient, e))?;
        log::debug!("discharged patient {id}");
        Ok(&*patient)
    }

    pub fn add_medical_record(
        &mut self,
        id: PatientId,
        record: impl Into<String>,
    ) -> Result<&Patient, RegistryError> {
        let patient = find_patient_mut(&mut self.patients, id)?;
        patient.add_medical_record(record);
        Ok(&*patient)
    }

    pub fn request_test(
        &mut self,
        id: PatientId,
        test: impl Into<String>,
    ) -> Result<&Patient, RegistryError> {
        let patient = find_patient_mut(&mut self.patients, id)?;
        patient.request_test(test, self.clock.as_ref());
        Ok(&*patient)
    }

    /// Perform the patient's oldest pending test. `Ok(None)` when nothing is
    /// pending.
    pub fn perform_test(&mut self, id: PatientId) -> Result<Option<String>, RegistryError> {
        let patient = find_patient_mut(&mut self.patients, id)?;
        Ok(patient.perform_test(self.clock.as_ref()))
    }

    /// Book `patient_id` with `doctor_id`. Both IDs are resolved before
    /// anything is changed, so a failed booking touches neither side.
    pub fn book_appointment(
        &mut self,
        doctor_id: DoctorId,
        patient_id: PatientId,
    ) -> Result<Booking, RegistryError> {
        let d = self
            .doctors
            .iter()
            .position(|d| d.id() == doctor_id)
            .ok_or(RegistryError::DoctorNotFound(doctor_id))?;
        let p = self
            .patients
            .iter()
            .position(|p| p.id() == patient_id)
            .ok_or(RegistryError::PatientNotFound(patient_id))?;

        let doctor = &mut self.doctors[d];
        doctor.schedule_appointment(patient_id);
        let patient = &mut self.patients[p];
        patient.add_medical_record(format!(
            "Appointment booked with Doctor ID {doctor_id} on {}",
            self.clock.stamp()
        ));
        log::debug!("booked patient {patient_id} with doctor {doctor_id}");

        Ok(Booking {
            doctor: doctor.name().to_string(),
            patient: patient.name().to_string(),
        })
    }

    /// Next patient for a doctor, `Ok(None)` when nobody is waiting.
    pub fn see_next_patient(
        &mut self,
        doctor_id: DoctorId,
    ) -> Result<Option<PatientId>, RegistryError> {
        let doctor = self
            .doctors
            .iter_mut()
            .find(|d| d.id() == doctor_id)
            .ok_or(RegistryError::DoctorNotFound(doctor_id))?;
        Ok(doctor.see_next_patient())
    }

    pub fn add_emergency(&mut self, id: PatientId) -> Result<&Patient, RegistryError> {
        let patient = find_patient_mut(&mut self.patients, id)?;
        patient.add_medical_record(format!("Marked as Emergency Case on {}", self.clock.stamp()));
        self.emergencies.push_back(id);
        log::debug!("patient {id} queued as emergency");
        Ok(&*patient)
    }

    /// Take the oldest emergency. The ID is returned even if it no longer
    /// resolves to a patient; `None` only when the queue is empty.
    pub fn handle_emergency(&mut self) -> Option<PatientId> {
        let id = self.emergencies.pop_front()?;
        match self.patients.iter_mut().find(|p| p.id() == id) {
            Some(patient) => patient
                .add_medical_record(format!("Emergency Case Handled on {}", self.clock.stamp())),
            None => log::warn!("handled emergency for unknown patient {id}"),
        }
        Some(id)
    }

    /// Rewrite the patient file from memory.
    pub fn save_patients(&self) -> Result<(), StoreError> {
        self.store.save(&self.patients)
    }

    /// Rewrite the doctor file from memory.
    pub fn save_doctors(&self) -> Result<(), StoreError> {
        self.store.save(&self.doctors)
    }

    /// Save both files. Both are attempted; the first failure is returned.
    pub fn save_all(&self) -> Result<(), StoreError> {
        let patients = self.save_patients();
        let doctors = self.save_doctors();
        patients.and(doctors)
    }

    fn persist<T: Record>(&self, records: &[T]) {
        if let Err(e) = self.store.save(records) {
            log::error!("{e}");
        }
    }
}

fn load_or_empty<S: SnapshotStore, T: Record>(store: &S) -> Vec<T> {
    match store.load::<T>() {
        Ok(snapshot) => {
            if snapshot.skipped > 0 {
                log::warn!(
                    "skipped {} unreadable {} row(s)",
                    snapshot.skipped,
                    T::KIND
                );
            }
            snapshot.records
        }
        Err(e) => {
            log::warn!("{e}; starting with no {} data", T::KIND);
            Vec::new()
        }
    }
}

fn find_patient_mut(
    patients: &mut [Patient],
    id: PatientId,
) -> Result<&mut Patient, RegistryError> {
    patients
        .iter_mut()
        .find(|p| p.id() == id)
        .ok_or(RegistryError::PatientNotFound(id))
}

fn admission_error(patient: &Patient, err: AdmissionError) -> RegistryError {
    match err {
        AdmissionError::AlreadyAdmitted { room } => RegistryError::AlreadyAdmitted {
            id: patient.id(),
            name: patient.name().to_string(),
            room,
        },
        AdmissionError::NotAdmitted => RegistryError::NotAdmitted {
            id: patient.id(),
            name: patient.name().to_string(),
        },
    }
}
