use hms_model::{Department, DoctorId, FixedClock, PatientId, RoomType};
use hms_registry::{Hospital, RegistryError};
use hms_store::FileStore;
use pretty_assertions::assert_eq;

const STAMP: &str = "2025-03-04 09:10:11";

#[test]
fn admit_book_and_see_patient() {
    crate::init_logging();
    let dir = tempfile::tempdir().unwrap();
    let mut hospital = Hospital::open(FileStore::new(dir.path()), FixedClock::new(STAMP));

    let john = hospital.register_patient("John Doe", 35, "555-1234");
    let jane = hospital.register_patient("Jane Smith", 28, "555-5678");
    assert_eq!((john, jane), (PatientId(1), PatientId(2)));

    let smith = hospital.add_doctor("Dr. Smith", Department::Cardiology);
    let jones = hospital.add_doctor("Dr. Jones", Department::Neurology);
    assert_eq!((smith, jones), (DoctorId(1), DoctorId(2)));

    hospital.admit_patient(john, RoomType::GeneralWard).unwrap();
    let err = hospital.admit_patient(john, RoomType::Icu).unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyAdmitted { .. }));
    assert_eq!(
        hospital.patient(john).unwrap().admission().room(),
        Some(RoomType::GeneralWard)
    );

    let booking = hospital.book_appointment(smith, john).unwrap();
    assert_eq!(booking.doctor, "Dr. Smith");
    assert_eq!(booking.patient, "John Doe");
    assert_eq!(hospital.doctor(smith).unwrap().appointment_count(), 1);

    assert_eq!(hospital.see_next_patient(smith).unwrap(), Some(john));
    assert_eq!(hospital.see_next_patient(smith).unwrap(), None);
    assert_eq!(hospital.doctor(smith).unwrap().appointment_count(), 0);

    hospital.discharge_patient(john).unwrap();
    assert!(matches!(
        hospital.discharge_patient(john),
        Err(RegistryError::NotAdmitted { .. })
    ));

    let history = hospital.patient(john).unwrap().history();
    assert_eq!(
        history,
        vec![
            format!("Discharged from hospital on {STAMP}"),
            format!("Appointment booked with Doctor ID 1 on {STAMP}"),
            format!("Admitted to General Ward on {STAMP}"),
        ]
    );
}

#[test]
fn failed_booking_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut hospital = Hospital::open(FileStore::new(dir.path()), FixedClock::new(STAMP));
    let patient = hospital.register_patient("A", 30, "555");
    let doctor = hospital.add_doctor("Dr. B", Department::General);

    assert!(matches!(
        hospital.book_appointment(DoctorId(9), patient),
        Err(RegistryError::DoctorNotFound(DoctorId(9)))
    ));
    assert!(matches!(
        hospital.book_appointment(doctor, PatientId(9)),
        Err(RegistryError::PatientNotFound(PatientId(9)))
    ));
    assert_eq!(hospital.doctor(doctor).unwrap().appointment_count(), 0);
    assert!(hospital.patient(patient).unwrap().history().is_empty());
}

#[test]
fn tests_run_in_request_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut hospital = Hospital::open(FileStore::new(dir.path()), FixedClock::new(STAMP));
    let id = hospital.register_patient("A", 30, "555");

    hospital.request_test(id, "Blood Test").unwrap();
    hospital.request_test(id, "X-Ray").unwrap();

    assert_eq!(hospital.perform_test(id).unwrap().as_deref(), Some("Blood Test"));
    assert_eq!(hospital.perform_test(id).unwrap().as_deref(), Some("X-Ray"));
    assert_eq!(hospital.perform_test(id).unwrap(), None);
    assert!(matches!(
        hospital.perform_test(PatientId(5)),
        Err(RegistryError::PatientNotFound(_))
    ));
    assert_eq!(hospital.patient(id).unwrap().history().len(), 4);
}
