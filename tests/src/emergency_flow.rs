use hms_model::{FixedClock, PatientId};
use hms_registry::{Hospital, RegistryError};
use hms_store::FileStore;
use pretty_assertions::assert_eq;

const STAMP: &str = "2025-03-04 22:00:00";

#[test]
fn emergencies_are_handled_first_come_first_served() {
    crate::init_logging();
    let dir = tempfile::tempdir().unwrap();
    let mut hospital = Hospital::open(FileStore::new(dir.path()), FixedClock::new(STAMP));
    let a = hospital.register_patient("A", 30, "555");
    let b = hospital.register_patient("B", 40, "556");

    hospital.add_emergency(b).unwrap();
    hospital.add_emergency(a).unwrap();
    assert_eq!(hospital.pending_emergencies().collect::<Vec<_>>(), vec![b, a]);

    assert_eq!(hospital.handle_emergency(), Some(b));
    assert_eq!(hospital.handle_emergency(), Some(a));
    assert_eq!(hospital.handle_emergency(), None);

    assert_eq!(
        hospital.patient(b).unwrap().history(),
        vec![
            format!("Emergency Case Handled on {STAMP}"),
            format!("Marked as Emergency Case on {STAMP}"),
        ]
    );
}

#[test]
fn unknown_patient_is_not_queued() {
    let dir = tempfile::tempdir().unwrap();
    let mut hospital = Hospital::open(FileStore::new(dir.path()), FixedClock::new(STAMP));

    assert!(matches!(
        hospital.add_emergency(PatientId(42)),
        Err(RegistryError::PatientNotFound(PatientId(42)))
    ));
    assert_eq!(hospital.pending_emergencies().count(), 0);
    assert_eq!(hospital.handle_emergency(), None);
}

#[test]
fn same_patient_may_be_queued_twice() {
    let dir = tempfile::tempdir().unwrap();
    let mut hospital = Hospital::open(FileStore::new(dir.path()), FixedClock::new(STAMP));
    let a = hospital.register_patient("A", 30, "555");

    hospital.add_emergency(a).unwrap();
    hospital.add_emergency(a).unwrap();
    assert_eq!(hospital.handle_emergency(), Some(a));
    assert_eq!(hospital.handle_emergency(), Some(a));
    assert_eq!(hospital.patient(a).unwrap().history().len(), 4);
}
