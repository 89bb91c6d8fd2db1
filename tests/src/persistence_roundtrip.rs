use std::fs;

use hms_model::{Admission, Department, FixedClock, PatientId, RoomType};
use hms_registry::Hospital;
use hms_store::FileStore;
use pretty_assertions::assert_eq;

const STAMP: &str = "2025-03-05 08:00:00";

fn reopen(dir: &std::path::Path) -> Hospital<FileStore> {
    Hospital::open(FileStore::new(dir), FixedClock::new(STAMP))
}

#[test]
fn restart_restores_records_and_continues_ids() {
    crate::init_logging();
    let dir = tempfile::tempdir().unwrap();

    {
        let mut hospital = reopen(dir.path());
        let a = hospital.register_patient("A", 30, "555-0001");
        hospital.register_patient("B", 41, "555-0002");
        let doctor = hospital.add_doctor("Dr. Who", Department::Emergency);
        hospital.admit_patient(a, RoomType::SemiPrivate).unwrap();
        hospital.book_appointment(doctor, a).unwrap();
        hospital.book_appointment(doctor, a).unwrap();
        hospital.save_all().unwrap();
    }

    let patients = fs::read_to_string(dir.path().join("patients.csv")).unwrap();
    assert_eq!(
        patients,
        "ID,Name,Age,Contact,Admission Status,Room Type\n\
         1,A,30,555-0001,Admitted,Semi-Private Room\n\
         2,B,41,555-0002,Not Admitted,None\n"
    );
    let doctors = fs::read_to_string(dir.path().join("doctors.csv")).unwrap();
    assert_eq!(
        doctors,
        "ID,Name,Department,Appointment\n1,Dr. Who,Emergency,2\n"
    );

    let mut hospital = reopen(dir.path());
    let a = hospital.patient(PatientId(1)).unwrap();
    assert_eq!(a.admission(), Admission::Admitted(RoomType::SemiPrivate));
    // History and queues are not part of the files.
    assert!(a.history().is_empty());
    let doctor = &hospital.doctors()[0];
    assert_eq!(doctor.appointment_count(), 2);
    assert_eq!(doctor.waiting().count(), 0);

    assert_eq!(hospital.register_patient("C", 50, "555-0003"), PatientId(3));
}

#[test]
fn commas_in_text_do_not_shift_columns() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut hospital = reopen(dir.path());
        hospital.register_patient("Doe, John", 35, "555,1234");
    }

    let hospital = reopen(dir.path());
    let p = hospital.patient(PatientId(1)).unwrap();
    assert_eq!(p.name(), "Doe  John");
    assert_eq!(p.contact(), "555 1234");
    assert_eq!(p.age(), 35);
}

#[test]
fn malformed_rows_are_skipped_on_load() {
    crate::init_logging();
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("patients.csv"),
        "ID,Name,Age,Contact,Admission Status,Room Type\n\
         1,A,30,555,Not Admitted,None\n\
         x,B,40,556,Not Admitted,None\n\
         \n\
         3,C,old,557,Not Admitted,None\n\
         4,D,22,558,Admitted,Broom Closet\n\
         5,E,61,559,Admitted,ICU\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("doctors.csv"),
        "ID,Name,Department,Appointment\n1,Dr. X,Cardiology,-1\n2,Dr. Y,Pediatrics,3\n",
    )
    .unwrap();

    let mut hospital = reopen(dir.path());
    let ids: Vec<u32> = hospital.patients().iter().map(|p| p.id().0).collect();
    assert_eq!(ids, vec![1, 5]);
    assert_eq!(hospital.doctors().len(), 1);
    assert_eq!(hospital.doctors()[0].appointment_count(), 3);

    assert_eq!(hospital.register_patient("F", 20, ""), PatientId(6));
}

#[test]
fn missing_files_start_empty() {
    let dir = tempfile::tempdir().unwrap();
    let hospital = reopen(&dir.path().join("not-yet"));
    assert!(hospital.patients().is_empty());
    assert!(hospital.doctors().is_empty());
}

#[test]
fn unreadable_file_starts_empty_and_registry_keeps_working() {
    crate::init_logging();
    let dir = tempfile::tempdir().unwrap();
    // A directory in place of the patient file cannot be read as text.
    fs::create_dir(dir.path().join("patients.csv")).unwrap();
    fs::write(
        dir.path().join("doctors.csv"),
        "ID,Name,Department,Appointment\n3,Dr. Y,Pediatrics,1\n",
    )
    .unwrap();

    let mut hospital = reopen(dir.path());
    assert!(hospital.patients().is_empty());
    assert_eq!(hospital.doctors().len(), 1);

    // The save fails and is logged; the patient still exists in memory.
    let id = hospital.register_patient("A", 30, "555");
    assert_eq!(id, PatientId(1));
    assert_eq!(hospital.patient(id).unwrap().name(), "A");
    assert!(hospital.save_patients().is_err());
}

#[test]
fn non_utf8_byte_does_not_wipe_other_patients() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = b"ID,Name,Age,Contact,Admission Status,Room Type\n\
        1,Ana,30,555-0001,Not Admitted,None\n\
        2,Jos"
        .to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(b",41,555-0002,Not Admitted,None\n3,Li,52,555-0003,Admitted,ICU\n");
    fs::write(dir.path().join("patients.csv"), bytes).unwrap();

    let mut hospital = reopen(dir.path());
    assert_eq!(hospital.patients().len(), 3);
    assert_eq!(hospital.register_patient("New", 20, "1"), PatientId(4));

    let reloaded = reopen(dir.path());
    let ids: Vec<u32> = reloaded.patients().iter().map(|p| p.id().0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}
