// Menu-driven front end over the hospital registry

use std::io::{self, Write};
use std::str::FromStr;

use hms_model::{Department, DoctorId, LabelTable, PatientId, RoomType};
use hms_registry::Hospital;
use hms_store::SnapshotStore;

use crate::input::{InputSource, Line};

struct Menu {
    title: &'static str,
    items: &'static [&'static str],
    back: &'static str,
}

const MAIN_MENU: Menu = Menu {
    title: "========== HOSPITAL MANAGEMENT SYSTEM ==========",
    items: &[
        "Patient Management",
        "Doctor Management",
        "Emergency Management",
    ],
    back: "Exit",
};

const PATIENT_MENU: Menu = Menu {
    title: "--- Patient Management ---",
    items: &[
        "Register Patient",
        "Admit Patient",
        "Discharge Patient",
        "Request Medical Test",
        "Perform Medical Test",
        "View Patient Info",
        "Add Medical Record",
    ],
    back: "Back to Main Menu",
};

const DOCTOR_MENU: Menu = Menu {
    title: "--- Doctor Management ---",
    items: &[
        "Add Doctor",
        "Book Appointment",
        "View Doctor Info",
        "See Next Patient",
    ],
    back: "Back to Main Menu",
};

const EMERGENCY_MENU: Menu = Menu {
    title: "--- Emergency Management ---",
    items: &["Add Emergency Case", "Handle Emergency Case"],
    back: "Back to Main Menu",
};

/// Why a menu action stopped early.
enum Halt {
    /// Prompt abandoned; return to the current menu.
    Cancelled,
    /// Input exhausted; leave every menu.
    Closed,
    Io(io::Error),
}

impl From<io::Error> for Halt {
    fn from(e: io::Error) -> Self {
        Halt::Io(e)
    }
}

type Step<T = ()> = Result<T, Halt>;

/// Reads menu choices from an [`InputSource`], runs one registry operation
/// per choice and prints the outcome to `out`.
pub struct Shell<S, I, W> {
    hospital: Hospital<S>,
    input: I,
    out: W,
}

impl<S: SnapshotStore, I: InputSource, W: Write> Shell<S, I, W> {
    pub fn new(hospital: Hospital<S>, input: I, out: W) -> Self {
        Self {
            hospital,
            input,
            out,
        }
    }

    pub fn hospital(&self) -> &Hospital<S> {
        &self.hospital
    }

    pub fn into_parts(self) -> (Hospital<S>, W) {
        (self.hospital, self.out)
    }

    /// Run until the user exits or input ends, then save both files.
    pub fn run(&mut self) -> io::Result<()> {
        match self.main_menu() {
            Ok(()) | Err(Halt::Closed) | Err(Halt::Cancelled) => {}
            Err(Halt::Io(e)) => return Err(e),
        }
        writeln!(self.out, "Exiting system. Saving data...")?;
        if let Err(e) = self.hospital.save_all() {
            log::error!("{e}");
            writeln!(self.out, "ERROR: {e}")?;
        }
        self.out.flush()
    }

    fn main_menu(&mut self) -> Step {
        loop {
            match self.choose(&MAIN_MENU) {
                Ok(Some(0)) => return Ok(()),
                Ok(Some(1)) => self.submenu(&PATIENT_MENU, Self::patient_action)?,
                Ok(Some(2)) => self.submenu(&DOCTOR_MENU, Self::doctor_action)?,
                Ok(Some(3)) => self.submenu(&EMERGENCY_MENU, Self::emergency_action)?,
                Ok(_) | Err(Halt::Cancelled) => {}
                Err(e) => return Err(e),
            }
        }
    }

    fn submenu(&mut self, menu: &Menu, action: fn(&mut Self, usize) -> Step) -> Step {
        loop {
            let choice = match self.choose(menu) {
                Ok(Some(0)) => return Ok(()),
                Ok(Some(choice)) => choice,
                Ok(None) | Err(Halt::Cancelled) => continue,
                Err(e) => return Err(e),
            };
            match action(self, choice) {
                Ok(()) | Err(Halt::Cancelled) => {}
                Err(e) => return Err(e),
            }
        }
    }

    fn patient_action(&mut self, choice: usize) -> Step {
        match choice {
            1 => self.register_patient(),
            2 => self.admit_patient(),
            3 => self.discharge_patient(),
            4 => self.request_test(),
            5 => self.perform_test(),
            6 => self.view_patient(),
            7 => self.add_medical_record(),
            _ => Ok(()),
        }
    }

    fn doctor_action(&mut self, choice: usize) -> Step {
        match choice {
            1 => self.add_doctor(),
            2 => self.book_appointment(),
            3 => self.view_doctor(),
            4 => self.see_next_patient(),
            _ => Ok(()),
        }
    }

    fn emergency_action(&mut self, choice: usize) -> Step {
        match choice {
            1 => self.add_emergency(),
            2 => self.handle_emergency(),
            _ => Ok(()),
        }
    }

    fn register_patient(&mut self) -> Step {
        let Some(name) = self.ask_text("Enter name: ", "Name")? else {
            return Ok(());
        };
        let Some(age) = self.ask_parsed::<u32>("Enter age: ", "age")? else {
            return Ok(());
        };
        let contact = self.ask("Enter contact number: ")?.trim().to_string();
        let id = self.hospital.register_patient(name, age, contact);
        writeln!(self.out, "Patient registered with ID: {id}")?;
        Ok(())
    }

    fn admit_patient(&mut self) -> Step {
        let Some(id) = self.ask_patient_id()? else {
            return Ok(());
        };
        let Some(room) = self.pick::<RoomType>("Room type: ")? else {
            return Ok(());
        };
        match self.hospital.admit_patient(id, room) {
            Ok(p) => writeln!(self.out, "Patient '{}' is admitted to {room}.", p.name())?,
            Err(e) => writeln!(self.out, "ERROR: {e}.")?,
        }
        self.save_patients()
    }

    fn discharge_patient(&mut self) -> Step {
        let Some(id) = self.ask_patient_id()? else {
            return Ok(());
        };
        match self.hospital.discharge_patient(id) {
            Ok(p) => writeln!(self.out, "Patient '{}' has been discharged.", p.name())?,
            Err(e) => writeln!(self.out, "ERROR: {e}.")?,
        }
        self.save_patients()
    }

    fn request_test(&mut self) -> Step {
        let Some(id) = self.ask_patient_id()? else {
            return Ok(());
        };
        let Some(test) = self.ask_text("Enter test name: ", "Test name")? else {
            return Ok(());
        };
        match self.hospital.request_test(id, test.as_str()) {
            Ok(p) => writeln!(
                self.out,
                "Test '{test}' requested for patient '{}'.",
                p.name()
            )?,
            Err(e) => writeln!(self.out, "ERROR: {e}.")?,
        }
        self.save_patients()
    }

    fn perform_test(&mut self) -> Step {
        let Some(id) = self.ask_patient_id()? else {
            return Ok(());
        };
        match self.hospital.perform_test(id) {
            Ok(Some(test)) => {
                let name = self.patient_name(id);
                writeln!(self.out, "Patient '{name}' performed {test} test.")?;
            }
            Ok(None) => {
                let name = self.patient_name(id);
                writeln!(self.out, "No tests are pending for patient '{name}'.")?;
            }
            Err(e) => writeln!(self.out, "ERROR: {e}.")?,
        }
        self.save_patients()
    }

    fn add_medical_record(&mut self) -> Step {
        let Some(id) = self.ask_patient_id()? else {
            return Ok(());
        };
        let Some(record) = self.ask_text("Enter record: ", "Record")? else {
            return Ok(());
        };
        match self.hospital.add_medical_record(id, record) {
            Ok(p) => writeln!(self.out, "Medical record added for patient '{}'.", p.name())?,
            Err(e) => writeln!(self.out, "ERROR: {e}.")?,
        }
        self.save_patients()
    }

    fn view_patient(&mut self) -> Step {
        let Some(id) = self.ask_patient_id()? else {
            return Ok(());
        };
        let Some(p) = self.hospital.patient(id) else {
            writeln!(self.out, "ERROR: Patient ID '{id}' not found.")?;
            return Ok(());
        };
        let out = &mut self.out;
        writeln!(out, "\n========= Patient Information =========")?;
        writeln!(out, "ID : {}", p.id())?;
        writeln!(out, "Name : {}", p.name())?;
        writeln!(out, "Age : {}", p.age())?;
        writeln!(out, "Contact : {}", p.contact())?;
        writeln!(out, "Admission Status : {}", p.admission().status_label())?;
        writeln!(out, "Room Type : {}", p.admission().room_label())?;
        let pending: Vec<&str> = p.pending_tests().collect();
        if !pending.is_empty() {
            writeln!(out, "Pending Tests : {}", pending.join(", "))?;
        }
        let history = p.history();
        if history.is_empty() {
            writeln!(out, "No medical history available.")?;
        } else {
            writeln!(out, "\n------- Medical History -------")?;
            for entry in history {
                writeln!(out, "{entry}")?;
            }
        }
        Ok(())
    }

    fn add_doctor(&mut self) -> Step {
        let Some(name) = self.ask_text("Enter doctor's name (Dr. Name): ", "Name")? else {
            return Ok(());
        };
        let Some(department) = self.pick::<Department>("Department: ")? else {
            return Ok(());
        };
        let id = self.hospital.add_doctor(name, department);
        writeln!(self.out, "Doctor added with ID: {id}")?;
        Ok(())
    }

    fn book_appointment(&mut self) -> Step {
        let Some(doctor_id) = self.ask_doctor_id()? else {
            return Ok(());
        };
        let Some(patient_id) = self.ask_patient_id()? else {
            return Ok(());
        };
        match self.hospital.book_appointment(doctor_id, patient_id) {
            Ok(booking) => writeln!(
                self.out,
                "Patient '{}' booked appointment with {}.",
                booking.patient, booking.doctor
            )?,
            Err(e) => writeln!(self.out, "ERROR: {e}. Booking cancelled.")?,
        }
        self.save_doctors()
    }

    fn view_doctor(&mut self) -> Step {
        let Some(id) = self.ask_doctor_id()? else {
            return Ok(());
        };
        let Some(d) = self.hospital.doctor(id) else {
            writeln!(self.out, "ERROR: Doctor ID '{id}' not found.")?;
            return Ok(());
        };
        let out = &mut self.out;
        writeln!(out, "\n========= Doctor Information =========")?;
        writeln!(out, "ID : {}", d.id())?;
        writeln!(out, "Name : {}", d.name())?;
        writeln!(out, "Department : {}", d.department())?;
        writeln!(out, "Pending Appointments : {}", d.appointment_count())?;
        let waiting: Vec<String> = d.waiting().map(|p| p.to_string()).collect();
        if !waiting.is_empty() {
            writeln!(out, "Waiting Patients : {}", waiting.join(", "))?;
        }
        Ok(())
    }

    fn see_next_patient(&mut self) -> Step {
        let Some(id) = self.ask_doctor_id()? else {
            return Ok(());
        };
        match self.hospital.see_next_patient(id) {
            Ok(next) => {
                let doctor = self
                    .hospital
                    .doctor(id)
                    .map(|d| d.name().to_string())
                    .unwrap_or_default();
                match next {
                    Some(patient) => writeln!(
                        self.out,
                        "{doctor} is now seeing patient with ID: {patient}."
                    )?,
                    None => writeln!(self.out, "No patients in queue for {doctor}.")?,
                }
            }
            Err(e) => writeln!(self.out, "ERROR: {e}.")?,
        }
        self.save_doctors()
    }

    fn add_emergency(&mut self) -> Step {
        let Some(id) = self.ask_patient_id()? else {
            return Ok(());
        };
        match self.hospital.add_emergency(id) {
            Ok(p) => writeln!(self.out, "Patient '{}' added to emergency queue.", p.name())?,
            Err(e) => writeln!(self.out, "ERROR: {e}, please register first.")?,
        }
        self.save_patients()
    }

    fn handle_emergency(&mut self) -> Step {
        match self.hospital.handle_emergency() {
            Some(id) => match self.hospital.patient(id) {
                Some(p) => writeln!(self.out, "Emergency handled for patient '{}'.", p.name())?,
                None => writeln!(self.out, "Emergency handled for patient ID {id}.")?,
            },
            None => writeln!(self.out, "No emergency cases in queue.")?,
        }
        self.save_patients()
    }

    fn patient_name(&self, id: PatientId) -> String {
        self.hospital
            .patient(id)
            .map(|p| p.name().to_string())
            .unwrap_or_default()
    }

    fn save_patients(&mut self) -> Step {
        if let Err(e) = self.hospital.save_patients() {
            log::error!("{e}");
            writeln!(self.out, "ERROR: {e}")?;
        }
        Ok(())
    }

    fn save_doctors(&mut self) -> Step {
        if let Err(e) = self.hospital.save_doctors() {
            log::error!("{e}");
            writeln!(self.out, "ERROR: {e}")?;
        }
        Ok(())
    }

    fn choose(&mut self, menu: &Menu) -> Step<Option<usize>> {
        writeln!(self.out, "\n{}\n", menu.title)?;
        for (i, item) in menu.items.iter().enumerate() {
            writeln!(self.out, "{}. {item}", i + 1)?;
        }
        writeln!(self.out, "0. {}", menu.back)?;
        let answer = self.ask("-> Enter your choice: ")?;
        match answer.trim().parse::<usize>() {
            Ok(choice) if choice <= menu.items.len() => Ok(Some(choice)),
            _ => {
                writeln!(self.out, "ERROR: Invalid option. Try again.")?;
                Ok(None)
            }
        }
    }

    /// Offer every variant of `T` by menu index; a typed label is accepted too.
    fn pick<T: LabelTable>(&mut self, prompt: &str) -> Step<Option<T>> {
        for (i, (_, label)) in T::TABLE.iter().enumerate() {
            writeln!(self.out, "{i}. {label}")?;
        }
        let answer = self.ask(prompt)?;
        let answer = answer.trim();
        let picked = match answer.parse::<usize>() {
            Ok(index) => T::from_menu_index(index),
            Err(_) => T::from_label(answer),
        };
        match picked {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                writeln!(self.out, "ERROR: {e}.")?;
                Ok(None)
            }
        }
    }

    fn ask_patient_id(&mut self) -> Step<Option<PatientId>> {
        self.ask_parsed("Enter patient ID: ", "patient ID")
    }

    fn ask_doctor_id(&mut self) -> Step<Option<DoctorId>> {
        self.ask_parsed("Enter doctor ID: ", "doctor ID")
    }

    fn ask_parsed<T: FromStr>(&mut self, prompt: &str, what: &str) -> Step<Option<T>> {
        let answer = self.ask(prompt)?;
        let answer = answer.trim();
        match answer.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.out, "ERROR: Invalid {what} '{answer}'.")?;
                Ok(None)
            }
        }
    }

    /// Non-empty trimmed text, or an error line and `None`.
    fn ask_text(&mut self, prompt: &str, what: &str) -> Step<Option<String>> {
        let answer = self.ask(prompt)?;
        let answer = answer.trim();
        if answer.is_empty() {
            writeln!(self.out, "ERROR: {what} must not be empty.")?;
            return Ok(None);
        }
        Ok(Some(answer.to_string()))
    }

    fn ask(&mut self, prompt: &str) -> Step<String> {
        self.out.flush()?;
        match self.input.read_line(prompt)? {
            Line::Text(text) => Ok(text),
            Line::Interrupted => Err(Halt::Cancelled),
            Line::Eof => Err(Halt::Closed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LineInput;
    use hms_model::FixedClock;
    use hms_store::{MemoryStore, RecordKind};

    const STAMP: &str = "2025-05-06 07:08:09";

    fn run_with(hospital: Hospital<MemoryStore>, script: &str) -> (Hospital<MemoryStore>, String) {
        let mut shell = Shell::new(hospital, LineInput::new(script.as_bytes()), Vec::new());
        shell.run().expect("shell run");
        let (hospital, out) = shell.into_parts();
        (hospital, String::from_utf8(out).expect("utf8 output"))
    }

    fn run_script(script: &str) -> (Hospital<MemoryStore>, String) {
        run_with(
            Hospital::open(MemoryStore::new(), FixedClock::new(STAMP)),
            script,
        )
    }

    #[test]
    fn admission_cycle_through_patient_menu() {
        let script = "1\n\
                      1\nA\n30\n555-0001\n\
                      2\n1\n1\n\
                      2\n1\n2\n\
                      3\n1\n\
                      0\n0\n";
        let (hospital, out) = run_script(script);

        assert!(out.contains("Patient registered with ID: 1"));
        assert!(out.contains("Patient 'A' is admitted to ICU."));
        assert!(out.contains("ERROR: Patient 'A' is already admitted to ICU."));
        assert!(out.contains("Patient 'A' has been discharged."));
        assert!(out.ends_with("Exiting system. Saving data...\n"));

        let text = hospital.store().text(RecordKind::Patients).unwrap();
        assert!(text.contains("1,A,30,555-0001,Not Admitted,None"));
    }

    #[test]
    fn invalid_choices_and_ids_are_reported_and_menu_continues() {
        let script = "9\nabc\n1\n2\nxyz\n3\n7\n9\n0\n0\n";
        let (_, out) = run_script(script);
        assert_eq!(out.matches("ERROR: Invalid option. Try again.").count(), 3);
        assert!(out.contains("ERROR: Invalid patient ID 'xyz'."));
        assert!(out.contains("ERROR: Patient ID '7' not found."));
    }

    #[test]
    fn out_of_range_room_is_rejected() {
        let mut hospital = Hospital::open(MemoryStore::new(), FixedClock::new(STAMP));
        hospital.register_patient("A", 30, "555");
        let (hospital, out) = run_with(hospital, "1\n2\n1\n4\n0\n0\n");
        assert!(out.contains("ERROR: invalid room type choice 4, expected 0-3."));
        assert!(!hospital.patient(PatientId(1)).unwrap().is_admitted());
    }

    #[test]
    fn room_may_be_typed_by_label() {
        let mut hospital = Hospital::open(MemoryStore::new(), FixedClock::new(STAMP));
        hospital.register_patient("A", 30, "555");
        let (hospital, out) = run_with(hospital, "1\n2\n1\nPrivate Room\n0\n0\n");
        assert!(out.contains("Patient 'A' is admitted to Private Room."));
        assert_eq!(
            hospital.patient(PatientId(1)).unwrap().admission().room(),
            Some(RoomType::Private)
        );
    }

    #[test]
    fn doctor_menu_books_and_sees_patients() {
        let mut hospital = Hospital::open(MemoryStore::new(), FixedClock::new(STAMP));
        hospital.register_patient("John Doe", 35, "555-1234");
        let script = "2\n\
                      1\nDr. Smith\n0\n\
                      2\n999\n1\n\
                      2\n1\n999\n\
                      2\n1\n1\n\
                      3\n1\n\
                      4\n1\n\
                      4\n1\n\
                      0\n0\n";
        let (hospital, out) = run_with(hospital, script);

        assert!(out.contains("Doctor added with ID: 1"));
        assert!(out.contains("ERROR: Doctor ID '999' not found. Booking cancelled."));
        assert!(out.contains("ERROR: Patient ID '999' not found. Booking cancelled."));
        assert!(out.contains("Patient 'John Doe' booked appointment with Dr. Smith."));
        assert!(out.contains("Pending Appointments : 1"));
        assert!(out.contains("Dr. Smith is now seeing patient with ID: 1."));
        assert!(out.contains("No patients in queue for Dr. Smith."));

        let doctors = hospital.store().text(RecordKind::Doctors).unwrap();
        assert!(doctors.contains("1,Dr. Smith,Cardiology,0"));
    }

    #[test]
    fn emergency_menu_is_first_in_first_out() {
        let mut hospital = Hospital::open(MemoryStore::new(), FixedClock::new(STAMP));
        hospital.register_patient("A", 30, "555");
        hospital.register_patient("B", 40, "556");
        let script = "3\n1\n1\n1\n2\n1\n42\n2\n2\n2\n0\n0\n";
        let (_, out) = run_with(hospital, script);

        let first = out.find("Emergency handled for patient 'A'.").unwrap();
        let second = out.find("Emergency handled for patient 'B'.").unwrap();
        assert!(first < second);
        assert!(out.contains("ERROR: Patient ID '42' not found, please register first."));
        assert!(out.contains("No emergency cases in queue."));
    }

    #[test]
    fn patient_info_lists_history_newest_first() {
        let mut hospital = Hospital::open(MemoryStore::new(), FixedClock::new(STAMP));
        hospital.register_patient("A", 30, "555");
        let script = "1\n\
                      4\n1\nX-Ray\n\
                      5\n1\n\
                      5\n1\n\
                      7\n1\nAllergic to penicillin\n\
                      6\n1\n\
                      0\n0\n";
        let (_, out) = run_with(hospital, script);

        assert!(out.contains("Test 'X-Ray' requested for patient 'A'."));
        assert!(out.contains("Patient 'A' performed X-Ray test."));
        assert!(out.contains("No tests are pending for patient 'A'."));
        let history = out.split("------- Medical History -------").nth(1).unwrap();
        let lines: Vec<&str> = history.lines().filter(|l| !l.is_empty()).take(3).collect();
        assert_eq!(
            lines,
            vec![
                "Allergic to penicillin".to_string(),
                format!("Performed test: X-Ray on {STAMP}"),
                format!("Requested test: X-Ray on {STAMP}"),
            ]
        );
    }

    #[test]
    fn end_of_input_inside_a_prompt_still_saves() {
        let (hospital, out) = run_script("2\n1\nDr. Lee\n");
        assert!(out.ends_with("Exiting system. Saving data...\n"));
        assert!(hospital.doctors().is_empty());
        assert!(hospital.store().text(RecordKind::Doctors).is_some());
    }

    #[test]
    fn failed_save_is_shown_but_session_continues() {
        let hospital = Hospital::open(MemoryStore::read_only(), FixedClock::new(STAMP));
        let (hospital, out) = run_with(hospital, "1\n1\nA\n30\n555\n3\n1\n0\n0\n");
        assert!(out.contains("Patient registered with ID: 1"));
        assert!(out.contains("ERROR: Patient 'A' is not admitted."));
        assert!(out.contains("ERROR: failed to write 'memory:patients.csv'"));
        assert_eq!(hospital.patients().len(), 1);
    }
}
