// Row codec for the patient and doctor files

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use hms_model::{
    Admission, Department, Doctor, DoctorId, LabelTable, Patient, PatientId, RoomType,
};

use crate::error::RowError;

const DELIMITER: char = ',';

/// Which of the two persisted collections a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Patients,
    Doctors,
}

impl RecordKind {
    pub fn default_file_name(self) -> &'static str {
        match self {
            RecordKind::Patients => "patients.csv",
            RecordKind::Doctors => "doctors.csv",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            RecordKind::Patients => "patient",
            RecordKind::Doctors => "doctor",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// An entity that can be written as one delimited row and read back.
pub trait Record: Sized {
    const KIND: RecordKind;
    /// Column names, in order. Joined, they form the header row.
    const FIELDS: &'static [&'static str];

    fn record_id(&self) -> u32;
    fn encode(&self) -> String;
    fn decode(line: &str) -> Result<Self, RowError>;

    fn header() -> String {
        Self::FIELDS.join(",")
    }
}

/// Records recovered from a file, plus how many rows had to be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

/// Render a full file: header row, then one row per record.
pub fn render_snapshot<T: Record>(records: &[T]) -> String {
    let mut out = T::header();
    out.push('\n');
    for record in records {
        out.push_str(&record.encode());
        out.push('\n');
    }
    out
}

/// Parse a full file. The first line is the header and is skipped. Blank
/// lines are ignored; malformed rows and rows repeating an earlier ID are
/// skipped with a warning.
pub fn parse_snapshot<T: Record>(text: &str) -> Snapshot<T> {
    let mut snapshot = Snapshot::default();
    let mut seen = HashSet::new();
    let mut lines = text.lines().enumerate();

    if let Some((_, header)) = lines.next() {
        if header.trim() != T::header() {
            log::warn!("unexpected {} file header: '{}'", T::KIND, header.trim());
        }
    }

    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        match T::decode(line) {
            Ok(record) => {
                if seen.insert(record.record_id()) {
                    snapshot.records.push(record);
                } else {
                    log::warn!(
                        "skipping {} row {line_no}: duplicate ID {}",
                        T::KIND,
                        record.record_id()
                    );
                    snapshot.skipped += 1;
                }
            }
            Err(e) => {
                log::warn!("skipping bad {} row {line_no}: {e} ('{line}')", T::KIND);
                snapshot.skipped += 1;
            }
        }
    }
    snapshot
}

impl Record for Patient {
    const KIND: RecordKind = RecordKind::Patients;
    const FIELDS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Age",
        "Contact",
        "Admission Status",
        "Room Type",
    ];

    fn record_id(&self) -> u32 {
        self.id().0
    }

    fn encode(&self) -> String {
        let admission = self.admission();
        format!(
            "{},{},{},{},{},{}",
            self.id(),
            clean_text("Name", self.name()),
            self.age(),
            clean_text("Contact", self.contact()),
            admission.status_label(),
            admission.room_label(),
        )
    }

    fn decode(line: &str) -> Result<Self, RowError> {
        let f = split_fields(line, Self::FIELDS)?;
        let id = positive_id(f[0], "ID")?;
        let name = required(f[1], "Name")?;
        let age = number(f[2], "Age")?;
        let contact = f[3];
        let admission = match required(f[4], "Admission Status")? {
            Admission::ADMITTED => {
                let room = required(f[5], "Room Type")?;
                let room = RoomType::from_label(room).map_err(|_| RowError::UnknownLabel {
                    field: "Room Type",
                    value: room.to_string(),
                })?;
                Admission::Admitted(room)
            }
            Admission::NOT_ADMITTED => {
                if f[5] != Admission::NO_ROOM {
                    return Err(RowError::UnknownLabel {
                        field: "Room Type",
                        value: f[5].to_string(),
                    });
                }
                Admission::NotAdmitted
            }
            other => {
                return Err(RowError::UnknownLabel {
                    field: "Admission Status",
                    value: other.to_string(),
                })
            }
        };
        Ok(Patient::restore(PatientId(id), name, age, contact, admission))
    }
}

impl Record for Doctor {
    const KIND: RecordKind = RecordKind::Doctors;
    const FIELDS: &'static [&'static str] = &["ID", "Name", "Department", "Appointment"];

    fn record_id(&self) -> u32 {
        self.id().0
    }

    fn encode(&self) -> String {
        format!(
            "{},{},{},{}",
            self.id(),
            clean_text("Name", self.name()),
            self.department(),
            self.appointment_count(),
        )
    }

    fn decode(line: &str) -> Result<Self, RowError> {
        let f = split_fields(line, Self::FIELDS)?;
        let id = positive_id(f[0], "ID")?;
        let name = required(f[1], "Name")?;
        let department = required(f[2], "Department")?;
        let department =
            Department::from_label(department).map_err(|_| RowError::UnknownLabel {
                field: "Department",
                value: department.to_string(),
            })?;
        let count = number(f[3], "Appointment")?;
        Ok(Doctor::restore(DoctorId(id), name, department, count))
    }
}

fn split_fields<'a>(line: &'a str, names: &[&'static str]) -> Result<Vec<&'a str>, RowError> {
    let parts: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if parts.len() < names.len() {
        return Err(RowError::MissingField(names[parts.len()]));
    }
    if parts.len() > names.len() {
        return Err(RowError::TooManyFields {
            expected: names.len(),
            found: parts.len(),
        });
    }
    Ok(parts)
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, RowError> {
    if value.is_empty() {
        Err(RowError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn number(value: &str, field: &'static str) -> Result<u32, RowError> {
    required(value, field)?
        .parse()
        .map_err(|_| RowError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Largest ID accepted from a file. Leaves the counter room to keep
/// allocating after the highest loaded row.
pub const MAX_LOADED_ID: u32 = i32::MAX as u32;

fn positive_id(value: &str, field: &'static str) -> Result<u32, RowError> {
    match number(value, field)? {
        id @ 1..=MAX_LOADED_ID => Ok(id),
        _ => Err(RowError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

// The row layout has no quoting, so delimiters and line breaks in free text
// are replaced before writing.
fn clean_text<'a>(field: &str, value: &'a str) -> Cow<'a, str> {
    if value.contains([DELIMITER, '\n', '\r']) {
        log::warn!("replacing delimiter characters in {field} '{value}'");
        Cow::Owned(value.replace([DELIMITER, '\n', '\r'], " "))
    } else {
        Cow::Borrowed(value)
    }
}
