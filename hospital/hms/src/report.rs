use std::io::{self, Write};

use hms_registry::Hospital;
use hms_store::SnapshotStore;

/// Print every patient and doctor as two plain tables.
pub fn write_report<S: SnapshotStore, W: Write>(
    hospital: &Hospital<S>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Patients ({})", hospital.patients().len())?;
    writeln!(
        out,
        "{:<5} {:<24} {:>4}  {:<16} {:<13} Room Type",
        "ID", "Name", "Age", "Contact", "Status"
    )?;
    for p in hospital.patients() {
        let admission = p.admission();
        writeln!(
            out,
            "{:<5} {:<24} {:>4}  {:<16} {:<13} {}",
            p.id(),
            p.name(),
            p.age(),
            p.contact(),
            admission.status_label(),
            admission.room_label()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Doctors ({})", hospital.doctors().len())?;
    writeln!(out, "{:<5} {:<24} {:<12} Pending", "ID", "Name", "Department")?;
    for d in hospital.doctors() {
        writeln!(
            out,
            "{:<5} {:<24} {:<12} {}",
            d.id(),
            d.name(),
            d.department(),
            d.appointment_count()
        )?;
    }
    Ok(())
}
