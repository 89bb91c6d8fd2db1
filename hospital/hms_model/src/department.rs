use std::fmt;
use std::str::FromStr;

use crate::error::LabelError;
use crate::label::LabelTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Cardiology,
    Neurology,
    Orthopedics,
    Pediatrics,
    Emergency,
    General,
}

impl LabelTable for Department {
    const KIND: &'static str = "department";
    const TABLE: &'static [(Self, &'static str)] = &[
        (Department::Cardiology, "Cardiology"),
        (Department::Neurology, "Neurology"),
        (Department::Orthopedics, "Orthopedics"),
        (Department::Pediatrics, "Pediatrics"),
        (Department::Emergency, "Emergency"),
        (Department::General, "General"),
    ];
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Department {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
