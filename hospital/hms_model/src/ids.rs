use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Registry-issued patient identifier. Positive, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatientId(pub u32);

/// Registry-issued doctor identifier. Positive, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DoctorId(pub u32);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PatientId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PatientId)
    }
}

impl FromStr for DoctorId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(DoctorId)
    }
}

impl From<u32> for PatientId {
    fn from(raw: u32) -> Self {
        PatientId(raw)
    }
}

impl From<u32> for DoctorId {
    fn from(raw: u32) -> Self {
        DoctorId(raw)
    }
}
