use std::fmt;
use std::str::FromStr;

use crate::error::LabelError;
use crate::label::LabelTable;

/// Kind of room a patient occupies while admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    GeneralWard,
    Icu,
    Private,
    SemiPrivate,
}

impl LabelTable for RoomType {
    const KIND: &'static str = "room type";
    const TABLE: &'static [(Self, &'static str)] = &[
        (RoomType::GeneralWard, "General Ward"),
        (RoomType::Icu, "ICU"),
        (RoomType::Private, "Private Room"),
        (RoomType::SemiPrivate, "Semi-Private Room"),
    ];
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for RoomType {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
