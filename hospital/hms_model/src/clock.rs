// Time source for history entries

/// Layout of every timestamp written into a medical history entry.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Supplies the timestamp text appended to history entries ("... on <stamp>").
pub trait Clock {
    fn stamp(&self) -> String;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn stamp(&self) -> String {
        chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Always returns the same stamp. Used by tests and replays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(stamp: impl Into<String>) -> Self {
        Self(stamp.into())
    }
}

impl Clock for FixedClock {
    fn stamp(&self) -> String {
        self.0.clone()
    }
}
