/// Monotonic ID source. Never goes backwards and never reissues an ID it
/// has handed out or observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdCounter {
    last: u32,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for an ID that already exists (e.g. loaded from disk).
    pub fn observe(&mut self, id: u32) {
        self.last = self.last.max(id);
    }

    pub fn next_id(&mut self) -> u32 {
        self.last += 1;
        self.last
    }

    pub fn last(&self) -> u32 {
        self.last
    }
}
