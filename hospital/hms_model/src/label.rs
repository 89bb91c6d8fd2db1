use crate::error::LabelError;

/// An enumeration whose variants are listed once, in menu order, next to the
/// human-readable label used on screen and in the persisted files.
///
/// Every lookup in either direction goes through [`LabelTable::TABLE`], so a
/// new variant only needs a new table row.
pub trait LabelTable: Copy + PartialEq + Sized + 'static {
    /// Name used in error messages, e.g. "room type".
    const KIND: &'static str;
    const TABLE: &'static [(Self, &'static str)];

    fn label(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(variant, _)| *variant == self)
            .map(|(_, label)| *label)
            .unwrap_or("Unknown")
    }

    fn from_label(label: &str) -> Result<Self, LabelError> {
        let wanted = label.trim();
        Self::TABLE
            .iter()
            .find(|(_, l)| *l == wanted)
            .map(|(variant, _)| *variant)
            .ok_or_else(|| LabelError::UnknownLabel {
                kind: Self::KIND,
                label: wanted.to_string(),
            })
    }

    /// Zero-based position in the table, as offered by the menus.
    fn from_menu_index(index: usize) -> Result<Self, LabelError> {
        Self::TABLE
            .get(index)
            .map(|(variant, _)| *variant)
            .ok_or(LabelError::IndexOutOfRange {
                kind: Self::KIND,
                index,
                max: Self::TABLE.len().saturating_sub(1),
            })
    }

    fn all() -> Vec<Self> {
        Self::TABLE.iter().map(|(variant, _)| *variant).collect()
    }
}
