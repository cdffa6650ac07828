use std::collections::BTreeMap;

/// Per-field on/off flags, e.g. which fields are highlighted in a preview.
///
/// Fields that were never touched are hidden. The whole map is owned by whoever
/// drives the preview and passed around explicitly; [`clear_all`](Self::clear_all)
/// resets every flag at once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldVisibility {
    flags: BTreeMap<String, bool>,
}

impl FieldVisibility {
    pub fn new() -> FieldVisibility {
        FieldVisibility::default()
    }

    pub fn set<S: Into<String>>(&mut self, field: S, shown: bool) {
        self.flags.insert(field.into(), shown);
    }

    pub fn show<S: Into<String>>(&mut self, field: S) {
        self.set(field, true);
    }

    pub fn hide<S: Into<String>>(&mut self, field: S) {
        self.set(field, false);
    }

    /// Flip a field's flag, returning the new state
    pub fn toggle(&mut self, field: &str) -> bool {
        let flag = self.flags.entry(field.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn is_shown(&self, field: &str) -> bool {
        self.flags.get(field).copied().unwrap_or(false)
    }

    /// Names of the shown fields, in name order
    pub fn shown(&self) -> impl Iterator<Item = &str> + '_ {
        self.flags
            .iter()
            .filter(|(_, &shown)| shown)
            .map(|(field, _)| field.as_str())
    }

    pub fn clear_all(&mut self) {
        self.flags.clear();
    }
}
