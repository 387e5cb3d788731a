//! The exercise lookup table.
//!
//! Entries are kept in declaration order. The partial-match pass scans them
//! in that order and takes the first hit, so reordering a table changes
//! mapping results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, Result};
use crate::utils::normalize_name;

/// Built-in entries as `(key, id, title)`, in match-priority order.
const BUILTIN_ENTRIES: &[(&str, &str, &str)] = &[
    ("bench press", "bench_press", "Bench Press (Barbell)"),
    ("squats", "squats", "Squat (Barbell)"),
    ("squat", "squats", "Squat (Barbell)"),
    ("deadlifts", "deadlift", "Deadlift (Barbell)"),
    ("deadlift", "deadlift", "Deadlift (Barbell)"),
    ("shoulder press", "shoulder_press", "Shoulder Press (Barbell)"),
    ("overhead press", "shoulder_press", "Shoulder Press (Barbell)"),
    ("bicep curls", "bicep_curl", "Bicep Curl (Barbell)"),
    ("bicep curl", "bicep_curl", "Bicep Curl (Barbell)"),
    ("tricep extension", "tricep_extension", "Tricep Extension"),
    ("lat pulldown", "lat_pulldown", "Lat Pulldown"),
    ("rows", "barbell_row", "Barbell Row"),
    ("barbell row", "barbell_row", "Barbell Row"),
    ("pull ups", "pull_up", "Pull Up"),
    ("pull up", "pull_up", "Pull Up"),
    ("push ups", "push_up", "Push Up"),
    ("push up", "push_up", "Push Up"),
    ("dumbbell press", "dumbbell_press", "Dumbbell Press"),
    ("leg press", "leg_press", "Leg Press"),
    ("lunges", "lunges", "Lunges"),
    ("plank", "plank", "Plank"),
];

/// One lookup key and the canonical exercise it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    /// Normalized exercise name.
    pub key: String,
    /// Canonical exercise template id.
    pub id: String,
    /// Canonical exercise title.
    pub title: String,
}

impl LookupEntry {
    pub fn new(key: impl Into<String>, id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Immutable, ordered mapping from normalized name to canonical exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    entries: Vec<LookupEntry>,
    index: HashMap<String, usize>,
}

impl LookupTable {
    /// Build a table from entries in priority order.
    ///
    /// Keys are normalized on the way in.
    ///
    /// # Errors
    ///
    /// Fails when a key is blank or two keys normalize to the same value.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = LookupEntry>,
    {
        let mut ordered = Vec::new();
        let mut index = HashMap::new();
        for (position, mut entry) in entries.into_iter().enumerate() {
            entry.key = normalize_name(&entry.key);
            if entry.key.is_empty() {
                return Err(LookupError::EmptyKey { position });
            }
            if index.contains_key(&entry.key) {
                return Err(LookupError::DuplicateKey { key: entry.key });
            }
            index.insert(entry.key.clone(), ordered.len());
            ordered.push(entry);
        }
        Ok(Self {
            entries: ordered,
            index,
        })
    }

    /// The built-in table of common barbell and bodyweight exercises.
    pub fn builtin() -> Self {
        let entries: Vec<LookupEntry> = BUILTIN_ENTRIES
            .iter()
            .map(|&(key, id, title)| LookupEntry::new(key, id, title))
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.key.clone(), position))
            .collect();
        Self { entries, index }
    }

    /// Load a table from a JSON array of `{ "key", "id", "title" }` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<LookupEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Entry whose key equals the already-normalized `key`.
    pub fn get(&self, key: &str) -> Option<&LookupEntry> {
        self.index.get(key).map(|&position| &self.entries[position])
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LookupEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned copy of the entries for inspection; changes to it do not
    /// reach this table.
    pub fn snapshot(&self) -> Vec<LookupEntry> {
        self.entries.clone()
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a LookupTable {
    type Item = &'a LookupEntry;
    type IntoIter = std::slice::Iter<'a, LookupEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keeps_declaration_order() {
        let table = LookupTable::builtin();
        assert_eq!(table.len(), 21);
        let keys: Vec<&str> = table.iter().take(3).map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["bench press", "squats", "squat"]);
        assert_eq!(table.entries().last().map(|e| e.key.as_str()), Some("plank"));
    }

    #[test]
    fn builtin_keys_are_normalized_and_unique() {
        let rebuilt = LookupTable::new(LookupTable::builtin().snapshot()).expect("valid table");
        assert_eq!(rebuilt, LookupTable::builtin());
    }

    #[test]
    fn new_normalizes_keys() {
        let table = LookupTable::new([LookupEntry::new("  Face Pull ", "face_pull", "Face Pull")])
            .expect("valid table");
        assert_eq!(table.get("face pull").map(|e| e.id.as_str()), Some("face_pull"));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let result = LookupTable::new([
            LookupEntry::new("Dips", "dips", "Dips"),
            LookupEntry::new("dips", "dips_weighted", "Dips (Weighted)"),
        ]);
        assert!(matches!(result, Err(LookupError::DuplicateKey { key }) if key == "dips"));
    }

    #[test]
    fn blank_keys_are_rejected() {
        let result = LookupTable::new([
            LookupEntry::new("dips", "dips", "Dips"),
            LookupEntry::new("   ", "nothing", "Nothing"),
        ]);
        assert!(matches!(result, Err(LookupError::EmptyKey { position: 1 })));
    }

    #[test]
    fn snapshot_is_detached() {
        let table = LookupTable::builtin();
        let mut snapshot = table.snapshot();
        snapshot.clear();
        assert_eq!(table.len(), 21);
        assert!(table.get("plank").is_some());
    }

    #[test]
    fn from_json_preserves_order() {
        let json = r#"[
            {"key": "hip thrust", "id": "hip_thrust", "title": "Hip Thrust (Barbell)"},
            {"key": "thrust", "id": "thruster", "title": "Thruster"}
        ]"#;
        let table = LookupTable::from_json(json).expect("load table");
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].id, "hip_thrust");
    }

    #[test]
    fn from_json_rejects_bad_shape() {
        let result = LookupTable::from_json(r#"{"bench press": "bench_press"}"#);
        assert!(matches!(result, Err(LookupError::InvalidTable(_))));
    }
}
