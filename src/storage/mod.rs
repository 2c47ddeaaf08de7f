/// Persisted snapshot state
pub mod state;

use crate::utils::hash;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use state::SnapshotStore;

/// One matched file as seen during a capture.
///
/// Serialized with the field names of the state document:
/// `filename`, `lastModificationDate` (integer millis as a string),
/// `timestamp` and `object`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileObservation {
    /// Entry name inside the monitored directory
    filename: String,
    /// Modification time in milliseconds since the Unix epoch
    #[serde(rename = "lastModificationDate", with = "millis_string")]
    modified_millis: i64,
    /// ISO-8601 wall-clock time at which the entry was observed
    #[serde(rename = "timestamp")]
    captured_at: String,
    /// Label reported with the metric; always the file name
    object: String,
}

impl FileObservation {
    /// Record an observation of `filename`.
    #[must_use]
    pub fn new(filename: impl Into<String>, modified_millis: i64, captured_at: String) -> Self {
        let filename = filename.into();
        Self {
            object: filename.clone(),
            filename,
            modified_millis,
            captured_at,
        }
    }

    /// Entry name inside the monitored directory.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Modification time in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn modified_millis(&self) -> i64 {
        self.modified_millis
    }

    /// Capture timestamp in ISO-8601.
    #[must_use]
    pub fn captured_at(&self) -> &str {
        &self.captured_at
    }

    /// Object label for metric output.
    #[must_use]
    pub fn object(&self) -> &str {
        &self.object
    }
}

/// Ordered observations from a single directory listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    /// Observations in listing order
    observations: Vec<FileObservation>,
}

impl Snapshot {
    /// Create an empty snapshot
    #[must_use]
    pub const fn new() -> Self {
        Self {
            observations: Vec::new(),
        }
    }

    /// Append an observation, keeping listing order.
    pub fn push(&mut self, observation: FileObservation) {
        self.observations.push(observation);
    }

    /// Iterate in capture order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileObservation> {
        self.observations.iter()
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether nothing matched at capture time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Serialize into the compact state document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a state document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid snapshot
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

impl FromIterator<FileObservation> for Snapshot {
    fn from_iter<I: IntoIterator<Item = FileObservation>>(iter: I) -> Self {
        Self {
            observations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a FileObservation;
    type IntoIter = std::slice::Iter<'a, FileObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Key under which the snapshot of one (directory, pattern) query is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotIdentity {
    /// Hex digest of `<directory>/<pattern>`
    key: String,
}

impl SnapshotIdentity {
    /// Derive the identity of a query.
    ///
    /// The directory is used exactly as given and the pattern before any
    /// wildcard handling, so `logs` and `logs/` are distinct queries.
    #[must_use]
    pub fn new(directory: &Path, pattern: &str) -> Self {
        let directory = directory.as_os_str().as_encoded_bytes();
        let mut query = Vec::with_capacity(directory.len() + 1 + pattern.len());
        query.extend_from_slice(directory);
        query.push(b'/');
        query.extend_from_slice(pattern.as_bytes());
        Self {
            key: hash::hash_bytes(&query),
        }
    }

    /// Hex key used to name the state file.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Serde adapter for integers stored as decimal strings.
mod millis_string {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.trim().parse().map_err(de::Error::custom)
    }
}
