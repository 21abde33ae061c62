// ---------------------------------------------------------------------------
// SaveError: typed errors for save/load operations
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur during save/load operations.
///
/// Nothing here is fatal: the save plugin logs the error and surfaces it to
/// the UI boundary as a warning notification.
#[derive(Debug)]
pub enum SaveError {
    /// I/O error (permission denied, disk full, etc.)
    Io(std::io::Error),
    /// JSON encoding failed.
    Encode(String),
    /// JSON decoding failed (corrupt or hand-edited save data).
    Decode(String),
    /// No pending save data was available to load.
    NoData,
    /// Slot numbers start at 1.
    InvalidSlot(u32),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "I/O error: {e}"),
            SaveError::Encode(msg) => write!(f, "Encoding error: {msg}"),
            SaveError::Decode(msg) => write!(f, "Decoding error: {msg}"),
            SaveError::NoData => write!(f, "No save data available to load"),
            SaveError::InvalidSlot(slot) => {
                write!(f, "Invalid save slot {slot}: slots start at 1")
            }
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Decode(e.to_string())
    }
}
