//! High score persistence
//!
//! A single best score carried between sessions. Stored as JSON in a file on
//! native targets and in LocalStorage on the web. A missing or unreadable
//! value counts as 0.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// On-disk/LocalStorage record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(default)]
    pub high_score: u64,
}

impl HighScoreRecord {
    /// Parse a stored value. Accepts the JSON record, or a bare integer
    /// where only the leading digits count (`"4200.5"` and `"4200abc"` read
    /// as 4200).
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(record) = serde_json::from_str::<Self>(raw) {
            return Some(record);
        }
        let raw = raw.strip_prefix('+').unwrap_or(raw);
        let digits = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
        raw[..digits]
            .parse::<u64>()
            .ok()
            .map(|high_score| Self { high_score })
    }
}

/// Where the high score lives between sessions
pub trait HighScoreStore {
    /// Previously saved score, 0 if there is none
    fn load(&self) -> u64;
    fn save(&mut self, high_score: u64) -> Result<(), StoreError>;
}

/// In-memory store (tests, or hosts without storage)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u64) -> Self {
        Self { value: Some(value) }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.value.unwrap_or(0)
    }

    fn save(&mut self, high_score: u64) -> Result<(), StoreError> {
        self.value = Some(high_score);
        Ok(())
    }
}

/// JSON file store
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HighScoreStore for FileStore {
    fn load(&self) -> u64 {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                log::info!("No high score at {:?}, starting from 0", self.path);
                return 0;
            }
        };
        match HighScoreRecord::parse(&raw) {
            Some(record) => {
                log::info!("Loaded high score {}", record.high_score);
                record.high_score
            }
            None => {
                log::warn!("Ignoring malformed high score file {:?}", self.path);
                0
            }
        }
    }

    fn save(&mut self, high_score: u64) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&HighScoreRecord { high_score })?;
        // Write then rename so a crash never leaves a truncated file
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        log::info!("High score saved ({high_score})");
        Ok(())
    }
}

/// Browser LocalStorage store
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "void_runner_high_score";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn load(&self) -> u64 {
        let raw = Self::storage().and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        match raw.as_deref().map(HighScoreRecord::parse) {
            Some(Some(record)) => {
                log::info!("Loaded high score {}", record.high_score);
                record.high_score
            }
            Some(None) => {
                log::warn!("Ignoring malformed stored high score");
                0
            }
            None => 0,
        }
    }

    fn save(&mut self, high_score: u64) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        let json = serde_json::to_string(&HighScoreRecord { high_score })?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|_| StoreError::Io("LocalStorage write rejected".to_string()))?;
        log::info!("High score saved ({high_score})");
        Ok(())
    }
}
