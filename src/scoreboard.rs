//! High score table.
//!
//! Keeps the five best final scores, each stamped with the local time it was
//! set. The table is stored as a bare JSON array:
//!
//! ```json
//! [{"score": 12, "time": "19-10-2026 21:04:55"}]
//! ```
//!
//! Loading never fails: a missing or unparsable store reads as empty.

use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::constants::{SCOREBOARD_CAPACITY, SCOREBOARD_FILE, SCOREBOARD_TIME_FORMAT};
use crate::utils::persistence::data_path;

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    /// Formatted as `DD-MM-YYYY HH:MM:SS`.
    pub time: String,
}

/// Durable backing for the table. Values are the raw JSON text.
pub trait ScoreStorage {
    /// `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> io::Result<Option<String>>;
    fn write(&mut self, json: &str) -> io::Result<()>;
}

/// Stores the table in a single file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ~/.flapper/highScores.json
    pub fn default_location() -> io::Result<Self> {
        Ok(Self::new(data_path(SCOREBOARD_FILE)?))
    }
}

impl ScoreStorage for FileStorage {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, json: &str) -> io::Result<()> {
        fs::write(&self.path, json)
    }
}

/// In-memory storage. Clones share the same slot, so a test can keep a
/// handle after giving one to a [`Scoreboard`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn with_contents(json: &str) -> Self {
        let storage = Self::default();
        *storage.slot.borrow_mut() = Some(json.to_string());
        storage
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl ScoreStorage for MemoryStorage {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.contents())
    }

    fn write(&mut self, json: &str) -> io::Result<()> {
        *self.slot.borrow_mut() = Some(json.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// The ranked table plus the storage it is persisted to.
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
    storage: Box<dyn ScoreStorage>,
}

impl std::fmt::Debug for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scoreboard")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl Scoreboard {
    /// Read the table from `storage`. Read or parse failures give an empty table.
    pub fn load(storage: Box<dyn ScoreStorage>) -> Self {
        let entries = match storage.read() {
            Ok(Some(json)) => match serde_json::from_str::<Vec<ScoreEntry>>(&json) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("Scoreboard is unparsable, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Could not read scoreboard, starting empty: {}", e);
                Vec::new()
            }
        };

        let mut board = Self { entries, storage };
        board.normalize();
        log::info!("Loaded {} high score(s)", board.entries.len());
        board
    }

    /// Load from ~/.flapper/highScores.json.
    pub fn load_default() -> Self {
        match FileStorage::default_location() {
            Ok(storage) => Self::load(Box::new(storage)),
            Err(e) => {
                log::warn!("No scoreboard location, keeping scores in memory: {}", e);
                Self::load(Box::new(MemoryStorage::default()))
            }
        }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Record a final score stamped with the local time.
    pub fn record(&mut self, score: u32) -> io::Result<Option<usize>> {
        self.record_at(score, Local::now().naive_local())
    }

    /// Append, re-rank, keep the top five and rewrite storage.
    ///
    /// Returns the 1-based rank of the new entry, or `None` if it did not
    /// make the table. Ties keep insertion order, so a new score ranks
    /// below existing equal scores. Storage errors are returned after the
    /// in-memory table has been updated.
    pub fn record_at(&mut self, score: u32, at: NaiveDateTime) -> io::Result<Option<usize>> {
        let rank = self.entries.iter().filter(|e| e.score >= score).count();

        self.entries.push(ScoreEntry {
            score,
            time: at.format(SCOREBOARD_TIME_FORMAT).to_string(),
        });
        self.normalize();

        self.persist()?;
        Ok((rank < SCOREBOARD_CAPACITY).then_some(rank + 1))
    }

    /// Empty the table and storage.
    pub fn clear(&mut self) -> io::Result<()> {
        self.entries.clear();
        self.persist()
    }

    fn normalize(&mut self) {
        // sort_by is stable: equal scores keep insertion order
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(SCOREBOARD_CAPACITY);
    }

    fn persist(&mut self) -> io::Result<()> {
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.storage.write(&json)
    }
}
