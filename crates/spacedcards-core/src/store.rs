// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::fs;
use std::io::ErrorKind;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::scheduler::MIN_INTERVAL;
use crate::types::card::Card;
use crate::types::date::Date;
use crate::types::outcome::Outcome;

/// Errors reading or writing the card file.
#[derive(Debug, PartialEq)]
pub enum PersistenceError {
    /// The file exists but could not be read.
    Read { path: PathBuf, message: String },
    /// The file is not a valid JSON list of cards.
    Parse { path: PathBuf, message: String },
    /// The file parsed, but a card violates a scheduling invariant.
    Invalid { path: PathBuf, message: String },
    /// The collection could not be written.
    Write { path: PathBuf, message: String },
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            PersistenceError::Read { path, message } => {
                write!(f, "failed to read {}: {message}", path.display())
            }
            PersistenceError::Parse { path, message } => {
                write!(f, "failed to parse {}: {message}", path.display())
            }
            PersistenceError::Invalid { path, message } => {
                write!(f, "invalid card data in {}: {message}", path.display())
            }
            PersistenceError::Write { path, message } => {
                write!(f, "failed to write {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

/// Identifies a card by its position in the collection. Cards are never
/// removed, so an id handed out by a store stays valid for that store.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CardId(usize);

/// A card returned by a due query, borrowed from the store.
#[derive(Clone, Copy, Debug)]
pub struct DueCard<'a> {
    pub id: CardId,
    pub card: &'a Card,
}

/// The card collection and the JSON file backing it.
///
/// Every mutation is written through to disk before it returns.
pub struct Store {
    path: PathBuf,
    cards: Vec<Card>,
}

impl Store {
    /// Open the store at `path`, loading any cards already saved there. A
    /// missing file is an empty collection.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let mut store = Self {
            path: path.into(),
            cards: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All cards, in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    /// Replace the in-memory collection with the contents of the file. On
    /// error the current collection is left as it was.
    pub fn load(&mut self) -> Result<(), PersistenceError> {
        self.cards = read_cards(&self.path)?;
        log::debug!(
            "Loaded {} cards from {}",
            self.cards.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Overwrite the file with the whole collection.
    ///
    /// The JSON is written to a temporary file in the same directory, synced,
    /// and renamed over the target, so readers see either the old contents or
    /// the new ones.
    pub fn save(&self) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(&self.cards).map_err(|e| {
            PersistenceError::Write {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;
        write_atomically(&self.path, json.as_bytes()).map_err(|e| PersistenceError::Write {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        log::debug!("Saved {} cards to {}", self.cards.len(), self.path.display());
        Ok(())
    }

    /// Append a new card due today and save.
    pub fn add_card(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<CardId, PersistenceError> {
        self.add_card_on(question, answer, Date::today())
    }

    /// Append a new card due on `today` and save. Text is stored as given;
    /// rejecting empty input is the caller's job.
    ///
    /// If the save fails, the card is removed again before returning.
    pub fn add_card_on(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
        today: Date,
    ) -> Result<CardId, PersistenceError> {
        let id = CardId(self.cards.len());
        self.cards.push(Card::new_on(question, answer, today));
        if let Err(e) = self.save() {
            log::warn!("Discarding unsaved card: {e}");
            self.cards.pop();
            return Err(e);
        }
        log::info!("Added card {}", id.0);
        Ok(id)
    }

    /// Cards due today, in collection order.
    pub fn due_cards(&self) -> Vec<DueCard<'_>> {
        self.due_cards_on(Date::today())
    }

    /// Cards due on or before `today`, in collection order.
    pub fn due_cards_on(&self, today: Date) -> Vec<DueCard<'_>> {
        self.iter_due(today).collect()
    }

    /// The first card due today, if any.
    pub fn next_due(&self) -> Option<DueCard<'_>> {
        self.next_due_on(Date::today())
    }

    pub fn next_due_on(&self, today: Date) -> Option<DueCard<'_>> {
        self.iter_due(today).next()
    }

    /// Record a review made today and save.
    pub fn update_card(&mut self, id: CardId, outcome: Outcome) -> Result<(), PersistenceError> {
        self.update_card_on(id, outcome, Date::today())
    }

    /// Record a review made on `today` and save.
    ///
    /// If the save fails, the card's previous scheduling state is restored
    /// before returning.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a card in this store.
    pub fn update_card_on(
        &mut self,
        id: CardId,
        outcome: Outcome,
        today: Date,
    ) -> Result<(), PersistenceError> {
        assert!(
            id.0 < self.cards.len(),
            "card {} is not in this collection",
            id.0
        );
        let previous = self.cards[id.0].clone();
        self.cards[id.0].schedule_on(outcome, today);
        if let Err(e) = self.save() {
            log::warn!("Reverting unsaved review of card {}: {e}", id.0);
            self.cards[id.0] = previous;
            return Err(e);
        }
        let card = &self.cards[id.0];
        log::info!(
            "Reviewed card {} as {}; next due {} (interval {}, repetition {})",
            id.0,
            outcome.as_str(),
            card.due(),
            card.interval(),
            card.repetition()
        );
        Ok(())
    }

    fn iter_due(&self, today: Date) -> impl Iterator<Item = DueCard<'_>> {
        self.cards
            .iter()
            .enumerate()
            .filter(move |(_, card)| card.is_due(today))
            .map(|(index, card)| DueCard {
                id: CardId(index),
                card,
            })
    }
}

fn read_cards(path: &Path) -> Result<Vec<Card>, PersistenceError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No card file at {}; starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(PersistenceError::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
    };
    let cards: Vec<Card> = serde_json::from_str(&text).map_err(|e| PersistenceError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if let Some(index) = cards.iter().position(|c| c.interval() < MIN_INTERVAL) {
        return Err(PersistenceError::Invalid {
            path: path.to_path_buf(),
            message: format!("card {} has an interval of zero", index + 1),
        });
    }
    Ok(cards)
}

fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(contents)?;
    // The temporary file is created owner-only; keep the mode of the file
    // being replaced.
    if let Ok(metadata) = fs::metadata(path) {
        file.as_file().set_permissions(metadata.permissions())?;
    }
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
