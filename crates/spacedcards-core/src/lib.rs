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

//! spacedcards-core: Core library for the spacedcards spaced repetition system.
//!
//! This library provides:
//! - The doubling-interval scheduling rule
//! - Card and outcome types
//! - The card store, which persists the collection to a JSON file

pub mod error;
pub mod scheduler;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use error::{ErrorReport, Fallible, fail};
pub use store::{CardId, DueCard, PersistenceError, Store};
pub use types::card::Card;
pub use types::date::Date;
pub use types::outcome::Outcome;
