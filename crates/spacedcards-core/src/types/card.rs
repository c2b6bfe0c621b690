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

use serde::Deserialize;
use serde::Serialize;

use crate::scheduler::Interval;
use crate::scheduler::MIN_INTERVAL;
use crate::scheduler::Repetition;
use crate::scheduler::next_state;
use crate::types::date::Date;
use crate::types::outcome::Outcome;

/// A flashcard and its scheduling state.
///
/// Records read from disk may omit the scheduling fields. A missing `due`
/// defaults to the date the record is read, computed per record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    question: String,
    answer: String,
    /// Days between the most recent review and the due date.
    #[serde(default = "default_interval")]
    interval: Interval,
    /// Consecutive correct answers since the last miss.
    #[serde(default)]
    repetition: Repetition,
    /// The card is eligible for review on or after this date.
    #[serde(default = "Date::today")]
    due: Date,
}

fn default_interval() -> Interval {
    MIN_INTERVAL
}

impl Card {
    /// A new card, due today.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::new_on(question, answer, Date::today())
    }

    /// A new card, due on the given date.
    pub fn new_on(question: impl Into<String>, answer: impl Into<String>, today: Date) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            interval: MIN_INTERVAL,
            repetition: 0,
            due: today,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    pub fn due(&self) -> Date {
        self.due
    }

    pub fn is_due(&self, today: Date) -> bool {
        self.due <= today
    }

    /// Apply a review outcome, taking today's local date as the review date.
    pub fn schedule(&mut self, outcome: Outcome) {
        self.schedule_on(outcome, Date::today());
    }

    /// Apply a review outcome given on `today`.
    pub fn schedule_on(&mut self, outcome: Outcome, today: Date) {
        let (repetition, interval) = next_state(self.repetition, self.interval, outcome);
        self.repetition = repetition;
        self.interval = interval;
        self.due = today.add_days(interval);
    }
}
