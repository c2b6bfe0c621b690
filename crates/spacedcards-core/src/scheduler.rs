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

//! The doubling-interval scheduling rule.
//!
//! The first correct answer in a streak schedules the card for the next
//! day. Every further correct answer doubles the interval. A miss resets
//! both the streak and the interval.

use crate::types::outcome::Outcome;

pub type Repetition = u32;

/// An interval in whole days.
pub type Interval = u32;

/// The interval of a new card, and of any card after a miss.
pub const MIN_INTERVAL: Interval = 1;

/// Compute the repetition count and interval that follow a review.
pub fn next_state(
    repetition: Repetition,
    interval: Interval,
    outcome: Outcome,
) -> (Repetition, Interval) {
    match outcome {
        Outcome::Correct => {
            let repetition = repetition.saturating_add(1);
            let interval = if repetition == 1 {
                MIN_INTERVAL
            } else {
                interval.saturating_mul(2)
            };
            (repetition, interval)
        }
        Outcome::Incorrect => (0, MIN_INTERVAL),
    }
}
