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

use std::io::Write;

use spacedcards_core::DueCard;
use spacedcards_core::Fallible;
use spacedcards_core::Store;

use crate::cmd::count_cards;

/// Print the questions of the cards due today, in collection order.
pub fn list_due(store: &Store, mut output: impl Write) -> Fallible<()> {
    let due: Vec<DueCard> = store.due_cards();
    writeln!(
        output,
        "{} due today, out of {}.",
        count_cards(due.len()),
        store.len()
    )?;
    for DueCard { card, .. } in due {
        writeln!(output, "- {}", card.question())?;
    }
    Ok(())
}
