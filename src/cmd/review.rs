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

use std::io::BufRead;
use std::io::Write;

use spacedcards_core::DueCard;
use spacedcards_core::Fallible;
use spacedcards_core::Outcome;
use spacedcards_core::Store;

use crate::cmd::count_cards;
use crate::cmd::prompt;

/// Review due cards until none are left, the user quits, or input ends.
/// Returns the number of cards reviewed.
pub fn review(store: &mut Store, mut input: impl BufRead, mut output: impl Write) -> Fallible<usize> {
    let mut reviewed: usize = 0;
    loop {
        let Some(DueCard { id, card }) = store.next_due() else {
            writeln!(output, "No cards due.")?;
            break;
        };
        writeln!(output)?;
        writeln!(output, "Q: {}", card.question())?;
        if prompt(&mut input, &mut output, "[Enter] Show answer ")?.is_none() {
            break;
        }
        writeln!(output, "A: {}", card.answer())?;
        let Some(outcome) = ask_outcome(&mut input, &mut output)? else {
            break;
        };
        store.update_card(id, outcome)?;
        reviewed += 1;
    }
    writeln!(output, "Reviewed {}.", count_cards(reviewed))?;
    Ok(reviewed)
}

/// Ask whether the answer was correct until a valid reply is given. Returns
/// `None` if the user quits or input ends.
fn ask_outcome(input: &mut impl BufRead, output: &mut impl Write) -> Fallible<Option<Outcome>> {
    loop {
        let Some(reply) = prompt(input, output, "Correct? [y]es / [n]o / [q]uit: ")? else {
            return Ok(None);
        };
        if matches!(reply.trim().to_lowercase().as_str(), "q" | "quit") {
            return Ok(None);
        }
        match Outcome::try_from(reply) {
            Ok(outcome) => return Ok(Some(outcome)),
            Err(_) => writeln!(output, "Please answer y, n, or q.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use spacedcards_core::Date;
    use tempfile::tempdir;

    use super::*;

    fn store_with_cards(dir: &std::path::Path, cards: &[(&str, &str)]) -> Fallible<Store> {
        let mut store = Store::open(dir.join("cards.json"))?;
        for (question, answer) in cards {
            store.add_card(*question, *answer)?;
        }
        Ok(store)
    }

    fn run(store: &mut Store, input: &str) -> Fallible<(usize, String)> {
        let mut output = Vec::new();
        let reviewed = review(store, Cursor::new(input.to_string()), &mut output)?;
        Ok((reviewed, String::from_utf8(output).unwrap()))
    }

    #[test]
    fn test_no_cards_due() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = store_with_cards(dir.path(), &[])?;
        let (reviewed, output) = run(&mut store, "")?;
        assert_eq!(reviewed, 0);
        assert_eq!(output, "No cards due.\nReviewed 0 cards.\n");
        Ok(())
    }

    #[test]
    fn test_review_all() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = store_with_cards(dir.path(), &[("2+2", "4"), ("3+3", "6")])?;
        let (reviewed, output) = run(&mut store, "\ny\n\nn\n")?;
        assert_eq!(reviewed, 2);
        assert!(output.contains("Q: 2+2"));
        assert!(output.contains("A: 4"));
        assert!(output.contains("Q: 3+3"));
        assert!(output.contains("A: 6"));
        assert!(output.ends_with("No cards due.\nReviewed 2 cards.\n"));

        let tomorrow = Date::today().add_days(1);
        let reopened = Store::open(store.path())?;
        let first = &reopened.cards()[0];
        assert_eq!((first.interval(), first.repetition(), first.due()), (1, 1, tomorrow));
        let second = &reopened.cards()[1];
        assert_eq!((second.interval(), second.repetition(), second.due()), (1, 0, tomorrow));
        Ok(())
    }

    #[test]
    fn test_invalid_reply_reprompts() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = store_with_cards(dir.path(), &[("q", "a")])?;
        let (reviewed, output) = run(&mut store, "\nmaybe\nCorrect\n")?;
        assert_eq!(reviewed, 1);
        assert!(output.contains("Please answer y, n, or q."));
        assert_eq!(store.cards()[0].repetition(), 1);
        Ok(())
    }

    #[test]
    fn test_quit() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = store_with_cards(dir.path(), &[("a", "1"), ("b", "2")])?;
        let (reviewed, output) = run(&mut store, "\ny\n\nq\n")?;
        assert_eq!(reviewed, 1);
        assert!(!output.contains("No cards due."));
        assert!(output.ends_with("Reviewed 1 card.\n"));
        assert_eq!(store.due_cards().len(), 1);
        assert_eq!(store.next_due().unwrap().card.question(), "b");
        Ok(())
    }

    #[test]
    fn test_end_of_input() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = store_with_cards(dir.path(), &[("a", "1")])?;
        let (reviewed, _) = run(&mut store, "\n")?;
        assert_eq!(reviewed, 0);
        assert_eq!(store.cards()[0].repetition(), 0);
        assert_eq!(store.due_cards().len(), 1);
        Ok(())
    }
}
