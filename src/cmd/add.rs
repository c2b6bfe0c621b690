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

use spacedcards_core::Fallible;
use spacedcards_core::Store;
use spacedcards_core::fail;

use crate::cmd::count_cards;
use crate::cmd::prompt;

/// Add a card, prompting for whichever of the question and answer was not
/// given. Blank text is rejected and nothing is stored.
pub fn add_card(
    store: &mut Store,
    question: Option<String>,
    answer: Option<String>,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Fallible<()> {
    let question = match question {
        Some(question) => question,
        None => prompt(&mut input, &mut output, "Question: ")?.unwrap_or_default(),
    };
    let answer = match answer {
        Some(answer) => answer,
        None => prompt(&mut input, &mut output, "Answer: ")?.unwrap_or_default(),
    };
    if question.trim().is_empty() || answer.trim().is_empty() {
        return fail("question and answer must not be empty.");
    }
    store.add_card(question, answer)?;
    writeln!(output, "Card added. {} in collection.", count_cards(store.len()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::empty;

    use spacedcards_core::Date;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_add_from_arguments() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        let mut store = Store::open(&path)?;
        let mut output = Vec::new();
        add_card(
            &mut store,
            Some("2+2".to_string()),
            Some("4".to_string()),
            empty(),
            &mut output,
        )?;
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Card added. 1 card in collection.\n"
        );
        let reopened = Store::open(&path)?;
        let card = &reopened.cards()[0];
        assert_eq!(card.question(), "2+2");
        assert_eq!(card.answer(), "4");
        assert_eq!(card.due(), Date::today());
        Ok(())
    }

    #[test]
    fn test_add_with_prompts() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = Store::open(dir.path().join("cards.json"))?;
        let mut output = Vec::new();
        add_card(
            &mut store,
            None,
            None,
            Cursor::new("Capital of France?\nParis\n"),
            &mut output,
        )?;
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Question: Answer: Card added."));
        assert_eq!(store.cards()[0].question(), "Capital of France?");
        assert_eq!(store.cards()[0].answer(), "Paris");
        Ok(())
    }

    #[test]
    fn test_add_prompts_only_for_missing_answer() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = Store::open(dir.path().join("cards.json"))?;
        let mut output = Vec::new();
        add_card(
            &mut store,
            Some("q".to_string()),
            None,
            Cursor::new("a\n"),
            &mut output,
        )?;
        assert!(String::from_utf8(output).unwrap().starts_with("Answer: "));
        assert_eq!(store.cards()[0].answer(), "a");
        Ok(())
    }

    #[test]
    fn test_add_rejects_blank_text() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        let mut store = Store::open(&path)?;
        let result = add_card(
            &mut store,
            Some("   ".to_string()),
            Some("a".to_string()),
            empty(),
            Vec::new(),
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "error: question and answer must not be empty."
        );
        // End of input while prompting counts as blank.
        let result = add_card(&mut store, Some("q".to_string()), None, empty(), Vec::new());
        assert!(result.is_err());
        assert!(store.is_empty());
        assert!(!path.exists());
        Ok(())
    }
}
