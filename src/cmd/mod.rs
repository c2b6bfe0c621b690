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

pub mod add;
pub mod due;
pub mod review;

/// Print `message` and read one line, without its line terminator. Returns
/// `None` at end of input.
pub fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> Fallible<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim_end_matches(['\n', '\r']).to_string();
    Ok(Some(line))
}

/// "1 card", "2 cards", and so on.
pub fn count_cards(count: usize) -> String {
    if count == 1 {
        "1 card".to_string()
    } else {
        format!("{count} cards")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_prompt() -> Fallible<()> {
        let mut input = Cursor::new("first\r\nsecond\n");
        let mut output = Vec::new();
        assert_eq!(prompt(&mut input, &mut output, "> ")?, Some("first".to_string()));
        assert_eq!(prompt(&mut input, &mut output, "> ")?, Some("second".to_string()));
        assert_eq!(prompt(&mut input, &mut output, "> ")?, None);
        assert_eq!(String::from_utf8(output).unwrap(), "> > > ");
        Ok(())
    }

    #[test]
    fn test_count_cards() {
        assert_eq!(count_cards(0), "0 cards");
        assert_eq!(count_cards(1), "1 card");
        assert_eq!(count_cards(2), "2 cards");
    }
}
