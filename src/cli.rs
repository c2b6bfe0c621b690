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

use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use spacedcards_core::Fallible;
use spacedcards_core::Store;

use crate::cmd::add::add_card;
use crate::cmd::due::list_due;
use crate::cmd::review::review;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the card file. Default is `cards.json` in the current directory.
    #[arg(long, global = true, default_value = "cards.json")]
    file: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new card.
    Add {
        /// The question. Prompted for if absent.
        #[arg(long)]
        question: Option<String>,
        /// The answer. Prompted for if absent.
        #[arg(long)]
        answer: Option<String>,
    },
    /// Review the cards due today.
    Review,
    /// List the cards due today.
    Due,
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let mut store = Store::open(&cli.file)?;
    log::debug!("Opened {} with {} cards", cli.file.display(), store.len());
    match cli.command {
        Command::Add { question, answer } => {
            add_card(&mut store, question, answer, stdin().lock(), stdout().lock())
        }
        Command::Review => review(&mut store, stdin().lock(), stdout().lock()).map(|_| ()),
        Command::Due => list_due(&store, stdout().lock()),
    }
}
