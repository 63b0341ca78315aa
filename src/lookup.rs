use std::{fmt, path::Path};

use clap::Args;
use serde::Serialize;
use tracing::debug;

use t9::error::T9Error;
use t9::keypad::Digit;
use t9::trie::TrieNode;
use t9::walker::Walker;
use t9::words::load_words;

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Print the result as JSON.
    #[arg(short, long)]
    json: bool,
    #[arg(name = "DIGITS")]
    digits: String,
}

pub async fn execute_lookup(args: LookupArgs, words_path: &Path) -> anyhow::Result<()> {
    let root = load_words(words_path).await?;
    let inputs = parse_inputs(&args.digits)?;
    let found = lookup(&root, &inputs)?;

    debug!("Found {} words for {}", found.words.len(), args.digits);

    if args.json {
        println!("{}", serde_json::to_string(&found)?);
    } else {
        println!("{}", found);
    }
    Ok(())
}

fn parse_inputs(digits: &str) -> anyhow::Result<Vec<u8>> {
    digits
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => anyhow::bail!("not a digit: {:?}", c),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct Lookup<'t> {
    pub digits: Vec<Digit>,
    pub words: &'t [String],
    pub next_steps: Vec<Digit>,
}

/// Walks every input from the root, failing on the first one with no transition.
pub fn lookup<'t>(root: &'t TrieNode, inputs: &[u8]) -> Result<Lookup<'t>, T9Error> {
    let mut walker = Walker::new(root);
    for &input in inputs {
        walker.step(input)?;
    }
    Ok(Lookup {
        digits: walker.path().to_vec(),
        words: walker.words(),
        next_steps: walker.next_steps(),
    })
}

impl fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.words.is_empty() {
            writeln!(f, "no words")?;
        } else {
            for word in self.words {
                writeln!(f, "{}", word)?;
            }
        }
        let next = self
            .next_steps
            .iter()
            .map(Digit::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "next: {}", if next.is_empty() { "-" } else { next.as_str() })
    }
}
