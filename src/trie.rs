use std::convert::Infallible;
use std::io::BufRead;

use tracing::{debug, info};

use crate::error::T9Error;
use crate::keypad::{encode, Digit};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One position in digit-sequence space. The root is the empty sequence.
///
/// A word adds one level per letter, so depth is unbounded. Dropping,
/// comparing and counting all walk the tree with a heap stack.
#[derive(Debug, Default)]
pub struct TrieNode {
    // Indexed by `Digit::index`, so only 2..=9 can ever be a key.
    children: [Option<Box<TrieNode>>; 8],
    words: Vec<String>,
}

/// Outcome of a build pass over a word source.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub inserted: usize,
    /// Words skipped because they contain a character with no key.
    pub rejected: Vec<String>,
}

impl TrieNode {
    /// Builds a trie from a line-oriented source, one word per line.
    ///
    /// Surrounding whitespace and a leading byte-order mark are stripped and
    /// blank lines are skipped. Words containing anything other than ASCII
    /// letters are not inserted and are listed in the returned
    /// [`BuildReport`] instead.
    ///
    /// Any read failure (including invalid UTF-8) fails the whole build; no
    /// partial trie is returned.
    pub fn build<R: BufRead>(reader: R) -> Result<(TrieNode, BuildReport), T9Error> {
        Ok(Self::from_lines(reader.lines())?)
    }

    /// Same rules as [`TrieNode::build`] over words already in memory.
    pub fn from_words<I, S>(words: I) -> (TrieNode, BuildReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match Self::from_lines(words.into_iter().map(Ok::<S, Infallible>)) {
            Ok(built) => built,
            Err(never) => match never {},
        }
    }

    fn from_lines<I, S, E>(lines: I) -> Result<(TrieNode, BuildReport), E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
    {
        let mut root = TrieNode::default();
        let mut report = BuildReport::default();

        info!("loading words into trie");

        for (i, line) in lines.into_iter().enumerate() {
            let line = line?;
            let mut line = line.as_ref();
            if i == 0 {
                line = line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line);
            }
            root.add_line(line, &mut report);
        }

        info!("loaded {} words into trie", report.inserted);

        Ok((root, report))
    }

    fn add_line(&mut self, line: &str, report: &mut BuildReport) {
        let word = line.trim();
        if word.is_empty() {
            return;
        }
        match self.insert(word) {
            Ok(()) => report.inserted += 1,
            Err(_) => report.rejected.push(word.to_string()),
        }
    }

    /// Inserts `word` below this node, creating nodes along its digit
    /// encoding as needed. Fails with the first character that has no key,
    /// leaving the tree untouched.
    pub fn insert(&mut self, word: &str) -> Result<(), char> {
        let digits = encode(word)?;

        debug!("adding word {}", word);

        let mut node = self;
        for digit in digits {
            node = &mut **node.children[digit.index()].get_or_insert_with(Box::default);
        }
        node.words.push(word.to_string());
        Ok(())
    }

    /// Digits that lead somewhere from this node, ascending.
    pub fn next_steps(&self) -> Vec<Digit> {
        Digit::ALL
            .into_iter()
            .filter(|digit| self.children[digit.index()].is_some())
            .collect()
    }

    /// Moves one digit down the trie, returning the child and the words that
    /// end there.
    ///
    /// Inputs outside 2..=9 and digits with no branch here are both
    /// [`T9Error::InvalidInput`]; the caller keeps its current node.
    pub fn walk(&self, input: u8) -> Result<(&TrieNode, &[String]), T9Error> {
        let child = Digit::try_from(input)
            .ok()
            .and_then(|digit| self.child(digit))
            .ok_or(T9Error::InvalidInput(input))?;
        Ok((child, &child.words))
    }

    pub fn child(&self, digit: Digit) -> Option<&TrieNode> {
        self.children[digit.index()].as_deref()
    }

    /// Follows a whole digit sequence from this node.
    pub fn lookup(&self, digits: &[Digit]) -> Option<&TrieNode> {
        digits
            .iter()
            .try_fold(self, |node, &digit| node.child(digit))
    }

    /// Words whose encoding ends exactly at this node, in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter().flatten().map(|child| &**child));
        }
        count
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        // Each popped node is dropped with its children already detached.
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.words != b.words {
                return false;
            }
            for (x, y) in a.children.iter().zip(&b.children) {
                match (x, y) {
                    (Some(x), Some(y)) => stack.push((&**x, &**y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for TrieNode {}
