use crate::error::T9Error;
use crate::keypad::Digit;
use crate::trie::TrieNode;

/// A cursor into a built trie, advanced one keystroke at a time.
///
/// Each walker owns only its own position, so any number of them can read
/// the same trie at once.
#[derive(Debug, Clone)]
pub struct Walker<'t> {
    // Always non-empty; the first entry is the root.
    stack: Vec<&'t TrieNode>,
    path: Vec<Digit>,
}

impl<'t> Walker<'t> {
    pub fn new(root: &'t TrieNode) -> Self {
        Self {
            stack: vec![root],
            path: Vec::new(),
        }
    }

    pub fn current(&self) -> &'t TrieNode {
        self.stack[self.stack.len() - 1]
    }

    /// Digits typed so far.
    pub fn path(&self) -> &[Digit] {
        &self.path
    }

    pub fn next_steps(&self) -> Vec<Digit> {
        self.current().next_steps()
    }

    pub fn words(&self) -> &'t [String] {
        self.current().words()
    }

    /// Advances by one input. On error the position is unchanged.
    pub fn step(&mut self, input: u8) -> Result<&'t [String], T9Error> {
        let (next, words) = self.current().walk(input)?;
        // walk only succeeds for 2..=9
        if let Ok(digit) = Digit::try_from(input) {
            self.path.push(digit);
        }
        self.stack.push(next);
        Ok(words)
    }

    /// Undoes the last step. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() == 1 {
            return false;
        }
        self.stack.pop();
        self.path.pop();
        true
    }

    pub fn reset(&mut self) {
        self.stack.truncate(1);
        self.path.clear();
    }
}
