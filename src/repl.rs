use std::{io::Write, path::Path};

use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use t9::keypad::Digit;
use t9::trie::TrieNode;
use t9::walker::Walker;
use t9::words::load_words;

use crate::help::{HELP, PROMPT};

#[derive(Args, Debug)]
pub struct WalkArgs {
    /// Don't print the help banner on start.
    #[arg(short, long)]
    quiet: bool,
    /// Keys to type before reading from stdin.
    #[arg(name = "DIGITS")]
    start: Option<String>,
}

pub async fn execute_walk(args: WalkArgs, words_path: &Path) -> anyhow::Result<()> {
    let root = load_words(words_path).await?;
    let mut session = Session::new(&root);

    if !args.quiet {
        println!("{}", HELP);
    }
    run_session(
        &mut session,
        args.start.as_deref(),
        BufReader::new(tokio::io::stdin()),
        &mut std::io::stdout(),
    )
    .await?;

    info!("walk session ended at {}", session.input());

    // The highlighted candidate is the committed word.
    if let Some(word) = session.selected_word() {
        println!("{}", word);
    }
    Ok(())
}

/// Feeds the pre-typed keys, then each input line, to the session until it
/// quits or the input ends.
async fn run_session<R, W>(
    session: &mut Session<'_>,
    start: Option<&str>,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match start.map(|keys| session.handle(keys)) {
        Some(Reply::Quit) => return Ok(()),
        Some(reply) => write!(out, "{}", reply.text())?,
        None => writeln!(out, "{}", session.render())?,
    }

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        debug!("Line: {:?}", line);
        match session.handle(&line) {
            Reply::Continue(text) => write!(out, "{}", text)?,
            Reply::Quit => break,
        }
        out.flush()?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Keys(String),
    Back,
    Next,
    Prev,
    Reset,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Command {
        match line.trim() {
            "<" | "back" => Command::Back,
            "n" | "next" => Command::Next,
            "p" | "prev" => Command::Prev,
            "r" | "reset" => Command::Reset,
            "?" | "help" => Command::Help,
            "q" | "quit" | "esc" => Command::Quit,
            keys => Command::Keys(keys.to_string()),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Quit,
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) => text.as_str(),
            Reply::Quit => "",
        }
    }
}

/// Line-driven input state: a cursor plus the highlighted candidate.
#[derive(Debug)]
pub struct Session<'t> {
    walker: Walker<'t>,
    selected: usize,
}

impl<'t> Session<'t> {
    pub fn new(root: &'t TrieNode) -> Self {
        Self {
            walker: Walker::new(root),
            selected: 0,
        }
    }

    pub fn input(&self) -> String {
        self.walker.path().iter().map(Digit::to_string).collect()
    }

    pub fn selected_word(&self) -> Option<&'t str> {
        self.walker.words().get(self.selected).map(String::as_str)
    }

    pub fn handle(&mut self, line: &str) -> Reply {
        let mut out = String::new();
        match Command::parse(line) {
            Command::Keys(keys) => self.type_keys(&keys, &mut out),
            Command::Back => {
                if self.walker.back() {
                    self.selected = 0;
                } else {
                    out.push_str("nothing to delete\n");
                }
            }
            Command::Next => self.cycle(1),
            Command::Prev => self.cycle(-1),
            Command::Reset => {
                self.walker.reset();
                self.selected = 0;
            }
            Command::Help => out.push_str(HELP),
            Command::Quit => return Reply::Quit,
        }
        out.push_str(&self.render());
        out.push('\n');
        Reply::Continue(out)
    }

    fn type_keys(&mut self, keys: &str, out: &mut String) {
        for key in keys.chars() {
            if Digit::from_key(key).is_none() {
                out.push_str(&format!("not a T9 key: {:?}\n", key));
                continue;
            }
            let input = key as u8 - b'0';
            match self.walker.step(input) {
                Ok(_) => self.selected = 0,
                Err(e) => out.push_str(&format!("{}\n", e)),
            }
        }
    }

    fn cycle(&mut self, delta: isize) {
        let len = self.walker.words().len() as isize;
        if len == 0 {
            return;
        }
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }

    pub fn render(&self) -> String {
        let next = self
            .walker
            .next_steps()
            .iter()
            .map(Digit::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let words = self
            .walker
            .words()
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == self.selected {
                    format!("*{}*", word)
                } else {
                    word.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}{}  next: [{}]  words: [{}]", PROMPT, self.input(), next, words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_trie;

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse(" < "), Command::Back);
        assert_eq!(Command::parse("esc"), Command::Quit);
        assert_eq!(Command::parse("227"), Command::Keys("227".into()));
        assert_eq!(Command::parse(""), Command::Keys("".into()));
    }

    #[test]
    fn test_render_at_root() {
        let root = test_trie();
        let session = Session::new(&root);
        assert_eq!(session.render(), "input:   next: [2, 3]  words: []");
    }

    #[test]
    fn test_type_word() {
        let root = test_trie();
        let mut session = Session::new(&root);
        let reply = session.handle("227");
        assert_eq!(
            reply,
            Reply::Continue("input: 227  next: []  words: [*bar*]\n".into())
        );
        assert_eq!(session.selected_word(), Some("bar"));
    }

    #[test]
    fn test_invalid_key_keeps_position() {
        let root = test_trie();
        let mut session = Session::new(&root);
        let reply = session.handle("25");
        assert_eq!(
            reply.text(),
            "invalid input: no transition for 5\ninput: 2  next: [2, 3, 4, 6]  words: []\n"
        );

        let reply = session.handle("1x");
        assert!(reply.text().starts_with("not a T9 key: '1'\nnot a T9 key: 'x'\n"));
        assert_eq!(session.input(), "2");
    }

    #[test]
    fn test_cycle_candidates() {
        let root = test_trie();
        let mut session = Session::new(&root);
        session.handle("2326");
        assert_eq!(session.selected_word(), Some("beam"));

        session.handle("n");
        assert_eq!(session.selected_word(), Some("bean"));
        assert!(session.render().ends_with("words: [beam, *bean*]"));

        session.handle("n");
        assert_eq!(session.selected_word(), Some("beam"));
        session.handle("p");
        assert_eq!(session.selected_word(), Some("bean"));
    }

    #[test]
    fn test_cycle_without_words_is_noop() {
        let root = test_trie();
        let mut session = Session::new(&root);
        session.handle("n");
        assert_eq!(session.selected_word(), None);
    }

    #[test]
    fn test_back_and_reset() {
        let root = test_trie();
        let mut session = Session::new(&root);
        session.handle("228");
        session.handle("n");
        assert_eq!(session.selected_word(), Some("cat"));

        session.handle("back");
        assert_eq!(session.input(), "22");
        assert_eq!(session.selected_word(), None);

        session.handle("r");
        assert_eq!(session.input(), "");
        assert!(session.handle("<").text().starts_with("nothing to delete\n"));
    }

    #[tokio::test]
    async fn test_run_session_quit_as_start_skips_input() {
        let root = test_trie();
        let mut session = Session::new(&root);
        let mut out = Vec::new();

        run_session(&mut session, Some("esc"), &b"227\n"[..], &mut out)
            .await
            .unwrap();

        assert!(out.is_empty());
        assert_eq!(session.input(), "");
    }

    #[tokio::test]
    async fn test_run_session_stops_at_quit() {
        let root = test_trie();
        let mut session = Session::new(&root);
        let mut out = Vec::new();

        run_session(&mut session, Some("22"), &b"8\nn\nq\n3\n"[..], &mut out)
            .await
            .unwrap();

        assert_eq!(session.input(), "228");
        assert_eq!(session.selected_word(), Some("cat"));
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.ends_with("input: 228  next: []  words: [bat, *cat*]\n"));
    }

    #[tokio::test]
    async fn test_run_session_without_start_renders_root() {
        let root = test_trie();
        let mut session = Session::new(&root);
        let mut out = Vec::new();

        run_session(&mut session, None, &b""[..], &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "input:   next: [2, 3]  words: []\n"
        );
    }

    #[test]
    fn test_quit() {
        let root = test_trie();
        let mut session = Session::new(&root);
        assert_eq!(session.handle("q"), Reply::Quit);
    }
}
