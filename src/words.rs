use std::{io::BufReader, path::Path};

use anyhow::Context;
use tracing::{debug, warn};

use crate::trie::TrieNode;

pub const DEFAULT_WORDS_PATH: &str = "./small-words.txt";

/// Opens a word list and builds the trie off the async runtime.
pub async fn load_words(path: &Path) -> anyhow::Result<TrieNode> {
    debug!("loading words from {}", path.display());

    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("failed to open words file {}", path.display()))?
        .into_std()
        .await;

    let (root, report) = tokio::task::spawn_blocking(move || TrieNode::build(BufReader::new(file)))
        .await?
        .context("failed to construct word trie")?;

    for word in &report.rejected {
        warn!("skipped word with unmappable characters: {:?}", word);
    }
    debug!(
        "words loaded: {} inserted, {} rejected, {} nodes",
        report.inserted,
        report.rejected.len(),
        root.node_count()
    );

    Ok(root)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::keypad::Digit::*;
    use crate::trie::tests::TEST_WORDS;

    #[tokio::test]
    async fn test_load_words_from_file() {
        let _ = tracing_subscriber::fmt::try_init();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEST_WORDS.as_bytes()).unwrap();

        let root = load_words(file.path()).await.unwrap();
        assert_eq!(root.next_steps(), vec![Two, Three]);
        assert_eq!(root.lookup(&[Two, Two, Seven]).unwrap().words(), ["bar"]);
    }

    #[tokio::test]
    async fn test_load_words_skips_unmappable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "can't\nbar\n").unwrap();

        let root = load_words(file.path()).await.unwrap();
        assert_eq!(root.next_steps(), vec![Two]);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_words(&dir.path().join("nope.txt")).await.unwrap_err();
        assert!(err.to_string().starts_with("failed to open words file"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_build_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"bar\n\xff\n").unwrap();

        let err = load_words(file.path()).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to construct word trie");
        assert!(err
            .chain()
            .any(|cause| cause.to_string().starts_with("failed to read words source")));
    }
}
