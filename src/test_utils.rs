use t9::TrieNode;

pub const TEST_WORDS: [&str; 11] = [
    "bar", "bat", "beam", "bean", "bear", "bird", "cat", "cone", "cow", "dog", "dung",
];

pub fn test_trie() -> TrieNode {
    let (root, report) = TrieNode::from_words(TEST_WORDS);
    assert!(report.rejected.is_empty());
    root
}
