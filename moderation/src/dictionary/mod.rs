//! Compressed prefix tree of moderated words.
//!
//! Nodes are stored in an arena and addressed by [`NodeId`], so live scan
//! states can point at the same node without borrowing the dictionary
//! mutably or owning anything.

mod default_words;
mod node;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

pub use self::node::{NodeId, TrieNode};

use self::default_words::DEFAULT_WORDS;
use crate::constants::LONGEST_WORD;
use crate::error::DictionaryError;
use crate::types::Levels;

/// A word and its per-category levels, as supplied by the embedder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: SmolStr,
    pub levels: Levels,
}

impl DictionaryEntry {
    pub fn new(word: impl Into<SmolStr>, levels: Levels) -> DictionaryEntry {
        DictionaryEntry {
            word: word.into(),
            levels,
        }
    }
}

fn validate(word: &str) -> Result<(), DictionaryError> {
    if word.is_empty() {
        return Err(DictionaryError::EmptyWord);
    }

    if let Some(ch) = word.chars().find(|ch| !ch.is_ascii_lowercase()) {
        return Err(DictionaryError::InvalidCharacter {
            word: word.into(),
            ch,
        });
    }

    if word.len() > LONGEST_WORD {
        return Err(DictionaryError::WordTooLong {
            word: word.into(),
            len: word.len(),
            max: LONGEST_WORD,
        });
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    nodes: Vec<TrieNode>,
    len: usize,
    longest_word: usize,
}

impl Dictionary {
    /// An empty dictionary holding only the root node.
    pub fn new() -> Dictionary {
        Dictionary {
            nodes: vec![TrieNode::default()],
            len: 0,
            longest_word: 0,
        }
    }

    /// Builds a dictionary from `entries`. Later duplicates overwrite
    /// earlier ones.
    pub fn build<I>(entries: I) -> Result<Dictionary, DictionaryError>
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut dictionary = Dictionary::new();

        for entry in entries {
            dictionary.add(&entry.word, entry.levels)?;
        }

        log::debug!(
            "Built dictionary: {} words, {} nodes, longest word {}",
            dictionary.len,
            dictionary.nodes.len(),
            dictionary.longest_word
        );

        Ok(dictionary)
    }

    /// Inserts `word`, or overwrites its levels if already present.
    pub fn add(&mut self, word: &str, levels: Levels) -> Result<(), DictionaryError> {
        validate(word)?;
        self.insert(word.as_bytes(), levels);
        Ok(())
    }

    fn insert(&mut self, word: &[u8], levels: Levels) {
        let mut current = NodeId::ROOT;

        for (i, &letter) in word.iter().enumerate() {
            current = match self.next(current, letter) {
                Some(next) => next,
                None => {
                    let next = NodeId::new(self.nodes.len());
                    self.nodes.push(TrieNode::new(word[0], (i + 1) as u8));
                    self.nodes[current.index()].set_child(letter, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current.index()];
        if !node.is_word() {
            self.len += 1;
        }
        node.mark_word(levels);
        self.longest_word = self.longest_word.max(word.len());
    }

    fn find(&self, word: &str) -> Option<NodeId> {
        word.bytes()
            .try_fold(NodeId::ROOT, |current, letter| self.next(current, letter))
    }

    /// Levels of `word`, if it is in the dictionary.
    pub fn get(&self, word: &str) -> Option<Levels> {
        self.find(word)
            .map(|id| self.node(id))
            .filter(|node| node.is_word())
            .map(TrieNode::levels)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Removes `word`, returning whether it was present.
    ///
    /// Nodes left without children or a word of their own are unlinked
    /// from their parents, bottom-up. Their arena slots are not reused.
    pub fn remove(&mut self, word: &str) -> bool {
        let mut path = Vec::with_capacity(word.len() + 1);
        path.push(NodeId::ROOT);

        for letter in word.bytes() {
            let current = path[path.len() - 1];
            match self.next(current, letter) {
                Some(next) => path.push(next),
                None => return false,
            }
        }

        let terminal = path[path.len() - 1];
        if terminal == NodeId::ROOT || !self.node(terminal).is_word() {
            return false;
        }

        self.nodes[terminal.index()].clear_word();
        self.len -= 1;

        let letters = word.as_bytes();
        for depth in (1..path.len()).rev() {
            let node = self.node(path[depth]);
            if node.is_word() || node.has_children() {
                break;
            }
            self.nodes[path[depth - 1].index()].unlink_child(letters[depth - 1]);
        }

        if word.len() == self.longest_word {
            self.longest_word = 0;
            let mut longest = 0;
            self.traverse(|word, _| longest = longest.max(word.len()));
            self.longest_word = longest;
        }

        log::debug!("Removed {:?}, {} words remain", word, self.len);

        true
    }

    #[inline(always)]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[inline(always)]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    /// Follows the edge for `letter` out of `id`.
    #[inline(always)]
    pub fn next(&self, id: NodeId, letter: u8) -> Option<NodeId> {
        self.node(id).child(letter)
    }

    /// Visits every word in preorder, which is alphabetical order.
    pub fn traverse<F>(&self, mut callback: F)
    where
        F: FnMut(&str, Levels),
    {
        let mut word = String::with_capacity(LONGEST_WORD);
        self.traverse_from(NodeId::ROOT, &mut word, &mut callback);
    }

    fn traverse_from<F>(&self, id: NodeId, word: &mut String, callback: &mut F)
    where
        F: FnMut(&str, Levels),
    {
        let node = self.node(id);

        if node.is_word() {
            callback(word, node.levels());
        }

        if node.has_children() {
            for (letter, child) in node.children() {
                word.push(letter as char);
                self.traverse_from(child, word, callback);
                word.pop();
            }
        }
    }

    pub fn entries(&self) -> Vec<DictionaryEntry> {
        let mut entries = Vec::with_capacity(self.len);
        self.traverse(|word, levels| entries.push(DictionaryEntry::new(word, levels)));
        entries
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn longest_word(&self) -> usize {
        self.longest_word
    }

    /// Upper bound on live matches during a scan with this dictionary.
    ///
    /// Matches are unique per (node, replaced, separate), so one character
    /// ends with at most four per node plus a root match. While it is being
    /// processed, the matches from the previous character are still queued
    /// too, hence twice that.
    pub(crate) fn max_live_matches(&self) -> usize {
        let nodes = self.nodes.len() - 1;
        2 * (4 * nodes + 1)
    }
}

impl Default for Dictionary {
    /// The built-in English word list.
    fn default() -> Dictionary {
        let mut dictionary = Dictionary::new();

        for (word, levels) in DEFAULT_WORDS {
            debug_assert!(validate(word).is_ok(), "invalid built-in word {:?}", word);
            dictionary.insert(word.as_bytes(), Levels(*levels));
        }

        dictionary
    }
}
