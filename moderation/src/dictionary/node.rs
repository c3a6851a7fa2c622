use crate::constants::ALPHABET_LEN;
use crate::types::Levels;

/// Index of a node in a dictionary's node arena.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub(crate) fn new(index: usize) -> NodeId {
        debug_assert!(index <= u32::MAX as usize);
        NodeId(index as u32)
    }

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[inline(always)]
pub(crate) fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: [Option<NodeId>; ALPHABET_LEN],
    word: bool,
    has_children: bool,
    start: u8,
    depth: u8,
    levels: Levels,
}

impl TrieNode {
    pub(crate) fn new(start: u8, depth: u8) -> TrieNode {
        TrieNode {
            start,
            depth,
            ..TrieNode::default()
        }
    }

    /// Whether a dictionary word ends at this node.
    #[inline(always)]
    pub fn is_word(&self) -> bool {
        self.word
    }

    #[inline(always)]
    pub fn has_children(&self) -> bool {
        self.has_children
    }

    /// First letter of every word passing through this node.
    #[inline(always)]
    pub fn start(&self) -> u8 {
        self.start
    }

    /// Distance from the root, i.e. the length of the word ending here.
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.depth as usize
    }

    #[inline(always)]
    pub fn levels(&self) -> Levels {
        self.levels
    }

    #[inline(always)]
    pub fn child(&self, letter: u8) -> Option<NodeId> {
        letter_index(letter).and_then(|i| self.children[i])
    }

    pub fn children(&self) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| child.map(|id| (b'a' + i as u8, id)))
    }

    pub(crate) fn set_child(&mut self, letter: u8, id: NodeId) {
        if let Some(i) = letter_index(letter) {
            self.children[i] = Some(id);
            self.has_children = true;
        }
    }

    pub(crate) fn unlink_child(&mut self, letter: u8) {
        if let Some(i) = letter_index(letter) {
            self.children[i] = None;
            self.has_children = self.children.iter().any(Option::is_some);
        }
    }

    pub(crate) fn mark_word(&mut self, levels: Levels) {
        self.word = true;
        self.levels = levels;
    }

    pub(crate) fn clear_word(&mut self) {
        self.word = false;
        self.levels = Levels::default();
    }
}
