use super::analysis::Analysis;
use super::queue::{ActiveMatch, MatchQueue};
use super::ModeratorConfig;
use crate::classifier::{classify, normalize, CharClass};
use crate::constants::COUNTABLE_CATEGORIES;
use crate::dictionary::{Dictionary, NodeId, TrieNode};

/// Whether a word ending at `node` only counts when its match started on a
/// boundary. Long words count anywhere; four letter words count anywhere
/// unless they start with 's' ("push it" reads as "shit" otherwise); shorter
/// ones need a boundary ("glass" contains "ass").
#[inline(always)]
fn needs_boundary(node: &TrieNode) -> bool {
    !(node.depth() > 4 || (node.depth() > 3 && node.start() != b's'))
}

/// Per-call scan state. The dictionary is only read; everything mutable
/// lives here and dies with the scan.
pub(crate) struct ScanWorker<'a> {
    dictionary: &'a Dictionary,
    config: &'a ModeratorConfig,
    queue: MatchQueue,
    levels: [i32; COUNTABLE_CATEGORIES],
    separate: bool,
    last_matchable: Option<u8>,
    pending_replacement: bool,
    upper_count: usize,
    repetition_count: usize,
}

impl<'a> ScanWorker<'a> {
    #[inline(always)]
    pub(crate) fn new(dictionary: &'a Dictionary, config: &'a ModeratorConfig) -> ScanWorker<'a> {
        ScanWorker {
            dictionary,
            config,
            queue: MatchQueue::new(dictionary.max_live_matches()),
            levels: [0; COUNTABLE_CATEGORIES],
            separate: true,
            last_matchable: None,
            pending_replacement: false,
            upper_count: 0,
            repetition_count: 0,
        }
    }

    pub(crate) fn scan(mut self, text: &str) -> Analysis {
        let text = normalize(text);

        for ch in text.chars() {
            let class = classify(ch);

            match class {
                CharClass::Matchable {
                    letters,
                    substituted,
                    uppercase,
                } => {
                    if uppercase {
                        self.upper_count += 1;
                    }

                    let replaced = substituted || std::mem::take(&mut self.pending_replacement);
                    if let Some(primary) = class.primary() {
                        self.advance(primary, letters, replaced);
                    }
                    self.separate = false;
                }
                CharClass::Separator { marker } => {
                    self.pending_replacement |= marker;
                    self.separate = true;
                }
                CharClass::Unmatchable => {
                    if !self.queue.is_empty() {
                        log::trace!("{:?} drops {} live matches", ch, self.queue.len());
                        self.queue.clear();
                    }
                    self.pending_replacement = false;
                    self.separate = true;
                }
            }
        }

        self.finish(text.len())
    }

    /// Moves every live match forward by one matchable character.
    fn advance(&mut self, primary: u8, letters: &[u8], replaced: bool) {
        let repeated = self.last_matchable == Some(primary);
        if repeated {
            self.repetition_count += 1;
        }

        // A repeat only continues a word, unless a separator came between.
        if !repeated || self.separate {
            self.queue.push_unique(ActiveMatch::root(self.separate));
        }

        // Only matches queued before this character are advanced by it.
        let pending = self.queue.len();

        for processed in 1..=pending {
            let current = self.queue.pop();
            let replaced = replaced || current.replaced;
            // Everything behind the unprocessed matches came from this character.
            let fresh = pending - processed;

            if repeated && current.length > 0 {
                // "fuuuck": stay put and absorb the repeat.
                self.queue.push_unique_after(
                    ActiveMatch {
                        length: current.length + 1,
                        replaced,
                        ..current
                    },
                    fresh,
                );
            }

            for &letter in letters {
                if let Some(next) = self.dictionary.next(current.node, letter) {
                    self.count(next, &current, replaced);
                    self.queue.push_unique_after(
                        ActiveMatch {
                            node: next,
                            length: current.length + 1,
                            replaced,
                            separate: current.separate,
                        },
                        fresh,
                    );
                }
            }
        }

        self.last_matchable = Some(primary);
    }

    fn count(&mut self, id: NodeId, current: &ActiveMatch, replaced: bool) {
        let node = self.dictionary.node(id);

        if !node.is_word() || (needs_boundary(node) && !current.separate) {
            return;
        }

        log::trace!(
            "word: depth {} start {:?} levels {:?} replaced {} length {}",
            node.depth(),
            node.start() as char,
            node.levels(),
            replaced,
            current.length + 1
        );

        for (category, level) in node.levels().iter() {
            // Overrides only cancel words that were spelled out plainly.
            if level > 0 || !replaced {
                self.levels[category.index()] += level as i32;
            }
        }
    }

    fn finish(self, length: usize) -> Analysis {
        let spam = self.config.spam.as_ref().and_then(|spam| {
            spam.severity(self.upper_count + self.repetition_count, length)
        });

        Analysis {
            levels: self.levels,
            upper_count: self.upper_count,
            repetition_count: self.repetition_count,
            length,
            spam,
        }
    }
}
