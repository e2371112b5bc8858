//! Greedy leftmost-longest segmentation
//!
//! The walk keeps a byte cursor and, at every target-script character, takes
//! the longest run of bytes (down to [`MIN_CANDIDATE_BYTES`]) that the lexicon
//! knows, falling back to the single character. Non-target characters are
//! consumed without a lookup. There is no backtracking: once a run is taken it
//! is never reconsidered, so a greedy choice can strand the remainder of a
//! sentence that some other partition would have covered.

use smallvec::SmallVec;

use crate::classifier::{CharacterClassifier, ScriptPolicy};
use crate::vocabulary::Lexicon;
use crate::{DEFAULT_MAX_WORD_BYTES, MIN_CANDIDATE_BYTES};

/// Segmenter tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmenterConfig {
    /// Word buffer size; the longest candidate tried is one byte shorter
    pub max_word_bytes: usize,
    /// Target-script decision
    pub policy: ScriptPolicy,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_word_bytes: DEFAULT_MAX_WORD_BYTES,
            policy: ScriptPolicy::default(),
        }
    }
}

impl SegmenterConfig {
    /// Longest byte run tried as a candidate
    pub fn max_candidate_bytes(&self) -> usize {
        self.max_word_bytes.saturating_sub(1)
    }
}

/// How a token was consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// Non-target character, skipped without lookup
    Passthrough,
    /// Longest known run of at least three bytes
    Word,
    /// Single character found after no run matched
    Character,
}

/// A consumed span of the sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Byte offset of the first byte
    pub start: usize,
    /// Length in bytes
    pub len: usize,
    /// How the span was matched
    pub kind: TokenKind,
}

impl Token {
    /// Byte offset one past the last byte
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The token's bytes within `sentence`
    pub fn bytes<'s>(&self, sentence: &'s [u8]) -> &'s [u8] {
        &sentence[self.start..self.end()]
    }
}

/// Tokens of a segmentation attempt, plus where it stopped if it failed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segmentation {
    /// Tokens consumed before the walk ended
    pub tokens: SmallVec<[Token; 16]>,
    /// Byte offset of the target character no token covered
    pub failed_at: Option<usize>,
}

impl Segmentation {
    /// Whether the whole sentence was consumed
    pub fn is_complete(&self) -> bool {
        self.failed_at.is_none()
    }

    /// Tokens that needed a vocabulary match
    pub fn matched(&self) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .filter(|token| token.kind != TokenKind::Passthrough)
    }
}

/// Greedy, non-backtracking vocabulary segmenter
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    config: SegmenterConfig,
    classifier: CharacterClassifier,
}

impl Segmenter {
    /// Create a segmenter
    pub fn new(config: SegmenterConfig) -> Self {
        Self {
            config,
            classifier: CharacterClassifier::new(config.policy),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Whether `sentence` can be fully partitioned using `lexicon`.
    ///
    /// The empty sentence is trivially segmentable.
    pub fn can_segment<L>(&self, sentence: impl AsRef<[u8]>, lexicon: &L) -> bool
    where
        L: Lexicon + ?Sized,
    {
        self.walk(sentence.as_ref(), lexicon, &mut |_| {}).is_ok()
    }

    /// Same walk as [`Segmenter::can_segment`], keeping the tokens
    pub fn segment<L>(&self, sentence: impl AsRef<[u8]>, lexicon: &L) -> Segmentation
    where
        L: Lexicon + ?Sized,
    {
        let mut tokens = SmallVec::new();
        let failed_at = self
            .walk(sentence.as_ref(), lexicon, &mut |token| tokens.push(token))
            .err();
        Segmentation { tokens, failed_at }
    }

    /// Walk the sentence, emitting each token. `Err` carries the offset of
    /// the first target character nothing matched.
    fn walk<L, F>(&self, bytes: &[u8], lexicon: &L, emit: &mut F) -> Result<(), usize>
    where
        L: Lexicon + ?Sized,
        F: FnMut(Token),
    {
        let mut pos = 0;

        while pos < bytes.len() {
            let info = self.classifier.classify(bytes, pos);

            let token = if !info.is_target {
                Token {
                    start: pos,
                    len: info.len,
                    kind: TokenKind::Passthrough,
                }
            } else if let Some(len) = self.longest_run(bytes, pos, lexicon) {
                Token {
                    start: pos,
                    len,
                    kind: TokenKind::Word,
                }
            } else if lexicon.contains(&bytes[pos..pos + info.len]) {
                Token {
                    start: pos,
                    len: info.len,
                    kind: TokenKind::Character,
                }
            } else {
                return Err(pos);
            };

            emit(token);
            pos = token.end();
        }

        Ok(())
    }

    /// Longest known run starting at `pos`, trying every length from the
    /// candidate bound down to three bytes. Runs may end inside a character;
    /// those never equal a stored word and simply miss.
    fn longest_run<L>(&self, bytes: &[u8], pos: usize, lexicon: &L) -> Option<usize>
    where
        L: Lexicon + ?Sized,
    {
        let max = (bytes.len() - pos).min(self.config.max_candidate_bytes());
        (MIN_CANDIDATE_BYTES..=max)
            .rev()
            .find(|&len| lexicon.contains(&bytes[pos..pos + len]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::VocabularyLevel;

    fn lexicon(words: &[&str]) -> VocabularyLevel {
        VocabularyLevel::from_words(1, words)
    }

    fn texts<'s>(sentence: &'s str, segmentation: &Segmentation) -> Vec<&'s str> {
        segmentation
            .tokens
            .iter()
            .map(|token| &sentence[token.start..token.end()])
            .collect()
    }

    #[test]
    fn test_empty_sentence_succeeds() {
        let segmenter = Segmenter::default();
        assert!(segmenter.can_segment("", &lexicon(&[])));
        assert!(segmenter.segment("", &lexicon(&[])).tokens.is_empty());
    }

    #[test]
    fn test_longest_match_wins() {
        let segmenter = Segmenter::default();
        let vocab = lexicon(&["中", "中国", "中国人"]);
        let result = segmenter.segment("中国人", &vocab);

        assert!(result.is_complete());
        assert_eq!(texts("中国人", &result), vec!["中国人"]);
        assert_eq!(result.tokens[0].kind, TokenKind::Word);
    }

    #[test]
    fn test_passthrough_is_not_looked_up() {
        let segmenter = Segmenter::default();
        let sentence = "Tom，你好！";
        let result = segmenter.segment(sentence, &lexicon(&["你好"]));

        assert!(result.is_complete());
        assert_eq!(
            texts(sentence, &result),
            vec!["T", "o", "m", "，", "你好", "！"]
        );
        assert_eq!(result.matched().count(), 1);
    }

    #[test]
    fn test_failure_reports_offset() {
        let segmenter = Segmenter::default();
        let sentence = "我爱你";
        let result = segmenter.segment(sentence, &lexicon(&["我", "你"]));

        assert!(!result.is_complete());
        assert_eq!(result.failed_at, Some(3));
        assert_eq!(texts(sentence, &result), vec!["我"]);
    }

    #[test]
    fn test_greedy_choice_is_not_undone() {
        let segmenter = Segmenter::default();
        // 中国 + 人民 would cover the sentence, but 中国人 is taken first.
        let vocab = lexicon(&["中国", "中国人", "人民"]);
        let result = segmenter.segment("中国人民", &vocab);

        assert_eq!(result.failed_at, Some(9));
        assert!(!segmenter.can_segment("中国人民", &vocab));
    }

    #[test]
    fn test_candidate_bound_limits_run_length() {
        let word = "一".repeat(5); // 15 bytes
        let vocab = lexicon(&[word.as_str(), "一"]);

        let wide = Segmenter::default();
        assert_eq!(wide.segment(&word, &vocab).tokens.len(), 1);

        let narrow = Segmenter::new(SegmenterConfig {
            max_word_bytes: 10,
            ..Default::default()
        });
        let result = narrow.segment(&word, &vocab);
        assert!(result.is_complete());
        assert_eq!(result.tokens.len(), 5);
    }

    #[test]
    fn test_truncated_trailing_character_falls_back() {
        // "好" followed by the first two bytes of "中"
        let mut bytes = "好".as_bytes().to_vec();
        bytes.extend_from_slice(&"中".as_bytes()[..2]);

        let segmenter = Segmenter::default();
        let result = segmenter.segment(&bytes, &lexicon(&["好"]));
        assert_eq!(result.failed_at, Some(3));

        let mut partial = lexicon(&["好"]);
        partial.insert(&"中".as_bytes()[..2]);
        let result = segmenter.segment(&bytes, &partial);
        assert!(result.is_complete());
        assert_eq!(result.tokens[1].kind, TokenKind::Character);
        assert_eq!(result.tokens[1].len, 2);
    }

    #[test]
    fn test_arbitrary_bytes_do_not_panic() {
        let segmenter = Segmenter::default();
        let vocab = lexicon(&["中"]);
        let inputs: [&[u8]; 5] = [
            &[0xFF, 0xFE, 0xE4],
            &[0xE4, 0x80],
            &[0x80, 0x80, 0x80, 0x80],
            &[0xF0, 0x9F],
            &[0xE9, 0xBF, 0xBF, 0xE4],
        ];
        for input in inputs {
            let _ = segmenter.segment(input, &vocab);
        }
    }
}
