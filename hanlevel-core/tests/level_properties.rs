//! Property tests for level resolution

use hanlevel_core::{Ladder, LadderKind, LevelClassification, LevelResolver, Segmenter};
use proptest::prelude::*;

const ALPHABET: &[&str] = &[
    "我", "你", "他", "是", "学", "生", "中", "国", "人", "民", "好", "，", "。", "a", " ", "7",
];

fn sentence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..12).prop_map(|parts| parts.concat())
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(&ALPHABET[..11]), 1..4)
        .prop_map(|parts| parts.concat())
}

fn ladder_strategy() -> impl Strategy<Value = Ladder> {
    prop::collection::vec((1u8..=7, word_strategy()), 0..40).prop_map(|entries| {
        let mut ladder = Ladder::new(LadderKind::Hsk);
        for (level, word) in entries {
            ladder
                .level_mut(level)
                .expect("level drawn from 1..=7")
                .insert(word);
        }
        ladder
    })
}

proptest! {
    #[test]
    fn segmentability_is_monotonic_in_level(
        sentence in sentence_strategy(),
        ladder in ladder_strategy(),
    ) {
        let segmenter = Segmenter::default();
        let mut seen_success = false;
        for level in 1..=ladder.max_level() {
            let known = ladder.upto(level).unwrap();
            let ok = segmenter.can_segment(&sentence, &known);
            prop_assert!(ok || !seen_success, "level {} regressed", level);
            seen_success |= ok;
        }
    }

    #[test]
    fn minimal_level_is_minimal_and_sufficient(
        sentence in sentence_strategy(),
        ladder in ladder_strategy(),
    ) {
        let resolver = LevelResolver::default();
        let segmenter = resolver.segmenter();

        match resolver.minimal_level(&sentence, &ladder) {
            LevelClassification::Level(level) => {
                prop_assert!(segmenter.can_segment(&sentence, &ladder.upto(level).unwrap()));
                for lower in 1..level {
                    prop_assert!(!segmenter.can_segment(&sentence, &ladder.upto(lower).unwrap()));
                }
            }
            LevelClassification::Unreachable => {
                prop_assert!(!segmenter.can_segment(&sentence, &ladder.upto(7).unwrap()));
            }
        }
    }

    #[test]
    fn classification_is_idempotent(
        sentence in sentence_strategy(),
        ladder in ladder_strategy(),
    ) {
        let resolver = LevelResolver::default();
        prop_assert_eq!(
            resolver.minimal_level(&sentence, &ladder),
            resolver.minimal_level(&sentence, &ladder)
        );
    }

    #[test]
    fn can_segment_agrees_with_segment(
        sentence in sentence_strategy(),
        ladder in ladder_strategy(),
    ) {
        let segmenter = Segmenter::default();
        let known = ladder.upto(4).unwrap();
        let segmentation = segmenter.segment(&sentence, &known);
        prop_assert_eq!(segmenter.can_segment(&sentence, &known), segmentation.is_complete());

        if segmentation.is_complete() {
            let covered: usize = segmentation.tokens.iter().map(|token| token.len).sum();
            prop_assert_eq!(covered, sentence.len());
        }
    }

    #[test]
    fn ascii_sentences_are_always_level_one(
        sentence in "[ -~]{0,40}",
        ladder in ladder_strategy(),
    ) {
        let resolver = LevelResolver::default();
        prop_assert_eq!(
            resolver.minimal_level(&sentence, &ladder),
            LevelClassification::Level(1)
        );
    }

    #[test]
    fn arbitrary_bytes_never_panic(
        bytes in prop::collection::vec(any::<u8>(), 0..64),
        ladder in ladder_strategy(),
    ) {
        let resolver = LevelResolver::default();
        let _ = resolver.minimal_level(&bytes, &ladder);
    }
}
