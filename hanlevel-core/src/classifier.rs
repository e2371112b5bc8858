//! Byte-level character classification
//!
//! The segmenter walks raw UTF-8 bytes. At every cursor position it needs two
//! answers: how many bytes the character there occupies, and whether that
//! character belongs to the target script (CJK ideographs) and therefore has
//! to be found in the vocabulary. Both answers are total: malformed input
//! degrades to a one-byte, non-target character so the walk always advances.

/// Lowest leading byte of the three-byte forms treated as ideographs
/// (U+4000, `E4 80 80`).
pub const TARGET_LEAD_MIN: u8 = 0xE4;

/// Highest leading byte of the three-byte forms treated as ideographs
/// (U+9FFF, `E9 BF BF`).
pub const TARGET_LEAD_MAX: u8 = 0xE9;

/// First code point of the CJK Unified Ideographs block.
pub const CJK_BLOCK_START: u32 = 0x4E00;

/// Last code point of the CJK Unified Ideographs block.
pub const CJK_BLOCK_END: u32 = 0x9FFF;

/// How "target script" is decided for a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScriptPolicy {
    /// Three-byte sequences whose leading byte is in `0xE4..=0xE9`.
    ///
    /// Continuation bytes are never inspected. This covers U+4000..=U+9FFF,
    /// so it also admits the tail of CJK Extension A and the Yijing
    /// hexagram symbols that sit below U+4E00.
    #[default]
    LeadingByte,
    /// Decoded code point within U+4E00..=U+9FFF.
    CodePoint,
}

impl ScriptPolicy {
    /// Policy name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptPolicy::LeadingByte => "leading-byte",
            ScriptPolicy::CodePoint => "code-point",
        }
    }
}

impl core::str::FromStr for ScriptPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leading-byte" | "leading_byte" | "lead" => Ok(ScriptPolicy::LeadingByte),
            "code-point" | "code_point" | "codepoint" => Ok(ScriptPolicy::CodePoint),
            other => Err(format!("unknown script policy: {other}")),
        }
    }
}

/// Length and script membership of the character at a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    /// Byte length, always at least 1 and never past the end of the buffer
    pub len: usize,
    /// Whether the character must be matched against the vocabulary
    pub is_target: bool,
}

impl Default for CharInfo {
    fn default() -> Self {
        Self {
            len: 1,
            is_target: false,
        }
    }
}

/// Encoded length implied by a UTF-8 leading byte.
///
/// Continuation bytes and the invalid `0xF8..` range report 1.
#[inline]
pub fn utf8_len(lead: u8) -> usize {
    if lead & 0x80 == 0x00 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

/// Decides character length and target-script membership
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClassifier {
    policy: ScriptPolicy,
}

impl CharacterClassifier {
    /// Create a classifier using the given policy
    pub fn new(policy: ScriptPolicy) -> Self {
        Self { policy }
    }

    /// Policy in use
    pub fn policy(&self) -> ScriptPolicy {
        self.policy
    }

    /// Classify the character starting at `pos`.
    ///
    /// Out-of-range positions return the default one-byte, non-target info.
    pub fn classify(&self, bytes: &[u8], pos: usize) -> CharInfo {
        let Some(&lead) = bytes.get(pos) else {
            return CharInfo::default();
        };

        let remaining = bytes.len() - pos;
        let encoded = utf8_len(lead);
        let is_target = encoded == 3
            && match self.policy {
                ScriptPolicy::LeadingByte => (TARGET_LEAD_MIN..=TARGET_LEAD_MAX).contains(&lead),
                ScriptPolicy::CodePoint => decode_three(&bytes[pos..])
                    .is_some_and(|cp| (CJK_BLOCK_START..=CJK_BLOCK_END).contains(&cp)),
            };

        CharInfo {
            len: encoded.min(remaining),
            is_target,
        }
    }

    /// Whether the character at `pos` is target script
    pub fn is_target(&self, bytes: &[u8], pos: usize) -> bool {
        self.classify(bytes, pos).is_target
    }
}

/// Decode a three-byte sequence, rejecting truncated input and bad
/// continuation bytes.
fn decode_three(bytes: &[u8]) -> Option<u32> {
    match *bytes {
        [b0, b1, b2, ..] if b1 & 0xC0 == 0x80 && b2 & 0xC0 == 0x80 => Some(
            (u32::from(b0 & 0x0F) << 12) | (u32::from(b1 & 0x3F) << 6) | u32::from(b2 & 0x3F),
        ),
        _ => None,
    }
}
