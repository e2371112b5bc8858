//! Sentence table parsing
//!
//! Sentence files are comma separated with a header row. The first three
//! columns are the sentence, its pinyin and its meaning; any further columns
//! are earlier level annotations and are dropped on rewrite.

/// Most fields read from one row
pub const MAX_FIELDS: usize = 5;

/// Fewest fields a row needs to be kept
pub const MIN_FIELDS: usize = 3;

/// Header columns appended by classification
pub const LEVEL_COLUMNS: &str = ",HSK Level,TOCFL Level";

/// One row of a sentence file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    /// The Chinese sentence
    pub sentence: String,
    /// Romanization
    pub pinyin: String,
    /// English meaning
    pub meaning: String,
}

/// Parsed sentence file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceTable {
    /// Header row without any level columns, `None` for an empty file
    pub header: Option<String>,
    /// Rows with at least three fields, in file order
    pub records: Vec<SentenceRecord>,
    /// Rows dropped for having too few fields or invalid UTF-8
    pub skipped: usize,
}

impl SentenceTable {
    /// Parse the whole file. Blank lines are ignored.
    pub fn parse(content: impl AsRef<[u8]>) -> Self {
        let mut lines = byte_lines(content.as_ref());
        let Some(header) = lines.next() else {
            return Self::default();
        };

        let header = String::from_utf8_lossy(header);
        let mut table = Self {
            header: Some(strip_level_columns(&header).to_string()),
            ..Self::default()
        };

        for (index, line) in lines.enumerate() {
            if line.is_empty() {
                continue;
            }

            let Ok(line) = std::str::from_utf8(line) else {
                log::debug!("Skipping row {}: invalid UTF-8", index + 2);
                table.skipped += 1;
                continue;
            };

            let mut fields = split_fields(line, MAX_FIELDS).into_iter();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(sentence), Some(pinyin), Some(meaning)) => {
                    table.records.push(SentenceRecord {
                        sentence,
                        pinyin,
                        meaning,
                    });
                }
                _ => {
                    log::debug!("Skipping row {}: fewer than {MIN_FIELDS} fields", index + 2);
                    table.skipped += 1;
                }
            }
        }

        table
    }

    /// Header to write back, with the level columns appended
    pub fn output_header(&self) -> Option<String> {
        self.header
            .as_ref()
            .map(|header| format!("{header}{LEVEL_COLUMNS}"))
    }

    /// Sentences in row order
    pub fn sentences(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.sentence.as_str()).collect()
    }
}

/// Split raw file content into lines the way [`str::lines`] does: on `\n`,
/// dropping one trailing `\r` per line and no final empty line.
pub fn byte_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    let count = if content.is_empty() { 0 } else { usize::MAX };
    body.split(|&byte| byte == b'\n')
        .take(count)
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Cut the header at the first `,HSK Level` or, failing that, the first
/// `,TOCFL Level`.
pub fn strip_level_columns(header: &str) -> &str {
    let cut = header
        .find(",HSK Level")
        .or_else(|| header.find(",TOCFL Level"));
    match cut {
        Some(at) => &header[..at],
        None => header,
    }
}

/// Split one row into at most `max_fields` fields.
///
/// Leading spaces before a field are skipped. A field starting with `"` runs
/// to the next lone `"`; `""` inside it stands for one quote. A trailing
/// comma does not open an empty field.
pub fn split_fields(line: &str, max_fields: usize) -> Vec<String> {
    let mut fields = Vec::new();
    let mut rest = line;

    while !rest.is_empty() && fields.len() < max_fields {
        rest = rest.trim_start_matches(' ');

        if let Some(quoted) = rest.strip_prefix('"') {
            let (field, after) = take_quoted(quoted);
            fields.push(field);
            rest = after.strip_prefix(',').unwrap_or(after);
        } else {
            match rest.split_once(',') {
                Some((field, after)) => {
                    fields.push(field.to_string());
                    rest = after;
                }
                None => {
                    fields.push(rest.to_string());
                    rest = "";
                }
            }
        }
    }

    fields
}

/// Read a quoted field body, returning it unescaped plus the text after the
/// closing quote. An unterminated field takes the rest of the line.
fn take_quoted(input: &str) -> (String, &str) {
    let mut field = String::new();
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '"' {
            field.push(c);
            continue;
        }
        match chars.peek() {
            Some((_, '"')) => {
                field.push('"');
                chars.next();
            }
            _ => return (field, &input[i + 1..]),
        }
    }

    (field, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(
            split_fields("你好,nǐ hǎo,hello", MAX_FIELDS),
            vec!["你好", "nǐ hǎo", "hello"]
        );
    }

    #[test]
    fn test_quoted_field_with_comma_and_quote() {
        let fields = split_fields(r#"他说,tā shuō,"he said, ""hi""",2"#, MAX_FIELDS);
        assert_eq!(fields, vec!["他说", "tā shuō", r#"he said, "hi""#, "2"]);
    }

    #[test]
    fn test_field_limit() {
        let fields = split_fields("a,b,c,d,e,f,g", MAX_FIELDS);
        assert_eq!(fields, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_leading_spaces_and_trailing_comma() {
        assert_eq!(split_fields("a,  b,", MAX_FIELDS), vec!["a", "b"]);
        assert_eq!(split_fields("a, ", MAX_FIELDS), vec!["a", ""]);
        assert!(split_fields("", MAX_FIELDS).is_empty());
    }

    #[test]
    fn test_unterminated_quote_takes_rest() {
        assert_eq!(
            split_fields(r#"a,"b,c"#, MAX_FIELDS),
            vec!["a".to_string(), "b,c".to_string()]
        );
    }

    #[test]
    fn test_strip_level_columns() {
        assert_eq!(
            strip_level_columns("Characters,Pinyin,Meaning,HSK Level,TOCFL Level"),
            "Characters,Pinyin,Meaning"
        );
        assert_eq!(
            strip_level_columns("Characters,Pinyin,Meaning,TOCFL Level"),
            "Characters,Pinyin,Meaning"
        );
        assert_eq!(
            strip_level_columns("Characters,Pinyin,Meaning"),
            "Characters,Pinyin,Meaning"
        );
    }

    #[test]
    fn test_parse_table() {
        let content = "Characters,Pinyin,Meaning,HSK Level,TOCFL Level\r\n\
                       你好,nǐ hǎo,hello,1,1\r\n\
                       \r\n\
                       broken,row\r\n\
                       我是学生,wǒ shì xuéshēng,\"I am a student, really\"\r\n";
        let table = SentenceTable::parse(content);

        assert_eq!(table.header.as_deref(), Some("Characters,Pinyin,Meaning"));
        assert_eq!(
            table.output_header().as_deref(),
            Some("Characters,Pinyin,Meaning,HSK Level,TOCFL Level")
        );
        assert_eq!(table.sentences(), vec!["你好", "我是学生"]);
        assert_eq!(table.records[1].meaning, "I am a student, really");
        assert_eq!(table.skipped, 1);
    }

    #[test]
    fn test_invalid_utf8_row_is_skipped() {
        let mut content = "Characters,Pinyin,Meaning\n你好,nǐ hǎo,hello\n".as_bytes().to_vec();
        content.extend_from_slice(b"\xff\xfe,bad,row\n");
        content.extend_from_slice("我是学生,wǒ shì xuéshēng,I am a student\n".as_bytes());

        let table = SentenceTable::parse(&content);

        assert_eq!(table.sentences(), vec!["你好", "我是学生"]);
        assert_eq!(table.skipped, 1);
    }

    #[test]
    fn test_byte_lines_matches_str_lines() {
        for text in ["", "\n", "a", "a\n", "a\r\nb", "a\n\nb\r\n", "\r\n"] {
            let expected: Vec<&[u8]> = text.lines().map(str::as_bytes).collect();
            let actual: Vec<&[u8]> = byte_lines(text.as_bytes()).collect();
            assert_eq!(actual, expected, "{text:?}");
        }
    }

    #[test]
    fn test_empty_file() {
        let table = SentenceTable::parse("");
        assert_eq!(table.header, None);
        assert_eq!(table.output_header(), None);
        assert!(table.records.is_empty());
    }
}
