//! Input-file parsing
//!
//! Character mode is one row per line, split on whitespace into exactly two
//! fields. Phrase mode is line triples: pinyin label, payload, and a
//! reserved third line. Validation happens up front so nothing is drawn for
//! malformed input. Line numbers in errors are 1-based.

use unicode_segmentation::UnicodeSegmentation;

use crate::{CharacterRow, InputError, PhraseRow, PhraseSlot, Result};

/// Parse character-mode input text.
pub fn parse_character_rows(text: &str) -> Result<Vec<CharacterRow>> {
    let mut rows = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let fields: Vec<&str> = raw.trim_end_matches('\r').split_whitespace().collect();
        if fields.len() != 2 {
            return Err(InputError::FieldCount {
                line: index + 1,
                found: fields.len(),
            });
        }
        rows.push(CharacterRow {
            pinyin: fields[0].to_string(),
            glyph: fields[1].to_string(),
        });
    }
    Ok(rows)
}

/// Parse phrase-mode input text into rows of `slots` payload slots.
///
/// Payload slots are extended grapheme clusters; an ASCII space is a blank
/// slot. Graphemes beyond the slot count are ignored.
pub fn parse_phrase_rows(text: &str, slots: usize) -> Result<Vec<PhraseRow>> {
    let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
    if lines.len() % 3 != 0 {
        return Err(InputError::TripleCount { lines: lines.len() });
    }

    let mut rows = Vec::with_capacity(lines.len() / 3);
    for (group, triple) in lines.chunks(3).enumerate() {
        let payload_line = group * 3 + 2;
        let graphemes: Vec<&str> = triple[1].graphemes(true).collect();
        if graphemes.len() < slots {
            return Err(InputError::PayloadTooShort {
                line: payload_line,
                expected: slots,
                found: graphemes.len(),
            });
        }
        let payload = graphemes[..slots]
            .iter()
            .map(|g| {
                if *g == " " {
                    PhraseSlot::Blank
                } else {
                    PhraseSlot::Glyph((*g).to_string())
                }
            })
            .collect();
        rows.push(PhraseRow {
            pinyin: triple[0].to_string(),
            slots: payload,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_character_rows() {
        let rows = parse_character_rows("nǐ 你\nhǎo 好\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].pinyin, "nǐ");
        assert_eq!(rows[0].glyph, "你");
        assert_eq!(rows[1].glyph, "好");
    }

    #[test]
    fn test_character_rows_keep_input_order() {
        let rows = parse_character_rows("yī 一\nèr 二\nsān 三\n").unwrap();
        let glyphs: Vec<&str> = rows.iter().map(|r| r.glyph.as_str()).collect();
        assert_eq!(glyphs, ["一", "二", "三"]);
    }

    #[test]
    fn test_character_row_single_token_is_rejected() {
        let err = parse_character_rows("nǐ 你\nbroken\n").unwrap_err();
        match err {
            InputError::FieldCount { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_character_row_three_tokens_is_rejected() {
        let err = parse_character_rows("nǐ hǎo 你\n").unwrap_err();
        assert!(matches!(err, InputError::FieldCount { line: 1, found: 3 }));
    }

    #[test]
    fn test_blank_line_is_rejected() {
        let err = parse_character_rows("nǐ 你\n\nhǎo 好\n").unwrap_err();
        assert!(matches!(err, InputError::FieldCount { line: 2, found: 0 }));
    }

    #[test]
    fn test_empty_input_is_no_rows() {
        assert!(parse_character_rows("").unwrap().is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let rows = parse_character_rows("nǐ 你\r\nhǎo 好\r\n").unwrap();
        assert_eq!(rows[1].glyph, "好");
    }

    #[test]
    fn test_parse_phrase_rows() {
        let text = "zǎo shang hǎo\n早上好         \nreserved\n";
        let rows = parse_phrase_rows(text, 12).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pinyin, "zǎo shang hǎo");
        assert_eq!(rows[0].slots.len(), 12);
        assert_eq!(rows[0].slots[0], PhraseSlot::Glyph("早".to_string()));
        assert!(rows[0].slots[3].is_blank());
        assert!(rows[0].slots[11].is_blank());
    }

    #[test]
    fn test_phrase_payload_extra_slots_are_ignored() {
        let text = "label\n一二三四五六七八九十百千万\n\n";
        let rows = parse_phrase_rows(text, 12).unwrap();
        assert_eq!(rows[0].slots.len(), 12);
        assert_eq!(rows[0].slots[11], PhraseSlot::Glyph("千".to_string()));
    }

    #[test]
    fn test_phrase_short_payload_is_rejected() {
        let text = "label\n早上好\nreserved\n";
        let err = parse_phrase_rows(text, 12).unwrap_err();
        match err {
            InputError::PayloadTooShort {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 12);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_phrase_line_count_must_be_a_triple() {
        let text = "label\n早上好          \n";
        let err = parse_phrase_rows(text, 12).unwrap_err();
        assert!(matches!(err, InputError::TripleCount { lines: 2 }));
    }

    #[test]
    fn test_phrase_reserved_line_content_is_ignored() {
        let text = "a\n一二三四五六七八九十百千\nanything at all\n";
        let rows = parse_phrase_rows(text, 12).unwrap();
        assert_eq!(rows.len(), 1);
    }
}
