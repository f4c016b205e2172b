//! Conversion between wire positions and byte offsets.
//!
//! The protocol addresses documents by 0-based line and UTF-16 code unit
//! within the line; the parsed tree addresses them by byte offset. Both
//! directions walk the raw text, so they stay correct on multi-byte
//! content without any precomputed index.

use tower_lsp::lsp_types::Position;

/// Byte offset of a wire position within `text`.
///
/// A character count past the end of the line clamps to the line end, and a
/// line past the end of the document clamps to the document length; editors
/// send such positions for cursors at the very end of a file.
pub fn byte_offset(text: &str, position: Position) -> usize {
    let mut line_start = 0;
    if position.line > 0 {
        let mut line = 0;
        let mut found = false;
        for (idx, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line += 1;
                if line == position.line {
                    line_start = idx + 1;
                    found = true;
                    break;
                }
            }
        }
        if !found {
            return text.len();
        }
    }

    let mut units: u32 = 0;
    let mut offset = line_start;
    for ch in text[line_start..].chars() {
        if units >= position.character || ch == '\n' {
            break;
        }
        units += ch.len_utf16() as u32;
        offset += ch.len_utf8();
    }
    offset
}

/// Wire position of a byte offset within `text`. Inverse of [`byte_offset`]
/// for offsets on character boundaries; offsets past the end clamp to the
/// final position.
pub fn position_at(text: &str, offset: usize) -> Position {
    let offset = offset.min(text.len());
    let mut line: u32 = 0;
    let mut character: u32 = 0;
    for (idx, ch) in text.char_indices() {
        if idx >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            character = 0;
        } else {
            character += ch.len_utf16() as u32;
        }
    }
    Position { line, character }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "job \"web\" {\n  region = \"ostrów\"\n  meta {\n    note = \"☃ snowman\"\n  }\n}\n";

    fn pos(line: u32, character: u32) -> Position {
        Position { line, character }
    }

    #[test]
    fn line_starts_round_trip() {
        // One probe per line, at character 0.
        for (line, _) in SAMPLE.lines().enumerate() {
            let offset = byte_offset(SAMPLE, pos(line as u32, 0));
            assert_eq!(position_at(SAMPLE, offset), pos(line as u32, 0));
        }
    }

    #[test]
    fn multibyte_line_counts_utf16_units() {
        // "ostrów" sits on line 1; 'ó' is two bytes but one UTF-16 unit.
        let quote = SAMPLE.find("\"ostrów\"").unwrap();
        let after = quote + "\"ostrów\"".len();
        let position = position_at(SAMPLE, after);
        assert_eq!(byte_offset(SAMPLE, position), after);

        // The snowman is three bytes, one UTF-16 unit.
        let snowman = SAMPLE.find('☃').unwrap();
        let position = position_at(SAMPLE, snowman);
        assert_eq!(byte_offset(SAMPLE, position), snowman);
    }

    #[test]
    fn final_position_equals_total_length() {
        let last_line = SAMPLE.lines().count() as u32;
        assert_eq!(byte_offset(SAMPLE, pos(last_line, 0)), SAMPLE.len());
    }

    #[test]
    fn clamps_past_line_and_document_end() {
        // Character far past the end of line 0 clamps to the newline.
        let end_of_line = SAMPLE.find('\n').unwrap();
        assert_eq!(byte_offset(SAMPLE, pos(0, 500)), end_of_line);
        // A line past the end of the document clamps to the full length.
        assert_eq!(byte_offset(SAMPLE, pos(500, 3)), SAMPLE.len());
        assert_eq!(position_at(SAMPLE, SAMPLE.len() + 10), position_at(SAMPLE, SAMPLE.len()));
    }
}
