//! Whole document formatting for job files.
//!
//! Normalizes leading indentation from brace and bracket nesting. Alignment
//! of `=` signs and other canonical layout choices are left to the author.
//
// TODO: leave heredoc bodies untouched instead of re-trimming them.

use tower_lsp::lsp_types::{FormattingOptions, Position, Range, TextEdit};

/// Configuration for formatting, derived from LSP formatting options.
#[derive(Debug, Clone)]
pub struct LspFormatConfig {
    /// Number of spaces per indent level
    pub indent_width: usize,
    /// Use tabs instead of spaces
    pub use_tabs: bool,
}

impl Default for LspFormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            use_tabs: false,
        }
    }
}

/// Extract formatting configuration from LSP formatting options.
pub fn extract_format_options(options: &FormattingOptions) -> LspFormatConfig {
    LspFormatConfig {
        indent_width: options.tab_size as usize,
        use_tabs: !options.insert_spaces,
    }
}

/// Format a job document and return the text edits.
///
/// Returns a single full-document replacement when anything changes, and no
/// edits when the document is already formatted.
pub fn format_document(source: &str, config: Option<LspFormatConfig>) -> Vec<TextEdit> {
    let config = config.unwrap_or_default();
    let formatted = reindent(source, &config);
    if formatted == source {
        return vec![];
    }

    // Replace the entire document with the formatted content.
    let lines: Vec<&str> = source.lines().collect();
    let end_line = if lines.is_empty() { 0 } else { lines.len() - 1 };
    let end_char = lines.last().map(|l| l.len()).unwrap_or(0);

    // A trailing newline is not included by lines().
    let (final_line, final_char) = if source.ends_with('\n') {
        (lines.len() as u32, 0)
    } else {
        (end_line as u32, end_char as u32)
    };

    vec![TextEdit {
        range: Range {
            start: Position {
                line: 0,
                character: 0,
            },
            end: Position {
                line: final_line,
                character: final_char,
            },
        },
        new_text: formatted,
    }]
}

fn reindent(source: &str, config: &LspFormatConfig) -> String {
    let unit = if config.use_tabs {
        "\t".to_string()
    } else {
        " ".repeat(config.indent_width)
    };

    let mut depth: i32 = 0;
    let mut out = String::with_capacity(source.len() + source.len() / 8);
    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            out.push('\n');
            continue;
        }
        let (delta, min_delta) = nesting_delta(trimmed);
        // Lines that open with closers (e.g. `}`) de-indent themselves.
        let level = (depth + min_delta).max(0) as usize;
        for _ in 0..level {
            out.push_str(&unit);
        }
        out.push_str(trimmed);
        out.push('\n');
        depth = (depth + delta).max(0);
    }
    out
}

/// Net change in nesting across the line and the lowest prefix level
/// reached within it, ignoring braces inside strings and comments.
fn nesting_delta(line: &str) -> (i32, i32) {
    let mut delta: i32 = 0;
    let mut min_delta: i32 = 0;
    let mut in_string = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_string {
            match ch {
                '\\' => {
                    chars.next();
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '#' => break,
            '/' if chars.peek() == Some(&'/') => break,
            '{' | '[' | '(' => delta += 1,
            '}' | ']' | ')' => {
                delta -= 1;
                min_delta = min_delta.min(delta);
            }
            _ => {}
        }
    }
    (delta, min_delta)
}
