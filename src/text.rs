//! Label wrapping for fixed-cell text layouts.
//!
//! Proportional-font surfaces do their own shaping; surfaces that lay text
//! out in uniform cells (terminals, bitmap fonts, the test surface) can use
//! this greedy word wrap instead of pulling in a text stack.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal-style columns.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Greedy word wrap of `text` into lines of at most `max_columns` display
/// columns. Words wider than a whole line are split mid-word. A zero budget
/// is treated as one column so the output always makes progress.
pub fn wrap_display_columns(text: &str, max_columns: usize) -> Vec<String> {
    let max_columns = max_columns.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = display_width(word);
        let separator = usize::from(!line.is_empty());

        if line_width + separator + word_width <= max_columns {
            if separator == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_width += separator + word_width;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word_width <= max_columns {
            line.push_str(word);
            line_width = word_width;
        } else {
            // split an overlong word across as many lines as it needs
            for ch in word.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if line_width + ch_width > max_columns && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
