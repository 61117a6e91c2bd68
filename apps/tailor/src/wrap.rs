//! Text Wrapper — reflows model output to a fixed column width for display.
//!
//! Greedy word wrap, the same algorithm the layout line estimator uses, but
//! measured in characters instead of font metrics. Each source line is wrapped
//! on its own, so paragraph and list structure in the model output survives.

pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Wraps every line of `text` so that no output line exceeds `width` characters.
///
/// A single word longer than `width` is placed on its own line and left intact.
/// Blank source lines are kept as empty lines. Whitespace runs inside a line
/// collapse to one space.
pub fn wrap_text(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut out: Vec<String> = Vec::new();

    for line in text.split('\n') {
        let before = out.len();
        wrap_line(line, width, &mut out);
        if out.len() == before {
            out.push(String::new());
        }
    }

    out.join("\n")
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len > width {
            out.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if current_len > 0 {
        out.push(current);
    }
}
