//! FILENAME: core/formatter/src/cleanup.rs
//! PURPOSE: Final whitespace pass over the assembled formatter output.
//! CONTEXT: Tabs are indentation and survive; only plain spaces are touched.

/// Strips trailing spaces per line, collapses interior space runs,
/// merges consecutive newlines and trims the whole result.
pub(crate) fn tidy(raw: &str) -> String {
    let lines: Vec<String> = raw
        .split('\n')
        .map(|line| collapse_interior_spaces(line.trim_end_matches(' ')))
        .collect();

    collapse_newlines(&lines.join("\n")).trim().to_string()
}

/// Shrinks runs of two or more spaces to one when both neighbours are
/// neither a space nor a tab.
fn collapse_interior_spaces(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    let mut previous: Option<char> = None;

    while let Some(ch) = chars.next() {
        if ch != ' ' {
            result.push(ch);
            previous = Some(ch);
            continue;
        }

        let mut run = 1;
        while chars.next_if_eq(&' ').is_some() {
            run += 1;
        }

        let flanked = previous.is_some_and(is_solid) && chars.peek().is_some_and(|&c| is_solid(c));
        let width = if flanked { 1 } else { run };
        result.extend(std::iter::repeat(' ').take(width));
        previous = Some(' ');
    }

    result
}

fn collapse_newlines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\n' && result.ends_with('\n') {
            continue;
        }
        result.push(ch);
    }
    result
}

fn is_solid(ch: char) -> bool {
    ch != ' ' && ch != '\t'
}
