/// Classification of a single trimmed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    Assign { key: &'a str, value: &'a str },
    Header(&'a str),
}

/// Classify a line that has already been trimmed. Returns `None` when the
/// line is neither blank, a comment, an assignment nor a section header.
///
/// Assignments are matched before headers, so `[foo]=bar` assigns `bar` to
/// the key `[foo]`.
pub fn classify(line: &str) -> Option<Line<'_>> {
    if line.is_empty() {
        return Some(Line::Blank);
    }
    if line.starts_with([';', '#']) {
        return Some(Line::Comment);
    }
    if let Some((key, value)) = assignment(line) {
        return Some(Line::Assign { key, value });
    }
    header(line).map(Line::Header)
}

/// `key = value`, split on the first `=`. The key must not be empty.
fn assignment(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    if key.is_empty() {
        return None;
    }
    Some((key.trim(), value.trim()))
}

/// `[name]` spanning the whole line
fn header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']').map(str::trim)
}
