//! GCode Lexer
//!
//! Regex-based extraction of the line kind and axis values from one
//! line of G-code. Malformed axis tokens are silently skipped; the
//! separate [`skipped_axes`] scan lets callers surface them as
//! diagnostics without changing the default behavior.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::line::{GcodeLine, LineKind};

/// A leading `;` marks a comment; otherwise the first `G<digits>` token
/// anywhere in the line is the command code.
static LINE_KIND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^;|G\d+").expect("line kind pattern"));

/// Axis/parameter letter followed by a signed float. At least one digit
/// is required on one side of the decimal point, so a bare letter (or a
/// letter followed by another letter) does not match.
static AXIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[XYZEF]([+-]?(?:\d+\.?\d*|\.\d+))").expect("axis pattern"));

/// Tokenize one line of G-code into a [`GcodeLine`].
///
/// Comment lines short-circuit: nothing after the `;` is examined, even
/// coordinate-shaped text. Lines with no recognizable command code are
/// [`LineKind::Unknown`] but still get their axis values extracted.
pub fn tokenize_line(line: &str) -> GcodeLine {
    let kind = match LINE_KIND_RE.find(line) {
        Some(m) if m.as_str().starts_with(';') => return GcodeLine::new(LineKind::Comment),
        Some(m) => LineKind::Command(m.as_str().to_string()),
        None => LineKind::Unknown,
    };

    let mut parsed = GcodeLine::new(kind);
    for caps in AXIS_RE.captures_iter(line) {
        let letter = caps[0].chars().next().expect("non-empty match");
        // The captured number is a strict subset of Rust float syntax.
        if let Ok(value) = caps[1].parse::<f64>() {
            parsed.set_axis(letter, value);
        }
    }
    parsed
}

/// Axis letters present in the line that did not tokenize as values.
///
/// These are the tokens the lexer silently dropped, e.g. a bare `X`
/// with nothing after it on a truncated line. Comment lines report
/// nothing since they are never scanned for axes.
pub fn skipped_axes(line: &str) -> Vec<char> {
    if LINE_KIND_RE
        .find(line)
        .is_some_and(|m| m.as_str().starts_with(';'))
    {
        return Vec::new();
    }

    let matched_starts: Vec<usize> = AXIS_RE.find_iter(line).map(|m| m.start()).collect();
    line.char_indices()
        .filter(|(idx, ch)| "XYZEF".contains(*ch) && !matched_starts.contains(idx))
        .map(|(_, ch)| ch)
        .collect()
}
