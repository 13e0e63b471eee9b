//! GCode Parser
//!
//! Clean, line-oriented tokenization of slicer G-code. Focused solely
//! on recognizing the line kind and the axis/parameter values — no
//! motion semantics live here.

pub mod lexer;
pub mod line;

pub use lexer::{skipped_axes, tokenize_line};
pub use line::{GcodeLine, LineKind};

/// Parse a single line of G-code into its token set
///
/// This is the main entry point for parsing. Malformed tokens are
/// silently skipped and never produce an error; see
/// [`lexer::skipped_axes`] for the opt-in diagnostic scan.
pub fn parse_line(line: &str) -> GcodeLine {
    lexer::tokenize_line(line)
}
