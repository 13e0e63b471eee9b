//! Parsed line representation
//!
//! Fixed-shape record for the tokens recognized on one G-code line.
//! The set of axis/parameter letters is closed, so each gets its own
//! optional field instead of a keyed map.

/// What kind of line the tokenizer recognized
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// Line starts with `;` — everything after it is ignored
    Comment,
    /// A command code like "G1" or "G28" (the exact matched text)
    Command(String),
    /// No comment marker and no command code found
    Unknown,
}

/// The token set extracted from one line of G-code
///
/// A field is `Some` only if that letter appeared in the line with a
/// valid numeric value. Comment lines carry no fields at all.
#[derive(Debug, Clone, PartialEq)]
pub struct GcodeLine {
    pub kind: LineKind,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub e: Option<f64>,
    pub f: Option<f64>,
}

impl GcodeLine {
    pub(crate) fn new(kind: LineKind) -> Self {
        Self {
            kind,
            x: None,
            y: None,
            z: None,
            e: None,
            f: None,
        }
    }

    /// Store a value under its axis/parameter letter.
    ///
    /// A repeated letter overwrites the earlier value (last match wins).
    pub(crate) fn set_axis(&mut self, letter: char, value: f64) {
        match letter {
            'X' => self.x = Some(value),
            'Y' => self.y = Some(value),
            'Z' => self.z = Some(value),
            'E' => self.e = Some(value),
            'F' => self.f = Some(value),
            _ => {}
        }
    }

    pub fn is_comment(&self) -> bool {
        self.kind == LineKind::Comment
    }

    /// Does the line carry spatial information (any of X/Y/Z)?
    pub fn has_coordinate(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.z.is_some()
    }

    /// Does the line describe a material-depositing move?
    ///
    /// True iff the line specifies a position AND extrudes a strictly
    /// positive amount of filament. An E value without any coordinate
    /// never counts.
    pub fn has_extrusion(&self) -> bool {
        self.has_coordinate() && self.e.is_some_and(|e| e > 0.0)
    }
}
