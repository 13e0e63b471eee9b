//! Extrusion-path reconstruction
//!
//! Replays motion commands line by line, carrying the machine position
//! across lines, and records one polyline segment per extruding move.

use crate::diagnostics::ScanReport;
use crate::parser::{self, GcodeLine};

/// Absolute machine position in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Position = Position {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// The position after applying the line's coordinates, if it has any.
    ///
    /// Axes the line does not mention carry over from `self` — they are
    /// never reset. Returns `None` for lines without spatial information.
    pub fn updated(&self, line: &GcodeLine) -> Option<Position> {
        if !line.has_coordinate() {
            return None;
        }
        Some(Position {
            x: line.x.unwrap_or(self.x),
            y: line.y.unwrap_or(self.y),
            z: line.z.unwrap_or(self.z),
        })
    }
}

/// The reconstructed geometry: points plus line-segment connectivity
///
/// This pair is the sole contract between reconstruction and writing.
/// Connectivity entries are zero-based index pairs into `points`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toolpath {
    pub points: Vec<Position>,
    pub connectivity: Vec<(usize, usize)>,
}

impl Toolpath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one extruded segment from `from` to `to`.
    ///
    /// Consecutive segments share their junction point: `from` is only
    /// stored when it differs from the last stored point (exact float
    /// equality, matching the replayed coordinates).
    fn push_segment(&mut self, from: Position, to: Position) {
        if self.points.last() != Some(&from) {
            self.points.push(from);
        }
        self.points.push(to);
        self.connectivity
            .push((self.points.len() - 2, self.points.len() - 1));
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Position state carried across the line scan
struct Tracer {
    previous: Position,
    current: Position,
}

impl Tracer {
    fn new() -> Self {
        Self {
            previous: Position::ORIGIN,
            current: Position::ORIGIN,
        }
    }

    /// Advance the tracer by one parsed line, recording a segment into
    /// `toolpath` when the line extrudes.
    fn step(&mut self, line: &GcodeLine, toolpath: &mut Toolpath) {
        if let Some(new_position) = self.current.updated(line) {
            self.previous = self.current;
            self.current = new_position;
        }
        if line.has_extrusion() {
            toolpath.push_segment(self.previous, self.current);
        }
    }
}

/// Reconstruct the extrusion path from a complete G-code text.
///
/// Single sequential pass; malformed lines are inert and never fail.
pub fn trace_path(content: &str) -> Toolpath {
    let mut toolpath = Toolpath::new();
    let mut tracer = Tracer::new();

    for raw_line in content.lines() {
        let parsed = parser::parse_line(raw_line);
        if parsed.is_comment() {
            continue;
        }
        tracer.step(&parsed, &mut toolpath);
    }

    toolpath
}

/// Like [`trace_path`], but also collects a warning for every axis
/// token the lexer silently dropped, tagged with its 1-based line.
pub fn trace_path_with_report(content: &str, report: &mut ScanReport) -> Toolpath {
    let mut toolpath = Toolpath::new();
    let mut tracer = Tracer::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let parsed = parser::parse_line(raw_line);
        if parsed.is_comment() {
            continue;
        }
        for letter in parser::skipped_axes(raw_line) {
            report.add_warning(
                idx + 1,
                format!("axis token '{letter}' has no numeric value, skipped"),
            );
        }
        tracer.step(&parsed, &mut toolpath);
    }

    toolpath
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: f64, y: f64, z: f64) -> Position {
        Position { x, y, z }
    }

    #[test]
    fn test_updated_carries_missing_axes() {
        let current = pos(1.0, 2.0, 3.0);
        let line = parser::parse_line("G1 X5.0");
        assert_eq!(current.updated(&line), Some(pos(5.0, 2.0, 3.0)));
    }

    #[test]
    fn test_updated_none_without_coordinates() {
        let current = pos(1.0, 2.0, 3.0);
        let line = parser::parse_line("G1 F1500 E0.5");
        assert_eq!(current.updated(&line), None);
    }

    #[test]
    fn test_single_extruded_segment() {
        let content = "G1 Z0.3\nG1 X4.4 Y-4.4 E0.33107\n";
        let toolpath = trace_path(content);
        assert_eq!(toolpath.points, vec![pos(0.0, 0.0, 0.3), pos(4.4, -4.4, 0.3)]);
        assert_eq!(toolpath.connectivity, vec![(0, 1)]);
    }

    #[test]
    fn test_consecutive_segments_share_junction() {
        // A -> B extrudes, B -> C extrudes: B must appear once.
        let content = "G1 X1 Y0 E0.1\nG1 X2 Y0 E0.1\n";
        let toolpath = trace_path(content);
        assert_eq!(
            toolpath.points,
            vec![pos(0.0, 0.0, 0.0), pos(1.0, 0.0, 0.0), pos(2.0, 0.0, 0.0)]
        );
        assert_eq!(toolpath.connectivity, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_travel_move_breaks_dedup() {
        // Extrude, travel without extrusion, extrude again: the start of
        // the second segment differs from the stored end and is kept.
        let content = "G1 X1 Y0 E0.1\nG0 X5 Y5\nG1 X6 Y5 E0.1\n";
        let toolpath = trace_path(content);
        assert_eq!(
            toolpath.points,
            vec![
                pos(0.0, 0.0, 0.0),
                pos(1.0, 0.0, 0.0),
                pos(5.0, 5.0, 0.0),
                pos(6.0, 5.0, 0.0)
            ]
        );
        assert_eq!(toolpath.connectivity, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_e_only_line_is_not_extrusion() {
        // Retraction/prime moves carry E but no coordinates.
        let content = "G1 E5.0\nG1 E0.5 F1800\n";
        let toolpath = trace_path(content);
        assert!(toolpath.is_empty());
        assert!(toolpath.connectivity.is_empty());
    }

    #[test]
    fn test_comments_leave_state_untouched() {
        let content = "G1 X1 Y1\n; X99 Y99 E9\nG1 X2 Y2 E0.1\n";
        let toolpath = trace_path(content);
        assert_eq!(toolpath.points, vec![pos(1.0, 1.0, 0.0), pos(2.0, 2.0, 0.0)]);
        assert_eq!(toolpath.connectivity, vec![(0, 1)]);
    }

    #[test]
    fn test_zero_or_negative_e_is_travel() {
        let content = "G1 X1 Y0 E0\nG1 X2 Y0 E-1.5\n";
        let toolpath = trace_path(content);
        assert!(toolpath.is_empty());
    }

    #[test]
    fn test_stationary_move_with_extrusion_still_counts() {
        // The move lands on the current position, but X/Y/Z were given,
        // so the line still specifies a position and E > 0 extrudes.
        let content = "G1 X1 Y1\nG1 X1 Y1 E0.2\n";
        let toolpath = trace_path(content);
        // The end point is always appended, so a zero-length segment
        // stores its coordinate twice.
        assert_eq!(toolpath.points, vec![pos(1.0, 1.0, 0.0), pos(1.0, 1.0, 0.0)]);
        assert_eq!(toolpath.connectivity, vec![(0, 1)]);
    }

    #[test]
    fn test_unknown_lines_are_inert() {
        let content = "TIME\nM104 S200\nG1 X1 Y1 E0.1\n";
        let toolpath = trace_path(content);
        assert_eq!(toolpath.connectivity, vec![(0, 1)]);
    }

    #[test]
    fn test_report_collects_skipped_axes() {
        let mut report = ScanReport::new();
        let content = "G0 F7200 X Y-.319\nG1 X1 Y1 E0.1\n";
        let toolpath = trace_path_with_report(content, &mut report);

        assert!(!report.is_clean());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].line, 1);
        assert!(report.diagnostics[0].message.contains('X'));
        // The dropped token does not change reconstruction.
        assert_eq!(toolpath, trace_path(content));
    }
}
