//! GCode to VTK converter
//!
//! Reconstructs the extrusion path from slicer G-code and serializes it
//! as legacy VTK PolyData polylines.
//!
//! This library provides:
//! - Regex-based G-code line tokenization
//! - Stateful extrusion-path reconstruction
//! - VTK PolyData and plain-text serialization
//! - Configuration management

pub mod config;
pub mod diagnostics;
pub mod parser;
pub mod path;
pub mod writer;

// Re-exports for clean public API
pub use config::Config;
pub use diagnostics::{Diagnostic, ScanReport, Severity};
pub use parser::{parse_line, GcodeLine, LineKind};
pub use path::{trace_path, trace_path_with_report, Position, Toolpath};
pub use writer::{write_txt, write_vtk};
