//! Configuration management for the G-code to VTK converter.
//!
//! Handles:
//! - Command-line argument parsing
//! - Default output path derivation

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

/// Suffix appended to the input file stem when no output path is given
const DEFAULT_OUTPUT_SUFFIX: &str = "-gcode.vtk";

/// Coordinates are in slicer millimeters; scale by 1e-3 to get meters
const DEFAULT_SCALE: f64 = 1e-3;

/// Command-line arguments for the G-code to VTK converter
#[derive(Debug, Parser)]
#[command(name = "gcode2vtk")]
#[command(about = "Read standard .gcode and output a legacy VTK polyline file")]
#[command(version)]
pub struct Args {
    /// Path to the input .gcode file
    pub input: PathBuf,

    /// Path to the output .vtk file (derived from the input path if omitted)
    pub output: Option<PathBuf>,

    /// Scale factor applied to coordinates at write time (mm to m by default)
    #[arg(default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Also write an unscaled plain-text points/lines dump to this path
    #[arg(long, value_name = "PATH")]
    pub txt: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Resolved configuration for one conversion run
#[derive(Debug, Clone)]
pub struct Config {
    /// Input G-code file
    pub input: PathBuf,
    /// Output VTK file, defaulted from the input path when not given
    pub output: PathBuf,
    /// Coordinate scale factor
    pub scale: f64,
    /// Optional debug dump destination
    pub txt: Option<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let output = args
            .output
            .unwrap_or_else(|| default_output_path(&args.input));

        Ok(Config {
            input: args.input,
            output,
            scale: args.scale,
            txt: args.txt,
            log_level: args.log_level,
        })
    }
}

/// Derive the default output path from the input path.
///
/// Directory components are dropped: the output lands in the working
/// directory as `<input stem>-gcode.vtk`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("out"));
    let mut name = stem.to_os_string();
    name.push(DEFAULT_OUTPUT_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("part.gcode")),
            PathBuf::from("part-gcode.vtk")
        );
    }

    #[test]
    fn test_default_output_path_strips_directories() {
        assert_eq!(
            default_output_path(Path::new("prints/benchy/part.gcode")),
            PathBuf::from("part-gcode.vtk")
        );
    }

    #[test]
    fn test_default_output_path_without_extension() {
        assert_eq!(
            default_output_path(Path::new("part")),
            PathBuf::from("part-gcode.vtk")
        );
    }

    #[test]
    fn test_config_defaults() {
        let args = Args::try_parse_from(["gcode2vtk", "part.gcode"]).unwrap();
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.input, PathBuf::from("part.gcode"));
        assert_eq!(config.output, PathBuf::from("part-gcode.vtk"));
        assert_eq!(config.scale, 1e-3);
        assert_eq!(config.txt, None);
    }

    #[test]
    fn test_config_explicit_output_and_scale() {
        let args = Args::try_parse_from(["gcode2vtk", "part.gcode", "out.vtk", "1.0"]).unwrap();
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.output, PathBuf::from("out.vtk"));
        assert_eq!(config.scale, 1.0);
    }
}
