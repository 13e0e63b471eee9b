//! Geometry Writer
//!
//! Serializes a [`Toolpath`] to legacy VTK PolyData ASCII, plus a plain
//! text dump for debugging. Knows nothing about G-code, only about
//! points and index pairs.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::path::Toolpath;

/// Title line in the VTK header (format allows one free-form line)
const VTK_TITLE: &str = "gcode toolpath";

/// Write a legacy VTK PolyData file to `w`.
///
/// Every coordinate is multiplied by `scale` (the default 1e-3 turns
/// slicer millimeters into meters). Values print at full f64 round-trip
/// precision. Each connectivity cell is a 2-point line, so the cell
/// list size is always `3 * M`.
pub fn write_vtk<W: Write>(w: &mut W, toolpath: &Toolpath, scale: f64) -> io::Result<()> {
    writeln!(w, "# vtk DataFile Version 2.0")?;
    writeln!(w, "{VTK_TITLE}")?;
    writeln!(w, "ASCII")?;
    writeln!(w, "DATASET POLYDATA")?;

    writeln!(w, "POINTS {} float", toolpath.points.len())?;
    for p in &toolpath.points {
        writeln!(w, "{} {} {}", p.x * scale, p.y * scale, p.z * scale)?;
    }

    let num_lines = toolpath.connectivity.len();
    writeln!(w, "LINES {} {}", num_lines, 3 * num_lines)?;
    for (i, j) in &toolpath.connectivity {
        writeln!(w, "2 {i} {j}")?;
    }

    Ok(())
}

/// Write the unscaled debug dump: raw point rows and index pairs with
/// no VTK framing.
pub fn write_txt<W: Write>(w: &mut W, toolpath: &Toolpath) -> io::Result<()> {
    writeln!(w, "POINTS {}", toolpath.points.len())?;
    for p in &toolpath.points {
        writeln!(w, "{}, {}, {}", p.x, p.y, p.z)?;
    }

    writeln!(w, "LINES {}", toolpath.connectivity.len())?;
    for (i, j) in &toolpath.connectivity {
        writeln!(w, "{i}, {j}")?;
    }

    Ok(())
}

/// Create `path` and write the VTK serialization into it.
///
/// Open/write failures are fatal to the conversion; a partially written
/// file may be left behind.
pub fn write_vtk_file(path: &Path, toolpath: &Toolpath, scale: f64) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_vtk(&mut w, toolpath, scale)?;
    w.flush()
}

/// Create `path` and write the plain-text dump into it.
pub fn write_txt_file(path: &Path, toolpath: &Toolpath) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_txt(&mut w, toolpath)?;
    w.flush()
}
