//! Dumping extracted paths: as a JavaScript program, as indented text, or as JSON.

use crate::document::Path;
use std::io::{self, Write};

/// Write a JavaScript program that builds an `svg` array with one object per path:
///
/// ```js
/// var svg = [];
/// svg.push({name:"id", subpaths:[], style: "fill:red"});
/// svg[svg.length-1].subpaths = [ [
///   [0, 0]
///  , [10, 0]
///  ]
/// ];
/// ```
pub fn write_js<W: Write>(paths: &[Path], stream: &mut W) -> io::Result<()> {
    writeln!(stream, "var svg = [];")?;
    for path in paths {
        // JSON string literals are valid JavaScript string literals.
        writeln!(stream, "svg.push({{name:{}, subpaths:[], style: {}}});",
                 serde_json::to_string(&path.id)?, serde_json::to_string(&path.style)?)?;
        write!(stream, "svg[svg.length-1].subpaths = [")?;
        let mut polyline_separator = ' ';
        for polyline in &path.polylines {
            writeln!(stream, "{}[", polyline_separator)?;
            polyline_separator = ',';
            let mut separator = ' ';
            for p in polyline {
                writeln!(stream, " {} [{}, {}]", separator, p.x, p.y)?;
                separator = ',';
            }
            writeln!(stream, " ]")?;
        }
        writeln!(stream, "];")?;
        writeln!(stream)?;
    }
    Ok(())
}

/// Write a human-readable dump: for each path its expanded commands and its points.
pub fn write_text<W: Write>(paths: &[Path], stream: &mut W) -> io::Result<()> {
    for path in paths {
        writeln!(stream, "path {:?} style {:?}", path.id, path.style)?;
        for (i, (subpath, polyline)) in path.subpaths.iter().zip(&path.polylines).enumerate() {
            writeln!(stream, "  subpath {} ({} commands, {} points)",
                     i, subpath.len(), polyline.len())?;
            for command in subpath {
                writeln!(stream, "    {}", command)?;
            }
            for p in polyline {
                writeln!(stream, "    {} {}", p.x, p.y)?;
            }
        }
        for diagnostic in &path.diagnostics {
            writeln!(stream, "  warning: {}", diagnostic)?;
        }
    }
    Ok(())
}

/// Write a JSON array of `{"id", "style", "polylines"}` objects,
/// each point being an `[x, y]` array.
pub fn write_json<W: Write>(paths: &[Path], stream: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *stream, paths)?;
    writeln!(stream)
}
