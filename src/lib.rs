//! Extract the geometry of SVG `<path>` elements as polylines.
//!
//! Path data (the `d` attribute) goes through these stages,
//! each of which can also be used on its own:
//!
//! * `svg::path::tokenize` splits it into letters and runs of numbers,
//! * `svg::path::build_commands` groups numbers under the preceding letter,
//! * `svg::subpath::split_subpaths` starts a new subpath at every move-to,
//! * `svg::subpath::expand` turns repeated arguments into repeated commands,
//! * `svg::flatten::flatten` follows the commands and approximates curves with line segments.
//!
//! `extract_paths` runs all of them on every `<path>` of a document.

pub mod document;
pub mod errors;
pub mod options;
pub mod write;
pub mod xml;

pub mod svg {
    pub mod bezier;
    pub mod command;
    pub mod flatten;
    pub mod geometry;
    pub mod path;
    pub mod subpath;
}

pub use crate::document::{extract_paths, load_paths, Extraction, Path};
pub use crate::errors::{Diagnostic, LoadError, Malformation, PathError, PathFailure};
pub use crate::options::{CaseFolding, NumberPolicy, Options};
pub use crate::svg::flatten::Polyline;
pub use crate::svg::geometry::{point, Point};
