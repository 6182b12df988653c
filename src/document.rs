use crate::errors::{Diagnostic, LoadError, PathError, PathFailure};
use crate::options::{CaseFolding, Options};
use crate::svg::flatten::{flatten, Polyline};
use crate::svg::path::{build_commands, tokenize};
use crate::svg::subpath::{expand, split_subpaths, Subpath};
use crate::xml;
use log::{debug, warn};
use serde::Serialize;
use std::path::Path as FilePath;

/// One `<path>` element: its parsed commands and their flattening.
///
/// `polylines[i]` is the flattening of `subpaths[i]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Path {
    pub id: String,
    pub style: String,
    #[serde(skip)]
    pub subpaths: Vec<Subpath>,
    pub polylines: Vec<Polyline>,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

impl Path {
    /// Parse path data (the `d` attribute) and flatten it.
    pub fn from_data(id: &str, style: &str, data: &str, options: &Options)
                     -> Result<Path, PathError> {
        let mut diagnostics = Vec::new();
        let (subpaths, polylines) = trace(data, options, &mut diagnostics)?;
        debug!("path {:?}: {} subpath(s), {} point(s)", id, subpaths.len(),
               polylines.iter().map(Vec::len).sum::<usize>());
        Ok(Path {
            id: id.to_owned(),
            style: style.to_owned(),
            subpaths,
            polylines,
            diagnostics,
        })
    }
}

/// Run every stage on `data`. Diagnostics are pushed even when a later stage fails.
fn trace(data: &str, options: &Options, diagnostics: &mut Vec<Diagnostic>)
         -> Result<(Vec<Subpath>, Vec<Polyline>), PathError> {
    let commands = build_commands(tokenize(data), options.numbers, diagnostics)?;
    if commands.is_empty() {
        return Err(PathError::EmptyPath)
    }
    let subpaths = expand(&split_subpaths(commands)?, diagnostics)?;
    let polylines = flatten(&subpaths, options)?;
    Ok((subpaths, polylines))
}

/// The result of extracting every `<path>` of a document.
///
/// Both lists are in document order.
/// A path either ends up in `paths` or in `failures`, never both.
#[derive(Debug, Default)]
pub struct Extraction {
    pub paths: Vec<Path>,
    pub failures: Vec<PathFailure>,
}

/// What we read from a `<path>` element, after case folding.
struct PathElement {
    index: usize,
    id: String,
    style: String,
    data: Option<String>,
}

impl PathElement {
    fn read(index: usize, element: &xml::ElementData, case_folding: CaseFolding) -> Self {
        let mut path = PathElement {
            index,
            id: String::new(),
            style: String::new(),
            data: None,
        };
        for (name, value) in element.attributes() {
            match &*name.to_ascii_lowercase() {
                "id" => path.id = value.to_lowercase(),
                "style" => path.style = value.to_lowercase(),
                "d" => path.data = Some(match case_folding {
                    CaseFolding::All => value.to_lowercase(),
                    CaseFolding::PreservePathData => value.to_owned(),
                }),
                _ => {}
            }
        }
        path
    }

    fn process(&self, options: &Options) -> Result<Path, PathFailure> {
        // A missing `d` attribute is no different from an empty one.
        let data = self.data.as_deref().unwrap_or("");
        let mut diagnostics = Vec::new();
        match trace(data, options, &mut diagnostics) {
            Ok((subpaths, polylines)) => Ok(Path {
                id: self.id.clone(),
                style: self.style.clone(),
                subpaths,
                polylines,
                diagnostics,
            }),
            Err(error) => Err(PathFailure {
                index: self.index,
                id: self.id.clone(),
                error,
                diagnostics,
            }),
        }
    }
}

/// Find every `<path>` element, in document order, and flatten it.
///
/// A path that fails does not prevent the others from being processed.
pub fn extract_paths(document: &xml::Document, options: &Options) -> Extraction {
    let elements: Vec<PathElement> = document.elements()
        .filter(|(_, element)| element.local_name().eq_ignore_ascii_case("path"))
        .enumerate()
        .map(|(index, (_, element))| PathElement::read(index, element, options.case_folding))
        .collect();
    debug!("found {} path element(s)", elements.len());

    let mut extraction = Extraction::default();
    for result in process_all(&elements, options) {
        match result {
            Ok(path) => {
                for diagnostic in &path.diagnostics {
                    warn!("path {:?}: {}", path.id, diagnostic);
                }
                extraction.paths.push(path)
            }
            Err(failure) => {
                for diagnostic in &failure.diagnostics {
                    warn!("path {:?}: {}", failure.id, diagnostic);
                }
                warn!("skipping {}", failure);
                extraction.failures.push(failure)
            }
        }
    }
    extraction
}

#[cfg(not(feature = "parallel"))]
fn process_all(elements: &[PathElement], options: &Options) -> Vec<Result<Path, PathFailure>> {
    elements.iter().map(|element| element.process(options)).collect()
}

#[cfg(feature = "parallel")]
fn process_all(elements: &[PathElement], options: &Options) -> Vec<Result<Path, PathFailure>> {
    use rayon::prelude::*;
    // `collect` on an indexed parallel iterator keeps the original order.
    elements.par_iter().map(|element| element.process(options)).collect()
}

/// Load an SVG file and extract its paths.
pub fn load_paths<P: AsRef<FilePath>>(filename: P, options: &Options)
                                      -> Result<Extraction, LoadError> {
    let document = xml::Document::parse_file(filename)?;
    Ok(extract_paths(&document, options))
}
