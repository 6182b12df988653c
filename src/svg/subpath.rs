//! Splitting commands into subpaths, and each command into single repetitions.

use crate::errors::{Diagnostic, Malformation};
use crate::svg::command::Command;

/// The commands from one move-to up to (excluding) the next one.
pub type Subpath = Vec<Command>;

/// Start a new subpath at every move-to command.
///
/// The first command must be a move-to: anything before it would belong to no subpath.
pub fn split_subpaths(commands: Vec<Command>) -> Result<Vec<Subpath>, Malformation> {
    let mut subpaths: Vec<Subpath> = Vec::new();
    for command in commands {
        if command.is_move_to() {
            subpaths.push(Vec::new())
        }
        match subpaths.last_mut() {
            Some(subpath) => subpath.push(command),
            None => return Err(Malformation::MissingMoveTo { letter: command.letter }),
        }
    }
    if subpaths.is_empty() {
        return Err(Malformation::NoCommands)
    }
    Ok(subpaths)
}

/// Replace each command that carries several repetitions of its arguments
/// (such as `l 5,0 5,0`) with one command per repetition, keeping the letter.
///
/// Close-path commands are kept as they are.
/// Numbers that do not fill a whole repetition are dropped with a diagnostic.
pub fn expand_subpath(subpath: &[Command], diagnostics: &mut Vec<Diagnostic>)
                      -> Result<Subpath, Malformation> {
    let mut expanded = Vec::with_capacity(subpath.len());
    for command in subpath {
        let arity = command.kind()?.arity();
        if arity == 0 {
            expanded.push(command.clone());
            continue
        }
        let chunks = command.numbers.chunks_exact(arity);
        let dropped = chunks.remainder().len();
        if dropped > 0 {
            diagnostics.push(Diagnostic::TrailingNumbers {
                letter: command.letter,
                dropped,
            });
        }
        expanded.extend(chunks.map(|numbers| Command {
            letter: command.letter,
            numbers: numbers.to_vec(),
            position: command.position,
        }));
    }
    Ok(expanded)
}

pub fn expand(subpaths: &[Subpath], diagnostics: &mut Vec<Diagnostic>)
              -> Result<Vec<Subpath>, Malformation> {
    subpaths.iter().map(|subpath| expand_subpath(subpath, diagnostics)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(subpath: &[Command]) -> String {
        subpath.iter().map(|c| c.letter).collect()
    }

    #[test]
    fn split_at_each_move_to() {
        let commands = vec![
            Command::new('M', vec![0., 0.]),
            Command::new('L', vec![1., 1.]),
            Command::new('z', vec![]),
            Command::new('m', vec![5., 5.]),
            Command::new('l', vec![1., 0., 0., 1.]),
            Command::new('M', vec![9., 9.]),
        ];
        let subpaths = split_subpaths(commands).unwrap();
        let letters: Vec<_> = subpaths.iter().map(|s| letters(s)).collect();
        assert_eq!(letters, ["MLz", "ml", "M"]);
        assert!(subpaths.iter().all(|s| s[0].is_move_to()));
    }

    #[test]
    fn split_requires_leading_move_to() {
        let commands = vec![Command::new('L', vec![1., 1.]), Command::new('M', vec![0., 0.])];
        assert_eq!(split_subpaths(commands), Err(Malformation::MissingMoveTo { letter: 'L' }));
        assert_eq!(split_subpaths(Vec::new()), Err(Malformation::NoCommands));
    }

    #[test]
    fn expand_repeated_line_to() {
        let mut diagnostics = Vec::new();
        let subpath = vec![Command::new('m', vec![0., 0.]), Command::new('l', vec![5., 0., 5., 0.])];
        let expanded = expand_subpath(&subpath, &mut diagnostics).unwrap();
        assert_eq!(expanded, [
            Command::new('m', vec![0., 0.]),
            Command::new('l', vec![5., 0.]),
            Command::new('l', vec![5., 0.]),
        ]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn expand_every_kind() {
        let mut diagnostics = Vec::new();
        let subpath = vec![
            Command::new('M', vec![0., 0., 1., 1.]),
            Command::new('h', vec![1., 2., 3.]),
            Command::new('V', vec![4.]),
            Command::new('c', vec![1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12.]),
            Command::new('Z', vec![]),
        ];
        let expanded = expand_subpath(&subpath, &mut diagnostics).unwrap();
        assert_eq!(letters(&expanded), "MMhhhVccZ");
        assert_eq!(expanded[7].numbers, [7., 8., 9., 10., 11., 12.]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn expand_is_idempotent() {
        let mut diagnostics = Vec::new();
        let subpath = vec![
            Command::new('M', vec![0., 0.]),
            Command::new('C', vec![0., 0., 10., 10., 10., 0.]),
            Command::new('v', vec![3.]),
            Command::new('z', vec![]),
        ];
        let once = expand_subpath(&subpath, &mut diagnostics).unwrap();
        assert_eq!(once, subpath);
        assert_eq!(expand_subpath(&once, &mut diagnostics).unwrap(), once);
    }

    #[test]
    fn expand_drops_partial_repetition() {
        let mut diagnostics = Vec::new();
        let subpath = vec![Command::new('M', vec![0., 0.]), Command::new('L', vec![1., 2., 3.])];
        let expanded = expand_subpath(&subpath, &mut diagnostics).unwrap();
        assert_eq!(expanded[1..], [Command::new('L', vec![1., 2.])]);
        assert_eq!(diagnostics, [Diagnostic::TrailingNumbers { letter: 'L', dropped: 1 }]);
    }

    #[test]
    fn expand_empty_payload() {
        let mut diagnostics = Vec::new();
        let subpath = vec![Command::new('M', vec![0., 0.]), Command::new('l', vec![])];
        assert_eq!(expand_subpath(&subpath, &mut diagnostics).unwrap().len(), 1);
    }

    #[test]
    fn expand_rejects_unsupported_letter() {
        let mut diagnostics = Vec::new();
        let subpath = vec![Command::new('M', vec![0., 0.]), Command::new('q', vec![1., 1., 2., 2.])];
        assert_eq!(expand_subpath(&subpath, &mut diagnostics),
                   Err(Malformation::UnsupportedCommand { letter: 'q', position: 0 }));
    }
}
