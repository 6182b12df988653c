//! Tokenizing path data and grouping numbers under the command letters that precede them.

use crate::errors::{Diagnostic, Malformation};
use crate::options::NumberPolicy;
use crate::svg::command::Command;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TokenKind<'input> {
    Letter(char),
    /// One or more numbers, separated by commas or by the sign of the next number.
    Numbers(&'input str),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token<'input> {
    pub kind: TokenKind<'input>,
    /// Position of the token, in UTF-8 bytes from the start of the string.
    pub position: usize,
}

/// Split path data into tokens.
///
/// Whitespace separates tokens and is otherwise ignored.
/// Every other character ends up in some token:
/// any ASCII letter except the exponent marker `e` or `E` is a token on its own,
/// everything else is grouped into runs of numbers.
/// This never fails, checking that tokens make sense is left to later stages.
pub fn tokenize(s: &str) -> Tokenizer {
    Tokenizer {
        input: s,
        position: 0,
    }
}

#[derive(Clone)]
pub struct Tokenizer<'input> {
    input: &'input str,
    position: usize,
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')
}

impl<'input> Iterator for Tokenizer<'input> {
    type Item = Token<'input>;

    fn next(&mut self) -> Option<Token<'input>> {
        let rest = &self.input[self.position..];
        let skipped = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_whitespace()).len();
        self.position += skipped;
        let start = self.position;
        let first = self.input[start..].chars().next()?;
        if is_letter(first) {
            self.position += first.len_utf8();
            return Some(Token {
                kind: TokenKind::Letter(first),
                position: start,
            })
        }
        let run_length = self.input[start..]
            .find(|c: char| c.is_ascii_whitespace() || is_letter(c))
            .unwrap_or(self.input.len() - start);
        self.position += run_length;
        Some(Token {
            kind: TokenKind::Numbers(&self.input[start..self.position]),
            position: start,
        })
    }
}

/// Split a `Numbers` token into individual number strings, with their positions.
///
/// Commas separate numbers. So does a sign that does not follow an exponent marker,
/// and a second decimal point: `10-5` is `10` then `-5`, and `0.5.5` is `0.5` then `.5`.
pub fn split_numbers(token: &str, position: usize) -> Vec<(&str, usize)> {
    let mut numbers = Vec::new();
    let mut start = 0;
    let mut seen_dot = false;
    let mut previous = None;
    for (i, c) in token.char_indices() {
        let splits = match c {
            ',' => true,
            '+' | '-' => !matches!(previous, None | Some(',') | Some('e') | Some('E')),
            '.' => seen_dot,
            _ => false,
        };
        if splits {
            if start < i {
                numbers.push((&token[start..i], position + start));
            }
            start = if c == ',' { i + 1 } else { i };
            seen_dot = false;
        }
        if c == '.' {
            seen_dot = true;
        }
        if matches!(c, 'e' | 'E') {
            // No decimal point in an exponent.
            seen_dot = true;
        }
        previous = if splits && c == ',' { None } else { Some(c) };
    }
    if start < token.len() {
        numbers.push((&token[start..], position + start));
    }
    numbers
}

/// Accumulator for `build_commands`.
struct Builder {
    last_letter: Option<(char, usize)>,
    numbers: Vec<f64>,
    commands: Vec<Command>,
}

impl Builder {
    fn flush(&mut self) {
        if let Some((letter, position)) = self.last_letter {
            self.commands.push(Command {
                letter,
                numbers: std::mem::replace(&mut self.numbers, Vec::new()),
                position,
            })
        }
    }
}

/// Group tokens into commands.
///
/// A letter stays in effect until the next letter, and every number in between belongs to it.
/// Numbers that appear before any letter are dropped, with a diagnostic.
///
/// With `NumberPolicy::Lenient`, a number that does not parse counts as zero
/// and a diagnostic is recorded. With `NumberPolicy::Strict` it is an error.
pub fn build_commands<'input, I>(tokens: I, policy: NumberPolicy,
                                 diagnostics: &mut Vec<Diagnostic>)
                                 -> Result<Vec<Command>, Malformation>
where I: IntoIterator<Item=Token<'input>> {
    let initial = Builder {
        last_letter: None,
        numbers: Vec::new(),
        commands: Vec::new(),
    };
    let step = |mut builder: Builder, token: Token<'input>| -> Result<Builder, Malformation> {
        match token.kind {
            TokenKind::Letter(letter) => {
                if builder.last_letter.is_none() && !builder.numbers.is_empty() {
                    diagnostics.push(Diagnostic::StrayNumbers { count: builder.numbers.len() });
                    builder.numbers.clear();
                }
                builder.flush();
                builder.last_letter = Some((letter, token.position));
            }
            TokenKind::Numbers(run) => {
                for (number, position) in split_numbers(run, token.position) {
                    builder.numbers.push(parse_number(number, position, policy, diagnostics)?);
                }
            }
        }
        Ok(builder)
    };
    let mut builder = tokens.into_iter().try_fold(initial, step)?;
    if builder.last_letter.is_none() && !builder.numbers.is_empty() {
        diagnostics.push(Diagnostic::StrayNumbers { count: builder.numbers.len() });
    }
    builder.flush();
    Ok(builder.commands)
}

fn parse_number(s: &str, position: usize, policy: NumberPolicy,
                diagnostics: &mut Vec<Diagnostic>) -> Result<f64, Malformation> {
    // Overflowing literals like `1e999` parse as infinity, which no output format can carry.
    match s.parse::<f64>().ok().filter(|number| number.is_finite()) {
        Some(number) => Ok(number),
        None => match policy {
            NumberPolicy::Strict => Err(Malformation::InvalidNumber {
                token: s.to_owned(),
                position,
            }),
            NumberPolicy::Lenient => {
                diagnostics.push(Diagnostic::InvalidNumber {
                    token: s.to_owned(),
                    position,
                });
                Ok(0.)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        tokenize(s).map(|t| t.kind).collect()
    }

    fn letters_and_numbers(commands: &[Command]) -> Vec<(char, Vec<f64>)> {
        commands.iter().map(|c| (c.letter, c.numbers.clone())).collect()
    }

    fn build(s: &str) -> (Vec<Command>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let commands = build_commands(tokenize(s), NumberPolicy::Lenient, &mut diagnostics).unwrap();
        (commands, diagnostics)
    }

    #[test]
    fn tokenize_spaced() {
        use self::TokenKind::*;
        assert_eq!(kinds("M 0,0 L 10,0  10,10 Z"), [
            Letter('M'), Numbers("0,0"), Letter('L'), Numbers("10,0"), Numbers("10,10"), Letter('Z'),
        ]);
    }

    #[test]
    fn tokenize_glued_letters() {
        use self::TokenKind::*;
        assert_eq!(kinds("M0,0C0,0\t10,10\n10,0z"), [
            Letter('M'), Numbers("0,0"), Letter('C'), Numbers("0,0"), Numbers("10,10"),
            Numbers("10,0"), Letter('z'),
        ]);
        assert_eq!(kinds("l1e-3,2E+1"), [Letter('l'), Numbers("1e-3,2E+1")]);
    }

    #[test]
    fn tokenize_positions() {
        let positions: Vec<_> = tokenize("  m 1,2 l3").map(|t| t.position).collect();
        assert_eq!(positions, [2, 4, 8, 9]);
    }

    #[test]
    fn tokenize_blank() {
        assert!(kinds("").is_empty());
        assert!(kinds(" \t\n ").is_empty());
    }

    #[test]
    fn tokenize_keeps_garbage() {
        use self::TokenKind::*;
        assert_eq!(kinds("m 1,# é"), [Letter('m'), Numbers("1,#"), Numbers("é")]);
    }

    #[test]
    fn split_on_commas_and_signs() {
        let strs = |s| split_numbers(s, 10).into_iter().map(|(n, _)| n).collect::<Vec<_>>();
        assert_eq!(strs("1,2"), ["1", "2"]);
        assert_eq!(strs("10-5"), ["10", "-5"]);
        assert_eq!(strs("-1,-2"), ["-1", "-2"]);
        assert_eq!(strs("1e-5,3"), ["1e-5", "3"]);
        assert_eq!(strs("0.5.5"), ["0.5", ".5"]);
        assert_eq!(strs("1,,2,"), ["1", "2"]);
        assert_eq!(split_numbers("1,-2", 10), [("1", 10), ("-2", 12)]);
    }

    #[test]
    fn letter_persists_over_numbers() {
        let (commands, diagnostics) = build("m 0,0 l 5,0 5,0");
        assert_eq!(letters_and_numbers(&commands), [
            ('m', vec![0., 0.]),
            ('l', vec![5., 0., 5., 0.]),
        ]);
        assert_eq!(commands[1].position, 6);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn close_path_has_no_numbers() {
        let (commands, _) = build("M 0,0 L 10,0 Z");
        assert_eq!(letters_and_numbers(&commands), [
            ('M', vec![0., 0.]),
            ('L', vec![10., 0.]),
            ('Z', vec![]),
        ]);
    }

    #[test]
    fn no_letters() {
        assert!(build("").0.is_empty());
        let (commands, diagnostics) = build("1,2 3");
        assert!(commands.is_empty());
        assert_eq!(diagnostics, [Diagnostic::StrayNumbers { count: 3 }]);
    }

    #[test]
    fn lenient_numbers() {
        let (commands, diagnostics) = build("M 1,# 2");
        assert_eq!(letters_and_numbers(&commands), [('M', vec![1., 0., 2.])]);
        assert_eq!(diagnostics, [Diagnostic::InvalidNumber { token: "#".to_owned(), position: 4 }]);
    }

    #[test]
    fn strict_numbers() {
        let mut diagnostics = Vec::new();
        let result = build_commands(tokenize("M 1,# 2"), NumberPolicy::Strict, &mut diagnostics);
        assert_eq!(result, Err(Malformation::InvalidNumber { token: "#".to_owned(), position: 4 }));
    }

    #[test]
    fn overflowing_numbers() {
        let (commands, diagnostics) = build("M 1e999,0 L -1e400 1");
        assert_eq!(letters_and_numbers(&commands), [('M', vec![0., 0.]), ('L', vec![0., 1.])]);
        assert_eq!(diagnostics, [
            Diagnostic::InvalidNumber { token: "1e999".to_owned(), position: 2 },
            Diagnostic::InvalidNumber { token: "-1e400".to_owned(), position: 12 },
        ]);

        let mut diagnostics = Vec::new();
        let result = build_commands(tokenize("M 1e999,0"), NumberPolicy::Strict, &mut diagnostics);
        assert_eq!(result, Err(Malformation::InvalidNumber { token: "1e999".to_owned(), position: 2 }));
    }
}
