use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Specificity triple (ids, classes/attributes/pseudo-classes, types/pseudo-elements)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u16, pub u16, pub u16);

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

/// Pseudo-elements that may be written with a single colon
const LEGACY_PSEUDO_ELEMENTS: [&str; 4] = ["before", "after", "first-line", "first-letter"];

/// Computes the specificity of `selector`. For a selector list the highest
/// specificity of its members is returned.
///
/// Functional pseudo-classes such as `:not(...)` count as one pseudo-class;
/// their arguments are not inspected.
pub fn specificity(selector: &str) -> Specificity {
    split_list(selector)
        .into_iter()
        .map(specificity_of_complex)
        .max()
        .unwrap_or_default()
}

/// Splits on top-level commas, ignoring commas inside brackets or parentheses
fn split_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, c) in selector.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&selector[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&selector[start..]);
    parts
}

fn specificity_of_complex(selector: &str) -> Specificity {
    let mut spec = Specificity::default();
    let mut chars = selector.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '#' => {
                take_ident(&mut chars);
                spec.0 = spec.0.saturating_add(1);
            }
            '.' => {
                take_ident(&mut chars);
                spec.1 = spec.1.saturating_add(1);
            }
            '[' => {
                skip_balanced(&mut chars, '[', ']');
                spec.1 = spec.1.saturating_add(1);
            }
            ':' => {
                if chars.peek() == Some(&':') {
                    chars.next();
                    take_ident(&mut chars);
                    spec.2 = spec.2.saturating_add(1);
                    continue;
                }
                let name = take_ident(&mut chars);
                if chars.peek() == Some(&'(') {
                    chars.next();
                    skip_balanced(&mut chars, '(', ')');
                }
                if LEGACY_PSEUDO_ELEMENTS.iter().any(|legacy| legacy.eq_ignore_ascii_case(&name)) {
                    spec.2 = spec.2.saturating_add(1);
                } else {
                    spec.1 = spec.1.saturating_add(1);
                }
            }
            c if is_ident_char(c) => {
                take_ident(&mut chars);
                spec.2 = spec.2.saturating_add(1);
            }
            // universal selector, combinators and whitespace
            _ => {}
        }
    }

    spec
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '\\' || !c.is_ascii()
}

fn take_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    ident
}

/// Consumes input up to and including the bracket closing an already opened `open`
fn skip_balanced(chars: &mut Peekable<Chars<'_>>, open: char, close: char) {
    let mut depth = 1usize;
    for c in chars.by_ref() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                break;
            }
        }
    }
}
