//! Layout pattern compiler
//!
//! Patterns are printf-like:
//!
//! | Directive | Output |
//! |-----------|--------|
//! | `%m` | message |
//! | `%p` | level name |
//! | `%r` | milliseconds since process start |
//! | `%c` | logger name |
//! | `%t` | thread id |
//! | `%F` | fiber id |
//! | `%d{fmt}` | local date/time, strftime `fmt` (default `%Y-%m-%d %H:%M:%S`) |
//! | `%f` | source file |
//! | `%l` | source line |
//! | `%n` | newline |
//! | `%T` | tab |
//! | `%%` | a literal `%` |
//!
//! Compilation never fails. A malformed directive is compiled into an
//! [`FormatItem::Error`] whose marker text appears in the rendered output.

use super::error::PatternError;
use super::format_item::FormatItem;

type ItemConstructor = fn(&str) -> FormatItem;

/// Directive code to item constructor. The argument is the brace subformat,
/// empty when none was given.
static DIRECTIVES: &[(char, ItemConstructor)] = &[
    ('m', |_| FormatItem::Message),
    ('p', |_| FormatItem::Level),
    ('r', |_| FormatItem::Elapsed),
    ('c', |_| FormatItem::LoggerName),
    ('t', |_| FormatItem::ThreadId),
    ('n', |_| FormatItem::NewLine),
    ('d', FormatItem::date_time),
    ('f', |_| FormatItem::FileName),
    ('l', |_| FormatItem::LineNo),
    ('T', |_| FormatItem::Tab),
    ('F', |_| FormatItem::FiberId),
];

/// Result of compiling one pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledPattern {
    /// Items in render order
    pub items: Vec<FormatItem>,
    /// Every problem found, in pattern order. Each one also appears in
    /// `items` as an [`FormatItem::Error`].
    pub errors: Vec<PatternError>,
}

fn lookup(name: &str) -> Option<ItemConstructor> {
    let mut chars = name.chars();
    let code = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    DIRECTIVES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, constructor)| *constructor)
}

/// Whether `code` names a registered directive
pub fn is_directive(code: char) -> bool {
    DIRECTIVES.iter().any(|(candidate, _)| *candidate == code)
}

fn flush_literal(literal: &mut String, items: &mut Vec<FormatItem>) {
    if !literal.is_empty() {
        items.push(FormatItem::Literal(std::mem::take(literal)));
    }
}

/// Compile `pattern` into render-ordered items in a single left-to-right scan.
///
/// A `%` not followed by a letter compiles to an empty directive code and
/// renders `<<error_format %>>`; a trailing `%` is handled the same way.
/// An unterminated `{` ends the scan with one error item.
pub fn compile(pattern: &str) -> CompiledPattern {
    let mut items = Vec::new();
    let mut errors = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }
        if let Some(&(_, '%')) = chars.peek() {
            chars.next();
            literal.push('%');
            continue;
        }

        flush_literal(&mut literal, &mut items);

        let name_start = chars.peek().map_or(pattern.len(), |&(index, _)| index);
        let mut name_end = name_start;
        while let Some(&(index, ch)) = chars.peek() {
            if !ch.is_ascii_alphabetic() {
                break;
            }
            name_end = index + ch.len_utf8();
            chars.next();
        }
        let name = &pattern[name_start..name_end];

        let mut subformat = "";
        if let Some(&(open, '{')) = chars.peek() {
            chars.next();
            let body_start = open + 1;
            let close = chars
                .by_ref()
                .find(|&(_, ch)| ch == '}')
                .map(|(index, _)| index);

            match close {
                Some(body_end) => subformat = &pattern[body_start..body_end],
                None => {
                    let error = PatternError::UnterminatedSubformat {
                        directive: name.to_string(),
                        subformat: pattern[body_start..].to_string(),
                    };
                    errors.push(error.clone());
                    items.push(FormatItem::Error(error));
                    break;
                }
            }
        }

        let item = match lookup(name) {
            Some(constructor) => constructor(subformat),
            None => FormatItem::Error(PatternError::UnknownDirective {
                directive: name.to_string(),
            }),
        };
        if let FormatItem::Error(error) = &item {
            errors.push(error.clone());
        }
        items.push(item);
    }

    flush_literal(&mut literal, &mut items);

    CompiledPattern { items, errors }
}
