//! Pattern-driven text format for intervals.
//!
//! An interval pattern is literal text with two placeholders: `{0}` for the
//! start and `{1}` for the end. Rendering replaces them with the printed
//! endpoints (or `-∞` / `+∞` for infinite sides); parsing matches the
//! literals and hands the text at each placeholder to a point parser.
//!
//! A pattern may list alternatives separated by `|`, e.g. `"{0}/{1}|{0} - {1}"`.
//! Rendering uses the first alternative; parsing tries each in turn. A `|`
//! only separates alternatives when every piece holds both placeholders;
//! otherwise it is literal text, so `"{0} | {1}"` is a single pattern.
//!
//! Endpoint text is produced and consumed by a [`PointPrinter`] and a
//! [`PointParser`]. Stock implementations live in [`crate::points`], and plain
//! closures of the right shape work too.

use crate::boundary::Boundary;
use crate::error::{IntervalError, Result};

/// Pattern used when neither the caller nor the printer/parser supplies one.
pub const DEFAULT_PATTERN: &str = "{0}/{1}";

/// Text of an infinite-past start.
pub const INFINITE_PAST: &str = "-\u{221E}";

/// Text of an infinite-future end.
pub const INFINITE_FUTURE: &str = "+\u{221E}";

const ALTERNATIVE_SEPARATOR: char = '|';

// ── Point printer / parser contracts ────────────────────────────────────────

/// Writes a single point as text.
pub trait PointPrinter<T> {
    /// Append the text of `point` to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Format`] if the point cannot be printed.
    fn print(&self, point: &T, out: &mut String) -> Result<()>;

    /// The interval pattern this printer prefers (e.g. a locale-specific
    /// one), if any.
    fn interval_pattern(&self) -> Option<&str> {
        None
    }
}

impl<T, F> PointPrinter<T> for F
where
    F: Fn(&T, &mut String) -> Result<()>,
{
    fn print(&self, point: &T, out: &mut String) -> Result<()> {
        self(point, out)
    }
}

/// Failure of a [`PointParser`], positioned relative to the text it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointParseError {
    pub offset: usize,
    pub message: String,
}

impl PointParseError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        PointParseError {
            offset,
            message: message.into(),
        }
    }
}

/// Reads a single point from the front of a text.
pub trait PointParser<T> {
    /// Parse a point at the start of `text`.
    ///
    /// On success returns the point and the number of bytes consumed. The
    /// parser may stop before the end of `text`; whatever follows is matched
    /// against the rest of the interval pattern.
    fn parse(&self, text: &str) -> std::result::Result<(T, usize), PointParseError>;

    /// The interval pattern this parser expects, if any.
    fn interval_pattern(&self) -> Option<&str> {
        None
    }
}

impl<T, F> PointParser<T> for F
where
    F: Fn(&str) -> std::result::Result<(T, usize), PointParseError>,
{
    fn parse(&self, text: &str) -> std::result::Result<(T, usize), PointParseError> {
        self(text)
    }
}

// ── Pattern tokens ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'p> {
    Literal(&'p str),
    Start,
    End,
}

/// Split one pattern alternative into literal runs and placeholders.
fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let bytes = pattern.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_from = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'{' && i + 2 < bytes.len() && bytes[i + 2] == b'}' {
            let placeholder = match bytes[i + 1] {
                b'0' => Some(Token::Start),
                b'1' => Some(Token::End),
                _ => None,
            };
            if let Some(placeholder) = placeholder {
                if literal_from < i {
                    tokens.push(Token::Literal(&pattern[literal_from..i]));
                }
                tokens.push(placeholder);
                i += 3;
                literal_from = i;
                continue;
            }
        }
        i += 1;
    }

    if literal_from < pattern.len() {
        tokens.push(Token::Literal(&pattern[literal_from..]));
    }
    tokens
}

/// Tokenize and check that each placeholder occurs exactly once.
fn checked_tokens(pattern: &str) -> Result<Vec<Token<'_>>> {
    let tokens = tokenize(pattern);
    for (placeholder, name) in [(Token::Start, "{0}"), (Token::End, "{1}")] {
        match tokens.iter().filter(|t| **t == placeholder).count() {
            1 => {}
            0 => {
                return Err(IntervalError::InvalidPattern(format!(
                    "missing placeholder {name} in '{pattern}'"
                )))
            }
            _ => {
                return Err(IntervalError::InvalidPattern(format!(
                    "repeated placeholder {name} in '{pattern}'"
                )))
            }
        }
    }
    Ok(tokens)
}

/// Tokenize every alternative of `pattern`.
///
/// If any `|`-separated piece is not a complete pattern on its own, the whole
/// pattern is taken as one alternative with `|` as a literal.
fn alternatives(pattern: &str) -> Result<Vec<Vec<Token<'_>>>> {
    let split = pattern
        .split(ALTERNATIVE_SEPARATOR)
        .map(checked_tokens)
        .collect::<Result<Vec<_>>>();

    match split {
        Ok(alternatives) => Ok(alternatives),
        Err(_) => checked_tokens(pattern).map(|tokens| vec![tokens]),
    }
}

// ── render ──────────────────────────────────────────────────────────────────

/// Render two boundaries through `pattern`.
///
/// Literal characters are copied verbatim, `{0}` and `{1}` are replaced by the
/// printed start and end. Only the first `|`-alternative is used. Any other
/// brace sequence is literal text.
///
/// # Errors
///
/// - [`IntervalError::InvalidPattern`] if the pattern lacks `{0}` or `{1}`
/// - [`IntervalError::Format`] if `printer` fails; the partial output is
///   discarded
pub fn render<T, P>(start: &Boundary<T>, end: &Boundary<T>, printer: &P, pattern: &str) -> Result<String>
where
    P: PointPrinter<T> + ?Sized,
{
    let alternatives = alternatives(pattern)?;
    let first = alternatives.first().map(Vec::as_slice).unwrap_or_default();

    let mut out = String::with_capacity(32);
    for token in first {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Start => match start.value() {
                Some(value) => printer.print(value, &mut out)?,
                None => out.push_str(INFINITE_PAST),
            },
            Token::End => match end.value() {
                Some(value) => printer.print(value, &mut out)?,
                None => out.push_str(INFINITE_FUTURE),
            },
        }
    }

    log::trace!("rendered interval as '{out}' using pattern '{pattern}'");
    Ok(out)
}

// ── parse ───────────────────────────────────────────────────────────────────

/// Parse `text` as an interval using `pattern`.
///
/// The start placeholder accepts `-∞` or a point, the end placeholder `+∞`
/// or a point. A point start becomes [`Boundary::Closed`], a point end
/// [`Boundary::Open`]. `build` turns the two boundaries into the caller's
/// interval type and may itself reject them.
///
/// Alternatives separated by `|` are tried left to right; the first that
/// matches the whole text wins. If none does, the error of the alternative
/// that got furthest is returned.
///
/// # Errors
///
/// - [`IntervalError::EmptyInput`] if `text` is empty
/// - [`IntervalError::InvalidPattern`] if the pattern lacks `{0}` or `{1}`
/// - [`IntervalError::Parse`] if the text does not match, with the byte offset
///   of the first mismatch
/// - whatever `build` returns
pub fn parse<T, I, P, F>(text: &str, parser: &P, pattern: &str, build: F) -> Result<I>
where
    P: PointParser<T> + ?Sized,
    F: FnOnce(Boundary<T>, Boundary<T>) -> Result<I>,
{
    if text.is_empty() {
        return Err(IntervalError::EmptyInput);
    }

    let alternatives = alternatives(pattern)?;

    let mut furthest: Option<IntervalError> = None;

    for tokens in &alternatives {
        match parse_alternative(text, parser, tokens) {
            Ok((start, end)) => return build(start, end),
            Err(err) => {
                log::debug!("interval pattern alternative failed on '{text}': {err}");
                let further = match (&furthest, err.offset()) {
                    (Some(best), Some(offset)) => best.offset().is_none_or(|b| offset > b),
                    _ => furthest.is_none(),
                };
                if further {
                    furthest = Some(err);
                }
            }
        }
    }

    Err(furthest.unwrap_or_else(|| IntervalError::Parse {
        offset: 0,
        message: format!("no interval pattern alternative matched '{text}'"),
    }))
}

fn parse_alternative<T, P>(
    text: &str,
    parser: &P,
    tokens: &[Token<'_>],
) -> Result<(Boundary<T>, Boundary<T>)>
where
    P: PointParser<T> + ?Sized,
{
    let mut pos = 0;
    let mut start = Boundary::InfinitePast;
    let mut end = Boundary::InfiniteFuture;

    for token in tokens {
        let rest = &text[pos..];
        match *token {
            Token::Literal(literal) => {
                if !rest.starts_with(literal) {
                    let matched = common_prefix_len(rest, literal);
                    return Err(IntervalError::Parse {
                        offset: pos + matched,
                        message: format!("expected '{literal}'"),
                    });
                }
                pos += literal.len();
            }
            Token::Start => {
                if rest.starts_with(INFINITE_PAST) {
                    pos += INFINITE_PAST.len();
                } else {
                    let (value, consumed) = parse_point(parser, text, pos)?;
                    start = Boundary::Closed(value);
                    pos += consumed;
                }
            }
            Token::End => {
                if rest.starts_with(INFINITE_FUTURE) {
                    pos += INFINITE_FUTURE.len();
                } else {
                    let (value, consumed) = parse_point(parser, text, pos)?;
                    end = Boundary::Open(value);
                    pos += consumed;
                }
            }
        }
    }

    if pos < text.len() {
        return Err(IntervalError::Parse {
            offset: pos,
            message: format!("unparsed trailing text '{}'", &text[pos..]),
        });
    }

    Ok((start, end))
}

fn parse_point<T, P>(parser: &P, text: &str, pos: usize) -> Result<(T, usize)>
where
    P: PointParser<T> + ?Sized,
{
    let rest = &text[pos..];
    match parser.parse(rest) {
        Ok((_, 0)) => Err(IntervalError::Parse {
            offset: pos,
            message: "point parser consumed no text".to_string(),
        }),
        Ok((_, consumed)) if consumed > rest.len() || !rest.is_char_boundary(consumed) => {
            Err(IntervalError::Parse {
                offset: pos,
                message: format!("point parser reported invalid length {consumed}"),
            })
        }
        Ok(parsed) => Ok(parsed),
        Err(err) => Err(IntervalError::Parse {
            offset: pos + err.offset,
            message: err.message,
        }),
    }
}

/// Byte length of the longest common prefix, on a char boundary.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .map(|((i, x), _)| i + x.len_utf8())
        .last()
        .unwrap_or(0)
}
