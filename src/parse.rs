//! Parsing of dice notation such as `2d6+d8+3` into validated [`Expr`]s.
//!
//! Notation is a sequence of signed terms. Each term is either dice (`d20`, `4d6`) or a flat number (`3`). Whitespace
//! is ignored and case doesn't matter. An unsigned first term is positive.

use alloc::{
	string::{String, ToString},
	vec::Vec,
};
use core::{ops::Range, str::FromStr};

use chumsky::prelude::*;
use tracing::trace;

use crate::{
	dice::{Dice, Sign, MAX_COUNT, MAX_MODIFIER, MAX_SIDES, MAX_TOTAL_DICE, MIN_SIDES},
	expr::{Expr, Term},
};

/// Parses notation into an expression.
///
/// Terms are checked in order, so the error reported is always the one for the earliest offending term. The total
/// dice limit is cumulative: it fails on the term that pushes the running count over [`MAX_TOTAL_DICE`].
///
/// # Errors
/// - [`Error::Empty`] if there's nothing but whitespace
/// - [`Error::Malformed`] if a term is neither dice nor a number, or a sign isn't followed by a term
/// - [`Error::Bounds`] if a term is out of range, there are too many dice overall, or the flat numbers add up to more
///   than [`MAX_MODIFIER`] either way
/// - [`Error::NoDice`] if every term is a flat number
///
/// # Examples
/// ```
/// use tabletop::{dice::Dice, parse::{parse, Bounds, Error}};
///
/// let expr = parse(" 2D6 + 3 ")?;
/// assert_eq!(expr.normalized(), "2d6+3");
/// assert_eq!(expr.terms()[0].as_dice(), Some(Dice::new(2, 6)));
///
/// assert!(parse("   ").unwrap_err().is_empty());
/// assert!(matches!(parse("2d6+x"), Err(Error::Malformed { .. })));
/// assert!(matches!(parse("101d6"), Err(Error::Bounds { kind: Bounds::Dice, .. })));
/// assert!(matches!(parse("5"), Err(Error::NoDice)));
/// # Ok::<(), tabletop::parse::Error>(())
/// ```
pub fn parse(text: &str) -> Result<Expr, Error> {
	let normalized = normalize(text);
	if normalized.is_empty() {
		return Err(Error::Empty);
	}

	let terms = {
		let parser = body();
		let mut terms = Vec::new();
		let mut dice_count: u32 = 0;
		let mut modifier: i64 = 0;

		for token in tokenize(&normalized)? {
			let body = match parser.parse(token.body).into_result() {
				Ok(body) => body,
				Err(errs) => {
					trace!(token = token.body, ?errs, "unrecognized term");
					return Err(Error::Malformed { span: token.span });
				}
			};

			let term = match body {
				Body::Dice { count, sides } => {
					let dice = Dice::new(count.as_deref().map_or(1, digits_to_u32), digits_to_u32(&sides));
					if !dice.is_valid() {
						return Err(Error::Bounds {
							kind: Bounds::Dice,
							span: token.span,
						});
					}

					dice_count = dice_count.saturating_add(dice.count);
					if dice_count > MAX_TOTAL_DICE {
						return Err(Error::Bounds {
							kind: Bounds::TotalDice,
							span: token.span,
						});
					}

					Term::dice(token.sign, dice)
				}
				Body::Num(digits) => {
					let val = digits.parse::<u64>().ok().filter(|val| *val <= MAX_MODIFIER);
					let sum = val.and_then(|val| modifier.checked_add(token.sign.apply(val)));
					match (val, sum) {
						(Some(val), Some(sum)) if sum.unsigned_abs() <= MAX_MODIFIER => {
							modifier = sum;
							Term::num(token.sign, val)
						}
						_ => {
							return Err(Error::Bounds {
								kind: Bounds::Modifier,
								span: token.span,
							})
						}
					}
				}
			};
			terms.push(term);
		}
		terms
	};

	if !terms.iter().any(Term::is_dice) {
		return Err(Error::NoDice);
	}

	Ok(Expr::from_parts(terms, normalized))
}

/// Strips all whitespace (including byte order marks) from notation and lowercases it. Error spans from [`parse()`] index into this form of the
/// notation.
///
/// # Examples
/// ```
/// use tabletop::parse::normalize;
///
/// assert_eq!(normalize(" 2D6 +\tD8 - 1 "), "2d6+d8-1");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
	text.chars()
		.filter(|c| !c.is_whitespace() && *c != '\u{feff}')
		.flat_map(char::to_lowercase)
		.collect()
}

impl FromStr for Expr {
	type Err = Error;

	/// Parses notation with [`parse()`].
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s)
	}
}

/// Parsed body of a single term (everything after its sign)
#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
	/// Dice such as `d20` or `4d6`, with the digits of each part
	Dice {
		/// Digits before the `d`, if any
		count: Option<String>,

		/// Digits after the `d`
		sides: String,
	},

	/// A flat number
	Num(String),
}

/// Generates a parser that handles the body of a single term like "d20", "4d6", "3", etc. and expects end of input.
/// Leading zeros are allowed in every number.
fn body<'src>() -> impl Parser<'src, &'src str, Body, extra::Err<Rich<'src, char>>> + Clone {
	let digits = one_of("0123456789").repeated().at_least(1).collect::<String>();

	let dice = digits
		.clone()
		.or_not()
		.then_ignore(just('d'))
		.then(digits.clone())
		.map(|(count, sides)| Body::Dice { count, sides });

	choice((dice, digits.map(Body::Num))).then_ignore(end())
}

/// Parses a run of ASCII digits, saturating at [`u32::MAX`] when the number doesn't fit.
fn digits_to_u32(digits: &str) -> u32 {
	digits.parse().unwrap_or(u32::MAX)
}

/// Single sign-prefixed piece of notation
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token<'a> {
	/// Sign the token starts with (explicitly or implicitly)
	sign: Sign,

	/// Text following the sign
	body: &'a str,

	/// Byte range of the whole token within the notation
	span: Range<usize>,
}

/// Splits notation into tokens of exactly one sign followed by one or more non-sign characters.
/// Text that doesn't start with a sign gets an implicit `+`.
fn tokenize(text: &str) -> Result<Vec<Token<'_>>, Error> {
	let mut tokens = Vec::new();
	let mut start = 0;
	let (mut sign, mut body_start) = match text.chars().next().and_then(Sign::from_char) {
		Some(sign) => (sign, 1),
		None => (Sign::Pos, 0),
	};

	loop {
		let rest = text.get(body_start..).unwrap_or_default();
		let body_end = rest
			.find(['+', '-'])
			.map_or(text.len(), |offset| body_start.saturating_add(offset));

		if body_end == body_start {
			// A sign directly followed by another sign or the end of the text
			return Err(Error::Malformed {
				span: start..body_end.max(start.saturating_add(1)).min(text.len()),
			});
		}

		tokens.push(Token {
			sign,
			body: text.get(body_start..body_end).unwrap_or_default(),
			span: start..body_end,
		});

		if body_end == text.len() {
			return Ok(tokens);
		}

		sign = if text.get(body_end..).is_some_and(|rest| rest.starts_with('-')) {
			Sign::Neg
		} else {
			Sign::Pos
		};
		start = body_end;
		body_start = body_end.saturating_add(1);
	}
}

/// Limit a term of otherwise valid notation breaks
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Bounds {
	/// Dice count or sides outside of the allowed ranges
	#[error("Use 1-{} dice and {}-{} sides.", MAX_COUNT, MIN_SIDES, MAX_SIDES)]
	Dice,

	/// Dice across all terms exceed [`MAX_TOTAL_DICE`]
	#[error("Limit total dice to {} per roll.", MAX_TOTAL_DICE)]
	TotalDice,

	/// Flat numbers adding up to more than [`MAX_MODIFIER`] either way
	#[error("Keep modifiers between -{} and {}.", MAX_MODIFIER, MAX_MODIFIER)]
	Modifier,
}

/// An error resulting from parsing notation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// There was no notation at all (only whitespace, if anything).
	/// Callers will usually want to ignore this rather than report it.
	#[error("no dice notation given")]
	Empty,

	/// The notation isn't structurally valid.
	#[error("Invalid format. Example: 2d6+d8+3")]
	Malformed {
		/// Byte range of the offending token within the normalized notation
		span: Range<usize>,
	},

	/// A term breaks one of the dice limits.
	#[error("{kind}")]
	Bounds {
		/// Limit that was broken
		kind: Bounds,

		/// Byte range of the offending token within the normalized notation
		span: Range<usize>,
	},

	/// The notation is made up of flat numbers alone.
	#[error("Add at least one dice term like d20 or 2d6.")]
	NoDice,
}

impl Error {
	/// Indicates whether this is [`Error::Empty`].
	#[must_use]
	#[inline]
	pub const fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Gets the byte range of the offending token within the normalized notation, if the error is about one.
	#[must_use]
	pub fn span(&self) -> Option<Range<usize>> {
		match self {
			Self::Malformed { span } | Self::Bounds { span, .. } => Some(span.clone()),
			Self::Empty | Self::NoDice => None,
		}
	}

	/// Builds a lowercase label for the offending token, suitable for pointing at it in a diagnostic.
	#[must_use]
	pub fn label(&self) -> String {
		match self {
			Self::Malformed { .. } => "not a dice or number term".to_string(),
			Self::Bounds { kind, .. } => match kind {
				Bounds::Dice => "dice out of range".to_string(),
				Bounds::TotalDice => "too many dice in total".to_string(),
				Bounds::Modifier => "number too large".to_string(),
			},
			Self::Empty | Self::NoDice => self.to_string(),
		}
	}
}
