//! Data structures for whole additive dice expressions, evaluating them and working with their outcomes.

use alloc::{
	borrow::Cow,
	format,
	string::{String, ToString},
	vec::Vec,
};
use core::fmt;

use tracing::trace;

use crate::{
	dice::{Dice, DieRoll, Sign},
	random::Random,
	render::Plan,
};

/// Value contributed by a [`Term`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TermKind {
	/// Dice to roll
	Dice(Dice),

	/// Flat modifier
	Num(u64),
}

impl fmt::Display for TermKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Dice(dice) => write!(f, "{dice}"),
			Self::Num(val) => write!(f, "{val}"),
		}
	}
}

/// One signed, additive component of an [`Expr`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Term {
	/// Whether the term adds to or subtracts from the total
	pub sign: Sign,

	/// What the term contributes
	pub kind: TermKind,
}

impl Term {
	/// Creates a dice term.
	#[must_use]
	pub const fn dice(sign: Sign, dice: Dice) -> Self {
		Self {
			sign,
			kind: TermKind::Dice(dice),
		}
	}

	/// Creates a flat modifier term.
	#[must_use]
	pub const fn num(sign: Sign, val: u64) -> Self {
		Self {
			sign,
			kind: TermKind::Num(val),
		}
	}

	/// Gets the dice of the term, if it is a dice term.
	#[must_use]
	pub const fn as_dice(&self) -> Option<Dice> {
		match self.kind {
			TermKind::Dice(dice) => Some(dice),
			TermKind::Num(..) => None,
		}
	}

	/// Indicates whether this term rolls dice.
	#[must_use]
	#[inline]
	pub const fn is_dice(&self) -> bool {
		matches!(self.kind, TermKind::Dice(..))
	}
}

impl fmt::Display for Term {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// Terms are always written with an explicit sign, e.g. `+2d6` or `-3`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.sign, self.kind)
	}
}

/// Validated dice notation: an ordered list of signed terms containing at least one dice term and no more than
/// [`MAX_TOTAL_DICE`](crate::dice::MAX_TOTAL_DICE) dice in total.
///
/// Expressions are only produced by [parsing](crate::parse::parse) notation.
///
/// # Examples
/// ```
/// use tabletop::{dice::Dice, Expr};
///
/// let expr: Expr = "2d6 + d8 + 3".parse()?;
/// assert_eq!(expr.normalized(), "2d6+d8+3");
/// assert_eq!(expr.terms().len(), 3);
/// assert_eq!(expr.dice_count(), 3);
/// assert_eq!(expr.terms()[1].as_dice(), Some(Dice::new(1, 8)));
/// # Ok::<(), tabletop::parse::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr {
	/// Terms in the order they were written
	terms: Vec<Term>,

	/// Lowercase, whitespace-free text the expression was parsed from
	normalized: String,
}

impl Expr {
	/// Assembles an expression from terms that have already been validated.
	#[must_use]
	pub(crate) const fn from_parts(terms: Vec<Term>, normalized: String) -> Self {
		Self { terms, normalized }
	}

	/// Gets the terms in the order they were written.
	#[must_use]
	#[inline]
	pub fn terms(&self) -> &[Term] {
		&self.terms
	}

	/// Gets the lowercase, whitespace-free text the expression was parsed from.
	#[must_use]
	#[inline]
	pub fn normalized(&self) -> &str {
		&self.normalized
	}

	/// Iterates over the dice terms along with their signs.
	pub fn dice(&self) -> impl Iterator<Item = (Sign, Dice)> + '_ {
		self.terms
			.iter()
			.filter_map(|term| term.as_dice().map(|dice| (term.sign, dice)))
	}

	/// Counts the dice rolled across all dice terms.
	#[must_use]
	pub fn dice_count(&self) -> u32 {
		self.dice().map(|(_, dice)| dice.count).sum()
	}

	/// Sums the signed values of all flat modifier terms.
	#[must_use]
	pub fn modifier(&self) -> i64 {
		self.terms
			.iter()
			.filter_map(|term| match term.kind {
				TermKind::Num(val) => Some(term.sign.apply(val)),
				TermKind::Dice(..) => None,
			})
			.fold(0, i64::saturating_add)
	}

	/// Evaluates the expression, rolling every die of every dice term in order using the given random source.
	///
	/// Each die's value is recorded with its term's sign. Evaluation never fails; it is a single pass that only consumes
	/// randomness.
	///
	/// # Examples
	/// ```
	/// use tabletop::{random::Iter, Expr};
	///
	/// let expr: Expr = "2d6-1d4+3".parse()?;
	/// let outcome = expr.eval(&mut Iter::new([4, 2, 3]));
	/// assert_eq!(outcome.dice_total, 3);
	/// assert_eq!(outcome.modifier_total, 3);
	/// assert_eq!(outcome.total(), 6);
	/// # Ok::<(), tabletop::parse::Error>(())
	/// ```
	#[must_use]
	pub fn eval<R: Random + ?Sized>(&self, rng: &mut R) -> Outcome<'_> {
		let mut rolls = Vec::with_capacity(usize::try_from(self.dice_count()).unwrap_or_default());
		let mut dice_total: i64 = 0;
		let mut modifier_total: i64 = 0;

		for term in &self.terms {
			match term.kind {
				TermKind::Num(val) => modifier_total = modifier_total.saturating_add(term.sign.apply(val)),
				TermKind::Dice(dice) => {
					for roll in dice.roll(rng, term.sign) {
						dice_total = dice_total.saturating_add(roll.signed());
						rolls.push(roll);
					}
				}
			}
		}

		trace!(expr = %self.normalized, dice_total, modifier_total, "evaluated dice expression");
		Outcome {
			rolls,
			dice_total,
			modifier_total,
			expr: Cow::Borrowed(self),
		}
	}

	/// Builds the plan for handing this expression to an external dice renderer.
	/// See [`Plan::new()`] for when there is none.
	#[must_use]
	#[inline]
	pub fn plan(&self) -> Option<Plan> {
		Plan::new(self)
	}
}

impl fmt::Display for Expr {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output is the normalized notation, which parses back to an identical expression.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.normalized)
	}
}

/// Result of evaluating an [`Expr`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Outcome<'a> {
	/// Every die rolled, in term order and then in the order each term rolled them
	pub rolls: Vec<DieRoll>,

	/// Sum of the signed values of all rolls
	pub dice_total: i64,

	/// Sum of the signed values of all flat modifiers
	pub modifier_total: i64,

	/// Expression that was evaluated to produce this
	pub expr: Cow<'a, Expr>,
}

impl Outcome<'_> {
	/// Calculates the grand total: dice plus modifiers.
	#[must_use]
	#[inline]
	pub const fn total(&self) -> i64 {
		self.dice_total.saturating_add(self.modifier_total)
	}

	/// Gets the normalized notation of the evaluated expression.
	#[must_use]
	#[inline]
	pub fn normalized(&self) -> &str {
		self.expr.normalized()
	}

	/// Builds a short label for each of the first `limit` rolls (`#1 d6: 4`), followed by a `+N more` label when any
	/// rolls were left out.
	///
	/// # Examples
	/// ```
	/// use tabletop::{random::Iter, Expr};
	///
	/// let expr: Expr = "3d6-d4".parse()?;
	/// let outcome = expr.eval(&mut Iter::new([6, 5, 4, 2]));
	/// assert_eq!(outcome.chips(24), ["#1 d6: 6", "#2 d6: 5", "#3 d6: 4", "#4 d4: -2"]);
	/// assert_eq!(outcome.chips(2), ["#1 d6: 6", "#2 d6: 5", "+2 more"]);
	/// # Ok::<(), tabletop::parse::Error>(())
	/// ```
	#[must_use]
	pub fn chips(&self, limit: usize) -> Vec<String> {
		let mut chips: Vec<String> = self
			.rolls
			.iter()
			.take(limit)
			.enumerate()
			.map(|(idx, roll)| format!("#{} d{}: {roll}", idx.saturating_add(1), roll.sides))
			.collect();

		let hidden = self.rolls.len().saturating_sub(limit);
		if hidden > 0 {
			chips.push(format!("+{hidden} more"));
		}

		chips
	}

	/// Moves all of self's owned data into a new instance and clones any unowned data in order to create a `'static`
	/// instance of self.
	#[must_use]
	pub fn into_owned(self) -> Outcome<'static> {
		Outcome {
			rolls: self.rolls,
			dice_total: self.dice_total,
			modifier_total: self.modifier_total,
			expr: Cow::Owned(self.expr.into_owned()),
		}
	}
}

impl Describe for Outcome<'_> {
	/// Builds the full breakdown of the outcome: the notation, each term with the values its dice rolled, and the total.
	///
	/// If `list_limit` is specified and a dice term rolled more values than it, that term's list is truncated and
	/// appended with "X more..." (where X is the remaining roll count past the max).
	///
	/// # Examples
	/// ```
	/// use tabletop::{expr::Describe, random::Iter, Expr};
	///
	/// let expr: Expr = "4d6 - d4 + 3".parse()?;
	/// let outcome = expr.eval(&mut Iter::new([6, 2, 5, 3, 1]));
	/// assert_eq!(outcome.describe(None), "4d6-d4+3 -> 4d6:[6,2,5,3] - 1d4:[1] + 3 = 18");
	/// assert_eq!(outcome.describe(Some(2)), "4d6-d4+3 -> 4d6:[6,2, 2 more...] - 1d4:[1] + 3 = 18");
	/// # Ok::<(), tabletop::parse::Error>(())
	/// ```
	fn describe(&self, list_limit: Option<usize>) -> String {
		let list_limit = list_limit.unwrap_or(usize::MAX);
		let mut rolls = self.rolls.iter();
		let mut parts = String::new();

		for (idx, term) in self.expr.terms().iter().enumerate() {
			parts.push_str(match (idx, term.sign) {
				(0, Sign::Pos) => "",
				(0, Sign::Neg) => "-",
				(_, Sign::Pos) => " + ",
				(_, Sign::Neg) => " - ",
			});

			match term.kind {
				TermKind::Num(val) => parts.push_str(&val.to_string()),
				TermKind::Dice(dice) => {
					let vals = rolls
						.by_ref()
						.take(usize::try_from(dice.count).unwrap_or(usize::MAX))
						.map(|roll| roll.val.to_string())
						.collect::<Vec<_>>();
					let truncated = vals.len().saturating_sub(list_limit);

					parts.push_str(&format!(
						"{dice}:[{}{}]",
						vals.iter().take(list_limit).cloned().collect::<Vec<_>>().join(","),
						if truncated > 0 {
							format!(", {truncated} more...")
						} else {
							String::new()
						}
					));
				}
			}
		}

		format!("{} -> {parts} = {}", self.normalized(), self.total())
	}
}

impl fmt::Display for Outcome<'_> {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output is equivalent to calling [`Self::describe(None)`].
	///
	/// [`Self::describe(None)`]: Self::describe()
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.describe(None))
	}
}

/// Trait to allow creation of expanded descriptions with an optional max number of individual listed results where
/// applicable
pub trait Describe {
	/// Builds a detailed string with additional information about non-deterministic elements.
	/// Any elements that can have a different result between multiple evaluations should list all of the specific
	/// individual results that occurred (ideally, up to `list_limit` of them).
	#[must_use]
	fn describe(&self, list_limit: Option<usize>) -> String;
}
