//! All functionality for directly creating dice, rolling them, and working with their resulting rolls.
//!
//! This is the home of the dice "primitives". For whole notations with several terms, see [`Expr`].
//!
//! [`Expr`]: crate::expr::Expr

pub mod shape;

use alloc::vec::Vec;
use core::fmt;

pub use self::shape::Shape;
use crate::random::Random;

/// Most dice a single term may roll
pub const MAX_COUNT: u32 = 100;

/// Fewest sides a die may have
pub const MIN_SIDES: u32 = 2;

/// Most sides a die may have
pub const MAX_SIDES: u32 = 1000;

/// Most dice a whole expression may roll across all of its terms
pub const MAX_TOTAL_DICE: u32 = 200;

/// Largest magnitude the flat numbers of an expression may add up to. This leaves room for the largest possible dice
/// total ([`MAX_TOTAL_DICE`] × [`MAX_SIDES`]) so a roll's total always fits in an [`i64`].
pub const MAX_MODIFIER: u64 = 9_223_372_036_854_575_807;

/// Side counts of the one-click preset dice (each rolled as `1dN`)
pub const PRESETS: [u32; 7] = [4, 6, 8, 10, 12, 20, 100];

/// Sign of a term in an expression, carried onto every die rolled for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[expect(clippy::exhaustive_enums, reason = "There are only two signs")]
pub enum Sign {
	/// Adds to the total
	#[default]
	Pos,

	/// Subtracts from the total
	Neg,
}

impl Sign {
	/// Gets the sign matching a `+` or `-` character.
	#[must_use]
	pub const fn from_char(c: char) -> Option<Self> {
		match c {
			'+' => Some(Self::Pos),
			'-' => Some(Self::Neg),
			_ => None,
		}
	}

	/// Applies the sign to a value. Values beyond [`i64::MAX`] saturate.
	#[must_use]
	pub fn apply(self, val: u64) -> i64 {
		let val = i64::try_from(val).unwrap_or(i64::MAX);
		match self {
			Self::Pos => val,
			Self::Neg => val.saturating_neg(),
		}
	}

	/// Indicates whether this is [`Sign::Neg`].
	#[must_use]
	#[inline]
	pub const fn is_negative(self) -> bool {
		matches!(self, Self::Neg)
	}

	/// Gets the character for this sign.
	#[must_use]
	pub const fn symbol(self) -> char {
		match self {
			Self::Pos => '+',
			Self::Neg => '-',
		}
	}
}

impl fmt::Display for Sign {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.symbol())
	}
}

/// A set of one or more rollable dice with a specific number of sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_structs, reason = "A count and sides are all dice ever need")]
pub struct Dice {
	/// Number of dice to roll
	pub count: u32,

	/// Number of sides for each die
	pub sides: u32,
}

impl Dice {
	/// Creates a new set of dice with a given count and number of sides.
	#[must_use]
	pub const fn new(count: u32, sides: u32) -> Self {
		Self { count, sides }
	}

	/// Creates a single die with the given number of sides, as the preset buttons roll.
	#[must_use]
	#[inline]
	pub const fn preset(sides: u32) -> Self {
		Self::new(1, sides)
	}

	/// Checks that the count lies within `1..=`[`MAX_COUNT`] and the sides within [`MIN_SIDES`]`..=`[`MAX_SIDES`].
	///
	/// # Examples
	/// ```
	/// use tabletop::dice::Dice;
	///
	/// assert!(Dice::new(100, 1000).is_valid());
	/// assert!(!Dice::new(101, 6).is_valid());
	/// assert!(!Dice::new(0, 6).is_valid());
	/// assert!(!Dice::new(1, 1).is_valid());
	/// ```
	#[must_use]
	pub const fn is_valid(&self) -> bool {
		self.count >= 1 && self.count <= MAX_COUNT && self.sides >= MIN_SIDES && self.sides <= MAX_SIDES
	}

	/// Rolls every die in the set, in order, marking each roll with the given sign.
	///
	/// # Examples
	/// ```
	/// use tabletop::{dice::{Dice, Sign}, random::Iter};
	///
	/// let rolls = Dice::new(3, 6).roll(&mut Iter::new([5, 1, 6]), Sign::Neg);
	/// let vals: Vec<_> = rolls.iter().map(|roll| roll.signed()).collect();
	/// assert_eq!(vals, [-5, -1, -6]);
	/// ```
	#[must_use]
	pub fn roll<R: Random + ?Sized>(&self, rng: &mut R, sign: Sign) -> Vec<DieRoll> {
		(0..self.count)
			.map(|_| DieRoll::new(self.sides, rng.int(1, self.sides), sign))
			.collect()
	}
}

impl Default for Dice {
	/// Creates the default dice (1d20).
	#[inline]
	fn default() -> Self {
		Self::preset(20)
	}
}

impl fmt::Display for Dice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}d{}", self.count, self.sides)
	}
}

/// Single die produced from rolling [`Dice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct DieRoll {
	/// Number of sides on the die that was rolled
	pub sides: u32,

	/// Value that was rolled
	pub val: u32,

	/// Sign of the term the die was rolled for
	pub sign: Sign,
}

impl DieRoll {
	/// Creates a new die roll.
	#[must_use]
	pub const fn new(sides: u32, val: u32, sign: Sign) -> Self {
		Self { sides, val, sign }
	}

	/// Gets the value with the roll's sign applied.
	#[must_use]
	pub fn signed(&self) -> i64 {
		self.sign.apply(u64::from(self.val))
	}

	/// Classifies the die for drawing its face.
	#[must_use]
	#[inline]
	pub const fn shape(&self) -> Shape {
		Shape::for_sides(self.sides)
	}
}

impl fmt::Display for DieRoll {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The format of a die roll is the plain numeric value, prefixed with `-` if it subtracts from the total.
	///
	/// # Examples
	/// ```
	/// use tabletop::dice::{DieRoll, Sign};
	///
	/// assert_eq!(DieRoll::new(6, 4, Sign::Pos).to_string(), "4");
	/// assert_eq!(DieRoll::new(6, 4, Sign::Neg).to_string(), "-4");
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.sign.is_negative() {
			write!(f, "-{}", self.val)
		} else {
			write!(f, "{}", self.val)
		}
	}
}
