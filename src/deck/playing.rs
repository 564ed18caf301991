//! The standard 52-card deck.

use alloc::{format, string::String, vec::Vec};
use core::fmt;

use super::Deck;
use crate::random::Random;

/// Number of cards in a full deck
pub const SIZE: usize = 52;

/// Directory card images live in
pub const IMAGE_BASE: &str = "resources/cards";

/// Image shown for the back of a card
pub const BACK_IMAGE: &str = "resources/cards/back.png";

/// Suit of a playing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[expect(clippy::exhaustive_enums, reason = "The four French suits are fixed")]
pub enum Suit {
	/// ♠
	Spades,

	/// ♥
	Hearts,

	/// ♦
	Diamonds,

	/// ♣
	Clubs,
}

impl Suit {
	/// Every suit, in canonical deck order
	pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

	/// Gets the name of the suit.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Spades => "Spades",
			Self::Hearts => "Hearts",
			Self::Diamonds => "Diamonds",
			Self::Clubs => "Clubs",
		}
	}

	/// Gets the single-letter code used in image names.
	#[must_use]
	pub const fn code(self) -> char {
		match self {
			Self::Spades => 'S',
			Self::Hearts => 'H',
			Self::Diamonds => 'D',
			Self::Clubs => 'C',
		}
	}
}

impl fmt::Display for Suit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Rank of a playing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[expect(clippy::exhaustive_enums, reason = "The thirteen ranks are fixed")]
#[expect(missing_docs, reason = "Variant names say it all")]
pub enum Rank {
	Ace,
	Two,
	Three,
	Four,
	Five,
	Six,
	Seven,
	Eight,
	Nine,
	Ten,
	Jack,
	Queen,
	King,
}

impl Rank {
	/// Every rank, in canonical deck order
	pub const ALL: [Self; 13] = [
		Self::Ace,
		Self::Two,
		Self::Three,
		Self::Four,
		Self::Five,
		Self::Six,
		Self::Seven,
		Self::Eight,
		Self::Nine,
		Self::Ten,
		Self::Jack,
		Self::Queen,
		Self::King,
	];

	/// Gets the symbol printed in the card's corner.
	#[must_use]
	pub const fn symbol(self) -> &'static str {
		match self {
			Self::Ace => "A",
			Self::Two => "2",
			Self::Three => "3",
			Self::Four => "4",
			Self::Five => "5",
			Self::Six => "6",
			Self::Seven => "7",
			Self::Eight => "8",
			Self::Nine => "9",
			Self::Ten => "10",
			Self::Jack => "J",
			Self::Queen => "Q",
			Self::King => "K",
		}
	}

	/// Gets the single-character code used in image names. Identical to the symbol except for ten, which is `0`.
	#[must_use]
	pub const fn code(self) -> &'static str {
		match self {
			Self::Ten => "0",
			_ => self.symbol(),
		}
	}
}

impl fmt::Display for Rank {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.symbol())
	}
}

/// A single playing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
	/// Suit of the card
	suit: Suit,

	/// Rank of the card
	rank: Rank,
}

impl Card {
	/// Creates a card.
	#[must_use]
	pub const fn new(rank: Rank, suit: Suit) -> Self {
		Self { suit, rank }
	}

	/// Gets the suit of the card.
	#[must_use]
	#[inline]
	pub const fn suit(&self) -> Suit {
		self.suit
	}

	/// Gets the rank of the card.
	#[must_use]
	#[inline]
	pub const fn rank(&self) -> Rank {
		self.rank
	}

	/// Resolves the path of the card's face image.
	///
	/// # Examples
	/// ```
	/// use tabletop::deck::playing::{Card, Rank, Suit};
	///
	/// assert_eq!(Card::new(Rank::Ace, Suit::Spades).image(), "resources/cards/AS.png");
	/// assert_eq!(Card::new(Rank::Ten, Suit::Hearts).image(), "resources/cards/0H.png");
	/// ```
	#[must_use]
	pub fn image(&self) -> String {
		format!("{IMAGE_BASE}/{}{}.png", self.rank.code(), self.suit.code())
	}
}

impl fmt::Display for Card {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// Cards are written out as `{rank} of {suit}`, e.g. `10 of Diamonds`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} of {}", self.rank, self.suit)
	}
}

/// Builds every card of a standard deck, suit by suit in [`Suit::ALL`] order with each suit's ranks in [`Rank::ALL`]
/// order.
///
/// # Examples
/// ```
/// use tabletop::deck::playing::{self, Card, Rank, Suit};
///
/// let cards = playing::population();
/// assert_eq!(cards.len(), playing::SIZE);
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[51], Card::new(Rank::King, Suit::Clubs));
/// ```
#[must_use]
pub fn population() -> Vec<Card> {
	Suit::ALL
		.into_iter()
		.flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
		.collect()
}

/// Builds a freshly shuffled standard deck.
#[must_use]
pub fn deck<R: Random + ?Sized>(rng: &mut R) -> Deck<Card> {
	Deck::build(&population(), rng)
}
