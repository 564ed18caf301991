//! The 78-card tarot deck: 22 major arcana followed by four suits of 14 minor arcana.
//!
//! Orientation (upright or reversed) is decided each time a card is drawn and is never stored in the deck.

use alloc::{format, string::String, vec::Vec};
use core::fmt;

use super::{Deck, Draw, Error};
use crate::random::Random;

/// Number of cards in a full deck
pub const SIZE: usize = 78;

/// Directory tarot images live in
pub const IMAGE_BASE: &str = "resources/tarot";

/// Image shown for the back of a card
pub const BACK_IMAGE: &str = "resources/tarot/back.jpg";

/// Names of the major arcana, in canonical order
pub const MAJOR_ARCANA: [&str; 22] = [
	"The Fool",
	"The Magician",
	"The High Priestess",
	"The Empress",
	"The Emperor",
	"The Hierophant",
	"The Lovers",
	"The Chariot",
	"Strength",
	"The Hermit",
	"Wheel of Fortune",
	"Justice",
	"The Hanged Man",
	"Death",
	"Temperance",
	"The Devil",
	"The Tower",
	"The Star",
	"The Moon",
	"The Sun",
	"Judgement",
	"The World",
];

/// Suit of a minor arcana card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[expect(clippy::exhaustive_enums, reason = "The four tarot suits are fixed")]
#[expect(missing_docs, reason = "Variant names say it all")]
pub enum Suit {
	Wands,
	Cups,
	Swords,
	Pentacles,
}

impl Suit {
	/// Every suit, in canonical deck order
	pub const ALL: [Self; 4] = [Self::Wands, Self::Cups, Self::Swords, Self::Pentacles];

	/// Gets the name of the suit.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Wands => "Wands",
			Self::Cups => "Cups",
			Self::Swords => "Swords",
			Self::Pentacles => "Pentacles",
		}
	}

	/// Gets the lowercase name used in image names.
	#[must_use]
	pub const fn slug(self) -> &'static str {
		match self {
			Self::Wands => "wands",
			Self::Cups => "cups",
			Self::Swords => "swords",
			Self::Pentacles => "pentacles",
		}
	}
}

impl fmt::Display for Suit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Rank of a minor arcana card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[expect(clippy::exhaustive_enums, reason = "The fourteen minor ranks are fixed")]
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
	Page,
	Knight,
	Queen,
	King,
}

impl Rank {
	/// Every rank, in canonical deck order
	pub const ALL: [Self; 14] = [
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
		Self::Page,
		Self::Knight,
		Self::Queen,
		Self::King,
	];

	/// Gets the name of the rank.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Ace => "Ace",
			Self::Two => "Two",
			Self::Three => "Three",
			Self::Four => "Four",
			Self::Five => "Five",
			Self::Six => "Six",
			Self::Seven => "Seven",
			Self::Eight => "Eight",
			Self::Nine => "Nine",
			Self::Ten => "Ten",
			Self::Page => "Page",
			Self::Knight => "Knight",
			Self::Queen => "Queen",
			Self::King => "King",
		}
	}

	/// Gets the 1-based position of the rank within its suit.
	#[must_use]
	pub const fn number(self) -> u8 {
		(self as u8).saturating_add(1)
	}
}

impl fmt::Display for Rank {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Which half of the deck a card belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Arcana {
	/// Index into [`MAJOR_ARCANA`]
	Major(u8),

	/// Suited card
	Minor(Suit, Rank),
}

/// A single tarot card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TarotCard(Arcana);

impl TarotCard {
	/// Creates the major arcana card at the given position in [`MAJOR_ARCANA`], if there is one.
	///
	/// # Examples
	/// ```
	/// use tabletop::deck::tarot::TarotCard;
	///
	/// assert_eq!(TarotCard::major(18).map(|card| card.name()), Some("The Moon".to_owned()));
	/// assert_eq!(TarotCard::major(22), None);
	/// ```
	#[must_use]
	pub fn major(index: usize) -> Option<Self> {
		if index < MAJOR_ARCANA.len() {
			u8::try_from(index).ok().map(|index| Self(Arcana::Major(index)))
		} else {
			None
		}
	}

	/// Creates a minor arcana card.
	#[must_use]
	pub const fn minor(rank: Rank, suit: Suit) -> Self {
		Self(Arcana::Minor(suit, rank))
	}

	/// Indicates whether this is one of the major arcana.
	#[must_use]
	#[inline]
	pub const fn is_major(&self) -> bool {
		matches!(self.0, Arcana::Major(..))
	}

	/// Gets the card's full name, e.g. `The Fool` or `Queen of Cups`.
	#[must_use]
	pub fn name(&self) -> String {
		format!("{self}")
	}

	/// Resolves the path of the card's face image.
	///
	/// # Examples
	/// ```
	/// use tabletop::deck::tarot::{Rank, Suit, TarotCard};
	///
	/// assert_eq!(TarotCard::major(0).unwrap().image(), "resources/tarot/major-00.jpg");
	/// assert_eq!(TarotCard::minor(Rank::Page, Suit::Cups).image(), "resources/tarot/cups-11.jpg");
	/// ```
	#[must_use]
	pub fn image(&self) -> String {
		match self.0 {
			Arcana::Major(index) => format!("{IMAGE_BASE}/major-{index:02}.jpg"),
			Arcana::Minor(suit, rank) => format!("{IMAGE_BASE}/{}-{:02}.jpg", suit.slug(), rank.number()),
		}
	}
}

impl fmt::Display for TarotCard {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			Arcana::Major(index) => f.write_str(MAJOR_ARCANA.get(usize::from(index)).copied().unwrap_or_default()),
			Arcana::Minor(suit, rank) => write!(f, "{rank} of {suit}"),
		}
	}
}

/// A tarot card as it came off the deck, with its orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Drawn {
	/// Card that was drawn
	pub card: TarotCard,

	/// Whether the card came up upside down
	pub reversed: bool,
}

impl Drawn {
	/// Creates a drawn card.
	#[must_use]
	pub const fn new(card: TarotCard, reversed: bool) -> Self {
		Self { card, reversed }
	}
}

impl fmt::Display for Drawn {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// Reversed cards are suffixed with ` (Reversed)`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.card)?;
		if self.reversed {
			f.write_str(" (Reversed)")?;
		}
		Ok(())
	}
}

/// Builds every card of a tarot deck: the major arcana in [`MAJOR_ARCANA`] order, then the minor arcana suit by suit in
/// [`Suit::ALL`] order with each suit's ranks in [`Rank::ALL`] order.
///
/// # Examples
/// ```
/// use tabletop::deck::tarot;
///
/// let cards = tarot::population();
/// assert_eq!(cards.len(), tarot::SIZE);
/// assert_eq!(cards[0].name(), "The Fool");
/// assert_eq!(cards[22].name(), "Ace of Wands");
/// assert_eq!(cards[77].name(), "King of Pentacles");
/// ```
#[must_use]
pub fn population() -> Vec<TarotCard> {
	(0..MAJOR_ARCANA.len())
		.filter_map(TarotCard::major)
		.chain(
			Suit::ALL
				.into_iter()
				.flat_map(|suit| Rank::ALL.into_iter().map(move |rank| TarotCard::minor(rank, suit))),
		)
		.collect()
}

/// Builds a freshly shuffled tarot deck.
#[must_use]
pub fn deck<R: Random + ?Sized>(rng: &mut R) -> Deck<TarotCard> {
	Deck::build(&population(), rng)
}

/// Gives each card an orientation. When reversals are allowed every card independently flips a fair coin; otherwise
/// every card is upright and no randomness is used.
#[must_use]
pub fn orient<R: Random + ?Sized>(cards: Vec<TarotCard>, allow_reversed: bool, rng: &mut R) -> Vec<Drawn> {
	cards
		.into_iter()
		.map(|card| Drawn::new(card, allow_reversed && rng.coin()))
		.collect()
}

/// Draws up to `count` cards from a tarot deck and orients them (see [`orient()`]).
///
/// # Errors
/// If the deck is already empty, [`Error::Empty`] is returned.
///
/// # Examples
/// ```
/// use tabletop::{deck::tarot, random::Max};
///
/// let mut deck = tarot::deck(&mut Max);
/// let draw = tarot::draw(&mut deck, 2, true, &mut Max)?;
/// assert_eq!(draw.cards[0].to_string(), "King of Pentacles (Reversed)");
///
/// let draw = tarot::draw(&mut deck, 1, false, &mut Max)?;
/// assert_eq!(draw.cards[0].to_string(), "Knight of Pentacles");
/// assert_eq!(deck.remaining(), 75);
/// # Ok::<(), tabletop::deck::Error>(())
/// ```
pub fn draw<R: Random + ?Sized>(
	deck: &mut Deck<TarotCard>,
	count: usize,
	allow_reversed: bool,
	rng: &mut R,
) -> Result<Draw<Drawn>, Error> {
	let draw = deck.draw(count)?;
	Ok(draw.map(|card| Drawn::new(card, allow_reversed && rng.coin())))
}
