//! A single player's table: one random source, a deck of playing cards, a tarot deck and the settings for using them.
//!
//! The table owns all of its state. Every operation runs to completion before returning and produces a value ready to
//! be presented, so front ends only ever need to show what they're handed.

use alloc::{
	borrow::ToOwned,
	string::{String, ToString},
	vec::Vec,
};
use core::fmt;

use tracing::{debug, warn};

use crate::{
	deck::{
		self, playing,
		playing::Card,
		tarot::{self, Drawn, TarotCard},
		Deck, Draw,
	},
	expr::{Describe, Outcome},
	parse,
	random::Random,
	render::Plan,
};

/// Fewest cards a single draw may ask for
pub const MIN_DRAW: usize = 1;

/// Most cards a single draw may ask for
pub const MAX_DRAW: usize = 6;

/// Clamps a draw count to [`MIN_DRAW`]`..=`[`MAX_DRAW`].
#[must_use]
pub fn clamp_draw_count(count: usize) -> usize {
	count.clamp(MIN_DRAW, MAX_DRAW)
}

/// Adjustable options for a [`Table`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Settings {
	/// Playing cards per draw
	card_count: usize,

	/// Tarot cards per draw
	tarot_count: usize,

	/// Whether drawn playing cards go straight back into the deck
	return_cards: bool,

	/// Whether drawn tarot cards go straight back into the deck
	return_tarot: bool,

	/// Whether tarot cards may come up reversed
	allow_reversed: bool,

	/// Whether the external dice renderer is available
	renderer_ready: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			card_count: MIN_DRAW,
			tarot_count: MIN_DRAW,
			return_cards: false,
			return_tarot: false,
			allow_reversed: true,
			renderer_ready: false,
		}
	}
}

/// Session state for rolling dice and drawing cards
///
/// # Examples
/// ```
/// use tabletop::{random::Max, table::Builder};
///
/// let mut table = Builder::new().card_count(2).build(Max);
/// let roll = table.roll("2d6+3")?;
/// assert_eq!(roll.outcome.total(), 15);
///
/// let report = table.draw_cards().unwrap();
/// assert_eq!(report.to_string(), "Drew 2: K of Clubs, Q of Clubs. 50 left.");
/// # Ok::<(), tabletop::parse::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Table<R: Random> {
	/// Source of every roll, shuffle and coin flip
	rng: R,

	/// Playing card deck
	cards: Deck<Card>,

	/// Tarot deck
	tarot: Deck<TarotCard>,

	/// Current options
	settings: Settings,

	/// Notation of the most recent roll attempt
	last_notation: Option<String>,
}

impl<R: Random> Table<R> {
	/// Creates a table with default settings, shuffling both decks with the given random source.
	#[must_use]
	pub fn new(rng: R) -> Self {
		Builder::default().build(rng)
	}

	/// Parses and evaluates notation, remembering it for [`Self::renderer_ready()`] whether or not it's valid.
	///
	/// The returned roll is presented by the external renderer when it's ready and the expression has a [`Plan`];
	/// otherwise it's drawn on the flat canvas.
	///
	/// # Errors
	/// Any [`parse::Error`] from the notation is returned as-is.
	///
	/// # Examples
	/// ```
	/// use tabletop::{random::Max, table::{Presentation, Table}};
	///
	/// let mut table = Table::new(Max);
	/// let roll = table.roll("d20+d4")?;
	/// assert_eq!(roll.presentation, Presentation::Canvas);
	///
	/// let roll = table.renderer_ready().expect("there was a roll before")?;
	/// assert_eq!(roll.outcome.total(), 24);
	/// assert!(matches!(roll.presentation, Presentation::Renderer(plan) if plan.to_string() == "1d20 & 1d4"));
	/// # Ok::<(), tabletop::parse::Error>(())
	/// ```
	pub fn roll(&mut self, notation: &str) -> Result<Roll, parse::Error> {
		self.last_notation = Some(notation.to_owned());

		let expr = parse::parse(notation)?;
		let outcome = expr.eval(&mut self.rng).into_owned();
		let presentation = match outcome.expr.plan() {
			Some(plan) if self.settings.renderer_ready => Presentation::Renderer(plan),
			_ => Presentation::Canvas,
		};

		debug!(notation = %outcome.normalized(), total = outcome.total(), ?presentation, "rolled dice");
		Ok(Roll { outcome, presentation })
	}

	/// Marks the external renderer as ready, then rolls the most recent notation again with fresh randomness so it can
	/// be shown by the renderer. The result of the re-roll may differ from what was shown before.
	///
	/// Returns `None` if nothing has been rolled yet.
	pub fn renderer_ready(&mut self) -> Option<Result<Roll, parse::Error>> {
		self.settings.renderer_ready = true;
		let notation = self.last_notation.clone()?;
		debug!(%notation, "dice renderer ready, rolling again");
		Some(self.roll(&notation))
	}

	/// Marks the external renderer as unavailable, so later rolls are drawn on the flat canvas.
	pub fn renderer_failed(&mut self, reason: &dyn fmt::Display) {
		self.settings.renderer_ready = false;
		warn!(%reason, "dice renderer failed, falling back to canvas");
	}

	/// Indicates whether the external renderer is ready.
	#[must_use]
	#[inline]
	pub const fn is_renderer_ready(&self) -> bool {
		self.settings.renderer_ready
	}

	/// Gets the notation of the most recent roll attempt, if any.
	#[must_use]
	#[inline]
	pub fn last_notation(&self) -> Option<&str> {
		self.last_notation.as_deref()
	}

	/// Draws the configured number of playing cards, returning them to the deck and reshuffling if enabled.
	///
	/// # Errors
	/// If the deck is empty, [`Error::Empty`] is returned and nothing changes.
	pub fn draw_cards(&mut self) -> Result<CardDraw, Error> {
		let draw = self
			.cards
			.draw(self.settings.card_count)
			.map_err(|source| Error::Empty {
				kind: DeckKind::Cards,
				source,
			})?;

		let returned = self.settings.return_cards;
		if returned {
			self.cards.return_and_reshuffle(draw.cards.iter().copied(), &mut self.rng);
		}

		Ok(Report {
			kind: DeckKind::Cards,
			draw,
			returned,
			remaining: self.cards.remaining(),
		})
	}

	/// Draws the configured number of tarot cards, orienting each one and returning them to the deck and reshuffling if
	/// enabled. Returned cards lose their orientation.
	///
	/// # Errors
	/// If the deck is empty, [`Error::Empty`] is returned and nothing changes.
	///
	/// # Examples
	/// ```
	/// use tabletop::{random::Max, table::Builder};
	///
	/// let mut table = Builder::new().allow_reversed(false).return_tarot(true).build(Max);
	/// let report = table.draw_tarot().unwrap();
	/// assert_eq!(report.to_string(), "Tarot 1: King of Pentacles. Returned to deck. 78 left.");
	/// ```
	pub fn draw_tarot(&mut self) -> Result<TarotDraw, Error> {
		let draw = tarot::draw(
			&mut self.tarot,
			self.settings.tarot_count,
			self.settings.allow_reversed,
			&mut self.rng,
		)
		.map_err(|source| Error::Empty {
			kind: DeckKind::Tarot,
			source,
		})?;

		let returned = self.settings.return_tarot;
		if returned {
			self.tarot
				.return_and_reshuffle(draw.cards.iter().map(|drawn| drawn.card), &mut self.rng);
		}

		Ok(Report {
			kind: DeckKind::Tarot,
			draw,
			returned,
			remaining: self.tarot.remaining(),
		})
	}

	/// Replaces the playing card deck with a freshly shuffled full one.
	pub fn reset_cards(&mut self) -> Reset {
		self.cards.reset(&playing::population(), &mut self.rng);
		Reset {
			kind: DeckKind::Cards,
			remaining: self.cards.remaining(),
		}
	}

	/// Replaces the tarot deck with a freshly shuffled full one.
	pub fn reset_tarot(&mut self) -> Reset {
		self.tarot.reset(&tarot::population(), &mut self.rng);
		Reset {
			kind: DeckKind::Tarot,
			remaining: self.tarot.remaining(),
		}
	}

	/// Counts the playing cards left in the deck.
	#[must_use]
	#[inline]
	pub fn cards_remaining(&self) -> usize {
		self.cards.remaining()
	}

	/// Counts the tarot cards left in the deck.
	#[must_use]
	#[inline]
	pub fn tarot_remaining(&self) -> usize {
		self.tarot.remaining()
	}

	/// Percentage of the full playing card deck that's left.
	#[must_use]
	#[inline]
	pub fn card_meter(&self) -> f64 {
		self.cards.meter(playing::SIZE)
	}

	/// Percentage of the full tarot deck that's left.
	#[must_use]
	#[inline]
	pub fn tarot_meter(&self) -> f64 {
		self.tarot.meter(tarot::SIZE)
	}

	/// Gets the number of playing cards drawn at a time.
	#[must_use]
	#[inline]
	pub const fn card_count(&self) -> usize {
		self.settings.card_count
	}

	/// Sets the number of playing cards drawn at a time, clamped to [`MIN_DRAW`]`..=`[`MAX_DRAW`]. Returns the new count.
	pub fn set_card_count(&mut self, count: usize) -> usize {
		self.settings.card_count = clamp_draw_count(count);
		self.settings.card_count
	}

	/// Steps the number of playing cards drawn at a time, clamped to [`MIN_DRAW`]`..=`[`MAX_DRAW`]. Returns the new
	/// count.
	///
	/// # Examples
	/// ```
	/// use tabletop::{random::Max, table::Table};
	///
	/// let mut table = Table::new(Max);
	/// assert_eq!(table.adjust_card_count(-1), 1);
	/// assert_eq!(table.adjust_card_count(3), 4);
	/// assert_eq!(table.adjust_card_count(10), 6);
	/// ```
	pub fn adjust_card_count(&mut self, delta: isize) -> usize {
		self.set_card_count(self.settings.card_count.saturating_add_signed(delta))
	}

	/// Gets the number of tarot cards drawn at a time.
	#[must_use]
	#[inline]
	pub const fn tarot_count(&self) -> usize {
		self.settings.tarot_count
	}

	/// Sets the number of tarot cards drawn at a time, clamped to [`MIN_DRAW`]`..=`[`MAX_DRAW`]. Returns the new count.
	pub fn set_tarot_count(&mut self, count: usize) -> usize {
		self.settings.tarot_count = clamp_draw_count(count);
		self.settings.tarot_count
	}

	/// Steps the number of tarot cards drawn at a time, clamped to [`MIN_DRAW`]`..=`[`MAX_DRAW`]. Returns the new count.
	pub fn adjust_tarot_count(&mut self, delta: isize) -> usize {
		self.set_tarot_count(self.settings.tarot_count.saturating_add_signed(delta))
	}

	/// Indicates whether drawn playing cards go back into the deck.
	#[must_use]
	#[inline]
	pub const fn returns_cards(&self) -> bool {
		self.settings.return_cards
	}

	/// Sets whether drawn playing cards go back into the deck.
	pub fn set_return_cards(&mut self, enabled: bool) {
		self.settings.return_cards = enabled;
	}

	/// Indicates whether drawn tarot cards go back into the deck.
	#[must_use]
	#[inline]
	pub const fn returns_tarot(&self) -> bool {
		self.settings.return_tarot
	}

	/// Sets whether drawn tarot cards go back into the deck.
	pub fn set_return_tarot(&mut self, enabled: bool) {
		self.settings.return_tarot = enabled;
	}

	/// Indicates whether tarot cards may come up reversed.
	#[must_use]
	#[inline]
	pub const fn allows_reversed(&self) -> bool {
		self.settings.allow_reversed
	}

	/// Sets whether tarot cards may come up reversed.
	pub fn set_allow_reversed(&mut self, enabled: bool) {
		self.settings.allow_reversed = enabled;
	}
}

/// Builds a [`Table`] with custom settings
#[derive(Debug, Clone, Default)]
pub struct Builder(Settings);

impl Builder {
	/// Creates a builder with the default settings: one card per draw for each deck, nothing returned to the decks,
	/// reversed tarot cards allowed and the external renderer not yet ready.
	#[must_use]
	#[inline]
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the number of playing cards drawn at a time (clamped to [`MIN_DRAW`]`..=`[`MAX_DRAW`])
	#[must_use]
	pub fn card_count(mut self, count: usize) -> Self {
		self.0.card_count = clamp_draw_count(count);
		self
	}

	/// Sets the number of tarot cards drawn at a time (clamped to [`MIN_DRAW`]`..=`[`MAX_DRAW`])
	#[must_use]
	pub fn tarot_count(mut self, count: usize) -> Self {
		self.0.tarot_count = clamp_draw_count(count);
		self
	}

	/// Sets whether drawn playing cards go back into the deck
	#[must_use]
	pub const fn return_cards(mut self, enabled: bool) -> Self {
		self.0.return_cards = enabled;
		self
	}

	/// Sets whether drawn tarot cards go back into the deck
	#[must_use]
	pub const fn return_tarot(mut self, enabled: bool) -> Self {
		self.0.return_tarot = enabled;
		self
	}

	/// Sets whether tarot cards may come up reversed
	#[must_use]
	pub const fn allow_reversed(mut self, enabled: bool) -> Self {
		self.0.allow_reversed = enabled;
		self
	}

	/// Sets whether the external renderer starts out ready
	#[must_use]
	pub const fn renderer_ready(mut self, ready: bool) -> Self {
		self.0.renderer_ready = ready;
		self
	}

	/// Finalizes the table, shuffling both decks with the given random source
	#[must_use]
	pub fn build<R: Random>(self, mut rng: R) -> Table<R> {
		let cards = playing::deck(&mut rng);
		let tarot = tarot::deck(&mut rng);
		Table {
			rng,
			cards,
			tarot,
			settings: self.0,
			last_notation: None,
		}
	}
}

/// How a roll should be shown
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Presentation {
	/// Hand the plan to the external dice renderer.
	Renderer(Plan),

	/// Draw the dice on the flat canvas.
	Canvas,
}

/// Result of rolling notation at a [`Table`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Roll {
	/// Evaluated expression
	pub outcome: Outcome<'static>,

	/// How the outcome should be shown
	pub presentation: Presentation,
}

impl Describe for Roll {
	/// Describes the outcome. See [`Outcome::describe()`](Describe::describe()).
	fn describe(&self, list_limit: Option<usize>) -> String {
		self.outcome.describe(list_limit)
	}
}

impl fmt::Display for Roll {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.outcome)
	}
}

/// Which of a table's decks something happened to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "A table only has the two decks")]
pub enum DeckKind {
	/// The 52-card playing card deck
	Cards,

	/// The 78-card tarot deck
	Tarot,
}

impl DeckKind {
	/// Gets the words used for the deck's cards in messages.
	#[must_use]
	pub const fn noun(self) -> &'static str {
		match self {
			Self::Cards => "cards",
			Self::Tarot => "tarot cards",
		}
	}
}

/// Cards drawn at a [`Table`], ready to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Report<T> {
	/// Deck the cards came from
	pub kind: DeckKind,

	/// Cards that were drawn along with the count that was asked for
	pub draw: Draw<T>,

	/// Whether the cards went back into the deck
	pub returned: bool,

	/// Cards left in the deck afterwards
	pub remaining: usize,
}

/// Playing cards drawn at a [`Table`]
pub type CardDraw = Report<Card>;

/// Tarot cards drawn at a [`Table`]
pub type TarotDraw = Report<Drawn>;

impl<T: fmt::Display> fmt::Display for Report<T> {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output is a status line such as `Drew 2: A of Spades, 3 of Hearts. 50 left.` or
	/// `Tarot 1: The Moon (Reversed). (only 1 available) Returned to deck. 78 left.`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let drawn = self.draw.cards.len();
		let names: Vec<String> = self.draw.cards.iter().map(ToString::to_string).collect();

		match self.kind {
			DeckKind::Cards => write!(f, "Drew {drawn}: ")?,
			DeckKind::Tarot => write!(f, "Tarot {drawn}: ")?,
		}
		write!(f, "{}.", names.join(", "))?;
		if self.draw.is_partial() {
			write!(f, " (only {drawn} available)")?;
		}
		if self.returned {
			f.write_str(" Returned to deck.")?;
		}
		write!(f, " {} left.", self.remaining)
	}
}

/// Result of resetting one of a [`Table`]'s decks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Reset {
	/// Deck that was reset
	pub kind: DeckKind,

	/// Cards in the fresh deck
	pub remaining: usize,
}

impl fmt::Display for Reset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.kind {
			DeckKind::Cards => write!(f, "Deck is fresh: {} cards remaining.", self.remaining),
			DeckKind::Tarot => write!(f, "Tarot deck is ready: {} cards.", self.remaining),
		}
	}
}

/// An error resulting from using a [`Table`]'s decks
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
	/// A draw was attempted on an empty deck.
	#[error("No {} left. Reset the deck.", .kind.noun())]
	Empty {
		/// Deck that was empty
		kind: DeckKind,

		/// Underlying deck error
		#[source]
		source: deck::Error,
	},
}
