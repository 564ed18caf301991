//! Shuffled decks of cards that are drawn from like a stack, plus the canonical playing card and tarot populations.
//!
//! A [`Deck`] exclusively owns its cards. Drawing hands out owned copies; callers never get at the live deck.

pub mod playing;
pub mod tarot;

use alloc::vec::Vec;

use tracing::debug;

use crate::random::Random;

/// Shuffles items in place with the Fisher-Yates algorithm: for each index from the last down to 1, swap it with an
/// index picked uniformly from itself and everything before it. Every permutation is equally likely.
///
/// # Examples
/// ```
/// use tabletop::{deck::shuffle, random::{FastRand, Max}};
///
/// let mut items = [1, 2, 3, 4, 5];
/// shuffle(&mut items, &mut FastRand::with_seed(7));
/// let mut sorted = items;
/// sorted.sort_unstable();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
///
/// // Always picking the current index leaves everything in place
/// shuffle(&mut sorted, &mut Max);
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Random + ?Sized>(items: &mut [T], rng: &mut R) {
	for idx in (1..items.len()).rev() {
		let other = rng.index(idx).min(idx);
		items.swap(idx, other);
	}
}

/// Ordered cards acting as a stack: the end of the sequence is the top of the deck
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck<T> {
	/// Cards from bottom to top
	cards: Vec<T>,
}

impl<T: Clone> Deck<T> {
	/// Builds a deck from a shuffled copy of a population. The population itself is left untouched.
	///
	/// # Examples
	/// ```
	/// use tabletop::{deck::{playing, Deck}, random::FastRand};
	///
	/// let population = playing::population();
	/// let deck = Deck::build(&population, &mut FastRand::with_seed(1));
	/// assert_eq!(deck.remaining(), 52);
	/// assert_eq!(population, playing::population());
	/// ```
	#[must_use]
	pub fn build<R: Random + ?Sized>(population: &[T], rng: &mut R) -> Self {
		let mut cards = population.to_vec();
		shuffle(&mut cards, rng);
		Self { cards }
	}

	/// Replaces the deck's contents with a freshly shuffled copy of a full population, discarding its prior state.
	pub fn reset<R: Random + ?Sized>(&mut self, population: &[T], rng: &mut R) {
		*self = Self::build(population, rng);
		debug!(remaining = self.remaining(), "reset deck");
	}
}

impl<T> Deck<T> {
	/// Draws up to `count` cards off the top of the deck, the topmost card first.
	///
	/// Drawing more cards than remain isn't an error: every remaining card is drawn, and [`Draw::shortfall()`] reports
	/// how many were missing.
	///
	/// # Errors
	/// If the deck is already empty, [`Error::Empty`] is returned instead of an empty draw.
	///
	/// # Examples
	/// ```
	/// use tabletop::{deck::{Deck, Error}, random::Max};
	///
	/// let mut deck = Deck::build(&[1, 2, 3], &mut Max);
	/// let draw = deck.draw(2)?;
	/// assert_eq!(draw.cards, [3, 2]);
	/// assert_eq!(draw.shortfall(), 0);
	///
	/// let draw = deck.draw(5)?;
	/// assert_eq!(draw.cards, [1]);
	/// assert_eq!(draw.shortfall(), 4);
	///
	/// assert_eq!(deck.draw(1), Err(Error::Empty));
	/// # Ok::<(), tabletop::deck::Error>(())
	/// ```
	pub fn draw(&mut self, count: usize) -> Result<Draw<T>, Error> {
		if self.cards.is_empty() {
			return Err(Error::Empty);
		}

		let split = self.cards.len().saturating_sub(count);
		let cards: Vec<T> = self.cards.drain(split..).rev().collect();

		debug!(requested = count, drawn = cards.len(), remaining = self.cards.len(), "drew from deck");
		Ok(Draw {
			cards,
			requested: count,
		})
	}

	/// Puts cards back into the deck, then reshuffles the whole deck.
	pub fn return_and_reshuffle<R: Random + ?Sized>(&mut self, cards: impl IntoIterator<Item = T>, rng: &mut R) {
		self.cards.extend(cards);
		shuffle(&mut self.cards, rng);
		debug!(remaining = self.remaining(), "returned cards and reshuffled deck");
	}

	/// Counts the cards left in the deck.
	#[must_use]
	#[inline]
	pub fn remaining(&self) -> usize {
		self.cards.len()
	}

	/// Indicates whether every card has been drawn.
	#[must_use]
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.cards.is_empty()
	}

	/// Calculates how full the deck is compared to a canonical size, as a percentage clamped to `0.0..=100.0`.
	///
	/// # Examples
	/// ```
	/// use tabletop::{deck::Deck, random::Max};
	///
	/// let mut deck = Deck::build(&[(); 4], &mut Max);
	/// assert_eq!(deck.meter(4), 100.0);
	/// let _ = deck.draw(1)?;
	/// assert_eq!(deck.meter(4), 75.0);
	/// # Ok::<(), tabletop::deck::Error>(())
	/// ```
	#[must_use]
	#[expect(
		clippy::cast_precision_loss,
		reason = "Deck sizes are nowhere near the point where f64 loses integer precision"
	)]
	pub fn meter(&self, canonical: usize) -> f64 {
		if canonical == 0 {
			return 0.0;
		}
		(self.remaining() as f64 / canonical as f64 * 100.0).clamp(0.0, 100.0)
	}

	/// Looks at the cards in the deck, from the bottom to the top.
	#[must_use]
	#[inline]
	pub fn cards(&self) -> &[T] {
		&self.cards
	}
}

/// Cards drawn from a [`Deck`], along with how many were asked for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Draw<T> {
	/// Cards drawn, in the order they came off the deck
	pub cards: Vec<T>,

	/// Number of cards that were asked for
	pub requested: usize,
}

impl<T> Draw<T> {
	/// Counts how many fewer cards were drawn than requested.
	#[must_use]
	#[inline]
	pub fn shortfall(&self) -> usize {
		self.requested.saturating_sub(self.cards.len())
	}

	/// Indicates whether fewer cards were drawn than requested.
	#[must_use]
	#[inline]
	pub fn is_partial(&self) -> bool {
		self.shortfall() > 0
	}

	/// Transforms every drawn card, keeping the requested count.
	#[must_use]
	pub fn map<U>(self, f: impl FnMut(T) -> U) -> Draw<U> {
		Draw {
			cards: self.cards.into_iter().map(f).collect(),
			requested: self.requested,
		}
	}
}

/// An error resulting from a deck operation
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
	/// A draw was attempted with no cards left in the deck.
	#[error("the deck is empty")]
	Empty,
}
