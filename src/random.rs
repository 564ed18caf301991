//! Sources of uniformly distributed integers for rolling dice, shuffling decks and orienting tarot cards.
//!
//! Everything in the crate that needs randomness takes a `&mut impl Random`, so a deterministic source can be swapped
//! in wherever reproducible results are needed.

use core::iter::Peekable;

#[cfg(feature = "fastrand")]
use fastrand::Rng;

/// Generates random integers - the single dependency of every die roll, shuffle and coin flip.
pub trait Random {
	/// Generates an integer uniformly distributed over `min..=max`.
	///
	/// Callers always pass `min <= max`.
	#[must_use]
	fn int(&mut self, min: u32, max: u32) -> u32;

	/// Picks an index uniformly distributed over `0..=max`.
	///
	/// The default implementation defers to [`Self::int()`], capping `max` at [`u32::MAX`].
	#[must_use]
	fn index(&mut self, max: usize) -> usize {
		let max = u32::try_from(max).unwrap_or(u32::MAX);
		usize::try_from(self.int(0, max)).unwrap_or(usize::MAX)
	}

	/// Flips a fair coin, returning `true` for heads.
	///
	/// The default implementation defers to [`Self::int()`] with a range of `0..=1`.
	#[must_use]
	fn coin(&mut self) -> bool {
		self.int(0, 1) == 1
	}
}

impl<R: Random + ?Sized> Random for &mut R {
	#[inline]
	fn int(&mut self, min: u32, max: u32) -> u32 {
		(**self).int(min, max)
	}

	#[inline]
	fn index(&mut self, max: usize) -> usize {
		(**self).index(max)
	}

	#[inline]
	fn coin(&mut self) -> bool {
		(**self).coin()
	}
}

/// Generates random values using [fastrand]. Requires the `fastrand` feature (enabled by default).
///
/// # Examples
///
/// ## Default fastrand source
/// ```
/// use tabletop::random::{FastRand, Random};
///
/// let mut rng = FastRand::default();
/// let val = rng.int(1, 20);
/// assert!((1..=20).contains(&val));
/// ```
///
/// ## Manually seeded fastrand source
/// ```
/// use tabletop::random::{FastRand, Random};
///
/// let mut a = FastRand::with_seed(0x750c38d574400);
/// let mut b = FastRand::with_seed(0x750c38d574400);
/// assert_eq!(a.int(1, 1000), b.int(1, 1000));
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(Default))]
pub struct FastRand(Rng);

#[cfg(feature = "fastrand")]
impl FastRand {
	/// Creates a new fastrand source that uses the given RNG instance.
	#[must_use]
	#[inline]
	pub const fn new(rng: Rng) -> Self {
		Self(rng)
	}

	/// Creates a new fastrand source that uses a pre-seeded RNG instance.
	#[must_use]
	#[inline]
	pub fn with_seed(seed: u64) -> Self {
		Self(Rng::with_seed(seed))
	}
}

#[cfg(feature = "fastrand")]
impl Random for FastRand {
	#[inline]
	fn int(&mut self, min: u32, max: u32) -> u32 {
		if min < max {
			self.0.u32(min..=max)
		} else {
			min
		}
	}

	#[inline]
	fn index(&mut self, max: usize) -> usize {
		self.0.usize(..=max)
	}

	#[inline]
	fn coin(&mut self) -> bool {
		self.0.bool()
	}
}

/// Always generates the maximum of the requested range.
///
/// Dice roll their highest face, shuffles leave the deck in its original order and coin flips always land heads.
///
/// # Examples
/// ```
/// use tabletop::random::{Max, Random};
///
/// let mut rng = Max;
/// assert_eq!(rng.int(1, 6), 6);
/// assert_eq!(rng.index(51), 51);
/// assert!(rng.coin());
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Max;

impl Random for Max {
	#[inline]
	fn int(&mut self, _min: u32, max: u32) -> u32 {
		max
	}
}

/// Generates values from an iterator, ignoring the requested range. Mainly useful for testing purposes.
///
/// # Examples
/// ```
/// use tabletop::{random::Iter, Expr};
///
/// let expr: Expr = "2d6+3".parse()?;
/// let outcome = expr.eval(&mut Iter::new([4, 2]));
/// assert_eq!(outcome.total(), 9);
/// # Ok::<(), tabletop::parse::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = u32>>(Peekable<I>);

impl<I: Iterator<Item = u32>> Iter<I> {
	/// Checks whether the iterator still has values available.
	#[inline]
	pub fn has_next(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new source that uses the given iterator to provide values.
	#[must_use]
	#[inline]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

impl<I: Iterator<Item = u32>> Random for Iter<I> {
	/// Produces the next value from the iterator.
	///
	/// # Panics
	/// If the iterator has finished, this will panic.
	#[inline]
	#[expect(
		clippy::expect_used,
		reason = "Mostly for testing, otherwise manual checking of has_next() is expected"
	)]
	fn int(&mut self, _min: u32, _max: u32) -> u32 {
		self.0.next().expect("iterator is finished")
	}
}
