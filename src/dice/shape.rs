//! Classification of dice into the physical shapes used to draw them.

use core::fmt;

/// Physical die shape a roll is drawn as. Dice with unusual side counts use the nearest larger shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Shape {
	/// Tetrahedron
	D4,

	/// Cube
	D6,

	/// Octahedron
	D8,

	/// Pentagonal trapezohedron
	D10,

	/// Dodecahedron
	D12,

	/// Icosahedron
	D20,

	/// Percentile die, also used for anything above 20 sides
	D100,
}

impl Shape {
	/// Picks the shape for a die with the given number of sides.
	///
	/// # Examples
	/// ```
	/// use tabletop::dice::Shape;
	///
	/// assert_eq!(Shape::for_sides(3), Shape::D4);
	/// assert_eq!(Shape::for_sides(6), Shape::D6);
	/// assert_eq!(Shape::for_sides(13), Shape::D20);
	/// assert_eq!(Shape::for_sides(1000), Shape::D100);
	/// ```
	#[must_use]
	pub const fn for_sides(sides: u32) -> Self {
		match sides {
			0..=4 => Self::D4,
			5..=6 => Self::D6,
			7..=8 => Self::D8,
			9..=10 => Self::D10,
			11..=12 => Self::D12,
			13..=20 => Self::D20,
			_ => Self::D100,
		}
	}

	/// Gets the number of faces of the shape.
	#[must_use]
	pub const fn faces(self) -> u32 {
		match self {
			Self::D4 => 4,
			Self::D6 => 6,
			Self::D8 => 8,
			Self::D10 => 10,
			Self::D12 => 12,
			Self::D20 => 20,
			Self::D100 => 100,
		}
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "d{}", self.faces())
	}
}
