//! The hand-off between evaluated notation and an external dice renderer.
//!
//! Renderers (such as a 3D physics scene) only ever see plain notation strings through the [`Renderer`] trait; nothing
//! else about them leaks into the crate.

use alloc::{format, string::String, vec::Vec};
use core::fmt;

use tracing::debug;

use crate::expr::Expr;

/// Notation strings describing how to show an expression with an external renderer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Plan {
	/// Notation to roll first: the first dice term with all flat modifiers folded into a trailing signed integer
	pub first: String,

	/// Plain notation for each remaining dice term, to be added after the first roll
	pub additions: Vec<String>,
}

impl Plan {
	/// Builds the plan for an expression.
	///
	/// There is no plan for expressions without dice terms or with any negative dice terms, since those can't be shown
	/// as a single pile of dice.
	///
	/// # Examples
	/// ```
	/// use tabletop::Expr;
	///
	/// let expr: Expr = "2d6+d8+3".parse()?;
	/// let plan = expr.plan().expect("all dice terms are positive");
	/// assert_eq!(plan.first, "2d6+3");
	/// assert_eq!(plan.additions, ["1d8"]);
	///
	/// let expr: Expr = "d20-d4".parse()?;
	/// assert_eq!(expr.plan(), None);
	/// # Ok::<(), tabletop::parse::Error>(())
	/// ```
	#[must_use]
	pub fn new(expr: &Expr) -> Option<Self> {
		if expr.dice().any(|(sign, _)| sign.is_negative()) {
			return None;
		}

		let mut dice = expr.dice().map(|(_, dice)| dice);
		let first = dice.next()?;
		let modifier = expr.modifier();
		let first = if modifier == 0 {
			format!("{first}")
		} else {
			format!("{first}{modifier:+}")
		};

		Some(Self {
			first,
			additions: dice.map(|dice| format!("{dice}")).collect(),
		})
	}

	/// Drives a renderer through the plan: clear it, roll the first notation, then add each addition in order.
	///
	/// # Errors
	/// The first error the renderer reports is returned as-is, and no further commands are sent.
	///
	/// # Examples
	/// ```
	/// use tabletop::{render::Renderer, Expr};
	///
	/// #[derive(Default)]
	/// struct Log(Vec<String>);
	///
	/// impl Renderer for Log {
	/// 	type Error = core::convert::Infallible;
	///
	/// 	fn clear(&mut self) -> Result<(), Self::Error> {
	/// 		self.0.push("clear".to_owned());
	/// 		Ok(())
	/// 	}
	///
	/// 	fn roll(&mut self, notation: &str) -> Result<(), Self::Error> {
	/// 		self.0.push(format!("roll {notation}"));
	/// 		Ok(())
	/// 	}
	///
	/// 	fn add(&mut self, notation: &str) -> Result<(), Self::Error> {
	/// 		self.0.push(format!("add {notation}"));
	/// 		Ok(())
	/// 	}
	/// }
	///
	/// let expr: Expr = "d20+2d4-1+d6".parse()?;
	/// let mut log = Log::default();
	/// expr.plan().expect("positive dice").send(&mut log).unwrap();
	/// assert_eq!(log.0, ["clear", "roll 1d20-1", "add 2d4", "add 1d6"]);
	/// # Ok::<(), tabletop::parse::Error>(())
	/// ```
	pub fn send<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), R::Error> {
		debug!(first = %self.first, additions = ?self.additions, "sending plan to dice renderer");

		renderer.clear()?;
		renderer.roll(&self.first)?;
		for addition in &self.additions {
			renderer.add(addition)?;
		}

		Ok(())
	}
}

impl fmt::Display for Plan {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The first notation is followed by each addition, separated by ` & `.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.first)?;
		for addition in &self.additions {
			write!(f, " & {addition}")?;
		}
		Ok(())
	}
}

/// An external dice renderer that understands plain `NdS` notation strings
pub trait Renderer {
	/// Error the renderer can fail with
	type Error;

	/// Removes every die currently shown.
	///
	/// # Errors
	/// Implementation-defined.
	fn clear(&mut self) -> Result<(), Self::Error>;

	/// Rolls a fresh set of dice for the notation.
	///
	/// # Errors
	/// Implementation-defined.
	fn roll(&mut self, notation: &str) -> Result<(), Self::Error>;

	/// Adds dice for the notation alongside the ones already shown.
	///
	/// # Errors
	/// Implementation-defined.
	fn add(&mut self, notation: &str) -> Result<(), Self::Error>;
}
