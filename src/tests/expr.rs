use crate::{
	dice::{DieRoll, Sign},
	expr::{Describe, Expr, Outcome, Term},
	random::{FastRand, Iter},
};

#[test]
fn total_is_sum_of_dice_and_modifiers() {
	let outcome = roll("2d6+3", [4, 2]);
	assert_eq!(outcome.dice_total, 6);
	assert_eq!(outcome.modifier_total, 3);
	assert_eq!(outcome.total(), 9);
}

#[test]
fn largest_totals_are_exact() {
	let outcome = roll("100d1000+100d1000+9223372036854575807", [1000; 200]);
	assert_eq!(outcome.dice_total, 200_000);
	assert_eq!(outcome.total(), i64::MAX);

	let outcome = roll("-100d1000-100d1000-9223372036854575807", [1000; 200]);
	assert_eq!(outcome.total(), -i64::MAX);
}

#[test]
fn subtracted_dice() {
	let outcome = roll("d20-2d4", [15, 3, 4]);
	assert_eq!(
		outcome.rolls,
		[
			DieRoll::new(20, 15, Sign::Pos),
			DieRoll::new(4, 3, Sign::Neg),
			DieRoll::new(4, 4, Sign::Neg)
		]
	);
	assert_eq!(outcome.dice_total, 8);
	assert_eq!(outcome.total(), 8);
}

#[test]
fn rolls_follow_term_order() {
	let outcome = roll("3+d4+2d6-1", [1, 2, 3]);
	let sides: Vec<_> = outcome.rolls.iter().map(|roll| roll.sides).collect();
	assert_eq!(sides, [4, 6, 6]);
	assert_eq!(outcome.modifier_total, 2);
	assert_eq!(outcome.total(), 8);
}

#[test]
fn rolls_stay_in_range() {
	let ex = expr("100d20+100d4");
	let mut rng = FastRand::default();
	for _ in 0..20 {
		let outcome = ex.eval(&mut rng);
		assert_eq!(outcome.rolls.len(), 200);
		assert!(outcome.rolls.iter().all(|roll| roll.val >= 1 && roll.val <= roll.sides));
		assert_eq!(
			outcome.dice_total,
			outcome.rolls.iter().map(DieRoll::signed).sum::<i64>()
		);
	}
}

#[test]
fn descriptions() {
	let outcome = roll("2d6+d8+3", [4, 2, 7]);
	assert_eq!(outcome.describe(None), "2d6+d8+3 -> 2d6:[4,2] + 1d8:[7] + 3 = 16");
	assert_eq!(outcome.to_string(), outcome.describe(None));

	let outcome = roll("-d4", [2]);
	assert_eq!(outcome.describe(None), "-d4 -> -1d4:[2] = -2");

	let outcome = roll("-3+d6", [6]);
	assert_eq!(outcome.describe(None), "-3+d6 -> -3 + 1d6:[6] = 3");
}

#[test]
fn truncated_description() {
	let outcome = roll("5d6-1", [1, 2, 3, 4, 5]);
	assert_eq!(outcome.describe(Some(3)), "5d6-1 -> 5d6:[1,2,3, 2 more...] - 1 = 14");
	assert_eq!(outcome.describe(Some(5)), outcome.describe(None));
}

#[test]
fn chips() {
	let outcome = roll("30d6", 1..=30);
	let chips = outcome.chips(24);
	assert_eq!(chips.len(), 25);
	assert_eq!(chips[0], "#1 d6: 1");
	assert_eq!(chips[23], "#24 d6: 24");
	assert_eq!(chips[24], "+6 more");

	let outcome = roll("d20-d4", [11, 3]);
	assert_eq!(outcome.chips(24), ["#1 d20: 11", "#2 d4: -3"]);
}

#[test]
fn owned_outcome_matches() {
	let ex = expr("4d6+2");
	let outcome = ex.eval(&mut Iter::new([3, 3, 3, 3]));
	let owned = outcome.clone().into_owned();
	assert_eq!(owned, outcome);
	assert_eq!(owned.normalized(), "4d6+2");
	assert_eq!(owned.total(), 14);
}

#[test]
fn modifiers_and_counts() {
	let ex = expr("d6+5-2-1+3d8");
	assert_eq!(ex.modifier(), 2);
	assert_eq!(ex.dice_count(), 4);
	assert_eq!(ex.dice().count(), 2);
}

#[test]
fn term_display() {
	let ex = expr("2d6-3");
	let terms: Vec<_> = ex.terms().iter().map(Term::to_string).collect();
	assert_eq!(terms, ["+2d6", "-3"]);
}

fn expr(notation: &str) -> Expr {
	notation.parse().unwrap()
}

fn roll(notation: &str, vals: impl IntoIterator<Item = u32>) -> Outcome<'static> {
	expr(notation).eval(&mut Iter::new(vals)).into_owned()
}
