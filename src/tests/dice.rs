use crate::{
	dice::{Dice, DieRoll, Shape, Sign, MAX_COUNT, MAX_MODIFIER, MAX_SIDES, MAX_TOTAL_DICE, MIN_SIDES, PRESETS},
	random::{FastRand, Iter, Max},
};

#[test]
fn single_d20() {
	let rolls = rolls_in_range(Dice::new(1, 20), Sign::Pos);
	assert_eq!(rolls.len(), 1);
}

#[test]
fn hundred_d1000s() {
	let rolls = rolls_in_range(Dice::new(MAX_COUNT, MAX_SIDES), Sign::Pos);
	assert_eq!(rolls.len(), 100);
}

#[test]
fn all_dice_sides_occur() {
	let dice = Dice::new(100, 20);
	let mut rng = FastRand::default();
	let mut rolls = Vec::new();

	for _ in 1..=100 {
		rolls.append(&mut dice.roll(&mut rng, Sign::Pos));
	}

	assert!(!rolls.iter().any(|roll| roll.val < 1 || roll.val > 20));
	for side in 1..=20 {
		assert!(rolls.iter().any(|roll| roll.val == side));
	}
}

#[test]
fn negative_rolls_carry_their_sign() {
	let rolls = Dice::new(2, 6).roll(&mut Iter::new([3, 5]), Sign::Neg);
	assert_eq!(rolls, [DieRoll::new(6, 3, Sign::Neg), DieRoll::new(6, 5, Sign::Neg)]);
	assert_eq!(rolls.iter().map(DieRoll::signed).sum::<i64>(), -8);
	assert_eq!(rolls[0].to_string(), "-3");
}

#[test]
fn max_rolls_highest_face() {
	let rolls = Dice::new(3, 8).roll(&mut Max, Sign::Pos);
	assert!(rolls.iter().all(|roll| roll.val == 8));
}

#[test]
fn validity_limits() {
	assert!(Dice::new(1, MIN_SIDES).is_valid());
	assert!(Dice::new(MAX_COUNT, MAX_SIDES).is_valid());
	assert!(!Dice::new(0, 6).is_valid());
	assert!(!Dice::new(MAX_COUNT + 1, 6).is_valid());
	assert!(!Dice::new(1, MIN_SIDES - 1).is_valid());
	assert!(!Dice::new(1, MAX_SIDES + 1).is_valid());
}

#[test]
fn defaults_and_presets() {
	assert_eq!(Dice::default(), Dice::new(1, 20));
	assert_eq!(Dice::preset(100).to_string(), "1d100");
	assert!(PRESETS.iter().all(|&sides| Dice::preset(sides).is_valid()));
}

#[test]
fn dice_inequality() {
	assert_ne!(Dice::new(4, 8), Dice::new(4, 20));
	assert_ne!(Dice::new(4, 8), Dice::new(2, 8));
}

#[test]
fn signs() {
	assert_eq!(Sign::from_char('+'), Some(Sign::Pos));
	assert_eq!(Sign::from_char('-'), Some(Sign::Neg));
	assert_eq!(Sign::from_char('d'), None);
	assert_eq!(Sign::default(), Sign::Pos);
	assert_eq!(Sign::Neg.apply(7), -7);
	assert_eq!(Sign::Pos.apply(u64::MAX), i64::MAX);
	assert_eq!(Sign::Neg.apply(u64::MAX), -i64::MAX);
}

#[test]
fn modifier_limit_leaves_room_for_dice() {
	let most_dice = i64::from(MAX_TOTAL_DICE) * i64::from(MAX_SIDES);
	assert_eq!(i64::try_from(MAX_MODIFIER).unwrap().checked_add(most_dice), Some(i64::MAX));
}

#[test]
fn shapes() {
	let expected = [
		(2, Shape::D4),
		(4, Shape::D4),
		(5, Shape::D6),
		(6, Shape::D6),
		(8, Shape::D8),
		(9, Shape::D10),
		(12, Shape::D12),
		(20, Shape::D20),
		(21, Shape::D100),
		(100, Shape::D100),
	];
	for (sides, shape) in expected {
		assert_eq!(Shape::for_sides(sides), shape, "{sides} sides");
	}

	assert_eq!(DieRoll::new(10, 3, Sign::Pos).shape().to_string(), "d10");
}

fn rolls_in_range(dice: Dice, sign: Sign) -> Vec<DieRoll> {
	let rolls = dice.roll(&mut FastRand::default(), sign);
	assert!(!rolls.iter().any(|roll| roll.val < 1 || roll.val > dice.sides));
	assert!(rolls.iter().all(|roll| roll.sides == dice.sides && roll.sign == sign));
	rolls
}
