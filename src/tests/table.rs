use std::error::Error as _;

use crate::{
	deck,
	parse,
	random::{FastRand, Max},
	table::{Builder, DeckKind, Error, Presentation, Table, MAX_DRAW, MIN_DRAW},
};

#[test]
fn defaults() {
	let table = Table::new(FastRand::default());
	assert_eq!(table.card_count(), MIN_DRAW);
	assert_eq!(table.tarot_count(), MIN_DRAW);
	assert!(!table.returns_cards());
	assert!(!table.returns_tarot());
	assert!(table.allows_reversed());
	assert!(!table.is_renderer_ready());
	assert_eq!(table.last_notation(), None);
	assert_eq!(table.cards_remaining(), 52);
	assert_eq!(table.tarot_remaining(), 78);
}

#[test]
fn roll_uses_canvas_until_renderer_ready() {
	let mut table = Table::new(Max);
	let roll = table.roll("2d6+3").unwrap();
	assert_eq!(roll.outcome.total(), 15);
	assert_eq!(roll.presentation, Presentation::Canvas);
	assert_eq!(roll.to_string(), "2d6+3 -> 2d6:[6,6] + 3 = 15");
	assert_eq!(table.last_notation(), Some("2d6+3"));
}

#[test]
fn renderer_ready_rerolls_last_notation() {
	let mut table = Table::new(Max);
	assert!(table.renderer_ready().is_none());
	assert!(table.is_renderer_ready());

	let mut table = Table::new(Max);
	let _ = table.roll("d20").unwrap();
	let roll = table.renderer_ready().unwrap().unwrap();
	assert_eq!(roll.outcome.total(), 20);
	match roll.presentation {
		Presentation::Renderer(plan) => {
			assert_eq!(plan.first, "1d20");
			assert!(plan.additions.is_empty());
		}
		Presentation::Canvas => panic!("expected the renderer to be used"),
	}
}

#[test]
fn renderer_ready_reports_bad_notation_again() {
	let mut table = Table::new(Max);
	assert!(table.roll("2d6+x").is_err());
	assert_eq!(table.last_notation(), Some("2d6+x"));
	assert!(matches!(
		table.renderer_ready(),
		Some(Err(parse::Error::Malformed { .. }))
	));
}

#[test]
fn subtracted_dice_stay_on_canvas() {
	let mut table = Builder::new().renderer_ready(true).build(Max);
	assert_eq!(table.roll("d20-d4").unwrap().presentation, Presentation::Canvas);
	assert!(matches!(
		table.roll("d20+d4").unwrap().presentation,
		Presentation::Renderer(..)
	));
}

#[test]
fn renderer_failure_falls_back_to_canvas() {
	let mut table = Builder::new().renderer_ready(true).build(Max);
	table.renderer_failed(&"no WebGL");
	assert!(!table.is_renderer_ready());
	assert_eq!(table.roll("d6").unwrap().presentation, Presentation::Canvas);
}

#[test]
fn counts_are_clamped() {
	let mut table = Builder::new().card_count(0).tarot_count(10).build(Max);
	assert_eq!(table.card_count(), MIN_DRAW);
	assert_eq!(table.tarot_count(), MAX_DRAW);

	assert_eq!(table.set_card_count(9), MAX_DRAW);
	assert_eq!(table.adjust_card_count(-2), 4);
	assert_eq!(table.adjust_card_count(-10), MIN_DRAW);
	assert_eq!(table.adjust_tarot_count(1), MAX_DRAW);
	assert_eq!(table.adjust_tarot_count(-1), 5);
	assert_eq!(table.set_tarot_count(0), MIN_DRAW);
}

#[test]
fn draw_cards_report() {
	let mut table = Builder::new().card_count(3).build(Max);
	let report = table.draw_cards().unwrap();
	assert_eq!(report.kind, DeckKind::Cards);
	assert_eq!(report.draw.cards.len(), 3);
	assert!(!report.returned);
	assert_eq!(report.remaining, 49);
	assert_eq!(report.to_string(), "Drew 3: K of Clubs, Q of Clubs, J of Clubs. 49 left.");
	assert_eq!(table.cards_remaining(), 49);
}

#[test]
fn draw_until_empty() {
	let mut table = Builder::new().card_count(MAX_DRAW).build(FastRand::default());
	for _ in 0..8 {
		assert_eq!(table.draw_cards().unwrap().draw.cards.len(), 6);
	}
	assert_eq!(table.cards_remaining(), 4);

	let report = table.draw_cards().unwrap();
	assert!(report.draw.is_partial());
	assert!(report.to_string().contains(". (only 4 available) 0 left."));

	let err = table.draw_cards().unwrap_err();
	assert_eq!(
		err,
		Error::Empty {
			kind: DeckKind::Cards,
			source: deck::Error::Empty
		}
	);
	assert_eq!(err.to_string(), "No cards left. Reset the deck.");
	assert!(err.source().is_some());

	assert_eq!(table.reset_cards().to_string(), "Deck is fresh: 52 cards remaining.");
	assert_eq!(table.cards_remaining(), 52);
}

#[test]
fn tarot_until_empty() {
	let mut table = Builder::new().tarot_count(MAX_DRAW).build(FastRand::default());
	for _ in 0..13 {
		assert!(table.draw_tarot().is_ok());
	}
	assert_eq!(table.tarot_remaining(), 0);
	assert_eq!(table.tarot_meter(), 0.0);
	assert_eq!(
		table.draw_tarot().unwrap_err().to_string(),
		"No tarot cards left. Reset the deck."
	);
	assert_eq!(table.reset_tarot().to_string(), "Tarot deck is ready: 78 cards.");
	assert_eq!(table.tarot_meter(), 100.0);
}

#[test]
fn returned_cards_go_back() {
	let mut table = Builder::new().card_count(2).return_cards(true).build(Max);
	let report = table.draw_cards().unwrap();
	assert!(report.returned);
	assert_eq!(report.remaining, 52);
	assert_eq!(report.to_string(), "Drew 2: K of Clubs, Q of Clubs. Returned to deck. 52 left.");
	assert_eq!(table.card_meter(), 100.0);

	table.set_return_cards(false);
	let _ = table.draw_cards().unwrap();
	assert_eq!(table.cards_remaining(), 50);
}

#[test]
fn reversed_tarot() {
	let mut table = Builder::new().tarot_count(2).build(Max);
	let report = table.draw_tarot().unwrap();
	assert_eq!(
		report.to_string(),
		"Tarot 2: King of Pentacles (Reversed), Queen of Pentacles (Reversed). 76 left."
	);

	table.set_allow_reversed(false);
	let report = table.draw_tarot().unwrap();
	assert_eq!(
		report.to_string(),
		"Tarot 2: Knight of Pentacles, Page of Pentacles. 74 left."
	);
}

#[test]
fn returned_tarot() {
	let mut table = Builder::new().return_tarot(true).build(FastRand::default());
	assert!(table.returns_tarot());
	for _ in 0..100 {
		let report = table.draw_tarot().unwrap();
		assert!(report.returned);
	}
	assert_eq!(table.tarot_remaining(), 78);
}

#[test]
fn meters() {
	let mut table = Builder::new().card_count(6).build(Max);
	let _ = table.draw_cards().unwrap();
	let _ = table.draw_cards().unwrap();
	let _ = table.set_card_count(1);
	let _ = table.draw_cards().unwrap();
	assert_eq!(table.cards_remaining(), 39);
	assert_eq!(table.card_meter(), 75.0);
}
