use std::collections::HashSet;

use crate::{
	deck::{
		playing::{self, Card},
		shuffle,
		tarot::{self, Drawn, TarotCard},
		Deck, Error,
	},
	random::{FastRand, Iter, Max},
};

#[test]
fn shuffle_keeps_every_item() {
	let mut items: Vec<u32> = (0..100).collect();
	shuffle(&mut items, &mut FastRand::with_seed(42));
	assert_ne!(items, (0..100).collect::<Vec<_>>());

	items.sort_unstable();
	assert_eq!(items, (0..100).collect::<Vec<_>>());
}

#[test]
fn shuffle_swaps_from_the_back() {
	// idx 2 swaps with 0, then idx 1 swaps with 0
	let mut items = ['a', 'b', 'c'];
	shuffle(&mut items, &mut Iter::new([0, 0]));
	assert_eq!(items, ['b', 'c', 'a']);

	let mut single = [1];
	shuffle(&mut single, &mut Iter::new([]));
	assert_eq!(single, [1]);
}

#[test]
fn shuffle_clamps_out_of_range_picks() {
	let mut items = [1, 2, 3];
	shuffle(&mut items, &mut Iter::new([9, 9]));
	assert_eq!(items, [1, 2, 3]);
}

#[test]
fn build_leaves_population_alone() {
	let population = playing::population();
	let deck = Deck::build(&population, &mut FastRand::with_seed(3));
	assert_eq!(population, playing::population());
	assert_eq!(deck.remaining(), 52);

	let mut sorted = deck.cards().to_vec();
	sorted.sort_unstable();
	assert_eq!(sorted, population);
}

#[test]
fn draw_three() {
	let mut deck = playing::deck(&mut FastRand::default());
	let draw = deck.draw(3).unwrap();
	assert_eq!(draw.cards.len(), 3);
	assert_eq!(draw.requested, 3);
	assert!(!draw.is_partial());
	assert_eq!(deck.remaining(), 49);
	assert!(draw.cards.iter().all(|card| !deck.cards().contains(card)));
}

#[test]
fn draw_takes_from_the_top() {
	let mut deck = Deck::build(&[1, 2, 3, 4], &mut Max);
	assert_eq!(deck.draw(2).unwrap().cards, [4, 3]);
	assert_eq!(deck.cards(), [1, 2]);
}

#[test]
fn short_draw() {
	let mut deck = Deck::build(&['x', 'y'], &mut Max);
	let draw = deck.draw(5).unwrap();
	assert_eq!(draw.cards, ['y', 'x']);
	assert_eq!(draw.shortfall(), 3);
	assert!(draw.is_partial());
	assert!(deck.is_empty());
}

#[test]
fn empty_draw() {
	let mut deck = Deck::build(&[(); 0], &mut Max);
	assert_eq!(deck.draw(1), Err(Error::Empty));

	let mut deck = Deck::build(&[1], &mut Max);
	assert!(deck.draw(1).is_ok());
	assert_eq!(deck.draw(1), Err(Error::Empty));
}

#[test]
fn returning_restores_the_deck() {
	let mut rng = FastRand::with_seed(11);
	let mut deck = playing::deck(&mut rng);
	let draw = deck.draw(6).unwrap();
	deck.return_and_reshuffle(draw.cards, &mut rng);
	assert_eq!(deck.remaining(), 52);

	let mut cards = deck.cards().to_vec();
	cards.sort_unstable();
	assert_eq!(cards, playing::population());
}

#[test]
fn reset_refills() {
	let mut rng = FastRand::default();
	let mut deck = tarot::deck(&mut rng);
	let _ = deck.draw(6).unwrap();
	let _ = deck.draw(6).unwrap();
	assert_eq!(deck.remaining(), 66);

	deck.reset(&tarot::population(), &mut rng);
	assert_eq!(deck.remaining(), tarot::SIZE);
}

#[test]
fn meter() {
	let mut deck = playing::deck(&mut Max);
	assert_eq!(deck.meter(playing::SIZE), 100.0);
	let _ = deck.draw(13).unwrap();
	assert_eq!(deck.meter(playing::SIZE), 75.0);
	assert_eq!(deck.meter(10), 100.0);
	assert_eq!(deck.meter(0), 0.0);
}

#[test]
fn draw_map_keeps_request() {
	let mut deck = Deck::build(&[1, 2], &mut Max);
	let draw = deck.draw(4).unwrap().map(|n| n * 10);
	assert_eq!(draw.cards, [20, 10]);
	assert_eq!(draw.shortfall(), 2);
}

#[test]
fn playing_population() {
	let cards = playing::population();
	assert_eq!(cards.len(), playing::SIZE);
	assert_eq!(cards.iter().collect::<HashSet<_>>().len(), 52);
	assert_eq!(cards[0].to_string(), "A of Spades");
	assert_eq!(cards[9].to_string(), "10 of Spades");
	assert_eq!(cards[13].to_string(), "A of Hearts");
	assert_eq!(cards[51].to_string(), "K of Clubs");
}

#[test]
fn playing_images() {
	let cards = playing::population();
	assert_eq!(cards[9].image(), "resources/cards/0S.png");
	assert_eq!(cards[37].image(), "resources/cards/QD.png");
	assert_eq!(playing::BACK_IMAGE, "resources/cards/back.png");
	assert_eq!(cards.iter().map(Card::image).collect::<HashSet<_>>().len(), 52);
}

#[test]
fn tarot_population() {
	let cards = tarot::population();
	assert_eq!(cards.len(), tarot::SIZE);
	assert_eq!(cards.iter().map(TarotCard::name).collect::<HashSet<_>>().len(), 78);
	assert_eq!(cards.iter().filter(|card| card.is_major()).count(), 22);
	assert!(cards[..22].iter().all(TarotCard::is_major));

	assert_eq!(cards[0].name(), "The Fool");
	assert_eq!(cards[21].name(), "The World");
	assert_eq!(cards[22].name(), "Ace of Wands");
	assert_eq!(cards[36].name(), "Ace of Cups");
	assert_eq!(cards[77].name(), "King of Pentacles");
}

#[test]
fn tarot_images() {
	let cards = tarot::population();
	assert_eq!(cards[21].image(), "resources/tarot/major-21.jpg");
	assert_eq!(cards[22].image(), "resources/tarot/wands-01.jpg");
	assert_eq!(cards[77].image(), "resources/tarot/pentacles-14.jpg");
	assert_eq!(tarot::BACK_IMAGE, "resources/tarot/back.jpg");
	assert_eq!(TarotCard::major(tarot::MAJOR_ARCANA.len()), None);
}

#[test]
fn orientation() {
	let cards = tarot::population()[..3].to_vec();

	let drawn = tarot::orient(cards.clone(), true, &mut Iter::new([1, 0, 1]));
	let reversed: Vec<_> = drawn.iter().map(|drawn| drawn.reversed).collect();
	assert_eq!(reversed, [true, false, true]);
	assert_eq!(drawn[0].to_string(), "The Fool (Reversed)");
	assert_eq!(drawn[1].to_string(), "The Magician");

	// Upright-only draws don't flip any coins
	let mut rng = Iter::new([]);
	let drawn = tarot::orient(cards, false, &mut rng);
	assert!(drawn.iter().all(|drawn| !drawn.reversed));
	assert!(!rng.has_next());
}

#[test]
fn tarot_draw_never_reversed_when_disallowed() {
	let mut rng = FastRand::default();
	let mut deck = tarot::deck(&mut rng);
	while let Ok(draw) = tarot::draw(&mut deck, 6, false, &mut rng) {
		assert!(draw.cards.iter().all(|drawn| !drawn.reversed));
	}
	assert!(deck.is_empty());
}

#[test]
fn returned_tarot_cards_lose_orientation() {
	let mut deck = tarot::deck(&mut Max);
	let draw = tarot::draw(&mut deck, 2, true, &mut Max).unwrap();
	assert!(draw.cards.iter().all(|drawn| drawn.reversed));

	deck.return_and_reshuffle(draw.cards.iter().map(|drawn| drawn.card), &mut Max);
	assert_eq!(deck.remaining(), 78);
	assert_eq!(
		Drawn::new(deck.cards()[77], false).to_string(),
		"Queen of Pentacles"
	);
}
