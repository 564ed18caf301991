use std::{
	env,
	io::{self, BufRead, Write},
	process::ExitCode,
};

use ariadne::{Color, Label, Report, ReportKind, Source};
use tabletop::{
	dice::PRESETS,
	expr::Describe,
	parse,
	random::FastRand,
	table::{DeckKind, Presentation, Table},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Most individual dice listed beneath a roll
const CHIP_LIMIT: usize = 24;

/// Name the notation is shown under in diagnostics
const SOURCE_NAME: &str = "notation";

fn main() -> ExitCode {
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "tabletop=warn".into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
		.init();

	let mut table = Table::new(FastRand::default());

	let args = env::args();
	if args.len() > 1 {
		// Notation split across several arguments is rolled as one.
		let notation = args.skip(1).collect::<Vec<String>>().join(" ");
		return if roll(&mut table, &notation) {
			ExitCode::SUCCESS
		} else {
			ExitCode::FAILURE
		};
	}

	match repl(&mut table) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("I/O error: {err}");
			ExitCode::FAILURE
		}
	}
}

/// Reads commands from stdin until it runs out or `quit` is entered.
fn repl(table: &mut Table<FastRand>) -> io::Result<()> {
	println!("{}", table.reset_cards());
	println!("{}", table.reset_tarot());
	println!("Type dice notation (like 2d6+d8+3), a command, or \"help\".");

	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();
	loop {
		print!("> ");
		io::stdout().flush()?;

		let Some(line) = lines.next().transpose()? else {
			println!();
			return Ok(());
		};

		match Command::parse(&line) {
			Ok(Command::Quit) => return Ok(()),
			Ok(cmd) => run(table, cmd),
			Err(msg) => eprintln!("{msg}"),
		}
	}
}

/// A single line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
	/// Roll some notation
	Roll(&'a str),

	/// Draw from a deck, optionally setting the count first
	Draw(DeckKind, Option<usize>),

	/// Replace a deck with a fresh one
	Reset(DeckKind),

	/// Toggle returning drawn cards to a deck
	Return(DeckKind, bool),

	/// Toggle reversed tarot cards
	Reversed(bool),

	/// Show the commands
	Help,

	/// Leave
	Quit,
}

impl<'a> Command<'a> {
	/// Interprets a line of input. Anything that isn't a known command is treated as notation.
	fn parse(line: &'a str) -> Result<Self, String> {
		let line = line.trim();
		let mut words = line.split_whitespace();
		let Some(first) = words.next() else {
			return Ok(Self::Roll(line));
		};
		let rest: Vec<&str> = words.collect();
		let name = first.to_lowercase();

		match (name.as_str(), rest.as_slice()) {
			("quit" | "exit", []) => Ok(Self::Quit),
			("help" | "?", []) => Ok(Self::Help),
			("roll", _) => Ok(Self::Roll(line.get(first.len()..).unwrap_or_default())),
			("draw" | "cards", args) => Ok(Self::Draw(DeckKind::Cards, count(args)?)),
			("tarot", args) => Ok(Self::Draw(DeckKind::Tarot, count(args)?)),
			("reset", [deck]) => Ok(Self::Reset(deck_kind(deck)?)),
			("return", [deck, toggle]) => Ok(Self::Return(deck_kind(deck)?, on_off(toggle)?)),
			("reversed", [toggle]) => Ok(Self::Reversed(on_off(toggle)?)),
			("reset" | "return" | "reversed", _) => Err(format!("Usage: {}", usage(&name))),
			_ => Ok(Self::Roll(line)),
		}
	}
}

/// Parses the optional count given to a draw command.
fn count(args: &[&str]) -> Result<Option<usize>, String> {
	match args {
		[] => Ok(None),
		[n] => n.parse().map(Some).map_err(|_| format!("\"{n}\" isn't a card count.")),
		_ => Err("Give at most one card count.".to_owned()),
	}
}

/// Parses the name of a deck.
fn deck_kind(word: &str) -> Result<DeckKind, String> {
	match word.to_lowercase().as_str() {
		"cards" | "card" | "deck" => Ok(DeckKind::Cards),
		"tarot" => Ok(DeckKind::Tarot),
		_ => Err(format!("\"{word}\" isn't a deck. Use \"cards\" or \"tarot\".")),
	}
}

/// Parses an on/off toggle.
fn on_off(word: &str) -> Result<bool, String> {
	match word.to_lowercase().as_str() {
		"on" | "yes" | "true" => Ok(true),
		"off" | "no" | "false" => Ok(false),
		_ => Err(format!("\"{word}\" isn't on or off.")),
	}
}

/// Describes how to use a command.
fn usage(cmd: &str) -> &'static str {
	match cmd {
		"reset" => "reset cards|tarot",
		"return" => "return cards|tarot on|off",
		_ => "reversed on|off",
	}
}

/// Carries out a command against the table, printing whatever comes of it.
fn run(table: &mut Table<FastRand>, cmd: Command<'_>) {
	match cmd {
		Command::Roll(notation) => {
			roll(table, notation);
		}
		Command::Draw(kind, count) => {
			let result = match kind {
				DeckKind::Cards => {
					if let Some(count) = count {
						table.set_card_count(count);
					}
					table.draw_cards().map(|report| report.to_string())
				}
				DeckKind::Tarot => {
					if let Some(count) = count {
						table.set_tarot_count(count);
					}
					table.draw_tarot().map(|report| report.to_string())
				}
			};
			match result {
				Ok(report) => {
					println!("{report}");
					let (meter, remaining) = match kind {
						DeckKind::Cards => (table.card_meter(), table.cards_remaining()),
						DeckKind::Tarot => (table.tarot_meter(), table.tarot_remaining()),
					};
					println!("[{:>3.0}%] {remaining} {} in the deck", meter, kind.noun());
				}
				Err(err) => eprintln!("{err}"),
			}
		}
		Command::Reset(DeckKind::Cards) => println!("{}", table.reset_cards()),
		Command::Reset(DeckKind::Tarot) => println!("{}", table.reset_tarot()),
		Command::Return(DeckKind::Cards, enabled) => {
			table.set_return_cards(enabled);
			println!("Drawn cards {} returned to the deck.", if enabled { "are" } else { "aren't" });
		}
		Command::Return(DeckKind::Tarot, enabled) => {
			table.set_return_tarot(enabled);
			println!("Drawn tarot cards {} returned to the deck.", if enabled { "are" } else { "aren't" });
		}
		Command::Reversed(enabled) => {
			table.set_allow_reversed(enabled);
			println!("Tarot cards {} come up reversed.", if enabled { "may" } else { "won't" });
		}
		Command::Help => help(),
		Command::Quit => {}
	}
}

/// Rolls notation and prints the outcome, or a diagnostic if it's invalid. Returns whether the roll succeeded.
fn roll(table: &mut Table<FastRand>, notation: &str) -> bool {
	match table.roll(notation) {
		Ok(roll) => {
			println!("{}", roll.describe(Some(CHIP_LIMIT)));
			println!("  {}", roll.outcome.chips(CHIP_LIMIT).join("  "));
			if let Presentation::Renderer(plan) = &roll.presentation {
				println!("  renderer: {plan}");
			}
			true
		}
		Err(err) if err.is_empty() => true,
		Err(err) => {
			report(notation, &err);
			false
		}
	}
}

/// Prints a parse error, pointing at the offending term when there is one.
fn report(notation: &str, err: &parse::Error) {
	let Some(span) = err.span() else {
		eprintln!("{err}");
		return;
	};

	let normalized = parse::normalize(notation);
	let printed = Report::build(ReportKind::Error, (SOURCE_NAME, span.clone()))
		.with_message(err)
		.with_label(
			Label::new((SOURCE_NAME, span))
				.with_message(err.label())
				.with_color(Color::Red),
		)
		.finish()
		.eprint((SOURCE_NAME, Source::from(normalized)));

	if printed.is_err() {
		eprintln!("{err}");
	}
}

/// Prints the available commands.
fn help() {
	let presets = PRESETS.map(|sides| format!("d{sides}")).join(" ");
	println!("Commands:");
	println!("  <notation> | roll <notation>   roll dice, e.g. 2d6+d8+3 (presets: {presets})");
	println!("  draw [n]                        draw playing cards (1-6 at a time)");
	println!("  tarot [n]                       draw tarot cards (1-6 at a time)");
	println!("  reset cards|tarot               shuffle a fresh deck");
	println!("  return cards|tarot on|off       put drawn cards straight back");
	println!("  reversed on|off                 allow reversed tarot cards");
	println!("  quit                            leave");
}
