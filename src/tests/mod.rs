mod deck;
mod dice;
#[cfg(feature = "parse")]
mod expr;
#[cfg(feature = "parse")]
mod table;
