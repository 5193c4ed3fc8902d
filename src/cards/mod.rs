//! Cards, suits, hands, and the seeded shuffle/deal used to start a hand.

pub mod card;
pub mod deck;
pub mod hand;
pub mod suit;

pub use card::Card;
pub use deck::{deal, Lcg};
pub use hand::Hand;
pub use suit::{Suit, PRE_TRUMP};
