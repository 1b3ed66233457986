// src/components/mod.rs

// ゲームの状態を作る部品 (データ) たち！
pub mod card;
pub mod stack;
pub mod run;
pub mod tableau;
pub mod game_state;

pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::GameState;
pub use run::Run;
pub use stack::StackType;
pub use tableau::TableauPile;
