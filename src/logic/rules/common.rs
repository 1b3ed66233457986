//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Suit, ALL_SUITS};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Heart ❤️, 1: Diamond ♦️, 2: Club ♣️, 3: Spade ♠️
pub fn get_foundation_suit(foundation_index: u8) -> Option<Suit> {
    ALL_SUITS.get(foundation_index as usize).copied()
}

/// スートから、そのスートを受け入れる組札のインデックスを取得する。
pub fn foundation_index_for(suit: Suit) -> u8 {
    suit.index()
}
