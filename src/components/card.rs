// src/components/card.rs

// serde を使う宣言！カード情報を JSON にして JS 側に渡す時に使うよ！
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::config::rules::RANKS_PER_SUIT;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// 並び順 (Heart, Diamond, Club, Spade) がそのままデッキの並びと組札のインデックスになるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

impl Suit {
    /// `ALL_SUITS` の中での位置 (0-3)。組札のインデックスと同じ！
    pub const fn index(self) -> u8 {
        match self {
            Suit::Heart => 0,
            Suit::Diamond => 1,
            Suit::Club => 2,
            Suit::Spade => 3,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// A=1 から K=13 まで。`PartialOrd`, `Ord` で大小比較もできる！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

impl Rank {
    /// ランクの数値 (A=1, ..., K=13)。
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表す値だよ！🃏
///
/// 表向きか裏向きかはカード自身ではなく、置かれている山 (`TableauPile` の `face_up_count` など) が決めるよ。
/// なのでカードは一度作ったら変わらない、`Copy` できる小さな値！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// (スート, ランク) から決まるユニークなID (0-51)。
    pub const fn id(&self) -> u8 {
        self.suit.index() * RANKS_PER_SUIT as u8 + (self.rank.value() - 1)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn create_card() {
        let card = Card::new(Suit::Spade, Rank::Ace);
        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert_eq!(card.to_string(), "A♠");
        assert_eq!(Card::new(Suit::Heart, Rank::Ten).to_string(), "10♥");
    }

    #[test]
    fn rank_comparison() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
    }

    #[test]
    fn card_ids_are_unique_and_dense() {
        let ids: HashSet<u8> = ALL_SUITS
            .iter()
            .flat_map(|&suit| ALL_RANKS.iter().map(move |&rank| Card::new(suit, rank).id()))
            .collect();
        assert_eq!(ids.len(), 52);
        assert_eq!(ids.iter().max(), Some(&51));
        assert_eq!(Card::new(Suit::Heart, Rank::Ace).id(), 0);
        assert_eq!(Card::new(Suit::Spade, Rank::King).id(), 51);
    }

    #[test]
    fn card_json_shape() {
        let card = Card::new(Suit::Diamond, Rank::Queen);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"suit":"Diamond","rank":"Queen"}"#);
    }
}
