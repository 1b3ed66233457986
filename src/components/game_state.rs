// src/components/game_state.rs

use serde::{Serialize, Deserialize};

use super::card::Card;
use super::stack::StackType;
use super::tableau::TableauPile;
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// ゲーム全体の盤面だよ！ 場札7列、組札4つ、山札、捨て札。
///
/// 全部の山を合わせると、いつでもちょうど52枚 (重複なし・欠けなし) になるのがルール。
/// 作るのは Dealer、変えるのは移動と山札めくりだけ。新しいゲームでは丸ごと作り直すよ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub tableau: [TableauPile; TABLEAU_COUNT],
    /// スートごとの組札。インデックスは `Suit::index()` と同じ。
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
    /// 山札。一番上は末尾。
    pub stock: Vec<Card>,
    /// 捨て札。一番上は末尾。
    pub waste: Vec<Card>,
}

impl GameState {
    /// すべての山のカードを順番に並べるイテレータ。
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.tableau
            .iter()
            .flat_map(|pile| pile.cards.iter())
            .chain(self.foundations.iter().flatten())
            .chain(self.stock.iter())
            .chain(self.waste.iter())
    }

    pub fn card_count(&self) -> usize {
        self.all_cards().count()
    }

    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    pub fn tableau_pile(&self, index: u8) -> Option<&TableauPile> {
        self.tableau.get(index as usize)
    }

    pub fn foundation(&self, index: u8) -> Option<&[Card]> {
        self.foundations.get(index as usize).map(Vec::as_slice)
    }

    /// 指定した山に積まれているカード (下から上)。範囲外のインデックスなら `None`。
    pub fn cards_in(&self, stack: StackType) -> Option<&[Card]> {
        match stack {
            StackType::Tableau(index) => self.tableau_pile(index).map(|pile| pile.cards.as_slice()),
            StackType::Foundation(index) => self.foundation(index),
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
        }
    }

    /// 指定した山の一番上のカード。
    pub fn top_card(&self, stack: StackType) -> Option<Card> {
        self.cards_in(stack).and_then(|cards| cards.last().copied())
    }
}
