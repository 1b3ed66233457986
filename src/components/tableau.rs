// src/components/tableau.rs

use serde::{Serialize, Deserialize};

use super::card::Card;
use super::run::Run;

/// 場札 (Tableau) の1列だよ。
///
/// - `cards`: 下 (奥) から上 (手前) の順に並んだカード。
/// - `face_up_count`: 上から数えて何枚が表向きか。
///
/// カードが残っている限り、取り除いた後は必ず一番上が表向きになる (`face_up_count >= 1`)。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauPile {
    pub cards: Vec<Card>,
    pub face_up_count: usize,
}

impl TableauPile {
    pub fn new(cards: Vec<Card>, face_up_count: usize) -> Self {
        let face_up_count = face_up_count.min(cards.len());
        Self { cards, face_up_count }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn face_down_count(&self) -> usize {
        self.cards.len().saturating_sub(self.face_up_count)
    }

    pub fn face_up_cards(&self) -> &[Card] {
        &self.cards[self.face_down_count()..]
    }

    pub fn is_fully_face_up(&self) -> bool {
        self.face_up_count == self.cards.len()
    }

    /// `index` 番目から一番上までを Run として取り出す (コピー)。
    /// 裏向きのカードを含む場合や範囲外なら `None`。
    pub fn run_from(&self, index: usize) -> Option<Run> {
        if index < self.face_down_count() {
            return None;
        }
        Run::new(self.cards.get(index..)?.to_vec())
    }

    /// 上から `count` 枚を取り除いて返すよ。
    /// 表向きの枚数は `count` だけ減らして 0 で止め、カードが残っていれば一番上をめくる。
    pub(crate) fn take_top(&mut self, count: usize) -> Vec<Card> {
        let start = self.cards.len().saturating_sub(count);
        let removed = self.cards.split_off(start);
        self.face_up_count = self.face_up_count.saturating_sub(removed.len());
        if !self.cards.is_empty() && self.face_up_count == 0 {
            self.face_up_count = 1; // 新しい一番上を表にする
        }
        removed
    }

    /// カードを上に積む。積んだカードはすべて表向き。
    pub(crate) fn push_cards(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
        self.face_up_count += cards.len();
    }
}
