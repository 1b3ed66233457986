// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;
use itertools::iproduct;
use rand::{seq::SliceRandom, thread_rng, Rng};

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// スートは `ALL_SUITS` の順、各スートの中ではランクが A から K へ昇順。
/// ランダム要素はなし、毎回同じ並びになるよ。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    deck.extend(iproduct!(ALL_SUITS, ALL_RANKS).map(|(suit, rank)| Card::new(suit, rank)));
    deck
}

/// カードデッキをシャッフルした新しいデッキを返す関数だよ。元のデッキはそのまま！
pub fn shuffle_deck(deck: &[Card]) -> Vec<Card> {
    shuffle_deck_with(deck, &mut thread_rng())
}

/// 乱数生成器を指定してシャッフルする版。シード付きの配り直しやテストで使う。
///
/// `SliceRandom::shuffle` は後ろから Fisher–Yates をやってくれる
/// (i を末尾から 1 まで下げながら、[0, i] から一様に選んだ j と入れ替え)。
/// なので偏りのない乱数なら 52! 通りどれも同じ確率になるよ。
pub fn shuffle_deck_with<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
