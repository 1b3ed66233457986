// src/config/rules.rs
//! クロンダイクのルールで使う定数をまとめておくよ！
//! 枚数や山の数など、ゲームの形を決める数字たち。

pub const DECK_SIZE: usize = 52; // 1デッキの枚数
pub const RANKS_PER_SUIT: usize = 13; // 1スートあたりのランク数 (A〜K)

pub const TABLEAU_COUNT: usize = 7; // 場札 (Tableau) の列数
pub const FOUNDATION_COUNT: usize = 4; // 組札 (Foundation) の数 (スートごとに1つ)

/// 初期配置で場札に配る枚数。1 + 2 + ... + 7 = 28 枚。
pub const INITIAL_TABLEAU_CARDS: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;
/// 初期配置後に山札 (Stock) に残る枚数。
pub const INITIAL_STOCK_SIZE: usize = DECK_SIZE - INITIAL_TABLEAU_CARDS;
