// src/logic/mod.rs
//! 盤面を変えない純粋なロジック (デッキ作り、ルール判定、自動移動先の検索)。

pub mod deck;
pub mod rules;
pub mod auto_move;
