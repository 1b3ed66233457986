// src/systems/mod.rs
//! GameState を変える処理たち (配る、動かす、山札をめくる)。

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
