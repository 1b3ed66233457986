// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod config;     // ルール定数
pub mod components; // カード、山、盤面のデータ
pub mod logic;      // デッキ作りとルール判定 (盤面は変えない)
pub mod systems;    // 配る・動かす・山札をめくる (盤面を変える)
pub mod protocol;   // JS とやり取りする JSON の形
pub mod app;        // JS に公開する GameApp

pub use app::game_app::GameApp;
pub use components::{Card, GameState, Rank, Run, StackType, Suit, TableauPile};
pub use logic::deck::{create_standard_deck, shuffle_deck};
pub use logic::rules::{can_place_on_foundation, can_place_on_tableau, check_win, is_move_valid};
pub use systems::deal_system::deal;
pub use systems::move_card_system::{apply_move, try_move};
pub use systems::stock_system::{draw_from_stock, StockAction};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
