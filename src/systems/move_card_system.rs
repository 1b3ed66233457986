// src/systems/move_card_system.rs

use log::{debug, warn};

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::run::Run;
use crate::components::stack::StackType;
use crate::logic::rules::is_move_valid;

/// `run` を `source` から取り除いて `destination` に積むよ！🖱️💨
///
/// ルールチェック済みの移動だけを渡してね。ここではもう一度チェックしない。
/// 場札から取り除いて表向きが 0 枚になったら、残った一番上のカードをめくる (Klondike の「めくり」)。
///
/// 山札からの移動や、山札・捨て札への移動は呼び出し側の約束違反。警告を出して何もしないよ。
pub fn apply_move(state: &mut GameState, source: StackType, run: &Run, destination: StackType) {
    let in_range = match destination {
        StackType::Tableau(index) => (index as usize) < state.tableau.len(),
        StackType::Foundation(index) => (index as usize) < state.foundations.len(),
        StackType::Stock | StackType::Waste => false,
    };
    if !in_range {
        warn!("[MoveCard] Cannot move cards onto {:?}, ignoring.", destination);
        return;
    }

    let Some(moved) = take_from_source(state, source, run.len()) else {
        warn!("[MoveCard] Cannot take cards from {:?}, ignoring.", source);
        return;
    };
    debug!("[MoveCard] {:?} -> {:?}: {} card(s) led by {}", source, destination, moved.len(), run.lead());

    match destination {
        StackType::Tableau(index) => state.tableau[index as usize].push_cards(&moved),
        StackType::Foundation(index) => state.foundations[index as usize].extend(moved),
        StackType::Stock | StackType::Waste => {} // in_range で弾いている
    }
}

/// ルールを確認してから移動する。実際に動いたら `true`。
pub fn try_move(state: &mut GameState, source: StackType, run: &Run, destination: StackType) -> bool {
    if !is_move_valid(state, source, run, destination) {
        debug!("[MoveCard] Move {:?} -> {:?} rejected.", source, destination);
        return false;
    }
    apply_move(state, source, run, destination);
    true
}

/// 移動元から一番上の `count` 枚を取り出す。捨て札と組札は常に1枚だけ。
fn take_from_source(state: &mut GameState, source: StackType, count: usize) -> Option<Vec<Card>> {
    match source {
        StackType::Tableau(index) => state
            .tableau
            .get_mut(index as usize)
            .map(|pile| pile.take_top(count)),
        StackType::Waste => state.waste.pop().map(|card| vec![card]),
        StackType::Foundation(index) => state
            .foundations
            .get_mut(index as usize)
            .and_then(Vec::pop)
            .map(|card| vec![card]),
        StackType::Stock => None,
    }
}
