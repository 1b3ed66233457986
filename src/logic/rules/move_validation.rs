// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::{debug, warn};

use crate::components::game_state::GameState;
use crate::components::run::Run;
use crate::components::stack::StackType;
use super::common::get_foundation_suit;
use super::foundation::can_place_on_foundation;
use super::stock_waste::{can_move_from_waste_to_foundation, can_move_from_waste_to_tableau};
use super::tableau::can_place_on_tableau;

/// `source` の一番上にある `run` を `destination` に動かせるか検証する。
///
/// `apply_move` を呼ぶ前の関門だよ。置き場所のルールに加えて、
/// `run` が本当に移動元の動かせる部分 (場札なら表向きの上側、捨て札・組札なら一番上の1枚) か
/// どうかもここで確かめる。
pub fn is_move_valid(
    state: &GameState,
    source: StackType,
    run: &Run,
    destination: StackType,
) -> bool {
    if source == destination {
        debug!("[Rules Validation] Source and destination are both {:?}.", source);
        return false;
    }
    if !is_movable_from(state, source, run) {
        debug!("[Rules Validation] Run led by {} is not movable from {:?}.", run.lead(), source);
        return false;
    }

    // 移動先スタックの種類に応じてルールチェック
    match destination {
        StackType::Tableau(target_index) => match state.tableau_pile(target_index) {
            Some(pile) if source == StackType::Waste => {
                can_move_from_waste_to_tableau(&state.waste, &pile.cards)
            }
            Some(pile) => can_place_on_tableau(run, &pile.cards),
            None => {
                warn!("[Rules Validation] Invalid tableau index {}.", target_index);
                false
            }
        },
        StackType::Foundation(target_index) => {
            let (Some(target_suit), Some(cards)) =
                (get_foundation_suit(target_index), state.foundation(target_index))
            else {
                warn!("[Rules Validation] Invalid foundation index {}.", target_index);
                return false;
            };
            // 組札はスートごと。違うスートの山には A でも置けない
            if run.lead().suit != target_suit {
                return false;
            }
            if source == StackType::Waste {
                can_move_from_waste_to_foundation(&state.waste, cards)
            } else {
                can_place_on_foundation(run, cards)
            }
        }
        StackType::Stock | StackType::Waste => {
            debug!("[Rules Validation] Moving to {:?} is not allowed.", destination);
            false
        }
    }
}

/// `run` が `source` の一番上にそのまま乗っていて、動かせる状態かどうか。
fn is_movable_from(state: &GameState, source: StackType, run: &Run) -> bool {
    match source {
        StackType::Tableau(index) => state
            .tableau_pile(index)
            .map_or(false, |pile| pile.face_up_cards().ends_with(run.cards())),
        StackType::Waste | StackType::Foundation(_) => {
            run.len() == 1 && state.top_card(source) == Some(run.lead())
        }
        StackType::Stock => false,
    }
}
