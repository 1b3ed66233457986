// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄
//! どのカードがどの組札に自動で移動できるか、を判断するんだ。

use log::debug;

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::run::Run;
use crate::components::stack::StackType;
use crate::logic::rules;

/// カードを1枚だけ受け入れられる組札（Foundation）を探す関数だよ。
/// 組札はスートごとに決まっているので、見るのはそのスートの山だけ。
///
/// # 戻り値
/// * `Some(StackType::Foundation(index))`: 置ける組札が見つかった場合。
/// * `None`: どこにも置けない場合。
pub fn find_automatic_foundation_move(state: &GameState, card: Card) -> Option<StackType> {
    let index = rules::foundation_index_for(card.suit);
    let found = state
        .foundation(index)
        .filter(|cards| rules::can_place_on_foundation(&Run::single(card), cards))
        .map(|_| index);
    debug!("[AutoMove] {} -> {:?}", card, found);
    found.map(StackType::Foundation)
}
