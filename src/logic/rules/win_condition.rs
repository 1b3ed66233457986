//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::game_state::GameState;
use crate::components::tableau::TableauPile;
use crate::config::rules::DECK_SIZE;

/// ゲームのクリア条件（全てのカードが組札にあるか）を判定する。
pub fn check_win_condition(foundation_card_count: usize) -> bool {
    foundation_card_count == DECK_SIZE
}

/// 場札が全部表向きで、山札も捨て札も空なら、あとは順番に組札へ送るだけで終わる。
pub fn is_trivially_completable(state: &GameState) -> bool {
    state.stock.is_empty()
        && state.waste.is_empty()
        && state.tableau.iter().all(TableauPile::is_fully_face_up)
}

/// 勝ちかどうか。盤面を見るだけで、何も変えないよ。
pub fn check_win(state: &GameState) -> bool {
    check_win_condition(state.foundation_card_count()) || is_trivially_completable(state)
}
