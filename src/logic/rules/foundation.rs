//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::run::Run;

/// Run が、組札 (Foundation) の一番上に置けるかチェックする。
///
/// 組札に置けるのは1枚だけ。場札から何枚もまとめてドラッグしてきた場合は、
/// 切り詰めずにまるごと不可にするよ。
pub fn can_place_on_foundation(run: &Run, target_cards: &[Card]) -> bool {
    if run.len() != 1 {
        debug!("[Foundation Rule] Run of {} cards rejected, single cards only.", run.len());
        return false;
    }
    let card_to_move = run.lead();

    let result = match target_cards.last() {
        None => card_to_move.rank == Rank::Ace,
        Some(target_top_card) => {
            card_to_move.suit == target_top_card.suit
                && card_to_move.rank.value() == target_top_card.rank.value() + 1
        }
    };
    debug!(
        "[Foundation Rule] {} onto {:?}: {}",
        card_to_move,
        target_cards.last().map(ToString::to_string),
        result
    );
    result
}
