//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::run::Run;
use super::common::CardColor;

/// Run が、場札 (Tableau) の一番上に置けるかチェックする。
///
/// 見るのは Run の先頭カード (`run.lead()`) だけ！
/// - 空の列なら King だけ置ける。
/// - そうでなければ、一番上より1つ小さいランクで、色が違う必要がある。
pub fn can_place_on_tableau(run: &Run, target_cards: &[Card]) -> bool {
    let card_to_move = run.lead();

    match target_cards.last() {
        Some(target_top_card) => {
            let move_color = CardColor::from_suit(card_to_move.suit);
            let target_color = CardColor::from_suit(target_top_card.suit);

            let colors_different = move_color != target_color;
            let rank_is_one_less = card_to_move.rank.value() + 1 == target_top_card.rank.value();

            debug!(
                "[Tableau Rule] {} onto {}: colors different = {}, rank one less = {}",
                card_to_move, target_top_card, colors_different, rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
        None => {
            let is_king = card_to_move.rank == Rank::King;
            debug!("[Tableau Rule] {} onto empty tableau: is king = {}", card_to_move, is_king);
            is_king
        }
    }
}
