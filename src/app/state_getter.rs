//! Converts the current GameState into the view snapshot sent to JS.

use log::{debug, error};

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::logic::rules::check_win;
use crate::protocol::{CardData, GameStateData};

/// 盤面を、カード1枚ずつの `CardData` のリストにするよ。
/// 場札は `face_up_count` に従って表裏を決める。組札と捨て札は表、山札は裏。
pub fn build_state_data(state: &GameState) -> GameStateData {
    let mut cards = Vec::with_capacity(state.card_count());

    for (index, pile) in state.tableau.iter().enumerate() {
        let face_down = pile.face_down_count();
        push_stack(&mut cards, StackType::Tableau(index as u8), &pile.cards, |pos| pos >= face_down);
    }
    for (index, pile) in state.foundations.iter().enumerate() {
        push_stack(&mut cards, StackType::Foundation(index as u8), pile, |_| true);
    }
    push_stack(&mut cards, StackType::Stock, &state.stock, |_| false);
    push_stack(&mut cards, StackType::Waste, &state.waste, |_| true);

    debug!("Collected data for {} cards.", cards.len());
    GameStateData { cards, is_won: check_win(state) }
}

/// 盤面を JSON 文字列として返します。
pub fn get_state_json(state: &GameState) -> Result<String, String> {
    serde_json::to_string(&build_state_data(state)).map_err(|e| {
        let error_msg = format!("Failed to serialize game state: {}", e);
        error!("{}", error_msg);
        error_msg
    })
}

fn push_stack(
    out: &mut Vec<CardData>,
    stack_type: StackType,
    cards: &[Card],
    is_face_up: impl Fn(usize) -> bool,
) {
    out.extend(cards.iter().enumerate().map(|(pos, card)| CardData {
        id: card.id(),
        suit: card.suit,
        rank: card.rank,
        is_face_up: is_face_up(pos),
        stack_type,
        position_in_stack: pos as u8,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::deal_system::deal_with_seed;

    #[test]
    fn snapshot_covers_every_card() {
        let state = deal_with_seed(9);
        let data = build_state_data(&state);
        assert_eq!(data.cards.len(), 52);
        assert!(!data.is_won);

        // 表向きは場札の一番上の7枚だけ
        let face_up: Vec<&CardData> = data.cards.iter().filter(|c| c.is_face_up).collect();
        assert_eq!(face_up.len(), 7);
        assert!(face_up.iter().all(|c| matches!(c.stack_type, StackType::Tableau(_))));

        let last_of_col6 = data
            .cards
            .iter()
            .find(|c| c.stack_type == StackType::Tableau(6) && c.position_in_stack == 6)
            .unwrap();
        assert!(last_of_col6.is_face_up);
    }

    #[test]
    fn json_round_trips_into_snapshot() {
        let state = deal_with_seed(9);
        let json = get_state_json(&state).unwrap();
        let parsed: GameStateData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, build_state_data(&state));
    }
}
