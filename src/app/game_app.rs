// src/app/game_app.rs

use wasm_bindgen::prelude::*;
use log::{error, info, warn};

use crate::components::game_state::GameState;
use crate::components::run::Run;
use crate::components::stack::StackType;
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::rules::check_win;
use crate::protocol::ClientCommand;
use crate::systems::deal_system::{deal, deal_with_seed};
use crate::systems::move_card_system::try_move;
use crate::systems::stock_system::{draw_from_stock, StockAction};
use super::state_getter;

/// JS 側が持つゲーム本体だよ！
///
/// 盤面 (`GameState`) はこの中にひとつだけ。JS からの呼び出しはイベントループで
/// 1つずつ来るので、ロックは持たない。
#[wasm_bindgen]
pub struct GameApp {
    state: GameState,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: Initializing...");
        Self { state: deal() }
    }

    /// 盤面を捨てて、新しく配り直す。
    pub fn new_game(&mut self) {
        info!("GameApp: New game.");
        self.state = deal();
    }

    pub fn new_game_with_seed(&mut self, seed: u64) {
        info!("GameApp: New game with seed {}.", seed);
        self.state = deal_with_seed(seed);
    }

    /// 山札クリック。盤面が変わったら `true`。
    pub fn draw_from_stock(&mut self) -> bool {
        draw_from_stock(&mut self.state) != StockAction::NoOp
    }

    /// ドラッグ完了時に呼ばれる。`source_json` / `destination_json` は `StackType` の JSON
    /// (例: `{"Tableau":3}`, `"Waste"`)。移動できたら `true`。
    pub fn make_move(&mut self, source_json: &str, card_count: usize, destination_json: &str) -> bool {
        let (Some(source), Some(destination)) = (
            parse_stack_type(source_json),
            parse_stack_type(destination_json),
        ) else {
            return false;
        };
        self.move_cards(source, card_count, destination)
    }

    /// ダブルクリックされた山の一番上を、置ける組札へ送る。
    pub fn auto_move_to_foundation(&mut self, source_json: &str) -> bool {
        match parse_stack_type(source_json) {
            Some(source) => self.auto_move(source),
            None => false,
        }
    }

    /// `ClientCommand` の JSON をまとめて受け付ける入口。
    pub fn handle_command(&mut self, command_json: &str) -> bool {
        let command: ClientCommand = match serde_json::from_str(command_json) {
            Ok(command) => command,
            Err(e) => {
                error!("GameApp: Failed to deserialize command: {}. JSON: {}", e, command_json);
                return false;
            }
        };
        match command {
            ClientCommand::NewGame { seed: Some(seed) } => {
                self.new_game_with_seed(seed);
                true
            }
            ClientCommand::NewGame { seed: None } => {
                self.new_game();
                true
            }
            ClientCommand::DrawFromStock => self.draw_from_stock(),
            ClientCommand::MakeMove { source, card_count, destination } => {
                self.move_cards(source, card_count, destination)
            }
            ClientCommand::AutoMoveToFoundation { source } => self.auto_move(source),
        }
    }

    pub fn is_won(&self) -> bool {
        check_win(&self.state)
    }

    /// 現在の盤面を描画用の JSON (`GameStateData`) で返すよ。
    pub fn get_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_state_json(&self.state).map_err(|msg| JsValue::from_str(&msg))
    }
}

impl GameApp {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn move_cards(&mut self, source: StackType, card_count: usize, destination: StackType) -> bool {
        let Some(run) = run_on_top_of(&self.state, source, card_count) else {
            warn!("GameApp: No movable run of {} card(s) on {:?}.", card_count, source);
            return false;
        };
        try_move(&mut self.state, source, &run, destination)
    }

    fn auto_move(&mut self, source: StackType) -> bool {
        let Some(card) = self.state.top_card(source) else {
            return false;
        };
        match find_automatic_foundation_move(&self.state, card) {
            Some(destination) => try_move(&mut self.state, source, &Run::single(card), destination),
            None => false,
        }
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}

/// 移動元の一番上から `count` 枚の Run を作る。
/// 場札は表向きの範囲だけ。捨て札と組札は1枚だけ。
fn run_on_top_of(state: &GameState, source: StackType, count: usize) -> Option<Run> {
    match source {
        StackType::Tableau(index) => {
            let pile = state.tableau_pile(index)?;
            pile.run_from(pile.len().checked_sub(count)?)
        }
        StackType::Waste | StackType::Foundation(_) if count == 1 => {
            state.top_card(source).map(Run::single)
        }
        _ => None,
    }
}

fn parse_stack_type(json: &str) -> Option<StackType> {
    serde_json::from_str(json)
        .map_err(|e| error!("GameApp: Failed to deserialize StackType: {}. JSON: {}", e, json))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use crate::components::tableau::TableauPile;

    fn app_with(state: GameState) -> GameApp {
        GameApp { state }
    }

    #[test]
    fn new_app_has_a_fresh_deal() {
        let app = GameApp::new();
        assert_eq!(app.state().card_count(), 52);
        assert_eq!(app.state().stock.len(), 24);
        assert!(!app.is_won());
    }

    #[test]
    fn seeded_new_game_is_reproducible() {
        let mut a = GameApp::new();
        let mut b = GameApp::new();
        a.new_game_with_seed(5);
        assert!(b.handle_command(r#"{"NewGame":{"seed":5}}"#));
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn make_move_parses_stack_json() {
        let mut state = GameState::default();
        state.tableau[0] = TableauPile::new(vec![Card::new(Suit::Club, Rank::King)], 1);
        state.waste = vec![Card::new(Suit::Heart, Rank::Queen)];
        let mut app = app_with(state);

        assert!(!app.make_move("not json", 1, r#"{"Tableau":0}"#));
        assert!(!app.make_move(r#""Waste""#, 2, r#"{"Tableau":0}"#), "捨て札からは1枚だけ");
        assert!(app.make_move(r#""Waste""#, 1, r#"{"Tableau":0}"#));
        assert_eq!(app.state().tableau[0].len(), 2);
        assert!(app.state().waste.is_empty());
    }

    #[test]
    fn moving_a_run_between_columns() {
        let mut state = GameState::default();
        state.tableau[0] = TableauPile::new(
            vec![
                Card::new(Suit::Diamond, Rank::Four),
                Card::new(Suit::Spade, Rank::Queen),
                Card::new(Suit::Heart, Rank::Jack),
            ],
            2,
        );
        let mut app = app_with(state);

        assert!(!app.make_move(r#"{"Tableau":0}"#, 3, r#"{"Tableau":1}"#), "裏向きは動かせない");
        assert!(!app.make_move(r#"{"Tableau":0}"#, 2, r#"{"Tableau":1}"#), "Q は空の列に置けない");
        assert!(!app.make_move(r#"{"Tableau":0}"#, 0, r#"{"Tableau":1}"#));

        let mut state = app.state().clone();
        state.tableau[1] = TableauPile::new(vec![Card::new(Suit::Heart, Rank::King)], 1);
        let mut app = app_with(state);
        assert!(app.make_move(r#"{"Tableau":0}"#, 2, r#"{"Tableau":1}"#));
        assert_eq!(app.state().tableau[0].face_up_count, 1);
        assert_eq!(app.state().tableau[1].len(), 3);
    }

    #[test]
    fn auto_move_sends_ace_home() {
        let mut state = GameState::default();
        state.waste = vec![Card::new(Suit::Spade, Rank::Ace)];
        let mut app = app_with(state);

        assert!(app.auto_move_to_foundation(r#""Waste""#));
        assert_eq!(app.state().foundations[3], vec![Card::new(Suit::Spade, Rank::Ace)]);
        assert!(!app.auto_move_to_foundation(r#""Waste""#));
    }

    #[test]
    fn draw_command_and_bad_json() {
        let mut app = GameApp::new();
        assert!(app.handle_command(r#""DrawFromStock""#));
        assert_eq!(app.state().waste.len(), 1);
        assert!(!app.handle_command("{oops"));

        let mut empty = app_with(GameState::default());
        assert!(!empty.draw_from_stock());
    }

    #[test]
    fn state_json_is_available() {
        let app = GameApp::new();
        let json = app.get_state_json().unwrap();
        assert!(json.contains("\"is_won\":false"));
    }
}
