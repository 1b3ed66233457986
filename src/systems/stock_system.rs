// src/systems/stock_system.rs
//! Handles clicks on the Stock pile: dealing to Waste, or turning Waste back into Stock.

use log::{debug, info};
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::logic::rules::stock_waste;

/// What a click on the Stock did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockAction {
    /// One card moved from Stock to Waste.
    Drawn(Card),
    /// Waste was turned over into Stock; holds the number of cards moved.
    Recycled(usize),
    /// Both piles were empty.
    NoOp,
}

/// Draws the top Stock card onto Waste, or recycles Waste when Stock is empty.
///
/// Recycling reverses Waste, so the first card that went to Waste becomes the
/// new top of Stock.
pub fn draw_from_stock(state: &mut GameState) -> StockAction {
    if stock_waste::can_deal_from_stock(state.stock.is_empty()) {
        if let Some(card) = state.stock.pop() {
            debug!("  Dealing {} from Stock to Waste.", card);
            state.waste.push(card);
            return StockAction::Drawn(card);
        }
    }

    if stock_waste::can_reset_stock_from_waste(state.stock.is_empty(), state.waste.is_empty()) {
        let count = state.waste.len();
        info!("Resetting {} cards from Waste to Stock.", count);
        state.stock = state.waste.drain(..).rev().collect();
        return StockAction::Recycled(count);
    }

    debug!("  Stock and Waste are both empty, nothing to do.");
    StockAction::NoOp
}
