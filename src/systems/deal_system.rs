// src/systems/deal_system.rs

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::tableau::TableauPile;
use crate::config::rules::{DECK_SIZE, INITIAL_TABLEAU_CARDS};
use crate::logic::deck::{create_standard_deck, shuffle_deck_with};

/// 新しいゲームを配るよ！🎉 毎回違うシャッフル。
pub fn deal() -> GameState {
    deal_with_rng(&mut thread_rng())
}

/// シードを指定して配る。同じシードなら同じ配置になるから、「このゲームをもう一度」ができる！
pub fn deal_with_seed(seed: u64) -> GameState {
    info!("Dealing with seed {}", seed);
    deal_with_rng(&mut StdRng::seed_from_u64(seed))
}

pub fn deal_with_rng<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    let deck = shuffle_deck_with(&create_standard_deck(), rng);
    deal_from_deck(deck)
}

/// シャッフル済みのデッキをクロンダイクの初期配置に並べる関数だよ！
///
/// # 処理の流れ
/// 1. 場札 (Tableau) 7列。k 列目 (0始まり) にはデッキの先頭から順に k+1 枚。合計28枚。
///    どの列も表向きは一番上の1枚だけ。
/// 2. 残りの24枚はそのままの順番で山札 (Stock) に。末尾が一番上。
/// 3. 捨て札 (Waste) と組札 (Foundation) は空っぽでスタート。
pub fn deal_from_deck(deck: Vec<Card>) -> GameState {
    debug_assert_eq!(deck.len(), DECK_SIZE);

    let mut state = GameState::default();
    let mut card_iterator = deck.into_iter();

    for (tableau_index, pile) in state.tableau.iter_mut().enumerate() {
        let cards: Vec<Card> = card_iterator.by_ref().take(tableau_index + 1).collect();
        debug!("  Tableau[{}] <- {} cards, top {:?}", tableau_index, cards.len(), cards.last());
        *pile = TableauPile::new(cards, 1);
    }

    state.stock = card_iterator.collect();
    info!(
        "Dealt {} cards to tableau, {} to stock.",
        INITIAL_TABLEAU_CARDS,
        state.stock.len()
    );
    state
}
