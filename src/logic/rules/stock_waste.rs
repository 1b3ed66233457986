//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::components::card::Card;
use crate::components::run::Run;
use super::foundation::can_place_on_foundation;
use super::tableau::can_place_on_tableau;

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ストック（山札）が空のときに、ウェスト（捨て札）からストックにカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// ウェスト（捨て札）の一番上のカードが、場札 (Tableau) の一番上に置けるかチェックする。
pub fn can_move_from_waste_to_tableau(waste: &[Card], target_cards: &[Card]) -> bool {
    waste
        .last()
        .map_or(false, |&top| can_place_on_tableau(&Run::single(top), target_cards))
}

/// ウェスト（捨て札）の一番上のカードが、組札 (Foundation) の一番上に置けるかチェックする。
pub fn can_move_from_waste_to_foundation(waste: &[Card], target_cards: &[Card]) -> bool {
    waste
        .last()
        .map_or(false, |&top| can_place_on_foundation(&Run::single(top), target_cards))
}
