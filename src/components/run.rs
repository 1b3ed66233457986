// src/components/run.rs

use serde::{Serialize, Deserialize};

use super::card::Card;

/// まとめて動かすカードの列 (Run) だよ。下 (先頭) から上 (末尾) の順。
///
/// 空の Run は作れない！ だから `lead()` はいつでも先頭カードを返せる。
/// 置けるかどうかのルール判定は、この先頭カードだけを見るよ。
/// JSON ではカードの配列そのもの。空の配列は読み込みエラーになる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Run {
    cards: Vec<Card>,
}

impl Run {
    /// カードが1枚もなければ `None`。
    pub fn new(cards: Vec<Card>) -> Option<Self> {
        if cards.is_empty() {
            None
        } else {
            Some(Self { cards })
        }
    }

    pub fn single(card: Card) -> Self {
        Self { cards: vec![card] }
    }

    /// 一番下 (先頭) のカード。
    pub fn lead(&self) -> Card {
        self.cards[0]
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl TryFrom<Vec<Card>> for Run {
    type Error = &'static str;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Run::new(cards).ok_or("a run needs at least one card")
    }
}

impl From<Run> for Vec<Card> {
    fn from(run: Run) -> Self {
        run.cards
    }
}

impl From<Card> for Run {
    fn from(card: Card) -> Self {
        Run::single(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn empty_run_is_rejected() {
        assert!(Run::new(Vec::new()).is_none());
    }

    #[test]
    fn lead_is_bottom_card() {
        let nine = Card::new(Suit::Spade, Rank::Nine);
        let eight = Card::new(Suit::Heart, Rank::Eight);
        let run = Run::new(vec![nine, eight]).unwrap();
        assert_eq!(run.lead(), nine);
        assert_eq!(run.len(), 2);
        assert_eq!(Run::from(eight).cards(), &[eight]);
    }

    #[test]
    fn empty_run_json_is_rejected() {
        assert!(serde_json::from_str::<Run>("[]").is_err());
        assert!(serde_json::from_str::<Run>(r#"{"cards":[]}"#).is_err());
    }

    #[test]
    fn run_json_is_a_card_list() {
        let run = Run::new(vec![Card::new(Suit::Spade, Rank::Nine), Card::new(Suit::Heart, Rank::Eight)]).unwrap();
        let json = serde_json::to_string(&run).unwrap();
        assert!(json.starts_with('['));
        let back: Run = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lead(), Card::new(Suit::Spade, Rank::Nine));
        assert_eq!(back, run);
    }
}
