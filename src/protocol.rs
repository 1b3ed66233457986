// src/protocol.rs

// このファイルは、JS 側 (画面・ドラッグ操作の担当) と WASM の間で
// やり取りするデータの形式を定義するよ！💌
// `Serialize` は Rust のデータ構造 -> JSON 文字列、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造。
use serde::{Serialize, Deserialize};

use crate::components::card::{Suit, Rank};
pub use crate::components::stack::StackType;

/// JS 側から送られてくる操作の種類を表す enum だよ。
/// ドラッグの解釈は JS 側で済ませて、「どこから何枚をどこへ」だけが届く。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// 新しいゲームを配る。シードがあればその配置で。
    NewGame { seed: Option<u64> },
    /// 山札をクリックした。
    DrawFromStock,
    /// 移動元の一番上から `card_count` 枚を移動先へ。
    MakeMove {
        source: StackType,
        card_count: usize,
        destination: StackType,
    },
    /// 移動元の一番上のカードを、置ける組札へ自動で送る (ダブルクリック)。
    AutoMoveToFoundation { source: StackType },
}

/// ゲームの状態全体を、描画しやすい形にしたデータ構造だよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStateData {
    /// 現在の全てのカードの状態リスト。
    pub cards: Vec<CardData>,
    /// クリア済みかどうか。
    pub is_won: bool,
}

/// カード1枚の状態を表すデータ構造。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardData {
    /// (スート, ランク) から決まるID。JS 側で要素と紐づけるのに使う。
    pub id: u8,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    /// このカードが現在どのスタックに属しているか。
    pub stack_type: StackType,
    /// そのスタックの中で何番目に積まれているか (0が一番下)。
    pub position_in_stack: u8,
}
