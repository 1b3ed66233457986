// src/components/stack.rs

use serde::{Serialize, Deserialize};

/// カードが存在する場所の種類を示す Enum だよ。
/// 移動の「移動元」と「移動先」を指定するのにも使う！
/// JSON にすると `{"Tableau":3}` や `"Waste"` みたいな形になるよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau)。列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。0: Heart, 1: Diamond, 2: Club, 3: Spade。
    Foundation(u8),
    /// 山札 (Stock)。裏向きのまま、上から1枚ずつめくる。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
}
