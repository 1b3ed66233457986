// src/config/mod.rs

pub mod rules; // ルール定数 (枚数、山の数)
