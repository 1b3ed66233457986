// src/app/mod.rs
//! JS 側に公開する GameApp と、その補助モジュールだよ！

pub mod game_app;
pub mod state_getter;
