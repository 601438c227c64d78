//! Conquest - single-player territory conquest with dice combat and secret missions

pub mod combat;
pub mod core;
pub mod game;
pub mod mission;
pub mod territory;
pub mod ui;
