pub mod config;
pub mod dict;
pub mod logging;
pub mod mvi;
pub mod quiz;
pub mod rng;
pub mod scramble;
pub mod split;
pub mod ui;
