pub mod args;
pub mod canvas;
pub mod game;
pub mod settings;
pub mod sim_rate;
