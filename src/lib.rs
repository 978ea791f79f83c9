pub mod alpha_beta_searcher;
pub mod evaluate;
pub mod game;
pub mod graph;
pub mod input_handler;
pub mod protocol;
pub mod sim_search;
