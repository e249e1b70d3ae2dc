pub mod alphabeta;
pub mod eval;
pub mod strategy;
