// Board module - the board operation set and the cellular variant

pub mod abstraction;
pub mod cellular;

pub use abstraction::{Board, BoardConfig, BoardError};
pub use cellular::CellularBoard;
