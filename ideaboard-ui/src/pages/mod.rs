mod board;

pub use board::{get_board, BoardPage, GetBoardFn};
