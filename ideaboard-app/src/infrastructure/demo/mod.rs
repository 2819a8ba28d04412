mod demo_board;

pub use demo_board::DemoBoard;
