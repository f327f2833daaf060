mod game_state;
mod types;

pub use game_state::SnakeGameState;
pub use types::{BOARD_SIZE, Cell, Direction, GameStatus, Point};
