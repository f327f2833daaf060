/// Side length of the square board. Positions wrap at the edges, so the
/// board is a torus.
pub const BOARD_SIZE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// Maps a raw key identifier to a direction. Unrecognized keys map to
    /// nothing and are ignored by the caller.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowDown" => Some(Direction::Down),
            "ArrowUp" => Some(Direction::Up),
            "ArrowRight" => Some(Direction::Right),
            "ArrowLeft" => Some(Direction::Left),
            _ => None,
        }
    }

    /// Unit (row, col) delta of one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Running,
    GameOver,
}

/// Classification of a single board cell in a render snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Snake,
    Food,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_recognizes_arrow_keys() {
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
    }

    #[test]
    fn test_from_key_ignores_other_keys() {
        assert_eq!(Direction::from_key("Space"), None);
        assert_eq!(Direction::from_key("KeyW"), None);
        assert_eq!(Direction::from_key(""), None);
    }

    #[test]
    fn test_deltas_are_unit_vectors() {
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (0, -1));
    }
}
