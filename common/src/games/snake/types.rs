use std::fmt;

/// Grid coordinate. Signed so that a prospective head one step past the
/// top or left wall can be represented before the wall check rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Unit step in screen coordinates: y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn from_canvas(canvas_width_px: u32, canvas_height_px: u32, cell_size_px: u32) -> Self {
        let cell = cell_size_px.max(1);
        Self {
            width: (canvas_width_px / cell) as i32,
            height: (canvas_height_px / cell) as i32,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Only the ring of cells directly outside the grid counts as wall.
    /// The head moves one step per tick, so nothing further out is reachable.
    pub fn is_wall(&self, cell: Cell) -> bool {
        cell.x == -1 || cell.y == -1 || cell.x == self.width || cell.y == self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBody,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => write!(f, "wall collision"),
            Collision::SelfBody => write!(f, "self collision"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const LIGHT_GREY: Rgb = Rgb::new(211, 211, 211);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Per-game colors. The fill is rolled on every start, the stroke never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTheme {
    pub fill: Rgb,
    pub stroke: Rgb,
}

impl ColorTheme {
    pub fn with_fill(fill: Rgb) -> Self {
        Self {
            fill,
            stroke: Rgb::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_pairs() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Right.is_opposite(&Direction::Left));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(Direction::Down.is_opposite(&Direction::Up));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Right.is_opposite(&Direction::Right));
    }

    #[test]
    fn test_offset_moves_one_unit() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.offset(Direction::Right), Cell::new(6, 5));
        assert_eq!(cell.offset(Direction::Left), Cell::new(4, 5));
        assert_eq!(cell.offset(Direction::Up), Cell::new(5, 4));
        assert_eq!(cell.offset(Direction::Down), Cell::new(5, 6));
    }

    #[test]
    fn test_grid_from_canvas() {
        let grid = GridSize::from_canvas(600, 580, 20);
        assert_eq!(grid, GridSize::new(30, 29));
    }

    #[test]
    fn test_wall_ring() {
        let grid = GridSize::new(30, 29);
        assert!(grid.is_wall(Cell::new(-1, 3)));
        assert!(grid.is_wall(Cell::new(30, 3)));
        assert!(grid.is_wall(Cell::new(3, -1)));
        assert!(grid.is_wall(Cell::new(3, 29)));
        assert!(!grid.is_wall(Cell::new(29, 28)));
        assert!(!grid.is_wall(Cell::new(0, 0)));
    }

    #[test]
    fn test_rgb_css() {
        assert_eq!(Rgb::new(1, 22, 255).css(), "rgb(1, 22, 255)");
    }
}
