use std::collections::VecDeque;

use super::types::Cell;

pub const DEFAULT_SNAKE_LENGTH: usize = 4;

/// Ordered body, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Lays the body along the top row with the head at `(length - 1, 0)`
    /// and the tail at the origin.
    pub fn new(length: usize) -> Self {
        let length = length.max(1);
        let body = (0..length as i32).rev().map(|i| Cell::new(i, 0)).collect();
        Self { body }
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> {
        self.body.iter()
    }

    /// Linear scan over every segment, tail included.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.iter().any(|segment| *segment == cell)
    }

    /// Adds a new head and keeps the tail where it is.
    pub fn grow_to(&mut self, head: Cell) {
        self.body.push_front(head);
    }

    /// Moves the tail segment to the front as the new head.
    pub fn slide_to(&mut self, head: Cell) {
        if let Some(mut segment) = self.body.pop_back() {
            segment.x = head.x;
            segment.y = head.y;
            self.body.push_front(segment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(snake: &Snake) -> Vec<Cell> {
        snake.cells().copied().collect()
    }

    #[test]
    fn test_new_snake_layout() {
        let snake = Snake::new(DEFAULT_SNAKE_LENGTH);
        assert_eq!(
            cells(&snake),
            vec![Cell::new(3, 0), Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)]
        );
        assert_eq!(snake.head(), Cell::new(3, 0));
        assert_eq!(snake.tail(), Cell::new(0, 0));
    }

    #[test]
    fn test_zero_length_is_clamped() {
        let snake = Snake::new(0);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(0, 0));
    }

    #[test]
    fn test_slide_keeps_length() {
        let mut snake = Snake::new(4);
        snake.slide_to(Cell::new(4, 0));
        assert_eq!(snake.len(), 4);
        assert_eq!(
            cells(&snake),
            vec![Cell::new(4, 0), Cell::new(3, 0), Cell::new(2, 0), Cell::new(1, 0)]
        );
    }

    #[test]
    fn test_grow_keeps_tail() {
        let mut snake = Snake::new(4);
        snake.grow_to(Cell::new(4, 0));
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), Cell::new(4, 0));
        assert_eq!(snake.tail(), Cell::new(0, 0));
    }

    #[test]
    fn test_occupies_includes_tail() {
        let snake = Snake::new(4);
        assert!(snake.occupies(Cell::new(0, 0)));
        assert!(snake.occupies(Cell::new(3, 0)));
        assert!(!snake.occupies(Cell::new(4, 0)));
    }

    #[test]
    fn test_from_cells_rejects_empty() {
        assert!(Snake::from_cells(Vec::new()).is_none());
        let snake = Snake::from_cells(vec![Cell::new(2, 2)]).unwrap();
        assert_eq!(snake.head(), snake.tail());
    }
}
