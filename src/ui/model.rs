//! Selection state over the file table.

/// Direction of a selection move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Old and new index of a selection move, for a two-row repaint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub old: usize,
    pub new: usize,
}

/// Cursor over a table of `count` rows.
///
/// The index is always in `0..count` when `count > 0`; with no rows there is
/// no selection and moves do nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    count: usize,
    selection: usize,
}

impl TableModel {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            selection: 0,
        }
    }

    /// Currently selected row, `None` for an empty table
    pub fn selection(&self) -> Option<usize> {
        (self.count > 0).then_some(self.selection)
    }

    /// Move the selection one row, wrapping at both ends
    pub fn move_selection(&mut self, direction: Direction) -> Option<SelectionChange> {
        if self.count == 0 {
            return None;
        }

        let old = self.selection;
        let new = match direction {
            Direction::Up if old == 0 => self.count - 1,
            Direction::Up => old - 1,
            Direction::Down if old >= self.count - 1 => 0,
            Direction::Down => old + 1,
        };
        self.selection = new;

        Some(SelectionChange { old, new })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_first_row() {
        assert_eq!(TableModel::new(3).selection(), Some(0));
    }

    #[test]
    fn up_from_top_wraps_to_bottom() {
        let mut model = TableModel::new(4);
        let change = model.move_selection(Direction::Up).unwrap();
        assert_eq!(change, SelectionChange { old: 0, new: 3 });
        assert_eq!(model.selection(), Some(3));
    }

    #[test]
    fn down_from_bottom_wraps_to_top() {
        let mut model = TableModel::new(2);
        model.move_selection(Direction::Down);
        let change = model.move_selection(Direction::Down).unwrap();
        assert_eq!(change, SelectionChange { old: 1, new: 0 });
    }

    #[test]
    fn single_row_stays_put() {
        let mut model = TableModel::new(1);
        assert_eq!(
            model.move_selection(Direction::Down),
            Some(SelectionChange { old: 0, new: 0 })
        );
        assert_eq!(
            model.move_selection(Direction::Up),
            Some(SelectionChange { old: 0, new: 0 })
        );
    }

    #[test]
    fn empty_table_ignores_moves() {
        let mut model = TableModel::new(0);
        assert_eq!(model.selection(), None);
        assert_eq!(model.move_selection(Direction::Up), None);
        assert_eq!(model.move_selection(Direction::Down), None);
        assert_eq!(model.selection(), None);
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::Up), Just(Direction::Down)]
    }

    proptest! {
        #[test]
        fn selection_stays_in_range(
            count in 1usize..64,
            moves in prop::collection::vec(direction(), 0..200)
        ) {
            let mut model = TableModel::new(count);
            for dir in moves {
                let change = model.move_selection(dir).unwrap();
                prop_assert!(change.new < count);
                prop_assert_eq!(model.selection(), Some(change.new));
            }
        }

        #[test]
        fn full_cycle_returns_to_start(count in 1usize..64, start in 0usize..64) {
            let start = start % count;
            let mut model = TableModel::new(count);
            for _ in 0..start {
                model.move_selection(Direction::Down);
            }
            prop_assert_eq!(model.selection(), Some(start));

            for _ in 0..count {
                model.move_selection(Direction::Up);
            }
            prop_assert_eq!(model.selection(), Some(start));
        }

        #[test]
        fn up_then_down_is_identity(count in 1usize..64, steps in 0usize..200) {
            let mut model = TableModel::new(count);
            for _ in 0..steps {
                model.move_selection(Direction::Down);
            }
            let before = model.selection();
            model.move_selection(Direction::Up);
            model.move_selection(Direction::Down);
            prop_assert_eq!(model.selection(), before);
        }
    }
}
