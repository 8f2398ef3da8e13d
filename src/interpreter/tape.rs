use std::collections::VecDeque;

/// Byte tape that grows by one zero cell whenever the pointer steps off
/// either end. It never shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: VecDeque<u8>,
    pointer: usize,
    initial_len: usize,
}

impl Tape {
    pub fn new(len: usize) -> Self {
        // the pointer has to land on a cell from the start
        let len = len.max(1);
        Self {
            cells: VecDeque::from(vec![0; len]),
            pointer: 0,
            initial_len: len,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.initial_len);
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn initial_len(&self) -> usize {
        self.initial_len
    }

    pub fn move_right(&mut self) {
        self.pointer += 1;
        if self.pointer == self.cells.len() {
            self.cells.push_back(0);
        }
    }

    pub fn move_left(&mut self) {
        if self.pointer == 0 {
            // the new cell becomes index 0, so the pointer stays put
            self.cells.push_front(0);
        } else {
            self.pointer -= 1;
        }
    }

    pub fn get(&self) -> u8 {
        self.cells[self.pointer]
    }

    pub fn set(&mut self, value: u8) {
        self.cells[self.pointer] = value;
    }

    pub fn increment(&mut self) {
        self.cells[self.pointer] = self.cells[self.pointer].wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        self.cells[self.pointer] = self.cells[self.pointer].wrapping_sub(1);
    }

    /// Cell at `index`, `None` if the tape hasn't grown that far
    pub fn cell(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied()
    }

    /// Grow the tape one cell at a time until `pointer + offset` exists,
    /// exactly as stepping there one move at a time would
    pub fn ensure_offset(&mut self, offset: isize) {
        while self.pointer as isize + offset < 0 {
            self.cells.push_front(0);
            self.pointer += 1;
        }
        while self.pointer as isize + offset >= self.cells.len() as isize {
            self.cells.push_back(0);
        }
    }

    /// Wrapping add to the cell `offset` away from the pointer
    pub fn add_at_offset(&mut self, offset: isize, value: u8) {
        self.ensure_offset(offset);
        let index = (self.pointer as isize + offset) as usize;
        self.cells[index] = self.cells[index].wrapping_add(value);
    }

    /// Up to `len` cells starting at `start`
    pub fn window(&self, start: usize, len: usize) -> Vec<u8> {
        self.cells.iter().skip(start).take(len).copied().collect()
    }

    pub fn cells(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let tape = Tape::new(4);
        assert_eq!(tape.len(), 4);
        assert_eq!(tape.pointer(), 0);
        assert!(tape.cells().all(|c| c == 0));
    }

    #[test]
    fn zero_length_still_has_a_cell() {
        let tape = Tape::new(0);
        assert_eq!(tape.len(), 1);
        assert_eq!(tape.get(), 0);
    }

    #[test]
    fn wraps_both_ways() {
        let mut tape = Tape::new(1);
        tape.set(255);
        tape.increment();
        assert_eq!(tape.get(), 0);
        tape.decrement();
        assert_eq!(tape.get(), 255);
    }

    #[test]
    fn grows_right_one_cell_per_step() {
        let mut tape = Tape::new(2);
        tape.move_right();
        assert_eq!(tape.len(), 2);
        tape.move_right();
        assert_eq!(tape.len(), 3);
        assert_eq!(tape.pointer(), 2);
        assert_eq!(tape.get(), 0);
    }

    #[test]
    fn grows_left_and_keeps_pointer_at_zero() {
        let mut tape = Tape::new(2);
        tape.increment();
        tape.move_left();
        assert_eq!(tape.len(), 3);
        assert_eq!(tape.pointer(), 0);
        assert_eq!(tape.get(), 0);
        tape.move_left();
        assert_eq!(tape.len(), 4);
        tape.move_right();
        tape.move_right();
        assert_eq!(tape.get(), 1);
    }

    #[test]
    fn ensure_offset_matches_stepping() {
        let mut stepped = Tape::new(3);
        stepped.move_right();
        stepped.increment();
        let mut jumped = stepped.clone();

        for _ in 0..4 {
            stepped.move_left();
        }
        for _ in 0..4 {
            stepped.move_right();
        }
        for _ in 0..5 {
            stepped.move_right();
        }
        for _ in 0..5 {
            stepped.move_left();
        }

        jumped.ensure_offset(-4);
        jumped.ensure_offset(5);
        assert_eq!(stepped, jumped);
    }

    #[test]
    fn add_at_offset_wraps() {
        let mut tape = Tape::new(1);
        tape.add_at_offset(2, 200);
        tape.add_at_offset(2, 100);
        tape.add_at_offset(-1, 7);
        assert_eq!(tape.len(), 4);
        assert_eq!(tape.pointer(), 1);
        assert_eq!(tape.window(0, 10), vec![7, 0, 0, 44]);
        assert_eq!(tape.cell(3), Some(44));
        assert_eq!(tape.cell(4), None);
    }

    #[test]
    fn reset_restores_initial_size() {
        let mut tape = Tape::new(2);
        tape.move_left();
        tape.increment();
        tape.ensure_offset(10);
        tape.reset();
        assert_eq!(tape, Tape::new(2));
        assert_eq!(tape.initial_len(), 2);
        assert_eq!(Tape::new(0).initial_len(), 1);
    }
}
