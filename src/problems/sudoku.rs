// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sudoku as an exact-cover problem.
//!
//! A 9x9 sudoku maps onto 324 mandatory constraints in four families of 81:
//! every cell holds some digit, every row holds every digit once, likewise
//! every column and every 3x3 box. A candidate placement of one digit in one
//! cell covers exactly one constraint from each family, so a filled grid is
//! precisely an exact cover.
//!
//! The encoder validates givens with [`DigitSet`] masks before the engine
//! ever sees the puzzle; all fallible operations here return `Option`.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::digit_set::DigitSet;
use crate::engine::{solve_first, solve_many, Solution, Strategy};
use crate::problem::Problem;

/// Side length of the grid.
pub const SIZE: usize = 9;

const CELLS: usize = SIZE * SIZE;

/// One candidate: `digit` placed at `(row, col)`. The row identifier of the
/// sudoku encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub digit: u8,
}

/// A 9x9 grid of givens; zero marks a blank cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sudoku {
    cells: [[u8; SIZE]; SIZE],
}

impl Sudoku {
    /// The grid with no givens.
    pub fn empty() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    /// Parse a puzzle from text.
    ///
    /// Whitespace is ignored; the remaining characters must be exactly 81 of
    /// `1`-`9` for givens and `.` or `0` for blanks. Returns `None` on any
    /// other character, on a wrong count, or when two equal givens share a
    /// row, column or box.
    pub fn parse(text: &str) -> Option<Self> {
        let mut grid = Self::empty();
        let mut index = 0;
        for ch in text.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let digit = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return None,
            };
            if index == CELLS {
                return None;
            }
            grid.cells[index / SIZE][index % SIZE] = digit;
            index += 1;
        }
        if index != CELLS || !grid.givens_are_consistent() {
            return None;
        }
        Some(grid)
    }

    /// The given at `(row, col)`, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        match self.cells[row][col] {
            0 => None,
            digit => Some(digit),
        }
    }

    /// Number of given cells.
    pub fn given_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&digit| digit != 0)
            .count()
    }

    /// True when no row, column or box contains a repeated given.
    fn givens_are_consistent(&self) -> bool {
        let mut rows = [DigitSet::empty(); SIZE];
        let mut cols = [DigitSet::empty(); SIZE];
        let mut boxes = [DigitSet::empty(); SIZE];
        for row in 0..SIZE {
            for col in 0..SIZE {
                let digit = self.cells[row][col];
                if digit == 0 {
                    continue;
                }
                let b = (row / 3) * 3 + col / 3;
                if rows[row].contains(digit) || cols[col].contains(digit) || boxes[b].contains(digit)
                {
                    return false;
                }
                rows[row].insert(digit);
                cols[col].insert(digit);
                boxes[b].insert(digit);
            }
        }
        true
    }

    /// Solve the puzzle, returning the first completed grid found, or `None`
    /// when the givens admit no completion.
    pub fn solve(&self) -> Option<Sudoku> {
        let solution = solve_first(self, Strategy::MinimumSize).ok()??;
        Some(self.filled(&solution))
    }

    /// True when the puzzle has exactly one completion.
    pub fn has_unique_solution(&self) -> bool {
        match solve_many(self, Strategy::MinimumSize, Some(2)) {
            Ok(solutions) => solutions.len() == 1,
            Err(_) => false,
        }
    }

    /// Copy of this grid with a solution's placements written in.
    pub fn filled(&self, solution: &Solution<Placement>) -> Sudoku {
        let mut grid = *self;
        for placement in &solution.rows {
            grid.cells[placement.row][placement.col] = placement.digit;
        }
        grid
    }
}

impl Problem for Sudoku {
    type RowId = Placement;

    fn constraints(&self) -> usize {
        4 * CELLS
    }

    /// One candidate row per admissible digit per cell: a given cell emits a
    /// single row, a blank cell nine.
    fn generate_rows<F>(&self, mut emit: F)
    where
        F: FnMut(Placement, &[usize]),
    {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let given = self.cells[row][col];
                for digit in 1..=9u8 {
                    if given != 0 && digit != given {
                        continue;
                    }
                    let d = (digit - 1) as usize;
                    let b = (row / 3) * 3 + col / 3;
                    let columns = [
                        row * SIZE + col,
                        CELLS + row * SIZE + d,
                        2 * CELLS + col * SIZE + d,
                        3 * CELLS + b * SIZE + d,
                    ];
                    emit(Placement { row, col, digit }, &columns);
                }
            }
        }
    }
}

impl fmt::Display for Sudoku {
    /// Nine lines of nine characters, `.` for blanks.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for &digit in cells {
                match digit {
                    0 => write!(f, ".")?,
                    _ => write!(f, "{}", digit)?,
                }
            }
        }
        Ok(())
    }
}

/// Naive random puzzle generator.
///
/// Produces a completed grid by seeding the top row with a shuffled
/// permutation of the digits and solving, then blanks random cells down to
/// the requested number of clues. No attempt is made to keep the solution
/// unique; that is what makes it naive.
#[derive(Debug)]
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A generator with a fixed seed produces the same sequence of puzzles
    /// on every run.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a puzzle with `clues` givens (capped at 81). Returns `None`
    /// only if no completed grid could be produced.
    pub fn generate(&mut self, clues: usize) -> Option<Sudoku> {
        let clues = clues.min(CELLS);
        let mut puzzle = self.filled_grid()?;

        let mut positions: Vec<(usize, usize)> = (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .collect();
        positions.shuffle(&mut self.rng);

        let mut remaining = CELLS;
        for (row, col) in positions {
            if remaining == clues {
                break;
            }
            puzzle.cells[row][col] = 0;
            remaining -= 1;
        }
        Some(puzzle)
    }

    /// A random completed grid. Any permutation of the top row extends to a
    /// full grid, so the solve is expected to succeed.
    fn filled_grid(&mut self) -> Option<Sudoku> {
        let mut seeded = Sudoku::empty();
        let mut digits: Vec<u8> = (1..=9).collect();
        digits.shuffle(&mut self.rng);
        for (col, &digit) in digits.iter().enumerate() {
            seeded.cells[0][col] = digit;
        }
        seeded.solve()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
