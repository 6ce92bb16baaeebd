use std::collections::HashSet;

use super::grid::{Cell, Grid};
use rand::Rng;
use thiserror::Error;

/// Errors the simulation can raise
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The occupied set covers the whole grid; there is no cell left for food
    #[error("no unoccupied cell left on the grid to place food")]
    ExhaustedSpace,
}

/// The food pellet: a single occupied cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Place the initial pellet on a random cell outside `occupied`
    pub fn spawn(
        grid: &Grid,
        occupied: &HashSet<Cell>,
        rng: &mut impl Rng,
    ) -> Result<Self, GameError> {
        Ok(Self {
            position: sample_free_cell(grid, occupied, rng)?,
        })
    }

    /// Move the pellet to a random cell outside `occupied`
    ///
    /// Mutates `position` only; on failure the previous position is kept.
    pub fn relocate(
        &mut self,
        grid: &Grid,
        occupied: &HashSet<Cell>,
        rng: &mut impl Rng,
    ) -> Result<(), GameError> {
        self.position = sample_free_cell(grid, occupied, rng)?;
        Ok(())
    }
}

/// Rejection-sample a cell of the grid that is not in `occupied`
fn sample_free_cell(
    grid: &Grid,
    occupied: &HashSet<Cell>,
    rng: &mut impl Rng,
) -> Result<Cell, GameError> {
    // Exact cover check up front; the sample loop below must terminate.
    if occupied.len() >= grid.cell_count() {
        return Err(GameError::ExhaustedSpace);
    }

    loop {
        let cell = grid.random_cell(rng);
        if !occupied.contains(&cell) {
            return Ok(cell);
        }
    }
}
