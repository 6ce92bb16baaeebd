use super::{
    config::GameConfig,
    food::{Food, GameError},
    grid::Grid,
    snake::Snake,
};
use rand::rngs::ThreadRng;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// The snake ate the food this tick
    pub ate_food: bool,
    /// The snake bit itself and the run was reset
    pub collided: bool,
}

/// Complete simulation state, the snapshot handed to the render sink
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Food,
    /// Completed ticks since simulation start; survives run resets
    pub ticks: u64,
}

/// The engine that owns per-tick orchestration
pub struct GameEngine {
    grid: Grid,
    rng: ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grid: Grid::new(config.grid_width, config.grid_height),
            rng: rand::thread_rng(),
        }
    }

    /// Build the initial state: single-cell snake at the center, food
    /// placed outside the body
    pub fn reset(&mut self) -> Result<GameState, GameError> {
        let snake = Snake::new(self.grid.center());
        let food = Food::spawn(&self.grid, &snake.occupied(), &mut self.rng)?;

        Ok(GameState {
            grid: self.grid,
            snake,
            food,
            ticks: 0,
        })
    }

    /// Advance the simulation by one tick
    ///
    /// The order is fixed: buffered input is applied first, then the snake
    /// moves, then exactly one of the two head checks resolves. A food match
    /// takes precedence and skips the self-collision check for that tick.
    pub fn tick(&mut self, state: &mut GameState) -> Result<TickOutcome, GameError> {
        state.snake.apply_pending_direction();
        state.snake.step(&self.grid);

        let mut outcome = TickOutcome {
            ate_food: false,
            collided: false,
        };

        if state.snake.head() == state.food.position {
            state.snake.grow();
            let occupied = state.snake.occupied();
            state.food.relocate(&self.grid, &occupied, &mut self.rng)?;
            outcome.ate_food = true;
        } else if state.snake.self_collision() {
            self.reset_run(state)?;
            outcome.collided = true;
        }

        state.ticks += 1;
        Ok(outcome)
    }

    /// Reset the run in place: snake back to one cell at the center, food
    /// moved off the new body
    ///
    /// Used by the collision branch and by the manual restart key. The tick
    /// counter is left alone; it tracks simulation time, not run time.
    pub fn reset_run(&mut self, state: &mut GameState) -> Result<(), GameError> {
        state.snake.reset(self.grid.center());
        let occupied = state.snake.occupied();
        state.food.relocate(&self.grid, &occupied, &mut self.rng)?;
        Ok(())
    }
}
