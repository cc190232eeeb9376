use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions, only fired by a sweep:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A single round: the grid, the flag and swept overlays, and the outcome.
///
/// Cell state only changes through [`GameEngine::sweep`], [`GameEngine::toggle_flag`] and
/// [`GameEngine::clear_swept_flags`]. A swept cell is never flagged.
#[derive(Clone, Debug, PartialEq)]
pub struct GameEngine {
    grid: Array2<Cell>,
    flagged: Array2<bool>,
    swept: Array2<bool>,
    number_of_mines: CellCount,
    state: GameState,
    quit: bool,
}

impl GameEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        let grid = mine_layout
            .mine_mask
            .map(|&is_mine| if is_mine { Cell::Mine } else { Cell::Unexplored });
        Self {
            grid,
            flagged: Array2::default(size.to_nd_index()),
            swept: Array2::default(size.to_nd_index()),
            number_of_mines: mine_layout.mine_count(),
            state: Default::default(),
            quit: false,
        }
    }

    /// Board with mines at the given locations, invalid ones are ignored.
    pub fn with_mines<I>(size: Coord2, candidates: I) -> Self
    where
        I: IntoIterator<Item = Candidate>,
    {
        Self::new(MineLayout::from_candidates(size, candidates))
    }

    /// Board with `config.mines` mines scattered from `seed`.
    pub fn random(config: GameConfig, seed: u64) -> Self {
        Self::new(RandomMineGenerator::new(seed).generate(config))
    }

    /// Explicit candidates only take the size from `config`, `seed` is unused for them.
    pub fn from_spec(config: GameConfig, spec: MineSpec, seed: u64) -> Self {
        let layout = match spec {
            MineSpec::Explicit(candidates) => FixedMineGenerator::new(candidates).generate(config),
            MineSpec::Random(mines) => {
                RandomMineGenerator::new(seed).generate(GameConfig { mines, ..config })
            }
        };
        Self::new(layout)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    pub fn lost(&self) -> bool {
        matches!(self.state, GameState::Lost)
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// The grid always comes from a [`MineLayout`], so both sides fit in a [`Coord`].
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.grid.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn number_of_mines(&self) -> CellCount {
        self.number_of_mines
    }

    /// Mines minus placed flags, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        let flags = self.flagged.iter().filter(|&&flag| flag).count();
        self.number_of_mines as isize - flags as isize
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.validate_coords(coords)
            .is_ok_and(|coords| self.flagged[coords.to_nd_index()])
    }

    pub fn is_swept(&self, coords: Coord2) -> bool {
        self.validate_coords(coords)
            .is_ok_and(|coords| self.swept[coords.to_nd_index()])
    }

    pub fn is_valid_location(&self, candidate: Candidate) -> bool {
        self.validate_location(candidate).is_some()
    }

    pub fn validate_location(&self, candidate: Candidate) -> Option<Coord2> {
        checked_coords(candidate, self.size())
    }

    /// Parses `"<row> <col>"` into a location on this board.
    ///
    /// Wrong token count, non-integer tokens and out of range locations all give `None`.
    pub fn parse_location(&self, text: &str) -> Option<Coord2> {
        let mut tokens = text.split_whitespace();
        let (Some(row), Some(col), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return None;
        };
        let candidate = (row.parse().ok()?, col.parse().ok()?);
        self.validate_location(candidate)
    }

    /// Sweeps a cell, detonating it if it holds a mine.
    pub fn sweep(&mut self, coords: Coord2) -> Result<SweepOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let index = coords.to_nd_index();
        if self.swept[index] {
            return Ok(SweepOutcome::NoChange);
        }

        self.swept[index] = true;
        self.flagged[index] = false;

        let outcome = match self.grid[index] {
            Cell::Mine => {
                self.grid[index] = Cell::Exploded;
                log::debug!("Swept mine at {:?}", coords);
                SweepOutcome::Exploded
            }
            _ => {
                let count = self.count_adjacent_mines(coords);
                self.grid[index] = Cell::Revealed(count);
                log::debug!("Swept cell at {:?}, mine count: {}", coords, count);
                SweepOutcome::Safe(count)
            }
        };

        match self.check_game_state() {
            GameState::Won => Ok(SweepOutcome::Won),
            _ => Ok(outcome),
        }
    }

    /// Flips the flag on an unswept cell, swept cells cannot be flagged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let index = coords.to_nd_index();
        if self.swept[index] {
            return Ok(FlagOutcome::NoChange);
        }

        let flagged = !self.flagged[index];
        self.flagged[index] = flagged;
        log::trace!("Flag at {:?} set to {}", coords, flagged);

        Ok(if flagged {
            FlagOutcome::Flagged
        } else {
            FlagOutcome::Unflagged
        })
    }

    pub fn clear_swept_flags(&mut self) {
        Zip::from(&mut self.flagged)
            .and(&self.swept)
            .for_each(|flagged, &swept| {
                if swept {
                    *flagged = false;
                }
            });
    }

    /// Number of undetonated mines among the up-to-8 neighbours of `coords`.
    pub fn sum_adjacent_mines(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.count_adjacent_mines(coords))
    }

    /// Re-derives the outcome from the grid. An exploded mine loses even if nothing is left
    /// unexplored, and a finished game never changes outcome.
    pub fn check_game_state(&mut self) -> GameState {
        if self.state.is_finished() {
            return self.state;
        }

        if self.grid.iter().any(|&cell| cell == Cell::Exploded) {
            self.state = GameState::Lost;
            log::debug!("Game lost");
        } else if !self.grid.iter().any(|&cell| cell == Cell::Unexplored) {
            self.state = GameState::Won;
            log::debug!("Game won");
        }

        self.state
    }

    pub fn request_quit(&mut self) {
        log::debug!("Quit requested");
        self.quit = true;
    }

    /// The board as the player may see it during play: mines and unexplored cells are
    /// hidden and flags are shown on top.
    pub fn player_view(&self) -> Array2<ViewCell> {
        Zip::from(&self.grid)
            .and(&self.flagged)
            .map_collect(|&cell, &flagged| ViewCell::mask(cell, flagged))
    }

    /// The unmasked grid, only available once the game is won or lost.
    pub fn final_grid(&self) -> Result<&Array2<Cell>> {
        if self.state.is_finished() {
            Ok(&self.grid)
        } else {
            Err(GameError::InProgress)
        }
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        self.grid
            .iter_neighbors(coords)
            .filter(|&pos| self.grid[pos.to_nd_index()] == Cell::Mine)
            .count() as u8
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
