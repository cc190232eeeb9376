use ndarray::Array2;
use std::fmt::{self, Display};

pub const PLAY_LEGEND: &str = ".: unexplored, F: player flag";
pub const FINAL_LEGEND: &str = ".: unexplored, M: mine, X: detonated mine!";

/// Grid with column numbers on top and row numbers on the left.
pub struct Board<'a, T>(pub &'a Array2<T>);

impl<T: Display> Display for Board<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (_, cols) = self.0.dim();

        write!(f, "  ")?;
        for col in 0..cols {
            write!(f, " {col:>2}")?;
        }
        writeln!(f)?;

        for (row, cells) in self.0.rows().into_iter().enumerate() {
            write!(f, "{row:>2}")?;
            for cell in cells {
                write!(f, " {:>2}", cell.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mineclicker_core::GameEngine;

    #[test]
    fn renders_player_view() {
        let mut engine = GameEngine::with_mines((2, 3), [(0, 0)]);
        engine.sweep((1, 2)).unwrap();
        engine.toggle_flag((0, 0)).unwrap();

        let text = Board(&engine.player_view()).to_string();

        assert_eq!(text, "    0  1  2\n 0  F  .  .\n 1  .  .  0\n");
    }

    #[test]
    fn renders_final_grid() {
        let mut engine = GameEngine::with_mines((1, 2), [(0, 1)]);
        engine.sweep((0, 1)).unwrap();

        let text = Board(engine.final_grid().unwrap()).to_string();

        assert_eq!(text, "    0  1\n 0  .  X\n");
    }
}
