use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use mineclicker_core::{GameConfig, GameEngine, MineSpec};

use crate::command::{Command, parse_answer};
use crate::render::{Board, FINAL_LEGEND, PLAY_LEGEND};

/// Line-based game loop: plays rounds until the player declines another one or input ends.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: GameConfig,
    spec: MineSpec,
    seed: Option<u64>,
    round: u64,
}

enum Turn {
    Played,
    EndOfInput,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// With a fixed `seed`, round `n` uses `seed + n` so replays stay reproducible.
    pub fn new(input: R, output: W, config: GameConfig, spec: MineSpec, seed: Option<u64>) -> Self {
        Self {
            input,
            output,
            config,
            spec,
            seed,
            round: 0,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let mut engine = self.new_engine();
            writeln!(self.output, "\nStarting game!")?;

            while !(engine.won() || engine.lost() || engine.quit_requested()) {
                if let Turn::EndOfInput = self.take_turn(&mut engine)? {
                    debug!("Input closed mid-round");
                    return self.farewell();
                }
            }

            if !self.ask_continue(&engine)? {
                return self.farewell();
            }
        }
    }

    fn new_engine(&mut self) -> GameEngine {
        let seed = match self.seed {
            Some(seed) => seed.wrapping_add(self.round),
            None => rand::random(),
        };
        self.round += 1;
        info!("Starting round {} with seed {}", self.round, seed);
        GameEngine::from_spec(self.config, self.spec.clone(), seed)
    }

    fn take_turn(&mut self, engine: &mut GameEngine) -> Result<Turn> {
        writeln!(self.output, "\n{}", Board(&engine.player_view()))?;
        writeln!(self.output, "{PLAY_LEGEND}\n")?;
        writeln!(self.output, "0 0 is top left")?;
        writeln!(
            self.output,
            "there are {} mines in the grid",
            engine.number_of_mines()
        )?;
        writeln!(
            self.output,
            "to sweep a tile, enter the coordinates $row $col like 3 4"
        )?;
        writeln!(self.output, "to flag/unflag a tile, enter f$row $col like f3 4")?;
        writeln!(self.output, "to quit to menu, enter q")?;

        let Some(line) = self.read_line()? else {
            return Ok(Turn::EndOfInput);
        };

        match Command::parse(engine, &line) {
            Some(Command::Quit) => engine.request_quit(),
            Some(Command::Sweep(coords)) => {
                let outcome = engine.sweep(coords)?;
                debug!("Sweep {:?}: {:?}", coords, outcome);
            }
            Some(Command::Flag(coords)) => {
                let outcome = engine.toggle_flag(coords)?;
                debug!("Flag {:?}: {:?}", coords, outcome);
            }
            None => {
                writeln!(
                    self.output,
                    "\n!!!No action taken as your command was not understood!!!"
                )?;
                return Ok(Turn::Played);
            }
        }

        if let Ok(grid) = engine.final_grid() {
            writeln!(self.output, "\n{}{FINAL_LEGEND}", Board(grid))?;
        }
        Ok(Turn::Played)
    }

    fn ask_continue(&mut self, engine: &GameEngine) -> Result<bool> {
        let question = if engine.won() {
            "\nYou won!!! would you like to try again? (Yes/No)"
        } else if engine.lost() {
            "\nYou lost :( Would you like to try again? (Yes/No)"
        } else {
            "\nYou quit, would you like to setup a new game? (Yes/No)"
        };
        writeln!(self.output, "{question}")?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if let Some(answer) = parse_answer(&line) {
                return Ok(answer);
            }
            writeln!(
                self.output,
                "\nYour answer was not clear, would you like to start a new game? (Yes/No)"
            )?;
        }
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output, "\nThanks for playing :)\n")?;
        self.output.flush().context("flushing output")
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush().context("flushing output")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading player input")?;
        Ok((read > 0).then_some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(config: GameConfig, spec: MineSpec, input: &str) -> String {
        let mut output = Vec::new();
        Shell::new(input.as_bytes(), &mut output, config, spec, Some(5))
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn two_by_two() -> (GameConfig, MineSpec) {
        (GameConfig::new((2, 2), 1), MineSpec::Explicit(vec![(0, 0)]))
    }

    #[test]
    fn winning_round_then_leaving() {
        let (config, spec) = two_by_two();

        let transcript = play(config, spec, "0 1\n1 0\n1 1\nno\n");

        assert!(transcript.contains("Starting game!"));
        assert!(transcript.contains("there are 1 mines in the grid"));
        assert!(transcript.contains("You won!!!"));
        assert!(transcript.contains(FINAL_LEGEND));
        assert!(transcript.contains(" 0  M  1"));
        assert!(transcript.ends_with("Thanks for playing :)\n\n"));
    }

    #[test]
    fn junk_and_unclear_answers_are_retried() {
        let (config, spec) = two_by_two();

        let transcript = play(config, spec, "zzz\n0 0\nmaybe\nn\n");

        assert!(transcript.contains("No action taken as your command was not understood"));
        assert!(transcript.contains("You lost :("));
        assert!(transcript.contains(" 0  X  ."));
        assert!(transcript.contains("Your answer was not clear"));
        assert!(transcript.contains("Thanks for playing :)"));
    }

    #[test]
    fn quitting_offers_a_new_game() {
        let (config, spec) = two_by_two();

        let transcript = play(config, spec, "q\ny\nq\nN\n");

        assert_eq!(transcript.matches("Starting game!").count(), 2);
        assert_eq!(transcript.matches("You quit").count(), 2);
        assert!(!transcript.contains(FINAL_LEGEND));
    }

    #[test]
    fn flags_show_in_the_view() {
        let (config, spec) = two_by_two();

        let transcript = play(config, spec, "f1 1\n");

        assert!(transcript.contains(" 1  .  F"));
        assert!(transcript.ends_with("Thanks for playing :)\n\n"));
    }

    #[test]
    fn random_rounds_use_configured_size() {
        let config = GameConfig::new((3, 4), 2);

        let transcript = play(config, MineSpec::Random(2), "q\nno\n");

        assert!(transcript.contains("    0  1  2  3\n"));
        assert!(transcript.contains("there are 2 mines in the grid"));
    }
}
