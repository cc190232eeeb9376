use std::io::{self, Write};

use log::warn;
use mineclicker_core::{Candidate, Coord2, GameConfig, GameEngine, MineSpec};

/// A single turn typed by the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Sweep(Coord2),
    Flag(Coord2),
    Quit,
}

impl Command {
    /// `"q"`, `"f<row> <col>"` or `"<row> <col>"`, anything else is `None`.
    pub fn parse(engine: &GameEngine, line: &str) -> Option<Self> {
        let line = line.trim();
        if line == "q" {
            return Some(Self::Quit);
        }
        match line.strip_prefix('f') {
            Some(coords) => engine.parse_location(coords).map(Self::Flag),
            None => engine.parse_location(line).map(Self::Sweep),
        }
    }
}

/// Yes/no answer to the end-of-round question, `None` when unclear.
pub fn parse_answer(text: &str) -> Option<bool> {
    match text.trim() {
        "Yes" | "yes" | "Y" | "y" => Some(true),
        "No" | "no" | "N" | "n" => Some(false),
        _ => None,
    }
}

/// Parses `row,col` tokens, fields after the second comma are ignored.
/// A single malformed token rejects the whole list.
pub fn parse_mine_list<S: AsRef<str>>(tokens: &[S]) -> Option<Vec<Candidate>> {
    tokens
        .iter()
        .map(|token| {
            let mut fields = token.as_ref().split(',').map(str::trim);
            let row = fields.next()?.parse().ok()?;
            let col = fields.next()?.parse().ok()?;
            Some((row, col))
        })
        .collect()
}

/// Picks fixed mines from start-up locations, falling back to a random board with a
/// warning on `output` when the list is malformed.
pub fn mine_spec<S, W>(locations: &[S], config: GameConfig, output: &mut W) -> io::Result<MineSpec>
where
    S: AsRef<str>,
    W: Write,
{
    if locations.is_empty() {
        return Ok(MineSpec::Random(config.mines));
    }
    if let Some(candidates) = parse_mine_list(locations) {
        return Ok(MineSpec::Explicit(candidates));
    }

    warn!("Discarding malformed mine list");
    writeln!(
        output,
        "\n!Something about your list of mine locations wasn't right, launching a random game!"
    )?;
    Ok(MineSpec::Random(config.mines))
}
