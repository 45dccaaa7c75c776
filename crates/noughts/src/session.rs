//! Interactive game loop over any reader and writer.

use anyhow::{Context, Result};
use derive_getters::Getters;
use noughts_engine::{GameEngine, GameStatus, Position, Square};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Results of the games finished in this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Score {
    /// Games won by the human.
    human_wins: u32,
    /// Games won by the automated player.
    automated_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} - {} Computer ({} drawn)",
            self.human_wins, self.automated_wins, self.draws
        )
    }
}

/// One terminal session: any number of games against the same opponent.
pub struct Session<R = StdRng> {
    engine: GameEngine<R>,
    score: Score,
    show_indices: bool,
    json: bool,
}

enum Command {
    Play(Position),
    Reset,
    Quit,
}

impl<R: Rng> Session<R> {
    /// Wraps an engine for interactive play.
    pub fn new(engine: GameEngine<R>, show_indices: bool, json: bool) -> Self {
        Self {
            engine,
            score: Score::default(),
            show_indices,
            json,
        }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Plays until the input ends or the player quits, returning the score.
    #[instrument(skip_all)]
    pub fn run(&mut self, mut input: impl BufRead, mut out: impl Write) -> Result<Score> {
        let human = self.engine.automated_player().opponent();
        writeln!(
            out,
            "You are {}. Enter 0-8 or a square name, r to reset, q to quit.",
            human
        )?;
        self.automated_reply(&mut out)?;

        loop {
            self.render(&mut out)?;

            if self.engine.status().is_over() {
                write!(out, "Play again? [y/r to replay, anything else quits] ")?;
                out.flush()?;
                match read_line(&mut input)?.as_deref().map(wants_replay) {
                    Some(true) => self.new_game(&mut out)?,
                    _ => break,
                }
                continue;
            }

            write!(out, "Your move: ")?;
            out.flush()?;
            let Some(line) = read_line(&mut input)? else {
                break;
            };

            match parse_command(&line) {
                Some(Command::Quit) => break,
                Some(Command::Reset) => self.new_game(&mut out)?,
                Some(Command::Play(pos)) => match self.engine.apply_move(pos.to_index()) {
                    Ok(played) => {
                        debug!(%played, "Human move accepted");
                        self.record_if_over(&mut out)?;
                        self.automated_reply(&mut out)?;
                    }
                    Err(e) => writeln!(out, "{}", e)?,
                },
                None => writeln!(out, "Unrecognised input: {:?}", line)?,
            }
        }

        writeln!(out, "{}", self.score)?;
        info!(score = %self.score, "Session finished");
        Ok(self.score)
    }

    fn new_game(&mut self, out: &mut impl Write) -> Result<()> {
        self.engine.reset();
        writeln!(out, "New game.")?;
        self.automated_reply(out)
    }

    fn automated_reply(&mut self, out: &mut impl Write) -> Result<()> {
        if !self.engine.is_automated_turn() {
            return Ok(());
        }
        let played = self
            .engine
            .apply_automated_move()
            .context("Automated player failed to move")?;
        writeln!(out, "Computer plays {}.", played.position)?;
        self.record_if_over(out)
    }

    fn record_if_over(&mut self, out: &mut impl Write) -> Result<()> {
        let automated = self.engine.automated_player();
        let tally = match (self.engine.status(), self.engine.winner()) {
            (GameStatus::InProgress, _) => return Ok(()),
            (GameStatus::Drawn, _) => &mut self.score.draws,
            (GameStatus::Won, Some(winner)) if winner == automated => {
                &mut self.score.automated_wins
            }
            (GameStatus::Won, Some(_)) => &mut self.score.human_wins,
            (GameStatus::Won, None) => {
                warn!("Won game without a winner");
                return Ok(());
            }
        };
        *tally += 1;

        if self.json {
            let snapshot = serde_json::to_string(&self.engine.snapshot())?;
            writeln!(out, "{}", snapshot)?;
        }
        Ok(())
    }

    fn render(&self, out: &mut impl Write) -> Result<()> {
        let board = self.engine.board();
        let line = self.engine.winning_line();

        writeln!(out)?;
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Position::from_index(row * 3 + col))
                .map(|pos| {
                    let symbol = match board.get(pos) {
                        Square::Occupied(player) => player.to_string(),
                        Square::Empty if self.show_indices => pos.to_index().to_string(),
                        Square::Empty => " ".to_string(),
                    };
                    if line.is_some_and(|l| l.contains(pos)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect();
            writeln!(out, "{}", cells.join("|"))?;
            if row < 2 {
                writeln!(out, "---+---+---")?;
            }
        }

        writeln!(out, "{}", self.status_text())?;
        Ok(())
    }

    fn status_text(&self) -> String {
        let automated = self.engine.automated_player();
        match (self.engine.status(), self.engine.winner()) {
            (GameStatus::Won, Some(winner)) if winner == automated => {
                format!("{} wins. Computer wins!", winner)
            }
            (GameStatus::Won, Some(winner)) => format!("{} wins. You win!", winner),
            (GameStatus::Won, None) => "Game over".to_string(),
            (GameStatus::Drawn, _) => "Draw.".to_string(),
            (GameStatus::InProgress, _) => format!("{} to move", self.engine.current_player()),
        }
    }
}

fn parse_command(line: &str) -> Option<Command> {
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" => Some(Command::Quit),
        "r" | "reset" => Some(Command::Reset),
        other => Position::from_label_or_number(other).map(Command::Play),
    }
}

/// `y`/`yes` answer the prompt; `r`/`reset` work here as they do mid-game.
fn wants_replay(answer: &str) -> bool {
    matches!(
        answer.to_ascii_lowercase().as_str(),
        "y" | "yes" | "r" | "reset"
    )
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
