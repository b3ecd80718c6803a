use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    rc::Rc,
    str::FromStr,
};

use thiserror::Error;

use crate::board::TileId;
use crate::cli::Cli;
use crate::controller::GameController;
use crate::view::GameView;

const HELP: &str = "\
commands:
  a1..c3 or 0..8   mark a tile
  jump <n>, j <n>  go back to move n
  dump             print the game state
  help, ?          show this
  quit, q          leave";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Mark(TileId),
    Jump(usize),
    Dump,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("unrecognised command `{0}`")]
pub struct ParseCommandError(String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCommandError(s.trim().to_string());
        let mut words = s.split_whitespace();
        let command = match (words.next(), words.next()) {
            (Some("jump" | "j"), Some(n)) => Command::Jump(n.parse().map_err(|_| err())?),
            (Some("dump"), None) => Command::Dump,
            (Some("help" | "?"), None) => Command::Help,
            (Some("quit" | "q"), None) => Command::Quit,
            (Some(tile), None) => Command::Mark(tile.parse().map_err(|_| err())?),
            _ => return Err(err()),
        };
        if words.next().is_some() {
            return Err(err());
        }
        Ok(command)
    }
}

pub fn play(cli: &Cli) -> anyhow::Result<()> {
    let stdin = io::stdin();
    run(stdin.lock(), io::stdout(), cli)
}

/// Reads commands from `input` until it ends or the player quits, redrawing
/// the game on `output` after every change.
pub fn run(input: impl BufRead, mut output: impl Write, cli: &Cli) -> anyhow::Result<()> {
    let mut controller = GameController::new();
    let pending: Rc<RefCell<Option<GameView>>> = Rc::default();
    let sink = Rc::clone(&pending);
    controller.subscribe(move |view| *sink.borrow_mut() = Some(view.clone()));

    render(&mut output, &controller.view(), !cli.hide_history)?;
    writeln!(output, "type `help` for commands")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Mark(tile)) => {
                controller.on_cell_clicked(tile).ok();
            }
            Ok(Command::Jump(index)) => {
                if controller.on_history_entry_clicked(index).is_err() {
                    writeln!(output, "Invalid input! Try again.")?;
                }
            }
            Ok(Command::Dump) => writeln!(output, "{}", controller.view().to_ron()?)?,
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::Quit) => break,
            Err(_) => writeln!(output, "Invalid input! Try again.")?,
        }

        if let Some(view) = pending.borrow_mut().take() {
            render(&mut output, &view, !cli.hide_history)?;
        }
    }

    output.flush()?;
    Ok(())
}

fn render(output: &mut impl Write, view: &GameView, show_history: bool) -> io::Result<()> {
    writeln!(output, "\n{}\n", view.board)?;
    writeln!(output, "{}", view.status)?;
    if let Some(conclusion) = view.conclusion {
        writeln!(output, "{conclusion}")?;
    }
    if show_history {
        for entry in &view.moves {
            let marker = if entry.index == view.current_move { '>' } else { ' ' };
            writeln!(output, "{marker} {entry}")?;
        }
    }
    write!(output, "> ")?;
    output.flush()
}
