use anyhow::{Ok, Result};
use lyon::math::Point;

use crate::command::PathCommand;
use crate::error::PathError;

/// Tracks the pen while a command sequence is replayed.
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct DrawState(State);

impl DrawState {
    pub fn current(&self) -> State {
        self.0
    }

    pub fn position(&self) -> Option<Point> {
        match self.0 {
            State::Inactive => None,
            State::Active(a) | State::Closed(a) => Some(a.first),
            State::Commands(c) => Some(c.current),
        }
    }

    pub fn apply(&mut self, index: usize, command: &PathCommand) -> Result<()> {
        match *command {
            PathCommand::MoveTo(at) => self.make_active(at),
            PathCommand::LineTo(to)
            | PathCommand::QuadCurveTo { to, .. }
            | PathCommand::CubicCurveTo { to, .. } => self.make_commands(index, command, to),
            PathCommand::ClosePath => self.make_closed(index, command),
        }
    }

    pub fn make_active(&mut self, at: Point) -> Result<()> {
        // A move always starts a fresh subpath, whatever came before.
        self.0 = State::Active(Active::new(at));
        assert!(matches!(self.0, State::Active(_)));
        Ok(())
    }

    pub fn make_commands(&mut self, index: usize, command: &PathCommand, to: Point) -> Result<()> {
        let result = match self.0 {
            State::Inactive => Err(PathError::MissingMoveTo {
                index,
                kind: command.kind(),
            }
            .into()),
            State::Active(s) | State::Closed(s) => {
                let c: Commands = s.into();
                self.0 = State::Commands(c.with_current(to));
                Ok(())
            }
            State::Commands(current) => {
                self.0 = State::Commands(current.with_current(to));
                Ok(())
            }
        }?;
        assert!(matches!(self.0, State::Commands(_)));
        Ok(result)
    }

    pub fn make_closed(&mut self, index: usize, command: &PathCommand) -> Result<()> {
        let result = match self.0 {
            State::Inactive => Err(PathError::MissingMoveTo {
                index,
                kind: command.kind(),
            }
            .into()),
            State::Active(s) | State::Closed(s) => {
                self.0 = State::Closed(s);
                Ok(())
            }
            State::Commands(c) => {
                self.0 = State::Closed(Active::new(c.first));
                Ok(())
            }
        }?;
        assert!(matches!(self.0, State::Closed(_)));
        Ok(result)
    }
}

impl From<Active> for Commands {
    fn from(state: Active) -> Self {
        Commands::new(state.first)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Active {
    pub(crate) first: Point,
}

impl Active {
    pub fn new(first: Point) -> Self {
        Active { first }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Commands {
    pub(crate) current: Point,
    pub(crate) first: Point,
}

impl Commands {
    pub fn new(first: Point) -> Self {
        Commands {
            current: first,
            first,
        }
    }

    pub fn with_current(self, current: Point) -> Self {
        Commands { current, ..self }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum State {
    Inactive,
    /// A subpath was started but nothing was drawn yet.
    Active(Active),
    Commands(Commands),
    /// The last subpath was closed; the pen is back at its start.
    Closed(Active),
}

impl State {
    pub fn is_open(&self) -> bool {
        matches!(self, State::Active(_) | State::Commands(_))
    }
}

impl Default for State {
    fn default() -> Self {
        State::Inactive
    }
}
