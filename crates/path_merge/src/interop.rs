use anyhow::{Ok, Result};
use lyon::path::PathEvent;

use crate::command::PathCommand;
use crate::draw_state::{DrawState, State};
use crate::path::Path;

impl Path {
    /// Builds a lyon path for rendering.
    ///
    /// Fails on paths that do not pass [`Path::validate`]. Drawing after a
    /// `ClosePath` without a new `MoveTo` begins a lyon subpath at the closed
    /// subpath's start.
    pub fn to_lyon(&self) -> Result<lyon::path::Path> {
        self.validate()?;

        let mut builder = lyon::path::Path::builder();
        let mut state = DrawState::default();
        for (index, command) in self.iter().enumerate() {
            let before = state.current();
            state.apply(index, command)?;
            let draws = !command.is_move() && command.end_point().is_some();
            if let (true, State::Closed(closed)) = (draws, before) {
                builder.begin(closed.first);
            }
            match *command {
                PathCommand::MoveTo(at) => {
                    if before.is_open() {
                        builder.end(false);
                    }
                    builder.begin(at);
                }
                PathCommand::LineTo(to) => {
                    builder.line_to(to);
                }
                PathCommand::QuadCurveTo { ctrl, to } => {
                    builder.quadratic_bezier_to(ctrl, to);
                }
                PathCommand::CubicCurveTo { ctrl1, ctrl2, to } => {
                    builder.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                PathCommand::ClosePath => {
                    if before.is_open() {
                        builder.end(true);
                    }
                }
            }
        }
        if state.current().is_open() {
            builder.end(false);
        }

        Ok(builder.build())
    }
}

impl From<&lyon::path::Path> for Path {
    fn from(path: &lyon::path::Path) -> Self {
        let mut commands = Path::new();
        for event in path.iter() {
            match event {
                PathEvent::Begin { at } => commands.move_to(at),
                PathEvent::Line { to, .. } => commands.line_to(to),
                PathEvent::Quadratic { ctrl, to, .. } => commands.quad_curve_to(ctrl, to),
                PathEvent::Cubic {
                    ctrl1, ctrl2, to, ..
                } => commands.cubic_curve_to(ctrl1, ctrl2, to),
                PathEvent::End { close: true, .. } => commands.close(),
                PathEvent::End { close: false, .. } => {}
            }
        }
        commands
    }
}
