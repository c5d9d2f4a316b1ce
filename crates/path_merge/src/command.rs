use lyon::math::Point;
use strum_macros::{Display, IntoStaticStr};

/// A single drawing command. The set is closed: every consumer matches it
/// exhaustively.
#[derive(Debug, Copy, Clone, PartialEq, Display, IntoStaticStr)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadCurveTo { ctrl: Point, to: Point },
    CubicCurveTo { ctrl1: Point, ctrl2: Point, to: Point },
    /// Closes back to the start of the enclosing subpath.
    ClosePath,
}

impl PathCommand {
    /// The point the pen lands on after this command, if the command carries
    /// one. Control points are never returned.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(to) | PathCommand::LineTo(to) => Some(to),
            PathCommand::QuadCurveTo { to, .. } => Some(to),
            PathCommand::CubicCurveTo { to, .. } => Some(to),
            PathCommand::ClosePath => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.into()
    }

    pub fn is_move(&self) -> bool {
        matches!(self, PathCommand::MoveTo(_))
    }

    pub(crate) fn contains_nan(&self) -> bool {
        let nan = |p: &Point| p.x.is_nan() || p.y.is_nan();
        match self {
            PathCommand::MoveTo(to) | PathCommand::LineTo(to) => nan(to),
            PathCommand::QuadCurveTo { ctrl, to } => nan(ctrl) || nan(to),
            PathCommand::CubicCurveTo { ctrl1, ctrl2, to } => nan(ctrl1) || nan(ctrl2) || nan(to),
            PathCommand::ClosePath => false,
        }
    }
}
