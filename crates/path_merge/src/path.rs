use anyhow::{Ok, Result};
use lyon::math::Point;
use std::iter::FromIterator;
use std::slice::Iter;

use crate::command::PathCommand;
use crate::draw_state::DrawState;
use crate::error::PathError;

/// An ordered list of drawing commands holding one or more subpaths.
///
/// Commands are stored as given: `push` does not check that the path is well
/// formed, so degenerate inputs (an empty path, a leading `ClosePath`) can be
/// represented and merged. Use [`Path::validate`] to check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Path { commands: vec![] }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn move_to(&mut self, to: Point) {
        self.push(PathCommand::MoveTo(to));
    }

    pub fn line_to(&mut self, to: Point) {
        self.push(PathCommand::LineTo(to));
    }

    pub fn quad_curve_to(&mut self, ctrl: Point, to: Point) {
        self.push(PathCommand::QuadCurveTo { ctrl, to });
    }

    pub fn cubic_curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.push(PathCommand::CubicCurveTo { ctrl1, ctrl2, to });
    }

    pub fn close(&mut self) {
        self.push(PathCommand::ClosePath);
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.commands.reserve(additional);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Iterates in drawing order; call `.rev()` for reverse traversal order.
    pub fn iter(&self) -> Iter<'_, PathCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn subpaths(&self) -> usize {
        self.commands.iter().filter(|c| c.is_move()).count()
    }

    /// The first point of the path when `end` is false, the last point when
    /// `end` is true.
    pub fn endpoint(&self, end: bool) -> Option<Point> {
        if end {
            self.last_point()
        } else {
            self.first_point()
        }
    }

    /// Only the first command is looked at. A leading `ClosePath` has no point
    /// of its own, so such a path has no first point.
    pub fn first_point(&self) -> Option<Point> {
        self.commands.first()?.end_point()
    }

    /// The point the reversed path would start at. A trailing `ClosePath`
    /// resolves to the start of the subpath it closes.
    pub fn last_point(&self) -> Option<Point> {
        let mut commands = self.commands.iter().rev();
        match commands.next()? {
            PathCommand::ClosePath => commands.find_map(|c| match *c {
                PathCommand::MoveTo(at) => Some(at),
                _ => None,
            }),
            last => last.end_point(),
        }
    }

    /// Pen position after every command has been drawn, or `None` when the
    /// path is empty or malformed.
    pub fn current_position(&self) -> Option<Point> {
        self.replay().ok()?.position()
    }

    /// Checks that every drawing command has a subpath to extend and that no
    /// coordinate is NaN.
    pub fn validate(&self) -> Result<()> {
        for (index, command) in self.commands.iter().enumerate() {
            if command.contains_nan() {
                return Err(PathError::NotANumber {
                    index,
                    kind: command.kind(),
                }
                .into());
            }
        }
        self.replay()?;
        Ok(())
    }

    fn replay(&self) -> Result<DrawState> {
        let mut state = DrawState::default();
        for (index, command) in self.commands.iter().enumerate() {
            state.apply(index, command)?;
        }
        Ok(state)
    }

    /// Returns the same geometry traversed backwards.
    ///
    /// Subpaths come out in reverse order, each starting with a `MoveTo` at
    /// its old end point and curves keeping their shape with swapped control
    /// points. Closed subpaths stay closed and keep their start point.
    /// Drawing commands that precede any `MoveTo` have no start to walk back
    /// to and are left out.
    pub fn reversed(&self) -> Path {
        let mut reversed = Path::with_capacity(self.len() + 1);
        for subpath in self.split_subpaths().iter().rev() {
            subpath.reverse_into(&mut reversed);
        }
        reversed
    }

    fn split_subpaths(&self) -> Vec<Subpath> {
        let mut subpaths: Vec<Subpath> = vec![];
        for command in self.commands.iter() {
            match *command {
                PathCommand::MoveTo(at) => subpaths.push(Subpath::new(at)),
                PathCommand::ClosePath => {
                    if let Some(subpath) = subpaths.last_mut() {
                        subpath.closed = true;
                    }
                }
                PathCommand::LineTo(_)
                | PathCommand::QuadCurveTo { .. }
                | PathCommand::CubicCurveTo { .. } => {
                    let last = match subpaths.last() {
                        Some(last) => last,
                        None => continue,
                    };
                    // Drawing after a close starts a new subpath at the same start.
                    if last.closed {
                        let start = last.start;
                        subpaths.push(Subpath::new(start));
                    }
                    if let Some(subpath) = subpaths.last_mut() {
                        let from = subpath.end();
                        subpath.segments.push(Segment {
                            from,
                            command: *command,
                        });
                    }
                }
            }
        }
        subpaths
    }
}

struct Subpath {
    start: Point,
    segments: Vec<Segment>,
    closed: bool,
}

impl Subpath {
    fn new(start: Point) -> Self {
        Subpath {
            start,
            segments: vec![],
            closed: false,
        }
    }

    fn end(&self) -> Point {
        self.segments
            .last()
            .and_then(|s| s.command.end_point())
            .unwrap_or(self.start)
    }

    fn reverse_into(&self, out: &mut Path) {
        let end = self.end();
        if self.closed {
            out.move_to(self.start);
            // The implicit closing edge becomes the first explicit one.
            if end != self.start {
                out.line_to(end);
            }
        } else {
            out.move_to(end);
        }

        let mut segments = self.segments.iter().rev().peekable();
        while let Some(segment) = segments.next() {
            let is_last = segments.peek().is_none();
            if self.closed && is_last && matches!(segment.command, PathCommand::LineTo(_)) {
                // ClosePath draws this edge.
                break;
            }
            out.push(segment.reversed());
        }

        if self.closed {
            out.close();
        }
    }
}

struct Segment {
    from: Point,
    command: PathCommand,
}

impl Segment {
    fn reversed(&self) -> PathCommand {
        match self.command {
            PathCommand::LineTo(_) => PathCommand::LineTo(self.from),
            PathCommand::QuadCurveTo { ctrl, .. } => PathCommand::QuadCurveTo {
                ctrl,
                to: self.from,
            },
            PathCommand::CubicCurveTo { ctrl1, ctrl2, .. } => PathCommand::CubicCurveTo {
                ctrl1: ctrl2,
                ctrl2: ctrl1,
                to: self.from,
            },
            PathCommand::MoveTo(_) | PathCommand::ClosePath => {
                unreachable!("subpath segments are always drawing commands")
            }
        }
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Self {
        Path { commands }
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Path {
            commands: iter.into_iter().collect(),
        }
    }
}

impl Extend<PathCommand> for Path {
    fn extend<I: IntoIterator<Item = PathCommand>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl IntoIterator for Path {
    type Item = PathCommand;
    type IntoIter = std::vec::IntoIter<PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::command::PathCommand::*;
    use crate::test_utils::{assert_relative_eq_pt_slice, end_points};
    use lyon::math::point;

    fn square() -> Path {
        Path::from(vec![
            MoveTo(point(0.0, 0.0)),
            LineTo(point(10.0, 0.0)),
            LineTo(point(10.0, 10.0)),
            LineTo(point(0.0, 10.0)),
            ClosePath,
        ])
    }

    #[test]
    fn test_empty_path_has_no_endpoints() {
        let path = Path::new();
        assert_eq!(path.endpoint(false), None);
        assert_eq!(path.endpoint(true), None);
        assert_eq!(path.current_position(), None);
        assert!(path.reversed().is_empty());
    }

    #[test]
    fn test_first_point_by_command_kind() {
        let path = Path::from(vec![LineTo(point(1.0, 2.0))]);
        assert_eq!(path.first_point(), Some(point(1.0, 2.0)));
        let path = Path::from(vec![QuadCurveTo {
            ctrl: point(5.0, 5.0),
            to: point(1.0, 2.0),
        }]);
        assert_eq!(path.first_point(), Some(point(1.0, 2.0)));
        let path = Path::from(vec![CubicCurveTo {
            ctrl1: point(5.0, 5.0),
            ctrl2: point(6.0, 6.0),
            to: point(1.0, 2.0),
        }]);
        assert_eq!(path.first_point(), Some(point(1.0, 2.0)));
        let path = Path::from(vec![ClosePath, MoveTo(point(1.0, 2.0))]);
        assert_eq!(path.first_point(), None);
    }

    #[test]
    fn test_first_point_ignores_appended_commands() {
        let mut path = Path::new();
        path.move_to(point(3.0, 4.0));
        let before = path.endpoint(false);
        path.line_to(point(9.0, 9.0));
        path.move_to(point(-1.0, -1.0));
        assert_eq!(path.endpoint(false), before);
    }

    #[test]
    fn test_last_point() {
        let mut path = Path::new();
        path.move_to(point(0.0, 0.0));
        path.cubic_curve_to(point(1.0, 0.0), point(2.0, 1.0), point(3.0, 3.0));
        assert_eq!(path.last_point(), Some(point(3.0, 3.0)));
        path.move_to(point(7.0, 7.0));
        assert_eq!(path.last_point(), Some(point(7.0, 7.0)));
        assert_eq!(square().last_point(), Some(point(0.0, 0.0)));
    }

    #[test]
    fn test_last_point_of_close_without_move() {
        let path = Path::from(vec![LineTo(point(1.0, 1.0)), ClosePath]);
        assert_eq!(path.last_point(), None);
    }

    #[test]
    fn test_subpaths_and_iteration() {
        let mut path = square();
        path.move_to(point(20.0, 20.0));
        path.line_to(point(30.0, 20.0));
        assert_eq!(path.subpaths(), 2);
        assert_eq!(path.len(), 7);
        assert_eq!(path.iter().next(), Some(&MoveTo(point(0.0, 0.0))));
        assert_eq!(path.iter().rev().next(), Some(&LineTo(point(30.0, 20.0))));
        let collected: Path = path.clone().into_iter().collect();
        assert_eq!(collected, path);
    }

    #[test]
    fn test_current_position() {
        let mut path = square();
        assert_eq!(path.current_position(), Some(point(0.0, 0.0)));
        path.line_to(point(5.0, 5.0));
        assert_eq!(path.current_position(), Some(point(5.0, 5.0)));
        let malformed = Path::from(vec![LineTo(point(1.0, 1.0))]);
        assert_eq!(malformed.current_position(), None);
    }

    #[test]
    fn test_validate() {
        assert!(square().validate().is_ok());
        assert!(Path::new().validate().is_ok());

        let err = Path::from(vec![LineTo(point(1.0, 1.0))])
            .validate()
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<PathError>(),
            Some(&PathError::MissingMoveTo {
                index: 0,
                kind: "LineTo"
            })
        );

        let err = Path::from(vec![MoveTo(point(0.0, 0.0)), LineTo(point(f32::NAN, 1.0))])
            .validate()
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<PathError>(),
            Some(&PathError::NotANumber {
                index: 1,
                kind: "LineTo"
            })
        );
    }

    #[test]
    fn test_reverse_open_curves() {
        let path = Path::from(vec![
            MoveTo(point(0.0, 0.0)),
            LineTo(point(1.0, 0.0)),
            QuadCurveTo {
                ctrl: point(2.0, 1.0),
                to: point(3.0, 0.0),
            },
            CubicCurveTo {
                ctrl1: point(4.0, 1.0),
                ctrl2: point(5.0, 2.0),
                to: point(6.0, 0.0),
            },
        ]);
        let expected = Path::from(vec![
            MoveTo(point(6.0, 0.0)),
            CubicCurveTo {
                ctrl1: point(5.0, 2.0),
                ctrl2: point(4.0, 1.0),
                to: point(3.0, 0.0),
            },
            QuadCurveTo {
                ctrl: point(2.0, 1.0),
                to: point(1.0, 0.0),
            },
            LineTo(point(0.0, 0.0)),
        ]);
        assert_eq!(path.reversed(), expected);
        assert_eq!(path.reversed().reversed(), path);
    }

    #[test]
    fn test_reverse_closed_subpath_keeps_start() {
        let reversed = square().reversed();
        let expected = Path::from(vec![
            MoveTo(point(0.0, 0.0)),
            LineTo(point(0.0, 10.0)),
            LineTo(point(10.0, 10.0)),
            LineTo(point(10.0, 0.0)),
            ClosePath,
        ]);
        assert_eq!(reversed, expected);
    }

    #[test]
    fn test_reverse_orders_subpaths_backwards() {
        let mut path = square();
        path.move_to(point(20.0, 20.0));
        path.line_to(point(30.0, 25.0));
        let reversed = path.reversed();
        assert_eq!(reversed.subpaths(), 2);
        assert_relative_eq_pt_slice(
            &end_points(&reversed),
            &[
                point(30.0, 25.0),
                point(20.0, 20.0),
                point(0.0, 0.0),
                point(0.0, 10.0),
                point(10.0, 10.0),
                point(10.0, 0.0),
            ],
        );
    }

    #[test]
    fn test_reverse_keeps_nan_coordinates() {
        let path = Path::from(vec![MoveTo(point(0.0, 0.0)), LineTo(point(f32::NAN, 1.0))]);
        let reversed = path.reversed();
        assert_eq!(reversed.len(), 2);
        match reversed.commands()[0] {
            MoveTo(at) => {
                assert!(at.x.is_nan());
                assert_eq!(at.y, 1.0);
            }
            other => panic!("expected a MoveTo, got {:?}", other),
        }
        assert_eq!(reversed.commands()[1], LineTo(point(0.0, 0.0)));
    }

    #[test]
    fn test_reversed_starts_at_last_point() {
        let mut after_close = square();
        after_close.line_to(point(4.0, 4.0));
        let paths = vec![
            square(),
            after_close,
            Path::from(vec![MoveTo(point(1.0, 1.0))]),
            Path::from(vec![
                MoveTo(point(0.0, 0.0)),
                LineTo(point(1.0, 1.0)),
                MoveTo(point(8.0, 8.0)),
            ]),
            Path::from(vec![
                MoveTo(point(0.0, 0.0)),
                QuadCurveTo {
                    ctrl: point(1.0, 1.0),
                    to: point(2.0, 0.0),
                },
                ClosePath,
            ]),
        ];
        for path in paths {
            assert!(path.validate().is_ok());
            assert_eq!(path.reversed().first_point(), path.last_point(), "{:?}", path);
        }
    }
}
