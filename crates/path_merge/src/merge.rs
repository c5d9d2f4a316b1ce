use approx::abs_diff_eq;
use log::{debug, trace};
use lyon::math::Point;
use shared::Tolerance;
use strum_macros::Display;

use crate::command::PathCommand;
use crate::path::Path;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct MergeOptions {
    /// How far apart the target's last point and the source's first point may
    /// be while still counting as continuous. Exact equality by default.
    pub tolerance: Tolerance,
}

impl MergeOptions {
    pub fn new(tolerance: Tolerance) -> Self {
        MergeOptions { tolerance }
    }

    /// Both points must be present. A missing point never counts as
    /// continuous.
    pub fn is_continuous(&self, last: Option<Point>, first: Option<Point>) -> bool {
        match (last, first) {
            (Some(last), Some(first)) => self.points_match(last, first),
            _ => false,
        }
    }

    fn points_match(&self, a: Point, b: Point) -> bool {
        if self.tolerance.is_exact() {
            return a == b;
        }
        let epsilon = *self.tolerance;
        abs_diff_eq!(a.x, b.x, epsilon = epsilon) && abs_diff_eq!(a.y, b.y, epsilon = epsilon)
    }
}

/// What happened to the source's leading `MoveTo`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum MergeOutcome {
    /// It was dropped and the source continues the target's open subpath.
    Welded,
    /// Every source command was appended as is.
    Disjoint,
}

impl Path {
    /// Appends `source` to this path, comparing endpoints exactly.
    pub fn merge(&mut self, source: &Path) -> MergeOutcome {
        self.merge_with(source, &MergeOptions::default())
    }

    /// Appends every command of `source` in order. The source's leading
    /// `MoveTo` is dropped when this path's last point and the source's first
    /// point are continuous; any later `MoveTo` is always kept.
    pub fn merge_with(&mut self, source: &Path, options: &MergeOptions) -> MergeOutcome {
        let last = self.last_point();
        let first = source.first_point();
        let continuous = options.is_continuous(last, first);
        let mut outcome = MergeOutcome::Disjoint;

        self.reserve(source.len());
        for (index, command) in source.iter().enumerate() {
            trace!("replaying {} at source index {}", command, index);
            match *command {
                PathCommand::MoveTo(to) => {
                    if index == 0 && continuous {
                        outcome = MergeOutcome::Welded;
                        continue;
                    }
                    self.move_to(to);
                }
                PathCommand::LineTo(to) => self.line_to(to),
                PathCommand::QuadCurveTo { ctrl, to } => self.quad_curve_to(ctrl, to),
                PathCommand::CubicCurveTo { ctrl1, ctrl2, to } => {
                    self.cubic_curve_to(ctrl1, ctrl2, to)
                }
                PathCommand::ClosePath => self.close(),
            }
        }

        debug!(
            "merged {} commands: {} (last point {:?}, first point {:?}, tolerance {})",
            source.len(),
            outcome,
            last,
            first,
            options.tolerance
        );
        outcome
    }

    /// Value form of [`Path::merge`].
    pub fn merged(mut self, source: &Path) -> Path {
        self.merge(source);
        self
    }
}
