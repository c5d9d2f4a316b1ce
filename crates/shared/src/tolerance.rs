use anyhow::Result;
use derive_more::{Deref, Display, Into};

use crate::error::ToleranceError;

/// Largest per-component distance at which two points still count as the same
/// point. Zero means exact equality.
#[derive(Debug, Copy, Clone, Display, Into, PartialEq, PartialOrd, Deref)]
pub struct Tolerance(f32);

impl Tolerance {
    pub const EXACT: Tolerance = Tolerance(0.0);

    pub fn new(v: f32) -> Result<Self> {
        if v.is_nan() {
            return Err(ToleranceError::NotANumber.into());
        }
        if v < 0.0 {
            return Err(ToleranceError::Negative(v).into());
        }
        Ok(Tolerance(v))
    }

    pub fn is_exact(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::EXACT
    }
}
