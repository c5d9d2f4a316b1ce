use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToleranceError {
    #[error("tolerance must not be negative but was {0}")]
    Negative(f32),
    #[error("tolerance must be a number")]
    NotANumber,
}
