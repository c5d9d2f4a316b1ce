use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PathError {
    #[error("{kind} at command {index} has no subpath to continue; expected a MoveTo first")]
    MissingMoveTo { index: usize, kind: &'static str },
    #[error("{kind} at command {index} contains a NaN coordinate")]
    NotANumber { index: usize, kind: &'static str },
}
