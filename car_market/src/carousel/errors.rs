use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScrollError {
    #[error("Scroll index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}
