use thiserror::Error;

pub type ArResult<T> = Result<T, ArError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
