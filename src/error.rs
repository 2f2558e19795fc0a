use thiserror::Error;

pub type Result<T, E = SortError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The input sequence was absent. Raised before any element is compared.
    #[error("{algorithm}: input sequence must not be absent")]
    InvalidArgument { algorithm: &'static str },

    #[error("unknown sorting algorithm `{0}`")]
    UnknownAlgorithm(String),
}
