/// Failures raised by single-element access and by mutations.
///
/// Range operations never produce one of these; they clamp instead.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CollectionError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("collection is empty")]
    EmptyCollection,

    #[error("`{operation}` is not supported on a frozen collection")]
    UnsupportedOperation { operation: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T, E = CollectionError> = std::result::Result<T, E>;
