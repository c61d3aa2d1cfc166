use std::fmt::Display;

/// Failure to canonically serialize an item payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerializationError {
    #[error("payload nests deeper than {limit} levels (circular reference?)")]
    DepthExceeded { limit: usize },
    #[error("non-finite float has no canonical form")]
    NonFiniteFloat,
    #[error("map key must be a string, char, integer or bool")]
    KeyMustBeString,
    #[error("integer {0} does not fit in 64 bits")]
    IntegerOutOfRange(String),
    #[error("unsupported value: {0}")]
    Unsupported(String),
}

impl serde::ser::Error for SerializationError {
    fn custom<T: Display>(msg: T) -> Self {
        SerializationError::Unsupported(msg.to_string())
    }
}
