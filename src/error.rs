/// Errors produced by the formatters that can reject their input.
///
/// Only Roman numeral conversion can fail; every other formatter degrades to
/// partially formatted or unchanged text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid roman numeral: {0:?}")]
    InvalidNumeral(String),
}
