use std::time::Duration;

/// One parsed subtitle block.
///
/// `index` is the sequence number exactly as written in the file. It is not
/// checked for uniqueness or contiguity, and the position of a subtitle in a
/// parsed sequence is always its position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    pub index: i64,
    pub appear: Duration,
    pub disappear: Duration,
    pub text: String,
}
