/// Environment failures while generating a ULID.
///
/// These are fatal to the single call that hit them and are not retried
/// internally; retry policy belongs to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// The wall clock could not be read, or reads before the Unix epoch.
    #[error("could not read the system clock")]
    Clock,

    /// The secure random source could not produce bytes.
    #[error("could not generate random values")]
    Entropy,
}
