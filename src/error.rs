//! Error type shared by both views of the map.

/// Errors returned by the bidirectional map.
///
/// Looking up or removing an absent key or value is not an error; those
/// operations return `None` or `false` instead.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// The load factor passed at construction is NaN or not above
    /// [`MINIMUM_LOAD_FACTOR`](crate::MINIMUM_LOAD_FACTOR).
    #[error("invalid load factor: {load_factor}")]
    InvalidConfiguration {
        /// The rejected load factor.
        load_factor: f32,
    },
    /// The map was structurally modified after the cursor was created.
    #[error("map was modified during iteration")]
    IteratorInvalidated,
    /// The cursor has already yielded every mapping.
    #[error("no more mappings to iterate")]
    IteratorExhausted,
    /// The requested sub-view is not provided; iterate with `entries()` or go
    /// through `inverse()` instead.
    #[error("unsupported view: {view}")]
    UnsupportedView {
        /// Name of the rejected sub-view.
        view: &'static str,
    },
}

/// Result alias for fallible map operations.
pub type Result<T> = core::result::Result<T, Error>;
