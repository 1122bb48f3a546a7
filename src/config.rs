//! Construction-time sizing for [`BidiHashMap`](crate::bidi_hash_map::BidiHashMap).

use crate::error::Error;
use crate::error::Result;

/// Bucket count used when no capacity is requested.
pub const DEFAULT_CAPACITY: usize = 8;

/// Smallest bucket count either table may have.
pub const MINIMUM_CAPACITY: usize = 8;

/// Load factor used when none is requested.
pub const DEFAULT_LOAD_FACTOR: f32 = 1.0;

/// Exclusive lower bound for the load factor.
pub const MINIMUM_LOAD_FACTOR: f32 = 0.0;

/// Initial capacity and load factor for a new map.
///
/// # Examples
///
/// ```
/// use tether_bimap::Config;
///
/// let config = Config::default().capacity(100).load_factor(0.75);
/// let config = config.validate().unwrap();
/// assert_eq!(config.bucket_count(), 128);
///
/// assert!(Config::default().load_factor(f32::NAN).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Requested bucket count. Rounded up to a power of two no smaller than
    /// [`MINIMUM_CAPACITY`].
    pub capacity: usize,
    /// Ratio of mappings to buckets above which both tables double.
    pub load_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl Config {
    /// Sets the requested capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the load factor.
    pub fn load_factor(mut self, load_factor: f32) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks the load factor, returning the configuration unchanged if it is
    /// usable.
    pub fn validate(self) -> Result<Self> {
        if self.load_factor.is_nan() || self.load_factor <= MINIMUM_LOAD_FACTOR {
            return Err(Error::InvalidConfiguration {
                load_factor: self.load_factor,
            });
        }
        Ok(self)
    }

    /// The bucket count a table built from this configuration starts with.
    pub fn bucket_count(&self) -> usize {
        self.capacity
            .max(MINIMUM_CAPACITY)
            .checked_next_power_of_two()
            .unwrap_or_else(|| panic!("capacity overflow: {}", self.capacity))
    }
}
