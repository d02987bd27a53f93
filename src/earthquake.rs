//! Earthquake records, ordered by magnitude so they can be stored in a
//! [`BinarySearchTree`][crate::tree::BinarySearchTree].
//!
//! # Ordering and equality
//!
//! An `Earthquake` is compared **by magnitude only**, and equality is narrowed to match: two
//! quakes with the same magnitude are equal even when their locations or years differ. Keeping
//! `==` consistent with `cmp` means the tree's duplicate detection agrees with the type's own
//! equality. The flip side is that a tree keeps only the first quake it sees at any given
//! magnitude.
//!
//! ```
//! use naive_bst::earthquake::Earthquake;
//!
//! let tohoku = Earthquake::new("Tohoku, Japan", 9.0, 2011).unwrap();
//! let other = Earthquake::new("Somewhere else", 9.0, 1900).unwrap();
//!
//! assert_eq!(tohoku, other);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an [`Earthquake`] can't be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EarthquakeError {
    /// NaN and infinite magnitudes have no sensible place in a magnitude ordering.
    #[error("magnitude must be a finite number, got {0}")]
    NonFiniteMagnitude(f64),
}

/// A single earthquake event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawEarthquake")]
pub struct Earthquake {
    location: String,
    magnitude: f64,
    year: i32,
}

/// What a record looks like on the wire before it has been validated.
#[derive(Deserialize)]
struct RawEarthquake {
    location: String,
    magnitude: f64,
    year: i32,
}

impl TryFrom<RawEarthquake> for Earthquake {
    type Error = EarthquakeError;

    fn try_from(raw: RawEarthquake) -> Result<Self, Self::Error> {
        Self::new(raw.location, raw.magnitude, raw.year)
    }
}

impl Earthquake {
    /// Creates a new `Earthquake`, rejecting non-finite magnitudes. Any location is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::earthquake::{Earthquake, EarthquakeError};
    ///
    /// let haiti = Earthquake::new("Haiti", 7.0, 2010).unwrap();
    /// assert_eq!(haiti.location(), "Haiti");
    ///
    /// assert!(matches!(
    ///     Earthquake::new("Nowhere", f64::NAN, 2000),
    ///     Err(EarthquakeError::NonFiniteMagnitude(_))
    /// ));
    /// ```
    pub fn new(
        location: impl Into<String>,
        magnitude: f64,
        year: i32,
    ) -> Result<Self, EarthquakeError> {
        let location = location.into();
        if !magnitude.is_finite() {
            return Err(EarthquakeError::NonFiniteMagnitude(magnitude));
        }

        Ok(Self {
            location,
            magnitude,
            year,
        })
    }

    /// Where the earthquake happened.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Its magnitude on the Richter scale.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The year it happened. Negative years are BCE.
    pub fn year(&self) -> i32 {
        self.year
    }
}

impl Ord for Earthquake {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude.total_cmp(&other.magnitude)
    }
}

impl PartialOrd for Earthquake {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Earthquake {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Earthquake {}

impl Hash for Earthquake {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // `total_cmp` equality is bitwise equality for finite floats.
        self.magnitude.to_bits().hash(state);
    }
}

impl fmt::Display for Earthquake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{:.1} {} ({})", self.magnitude, self.location, self.year)
    }
}
