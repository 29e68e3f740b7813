//! Persistence descriptor for number-ring modules.
//!
//! A descriptor is the minimal set of attributes a storage layer needs to
//! rebuild a module: the type token, the dimension and, for `Z_n`
//! families, the modulus.
//!
//! ```
//! use composer_algebra::prelude::*;
//!
//! let m = Ring::modular(12).unwrap().free_module(3).unwrap();
//! let d = m.descriptor().unwrap();
//! assert_eq!(d.type_name(), "ZnFreeModule");
//! assert_eq!(d.modulus(), Some(12));
//! assert_eq!(d.restore(), Some(m));
//! ```

use super::Module;
use crate::ring::Ring;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type token plus reconstruction attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModuleDescriptor {
    type_name: String,
    dimension: usize,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    modulus: Option<i64>,
}

impl ModuleDescriptor {
    /// A descriptor from raw attributes.
    #[must_use]
    pub fn new(type_name: impl Into<String>, dimension: usize, modulus: Option<i64>) -> Self {
        Self {
            type_name: type_name.into(),
            dimension,
            modulus,
        }
    }

    /// The structure's type token.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Number of ring components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Modulus of a `Z_n` family.
    #[must_use]
    pub fn modulus(&self) -> Option<i64> {
        self.modulus
    }

    /// Rebuilds the described module.
    ///
    /// Returns `None` for an unknown type token, a missing modulus, a
    /// modulus of 1 or less, or a `…Ring` token with a dimension other
    /// than 1.
    #[must_use]
    pub fn restore(&self) -> Option<Module> {
        let (prefix, is_ring) = match self.type_name.strip_suffix("FreeModule") {
            Some(p) => (p, false),
            None => (self.type_name.strip_suffix("Ring")?, true),
        };
        let ring = match prefix {
            "Z" => Ring::integers(),
            "Q" => Ring::rationals(),
            "R" => Ring::reals(),
            "C" => Ring::complexes(),
            "Zn" => match Ring::modular(self.modulus?) {
                Ok(r) => r,
                Err(err) => {
                    tracing::debug!(%err, "descriptor carries an invalid modulus");
                    return None;
                }
            },
            _ => {
                tracing::debug!(type_name = %self.type_name, "unknown descriptor type");
                return None;
            }
        };
        if is_ring && self.dimension != 1 {
            return None;
        }
        ring.free_module(self.dimension)
    }
}
