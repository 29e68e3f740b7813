//! Process-wide number-ring registry.
//!
//! `Z`, `Q`, `R` and `C` are created exactly once, on first access, and are
//! read-only afterwards. Every accessor hands out a clone of the same `Arc`
//! handle, so handle identity doubles as structure identity for these
//! rings and for the null modules keyed on them.
//!
//! `Z_n` handles are interned per modulus: the first request for a modulus
//! inserts its ring, later requests clone that entry. Entries are never
//! replaced or removed.

use super::{Ring, RingKind};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// The fixed number rings in canonical order.
pub(crate) struct Registry {
    pub(crate) integers: Ring,
    pub(crate) rationals: Ring,
    pub(crate) reals: Ring,
    pub(crate) complexes: Ring,
}

impl Registry {
    fn build() -> Self {
        tracing::debug!("initializing number-ring registry");
        Self {
            integers: Ring::from_kind(RingKind::Integers),
            rationals: Ring::from_kind(RingKind::Rationals),
            reals: Ring::from_kind(RingKind::Reals),
            complexes: Ring::from_kind(RingKind::Complexes),
        }
    }

    /// Iterates over the four registered rings in canonical order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Ring> {
        [&self.integers, &self.rationals, &self.reals, &self.complexes].into_iter()
    }
}

/// The registry, built on first use.
pub(crate) fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::build)
}

/// The interned `Z_modulus`; the caller guarantees `modulus > 1`.
pub(crate) fn modular(modulus: i64) -> Ring {
    static MODULAR: OnceLock<RwLock<HashMap<i64, Ring>>> = OnceLock::new();
    let table = MODULAR.get_or_init(RwLock::default);
    if let Some(ring) = table.read().unwrap_or_else(PoisonError::into_inner).get(&modulus) {
        return ring.clone();
    }
    let mut entries = table.write().unwrap_or_else(PoisonError::into_inner);
    entries
        .entry(modulus)
        .or_insert_with(|| {
            tracing::trace!(modulus, "interning modular ring");
            Ring::from_kind(RingKind::Modular(modulus))
        })
        .clone()
}
