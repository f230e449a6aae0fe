//! Variant atlas: maps each [`TileKind`] to the ordered list of visual
//! variants a renderer may draw for it.
//!
//! The atlas is built once by the consumer before generation. The generator
//! only draws a uniform random index into a kind's variant list; it never
//! interprets the identifiers themselves.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::TileKind;

/// Opaque identifier of one visual variant (a sprite, material, mesh...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantId(pub u16);

/// Errors raised while building or querying a [`TileAtlas`].
#[derive(Debug, Error)]
pub enum AtlasError {
    /// A kind was registered with an empty variant list.
    #[error("variant list for {0} must not be empty")]
    EmptyVariantList(TileKind),

    /// The same kind was registered twice.
    #[error("variants for {0} are already registered")]
    DuplicateKind(TileKind),

    /// A kind was queried (or required by a generation run) before any
    /// variants were registered for it.
    #[error("no variants registered for {0}")]
    MissingKind(TileKind),
}

/// Registry from material tag to a non-empty ordered list of [`VariantId`]s.
#[derive(Clone, Debug, Default)]
pub struct TileAtlas {
    variants: [Vec<VariantId>; TileKind::ALL.len()],
}

impl TileAtlas {
    /// Creates an empty atlas with no variants registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an atlas where every kind carries exactly one variant
    /// (`VariantId(0)`). Useful for headless consumers and tests that do
    /// not care about visuals.
    pub fn single_variant() -> Self {
        let mut atlas = Self::new();
        for kind in TileKind::ALL {
            atlas
                .register(kind, vec![VariantId(0)])
                .expect("fresh atlas accepts every kind once");
        }
        atlas
    }

    /// Registers the variant list for a kind.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::EmptyVariantList`] for an empty list and
    /// [`AtlasError::DuplicateKind`] if the kind was already registered.
    pub fn register(&mut self, kind: TileKind, variants: Vec<VariantId>) -> Result<(), AtlasError> {
        if variants.is_empty() {
            return Err(AtlasError::EmptyVariantList(kind));
        }
        if !self.variants[kind.index()].is_empty() {
            return Err(AtlasError::DuplicateKind(kind));
        }
        self.variants[kind.index()] = variants;
        Ok(())
    }

    /// Returns the ordered variant list for a kind.
    pub fn variants(&self, kind: TileKind) -> Result<&[VariantId], AtlasError> {
        let list = &self.variants[kind.index()];
        if list.is_empty() {
            return Err(AtlasError::MissingKind(kind));
        }
        Ok(list)
    }

    /// Number of variants registered for a kind.
    pub fn variant_count(&self, kind: TileKind) -> Result<usize, AtlasError> {
        self.variants(kind).map(<[VariantId]>::len)
    }

    /// Checks that every kind has at least one variant.
    ///
    /// Generation runs call this up front so an incomplete atlas fails
    /// before any tile is placed rather than mid-pass.
    pub fn validate_complete(&self) -> Result<(), AtlasError> {
        for kind in TileKind::ALL {
            if self.variants[kind.index()].is_empty() {
                return Err(AtlasError::MissingKind(kind));
            }
        }
        Ok(())
    }
}
