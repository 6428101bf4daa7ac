//! Structural "is instance of kind" checks.
//!
//! A candidate matches a kind when it carries the realm marker and either is
//! the root check, declares that kind, or declares a kind whose name chain
//! reaches it. Only names are compared, so values built by another copy of
//! the taxonomy classify exactly like local ones.

use crate::error::{Result, TaxonomyError};
use crate::kind::Kind;
use crate::realm::{ErrorLike, REALM_MARKER};
use tracing::{error, trace};

/// Upper bound on parent hops while walking a declared chain. The deepest
/// local kind is three hops from the root; anything near this limit is a loop.
pub const MAX_CHAIN_HOPS: usize = 100;

/// True when the candidate was produced by some copy of the taxonomy.
pub fn is_tagged(candidate: &dyn ErrorLike) -> bool {
    candidate.realm() == Some(REALM_MARKER)
}

/// Classify `candidate` against the kind called `kind_name`.
///
/// # Errors
/// Returns [`TaxonomyError::ChainLoop`] when the candidate's declared chain
/// does not terminate within [`MAX_CHAIN_HOPS`]. A corrupt chain is never
/// reported as a plain mismatch.
pub fn matches(candidate: &dyn ErrorLike, kind_name: &str) -> Result<bool> {
    if !is_tagged(candidate) {
        trace!(target_kind = kind_name, "candidate carries no realm marker");
        return Ok(false);
    }

    if kind_name == Kind::ROOT.name() {
        return Ok(true);
    }

    let declared = candidate.kind_name();
    if declared == Some(kind_name) || candidate.type_name() == kind_name {
        return Ok(true);
    }

    let start = declared.unwrap_or_else(|| candidate.type_name());
    let mut current = start;
    let mut hops = 0;

    while let Some(parent) = candidate.parent_kind(current) {
        if parent == kind_name {
            trace!(start, target_kind = kind_name, hops, "matched through declared chain");
            return Ok(true);
        }

        hops += 1;
        if hops >= MAX_CHAIN_HOPS {
            error!(start, target_kind = kind_name, hops, "declared kind chain does not terminate");
            return Err(TaxonomyError::ChainLoop {
                start: start.to_string(),
                target: kind_name.to_string(),
                hops,
            });
        }
        current = parent;
    }

    Ok(false)
}

/// [`matches`] against a local kind.
pub fn matches_kind(candidate: &dyn ErrorLike, kind: Kind) -> Result<bool> {
    matches(candidate, kind.name())
}

/// The most specific local kind the candidate belongs to.
///
/// Kinds unknown to this copy are resolved through the candidate's own chain
/// until a known name shows up, so a newer copy's leaf still lands in the
/// right category here.
pub fn resolve_kind(candidate: &dyn ErrorLike) -> Result<Option<Kind>> {
    if !is_tagged(candidate) {
        return Ok(None);
    }

    let start = candidate
        .kind_name()
        .unwrap_or_else(|| candidate.type_name());
    let mut current = start;

    for _ in 0..MAX_CHAIN_HOPS {
        if let Some(kind) = Kind::from_name(current) {
            return Ok(Some(kind));
        }
        match candidate.parent_kind(current) {
            Some(parent) => current = parent,
            None => return Ok(Some(Kind::ROOT)),
        }
    }

    error!(start, "declared kind chain does not terminate");
    Err(TaxonomyError::ChainLoop {
        start: start.to_string(),
        target: Kind::ROOT.name().to_string(),
        hops: MAX_CHAIN_HOPS,
    })
}
