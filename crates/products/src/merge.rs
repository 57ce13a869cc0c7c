//! Local/remote catalog merge.

use std::collections::HashSet;

use shopfront_core::Entity;

/// Concatenate `local` then `remote`, dropping remote entries whose id is
/// already present locally.
///
/// Only collisions against the local segment are removed; the remote segment
/// is trusted to be internally unique.
pub fn merge_catalogs<E: Entity>(local: Vec<E>, remote: Vec<E>) -> Vec<E> {
    let existing: HashSet<E::Id> = local.iter().map(|e| e.id().clone()).collect();
    let mut merged = local;
    merged.extend(remote.into_iter().filter(|e| !existing.contains(e.id())));
    merged
}
