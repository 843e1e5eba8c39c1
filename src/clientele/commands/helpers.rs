use crate::error::{ClienteleError, Result};
use crate::index::Index;
use crate::model::Client;

/// Resolves one index against the visible snapshot.
pub fn resolve_index(view: &[Client], index: Index) -> Result<Client> {
    view.get(index.zero_based())
        .cloned()
        .ok_or(ClienteleError::InvalidIndex(index))
}

/// Resolves every index against the visible snapshot, in the given order,
/// before the caller touches anything. Duplicate indices are rejected up
/// front: multi-target commands replace or remove by value, and the same
/// target twice would break their all-or-nothing guarantee.
pub fn resolve_indices(view: &[Client], indices: &[Index]) -> Result<Vec<(Index, Client)>> {
    let mut sorted = indices.to_vec();
    sorted.sort();
    if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
        return Err(ClienteleError::DuplicateIndices);
    }

    indices
        .iter()
        .map(|index| {
            view.get(index.zero_based())
                .map(|client| (*index, client.clone()))
                .ok_or(ClienteleError::InvalidIndex(*index))
        })
        .collect()
}
