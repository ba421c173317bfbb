//! Station name ↔ id table.

use rustc_hash::FxHashMap;

use troon_core::StationId;

use crate::{NetworkError, NetworkResult};

/// Maps station names to dense [`StationId`]s and back.
///
/// Ids are assigned sequentially from 0 in insertion order, which for a
/// loaded scenario is the order the names appear in the input.
#[derive(Debug, Default, Clone)]
pub struct StationDirectory {
    names: Vec<String>,
    ids:   FxHashMap<String, StationId>,
}

impl StationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` and return its id.
    ///
    /// # Errors
    ///
    /// [`NetworkError::DuplicateStation`] if the name is already present.
    pub fn insert(&mut self, name: &str) -> NetworkResult<StationId> {
        if self.ids.contains_key(name) {
            return Err(NetworkError::DuplicateStation(name.to_owned()));
        }
        let id = StationId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Look up a station by name.
    pub fn id(&self, name: &str) -> Option<StationId> {
        self.ids.get(name).copied()
    }

    /// Like [`id`](Self::id) but fails with [`NetworkError::UnknownStation`].
    pub fn resolve(&self, name: &str) -> NetworkResult<StationId> {
        self.id(name)
            .ok_or_else(|| NetworkError::UnknownStation(name.to_owned()))
    }

    /// Display name of `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this directory.
    #[inline]
    pub fn name(&self, id: StationId) -> &str {
        &self.names[id.index()]
    }

    pub fn contains(&self, id: StationId) -> bool {
        id.index() < self.names.len()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (StationId(i as u32), name.as_str()))
    }
}
