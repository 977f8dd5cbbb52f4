//! Roots-of-unity tables and a thread-safe cache for them.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use longarith_core::ArithError;

use crate::field::NttParams;

/// The first `n/2` powers of the principal `n`-th root of unity, `n = 2^log_len`.
///
/// With `inverse` set the table holds powers of the inverse root instead.
/// A length-1 transform needs no twiddles and gets an empty table.
pub fn roots_of_unity_half(
    params: &NttParams,
    log_len: u32,
    inverse: bool,
) -> Result<Vec<u64>, ArithError> {
    let w = params.principal_root(log_len, inverse)?;
    let half = (1usize << log_len) / 2;
    let mut table = Vec::with_capacity(half);
    let mut power = 1u64;
    for _ in 0..half {
        table.push(power);
        power = params.mul(power, w);
    }
    Ok(table)
}

/// Cache key for a roots table.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct RootKey {
    pub log_len: u32,
    pub inverse: bool,
}

/// Thread-safe cache of roots tables for one field.
///
/// When full, the cache is cleared before inserting.
pub struct RootCache {
    tables: Mutex<HashMap<RootKey, Arc<Vec<u64>>>>,
    max_entries: usize,
}

impl RootCache {
    /// Create a cache holding at most `max_entries` tables.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            tables: Mutex::new(HashMap::new()),
            max_entries: max_entries.max(1),
        }
    }

    pub fn get(&self, key: &RootKey) -> Option<Arc<Vec<u64>>> {
        self.tables.lock().get(key).cloned()
    }

    pub fn put(&self, key: RootKey, table: Arc<Vec<u64>>) {
        let mut tables = self.tables.lock();
        if tables.len() >= self.max_entries && !tables.contains_key(&key) {
            tables.clear();
        }
        tables.insert(key, table);
    }

    /// Fetch the table for `key`, building it from `params` on a miss.
    ///
    /// The lock is not held while a table is built; two threads missing on
    /// the same key both build it and the later insert wins.
    pub fn get_or_compute(
        &self,
        params: &NttParams,
        key: RootKey,
    ) -> Result<Arc<Vec<u64>>, ArithError> {
        if let Some(table) = self.get(&key) {
            return Ok(table);
        }
        let table = Arc::new(roots_of_unity_half(params, key.log_len, key.inverse)?);
        self.put(key, Arc::clone(&table));
        Ok(table)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.lock().is_empty()
    }

    pub fn clear(&self) {
        self.tables.lock().clear();
    }
}

impl Default for RootCache {
    fn default() -> Self {
        Self::new(32)
    }
}

impl std::fmt::Debug for RootCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootCache")
            .field("entries", &self.len())
            .field("max_entries", &self.max_entries)
            .finish()
    }
}
