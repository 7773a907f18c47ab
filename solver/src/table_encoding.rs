//! Binary persistence for [`SolutionTable`].
//!
//! Layout: a `u32` entry count, then per entry a 24-byte facelet key, a
//! `u32` byte length, and the path as space-joined move tokens. All
//! integers are little-endian.

use std::str;

use fxhash::FxHashMap;
use pocket_core::{CubeState, FACELET_COUNT, format_alg, parse_alg};

use crate::table::SolutionTable;

#[must_use]
pub fn encode_table(table: &SolutionTable) -> Vec<u8> {
    let mut stream = Vec::new();

    stream.extend_from_slice(&(table.len() as u32).to_le_bytes());

    for (canonical, path) in table.iter() {
        stream.extend_from_slice(canonical.to_string().as_bytes());

        let alg = format_alg(path);
        stream.extend_from_slice(&(alg.len() as u32).to_le_bytes());
        stream.extend_from_slice(alg.as_bytes());
    }

    stream
}

/// Decodes a table and returns `None` if the data is truncated or contains
/// an unparseable key or move token.
#[must_use]
pub fn decode_table(mut data: &[u8]) -> Option<SolutionTable> {
    let (entry_count, new_data) = data.split_first_chunk::<4>()?;
    data = new_data;

    let mut paths = FxHashMap::default();

    for _ in 0..u32::from_le_bytes(*entry_count) {
        let (key, new_data) = data.split_first_chunk::<FACELET_COUNT>()?;
        data = new_data;
        let canonical: CubeState = str::from_utf8(key).ok()?.parse().ok()?;

        let (alg_len, new_data) = data.split_first_chunk::<4>()?;
        data = new_data;

        let alg_len = u32::from_le_bytes(*alg_len) as usize;
        if data.len() < alg_len {
            return None;
        }
        let (alg, new_data) = data.split_at(alg_len);
        data = new_data;

        let path = parse_alg(str::from_utf8(alg).ok()?).ok()?;
        paths.insert(canonical, path);
    }

    Some(SolutionTable::from_paths(paths))
}
