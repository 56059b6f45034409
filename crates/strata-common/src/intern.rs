//! String interning: a bucket hash table over a single growing byte arena.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

use crate::define_id;

define_id!(
    /// Handle into a [`StringArena`]. Equal byte sequences always intern to
    /// the same id.
    pub struct StringId;
);

const SENTINEL: u32 = u32::MAX;
const INITIAL_BUCKETS: usize = 64;
const MAX_LOAD_FACTOR: usize = 2;

struct StringInfo {
    offset: u32,
    next: u32,
}

/// A single growing byte arena plus a side table of `(offset, next)` pairs
/// and a bucket hash table for deduplication.
///
/// `length(s) = offset(s+1) - offset(s) - 1`: every interned string is
/// stored NUL-terminated back to back, so the next string's start offset
/// (or the end of the byte arena, for the last string) minus one gives the
/// length without a separate length field.
pub struct StringArena {
    bytes: Vec<u8>,
    infos: Vec<StringInfo>,
    buckets: Vec<u32>,
}

impl StringArena {
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            infos: Vec::new(),
            buckets: vec![SENTINEL; INITIAL_BUCKETS],
        }
    }

    fn hash_str(s: &str) -> u64 {
        let mut hasher = FxHasher::default();
        s.hash(&mut hasher);
        hasher.finish()
    }

    /// Intern `s`, returning the existing handle if an equal string was
    /// already interned, or allocating a new one otherwise.
    pub fn intern(&mut self, s: &str) -> StringId {
        let hash = Self::hash_str(s);
        let bucket = (hash as usize) % self.buckets.len();

        let mut cur = self.buckets[bucket];
        while cur != SENTINEL {
            if self.str_at(cur) == s {
                return StringId(cur);
            }
            cur = self.infos[cur as usize].next;
        }

        let id = self.infos.len() as u32;
        let offset = self.bytes.len() as u32;
        self.bytes.extend_from_slice(s.as_bytes());
        self.bytes.push(0);
        self.infos.push(StringInfo {
            offset,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = id;

        if self.infos.len() > self.buckets.len() * MAX_LOAD_FACTOR {
            self.rehash();
        }

        StringId(id)
    }

    fn rehash(&mut self) {
        let n = self.infos.len();
        let hashes: Vec<u64> = (0..n).map(|id| Self::hash_str(self.str_at(id as u32))).collect();

        let mut buckets = vec![SENTINEL; self.buckets.len() * 2];
        for id in 0..n {
            let bucket = (hashes[id] as usize) % buckets.len();
            self.infos[id].next = buckets[bucket];
            buckets[bucket] = id as u32;
        }
        self.buckets = buckets;
    }

    fn infos_offsets_after(&self, id: usize) -> Option<u32> {
        self.infos.get(id + 1).map(|i| i.offset)
    }

    fn raw_end(bytes: &[u8], next_offset: &Option<u32>) -> usize {
        match next_offset {
            Some(o) => *o as usize - 1,
            None => bytes.len() - 1,
        }
    }

    fn str_at(&self, id: u32) -> &str {
        let start = self.infos[id as usize].offset as usize;
        let end = Self::raw_end(&self.bytes, &self.infos_offsets_after(id as usize));
        std::str::from_utf8(&self.bytes[start..end]).expect("interned bytes are always valid utf8")
    }

    /// Resolve a handle back to its string slice.
    pub fn resolve(&self, id: StringId) -> &str {
        self.str_at(id.0)
    }

    pub fn len(&self) -> usize {
        self.infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }
}

impl Default for StringArena {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed keyword spellings, interned once at startup so later phases can
/// compare by handle rather than by re-slicing source bytes.
pub struct Keywords {
    pub if_: StringId,
    pub while_: StringId,
    pub for_: StringId,
    pub return_: StringId,
    pub proc_: StringId,
    pub data_: StringId,
    pub array_: StringId,
    pub entity_: StringId,
}

impl Keywords {
    pub fn intern_all(strings: &mut StringArena) -> Self {
        Self {
            if_: strings.intern("if"),
            while_: strings.intern("while"),
            for_: strings.intern("for"),
            return_: strings.intern("return"),
            proc_: strings.intern("proc"),
            data_: strings.intern("data"),
            array_: strings.intern("array"),
            entity_: strings.intern("entity"),
        }
    }
}
