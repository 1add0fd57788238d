//! In-process assessment cache keyed by (skill, difficulty).
//!
//! Unbounded: entries are never evicted. A stale entry is treated as absent
//! on read and sits in place until the next write overwrites it. The process
//! has no persistence guarantee, so a restart clearing the cache is
//! acceptable. Writers to the same key race with last-write-wins semantics;
//! the staleness check on read is not atomic with concurrent stores.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::assessment::models::{Assessment, Difficulty};

/// Entries are considered fresh for 24 hours.
pub const CACHE_TTL_SECS: i64 = 86_400;

struct CacheEntry {
    assessment: Assessment,
    timestamp: i64,
}

pub struct AssessmentCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

fn cache_key(skill: &str, difficulty: Difficulty) -> String {
    format!("{skill}_{difficulty}")
}

impl AssessmentCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached assessment unless it is absent or its age has
    /// reached the TTL.
    pub fn lookup(&self, skill: &str, difficulty: Difficulty) -> Option<Assessment> {
        self.lookup_at(skill, difficulty, Utc::now().timestamp())
    }

    /// TTL check against an explicit clock reading, so staleness is testable
    /// without waiting out the TTL.
    pub fn lookup_at(&self, skill: &str, difficulty: Difficulty, now: i64) -> Option<Assessment> {
        let entries = self.entries.read().expect("assessment cache lock poisoned");
        let entry = entries.get(&cache_key(skill, difficulty))?;
        if now - entry.timestamp >= CACHE_TTL_SECS {
            return None;
        }
        Some(entry.assessment.clone())
    }

    /// Unconditional overwrite of any prior entry for the key.
    pub fn store(&self, skill: &str, difficulty: Difficulty, assessment: &Assessment) {
        self.store_at(skill, difficulty, assessment, Utc::now().timestamp());
    }

    pub fn store_at(
        &self,
        skill: &str,
        difficulty: Difficulty,
        assessment: &Assessment,
        now: i64,
    ) {
        let mut entries = self
            .entries
            .write()
            .expect("assessment cache lock poisoned");
        entries.insert(
            cache_key(skill, difficulty),
            CacheEntry {
                assessment: assessment.clone(),
                timestamp: now,
            },
        );
    }
}

impl Default for AssessmentCache {
    fn default() -> Self {
        Self::new()
    }
}
