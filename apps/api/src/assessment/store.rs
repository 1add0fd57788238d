//! Process-lifetime registry of generated assessments, keyed by id.
//!
//! Assessments are stored once at generation time and read back when answers
//! are submitted. No eviction; a restart clears the registry. Independent of
//! the (skill, difficulty) cache — the two stores never cross-invalidate.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::assessment::models::Assessment;

pub struct AssessmentStore {
    entries: RwLock<HashMap<String, Assessment>>,
}

impl AssessmentStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, assessment: Assessment) {
        let mut entries = self
            .entries
            .write()
            .expect("assessment registry lock poisoned");
        entries.insert(assessment.assessment_id.clone(), assessment);
    }

    pub fn get(&self, assessment_id: &str) -> Option<Assessment> {
        let entries = self
            .entries
            .read()
            .expect("assessment registry lock poisoned");
        entries.get(assessment_id).cloned()
    }
}

impl Default for AssessmentStore {
    fn default() -> Self {
        Self::new()
    }
}
