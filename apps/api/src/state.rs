use std::sync::Arc;

use crate::assessment::cache::AssessmentCache;
use crate::assessment::store::AssessmentStore;
use crate::config::Config;
use crate::extraction::skills::SkillLexicon;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The cache and the assessment registry are the only mutable state in the
/// process; both are explicit injected stores rather than ambient globals,
/// and both vanish on restart.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text generator. Production: `CohereClient`; tests swap in fakes.
    pub generator: Arc<dyn TextGenerator>,
    pub lexicon: Arc<SkillLexicon>,
    pub cache: Arc<AssessmentCache>,
    pub assessments: Arc<AssessmentStore>,
}
