use std::sync::Arc;

use crate::skills::SkillMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The matcher is built once at startup from the fixed vocabulary and never
/// mutated afterwards, so concurrent handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<SkillMatcher>,
}
