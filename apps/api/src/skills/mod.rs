//! Skill extraction: tokenizer, fixed vocabulary, and phrase matcher.

mod matcher;
mod tokenize;
mod vocabulary;

pub use matcher::SkillMatcher;
pub use tokenize::tokenize;
pub use vocabulary::SKILL_VOCABULARY;
