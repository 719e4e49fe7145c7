mod classifier;
mod rules;

pub use classifier::{PartBuckets, classify};
pub use rules::{BODY_EXCLUSIONS, KEYWORD_RULES, KeywordRule, PartKind};
