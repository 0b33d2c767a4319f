// Core algorithm exports
pub mod classifier;
pub mod compatibility;
pub mod health;
pub mod keywords;
pub mod matcher;

pub use classifier::HairClassifier;
pub use compatibility::check_style_compatibility;
pub use health::{analyze_hair_health, detect_damage, severity_for_count};
pub use matcher::{tiers_for_budget, MatchOutcome, StylistMatcher, FALLBACK_COUNT};
