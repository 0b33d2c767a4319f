use crate::models::{PriceTier, StyleRequest, Stylist};

/// How many roster entries the permissive fallback returns
pub const FALLBACK_COUNT: usize = 2;

/// Result of a stylist matching pass
#[derive(Debug)]
pub struct MatchOutcome {
    pub stylists: Vec<Stylist>,
    /// True when the eligibility filter excluded everyone and the fallback
    /// roster slice was returned instead
    pub fallback: bool,
    pub total_roster: usize,
}

/// Map a budget bracket to the price tiers it admits
///
/// Fixed lookup table; an absent or unrecognized bracket admits every tier.
pub fn tiers_for_budget(budget: Option<&str>) -> Vec<PriceTier> {
    match budget {
        Some("Under 3,000") => vec![PriceTier::Budget],
        Some("3,000 - 5,000") => vec![PriceTier::Budget, PriceTier::MidRange],
        Some("5,000 - 8,000") => vec![PriceTier::MidRange, PriceTier::Premium],
        Some("8,000+") => vec![PriceTier::Premium],
        _ => vec![PriceTier::Budget, PriceTier::MidRange, PriceTier::Premium],
    }
}

/// Stylist matching orchestrator
///
/// Filter by skill, availability and budget tier, rank by rating with the
/// fixed tier-preference tie-break, and fall back to the head of the roster
/// when nobody qualifies so callers never render an empty list.
#[derive(Debug, Clone, Copy)]
pub struct StylistMatcher {
    fallback_count: usize,
}

impl StylistMatcher {
    pub fn new(fallback_count: usize) -> Self {
        Self { fallback_count }
    }

    pub fn match_stylists(
        &self,
        style: &StyleRequest,
        required_hours: u8,
        budget: Option<&str>,
        roster: &[Stylist],
    ) -> MatchOutcome {
        let total_roster = roster.len();
        let allowed_tiers = tiers_for_budget(budget);

        let mut eligible: Vec<Stylist> = roster
            .iter()
            .filter(|s| s.skills.iter().any(|skill| skill == &style.normalized_slug))
            .filter(|s| s.availability_hours_per_day >= required_hours)
            .filter(|s| allowed_tiers.contains(&s.price_tier))
            .cloned()
            .collect();

        // Rating descending, then tier preference descending
        eligible.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    b.price_tier
                        .preference_score()
                        .cmp(&a.price_tier.preference_score())
                })
        });

        if eligible.is_empty() && !roster.is_empty() {
            return MatchOutcome {
                stylists: roster.iter().take(self.fallback_count).cloned().collect(),
                fallback: true,
                total_roster,
            };
        }

        MatchOutcome {
            stylists: eligible,
            fallback: false,
            total_roster,
        }
    }
}

impl Default for StylistMatcher {
    fn default() -> Self {
        Self::new(FALLBACK_COUNT)
    }
}
