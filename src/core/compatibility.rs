use crate::models::{CompatibilityVerdict, StyleRequest, UserHairProfile, VerdictStatus};

/// Ordered advisory rules: the FIRST matching rule decides the verdict and
/// evaluation stops; risk reasons are never aggregated.
///
/// 1. breakage concern + braids/twists style  -> risky
/// 2. dryness concern + locs style            -> risky
/// 3. no hair type on the profile             -> unknown
/// 4. otherwise                               -> compatible
pub fn check_style_compatibility(
    profile: &UserHairProfile,
    style: &StyleRequest,
) -> CompatibilityVerdict {
    let style_lower = style.style_name.to_lowercase();

    if profile.has_concern("breakage")
        && (style_lower.contains("braids") || style_lower.contains("twists"))
    {
        return CompatibilityVerdict {
            status: VerdictStatus::Risky,
            reason: "Braided and twisted styles put tension on hair that is already \
                     experiencing breakage. Consider a low-manipulation style until \
                     your hair recovers."
                .to_string(),
        };
    }

    if profile.has_concern("dryness") && style_lower.contains("locs") {
        return CompatibilityVerdict {
            status: VerdictStatus::Risky,
            reason: "Locs make deep conditioning harder and can worsen dryness. \
                     Focus on moisture retention before committing to locs."
                .to_string(),
        };
    }

    if profile.hair_type.is_none() {
        return CompatibilityVerdict {
            status: VerdictStatus::Unknown,
            reason: "Complete your hair profile so we can check whether this style \
                     suits your hair."
                .to_string(),
        };
    }

    CompatibilityVerdict {
        status: VerdictStatus::Compatible,
        reason: format!("{} works well with your hair profile.", style.style_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawHairProfile;

    fn profile(hair_type: Option<&str>, concerns: &[&str]) -> UserHairProfile {
        UserHairProfile::from_raw(RawHairProfile {
            hair_type: hair_type.map(|s| s.to_string()),
            current_concerns: Some(concerns.iter().map(|s| s.to_string()).collect()),
            ..RawHairProfile::default()
        })
    }

    #[test]
    fn test_breakage_with_braids_is_risky() {
        let verdict = check_style_compatibility(
            &profile(Some("4c"), &["breakage"]),
            &StyleRequest::new("Box Braids"),
        );
        assert_eq!(verdict.status, VerdictStatus::Risky);
        assert!(verdict.reason.contains("tension"));
    }

    #[test]
    fn test_dryness_with_locs_is_risky() {
        let verdict = check_style_compatibility(
            &profile(Some("4b"), &["dryness"]),
            &StyleRequest::new("Goddess Locs"),
        );
        assert_eq!(verdict.status, VerdictStatus::Risky);
        assert!(verdict.reason.contains("moisture"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Both the breakage and the dryness rule could fire for this input;
        // only the breakage reason must come back.
        let verdict = check_style_compatibility(
            &profile(Some("4c"), &["breakage", "dryness"]),
            &StyleRequest::new("Braids and Locs Combo"),
        );
        assert_eq!(verdict.status, VerdictStatus::Risky);
        assert!(verdict.reason.contains("tension"));
        assert!(!verdict.reason.contains("Locs make"));
    }

    #[test]
    fn test_missing_hair_type_is_unknown() {
        let verdict =
            check_style_compatibility(&profile(None, &[]), &StyleRequest::new("Cornrows"));
        assert_eq!(verdict.status, VerdictStatus::Unknown);
    }

    #[test]
    fn test_compatible_otherwise() {
        let verdict = check_style_compatibility(
            &profile(Some("4a"), &["dryness"]),
            &StyleRequest::new("Box Braids"),
        );
        assert_eq!(verdict.status, VerdictStatus::Compatible);
    }

    #[test]
    fn test_unrelated_concern_does_not_trigger_rules() {
        let verdict = check_style_compatibility(
            &profile(Some("4a"), &["shrinkage"]),
            &StyleRequest::new("Twists"),
        );
        assert_eq!(verdict.status, VerdictStatus::Compatible);
    }
}
