use crate::config::ScoreConfig;

/// Fit score 0-100 for a listing, from title/company/location keywords.
/// Pure function of its inputs; all weights come from the config.
pub fn fit_score(config: &ScoreConfig, title: &str, company: &str, location: &str) -> i64 {
    let mut score = config.base;
    let title_lower = title.to_lowercase();
    let company_lower = company.to_lowercase();
    let loc_lower = location.to_lowercase();

    // Keyword weights are cumulative across all matches
    for (keyword, points) in &config.title_keywords {
        if title_lower.contains(keyword.as_str()) {
            score += points;
        }
    }

    // Company bonus applies once, first match wins
    for target in &config.target_companies {
        if company_lower.contains(&target.to_lowercase()) {
            score += config.company_bonus;
            break;
        }
    }

    if loc_lower.contains("remote") || title_lower.contains("remote") {
        score += config.remote_bonus;
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_score_worked_example_accepted() {
        let config = ScoreConfig::default();
        // base 40 + vp 15 + finance 12 + transformation 10 = 77,
        // Stripe company bonus +8 = 85, no remote in title/location
        let score = fit_score(&config, "VP Finance Transformation", "Stripe", "");
        assert_eq!(score, 85);
        assert!(score >= config.threshold);
    }

    #[test]
    fn test_fit_score_worked_example_rejected() {
        let config = ScoreConfig::default();
        // base 40 + accounting 6 = 46, no company bonus
        let score = fit_score(&config, "Accounting Clerk", "Unknown", "");
        assert_eq!(score, 46);
        assert!(score < config.threshold);
    }

    #[test]
    fn test_fit_score_is_deterministic() {
        let config = ScoreConfig::default();
        let a = fit_score(&config, "Head of Finance", "Brex", "Remote");
        let b = fit_score(&config, "Head of Finance", "Brex", "Remote");
        assert_eq!(a, b);
    }

    #[test]
    fn test_fit_score_clamps_at_100() {
        let config = ScoreConfig::default();
        // Stack enough keywords to overflow the cap
        let title = "Chief VP Head Senior Director CFO Finance Fintech \
                     Technology Systems Transformation Strategy Remote";
        let score = fit_score(&config, title, "Stripe", "Remote");
        assert_eq!(score, 100);
    }

    #[test]
    fn test_fit_score_stays_in_bounds() {
        let config = ScoreConfig::default();
        let score = fit_score(&config, "", "", "");
        assert!((0..=100).contains(&score));
        assert_eq!(score, config.base);
    }

    #[test]
    fn test_company_bonus_applies_once() {
        let config = ScoreConfig::default();
        // "Stripe PayPal" matches two targets but only one bonus lands:
        // base 40 + cfo 18 + 8 = 66, not 74
        let score = fit_score(&config, "CFO", "Stripe PayPal", "");
        assert_eq!(score, 66);
    }

    #[test]
    fn test_company_match_is_substring_and_case_insensitive() {
        let config = ScoreConfig::default();
        let plain = fit_score(&config, "CFO", "Unknown", "");
        let sub = fit_score(&config, "CFO", "STRIPE, Inc.", "");
        assert_eq!(sub, plain + config.company_bonus);
    }

    #[test]
    fn test_remote_bonus_from_location_or_title() {
        let config = ScoreConfig::default();
        let base = fit_score(&config, "CFO", "Unknown", "");
        let via_location = fit_score(&config, "CFO", "Unknown", "Remote (US)");
        let via_title = fit_score(&config, "CFO remote", "Unknown", "");
        assert_eq!(via_location, base + config.remote_bonus);
        assert_eq!(via_title, base + config.remote_bonus);
    }

    #[test]
    fn test_keyword_weights_are_cumulative() {
        let config = ScoreConfig::default();
        // vp 15 + planning 7 + analytics 7 = 29 on top of base 40
        let score = fit_score(&config, "VP Planning Analytics", "Unknown", "");
        assert_eq!(score, 69);
    }
}
