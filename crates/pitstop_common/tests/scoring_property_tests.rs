//! Randomized invariant tests for the scoring engine.
//!
//! Uses a local xorshift generator for test inputs rather than an
//! external property-testing crate to minimize dependencies.
//!
//! ## Invariants Tested
//!
//! - Score is always within [0, total]
//! - Failures are exactly the non-yes questions, in catalog order
//! - `evaluate` is deterministic for identical inputs
//! - Tier never worsens as the score improves

use pitstop_common::{evaluate, Catalog, GuidanceTable, RiskThresholds, RiskTier, ANSWER_YES};
use std::collections::HashMap;

/// Simple pseudo-random number generator for test inputs
/// Uses xorshift64 algorithm
struct TestRng {
    state: u64,
}

impl TestRng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_range(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        min + (self.next_u64() % (max - min))
    }
}

/// Random answer set: each question is absent, "yes", "no", or garbage.
fn random_answers(rng: &mut TestRng, catalog: &Catalog) -> HashMap<String, String> {
    let mut answers = HashMap::new();
    for question in catalog.questions() {
        match rng.next_range(0, 4) {
            0 => {} // absent
            1 => {
                answers.insert(question.clone(), ANSWER_YES.to_string());
            }
            2 => {
                answers.insert(question.clone(), "no".to_string());
            }
            _ => {
                answers.insert(question.clone(), format!("junk-{}", rng.next_u64()));
            }
        }
    }
    answers
}

#[test]
fn test_score_always_within_bounds() {
    let catalog = Catalog::standard();
    let guidance = GuidanceTable::standard();
    let thresholds = RiskThresholds::for_total(catalog.len());
    let mut rng = TestRng::new(42);

    for _ in 0..500 {
        let answers = random_answers(&mut rng, &catalog);
        let result = evaluate(&catalog, &guidance, &thresholds, &answers);
        assert!(result.score <= result.total);
        assert_eq!(result.total, catalog.len());
    }
}

#[test]
fn test_failures_are_exactly_the_non_yes_questions_in_order() {
    let catalog = Catalog::standard();
    let guidance = GuidanceTable::standard();
    let thresholds = RiskThresholds::for_total(catalog.len());
    let mut rng = TestRng::new(7);

    for _ in 0..500 {
        let answers = random_answers(&mut rng, &catalog);
        let result = evaluate(&catalog, &guidance, &thresholds, &answers);

        let expected: Vec<&String> = catalog
            .questions()
            .iter()
            .filter(|q| answers.get(*q).map(String::as_str) != Some(ANSWER_YES))
            .collect();

        assert_eq!(result.failures.len(), result.total - result.score);
        let actual: Vec<&String> = result.failures.iter().map(|f| &f.question).collect();
        assert_eq!(actual, expected, "failures must follow catalog order");
    }
}

#[test]
fn test_evaluate_is_deterministic() {
    let catalog = Catalog::standard();
    let guidance = GuidanceTable::standard();
    let thresholds = RiskThresholds::for_total(catalog.len());
    let mut rng = TestRng::new(1234);

    for _ in 0..100 {
        let answers = random_answers(&mut rng, &catalog);
        let first = evaluate(&catalog, &guidance, &thresholds, &answers);
        let second = evaluate(&catalog, &guidance, &thresholds, &answers);
        assert_eq!(first, second);
    }
}

#[test]
fn test_tier_never_worsens_as_score_improves() {
    fn risk_rank(tier: RiskTier) -> u8 {
        match tier {
            RiskTier::Low => 0,
            RiskTier::Moderate => 1,
            RiskTier::High => 2,
        }
    }

    let catalog = Catalog::standard();
    let guidance = GuidanceTable::standard();
    let thresholds = RiskThresholds::for_total(catalog.len());

    let mut previous_rank = u8::MAX;
    for yes_count in 0..=catalog.len() {
        let answers: HashMap<String, String> = catalog
            .questions()
            .iter()
            .take(yes_count)
            .map(|q| (q.clone(), ANSWER_YES.to_string()))
            .collect();

        let result = evaluate(&catalog, &guidance, &thresholds, &answers);
        assert_eq!(result.score, yes_count);

        let rank = risk_rank(result.tier);
        assert!(
            rank <= previous_rank,
            "tier worsened from rank {} to {} at score {}",
            previous_rank,
            rank,
            yes_count
        );
        previous_rank = rank;
    }
}

#[test]
fn test_custom_thresholds_shift_tier_boundaries() {
    let catalog = Catalog::standard();
    let guidance = GuidanceTable::standard();

    let answers: HashMap<String, String> = catalog
        .questions()
        .iter()
        .take(8)
        .map(|q| (q.clone(), ANSWER_YES.to_string()))
        .collect();

    // Default policy: 8/10 is MODERATE
    let default_thresholds = RiskThresholds::for_total(catalog.len());
    let result = evaluate(&catalog, &guidance, &default_thresholds, &answers);
    assert_eq!(result.tier, RiskTier::Moderate);

    // Lenient variant seen in older deployments: high=8, mid=5
    let lenient = RiskThresholds { high: 8, mid: 5 };
    let result = evaluate(&catalog, &guidance, &lenient, &answers);
    assert_eq!(result.tier, RiskTier::Low);
}
