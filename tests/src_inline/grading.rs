use std::collections::{BTreeMap, HashMap};

use super::*;

fn setup(coefs: &[(&str, f64)]) -> (Vec<String>, HashMap<String, f64>) {
    let questions = coefs.iter().map(|(q, _)| q.to_string()).collect();
    let coefficients = coefs.iter().map(|(q, c)| (q.to_string(), *c)).collect();
    (questions, coefficients)
}

fn answers(pairs: &[(&str, u8)]) -> BTreeMap<String, Score> {
    pairs
        .iter()
        .map(|(q, s)| (q.to_string(), Score::new(*s).unwrap()))
        .collect()
}

#[test]
fn test_single_question_full_marks() {
    let (questions, coefs) = setup(&[("Q1", 2.0)]);
    let result = compute_grade(&questions, &coefs, &answers(&[("Q1", 3)]));
    assert_eq!(result.grade, 20.0);
    assert_eq!(result.tier, Tier::VeryGood);
    assert_eq!(result.display_grade(), "20,00");
}

#[test]
fn test_weighted_two_questions() {
    let (questions, coefs) = setup(&[("Q1", 1.0), ("Q2", 3.0)]);
    let result = compute_grade(&questions, &coefs, &answers(&[("Q1", 1), ("Q2", 2)]));
    assert!((result.grade - 70.0 / 6.0).abs() < 1e-9);
    assert_eq!(result.display_grade(), "11,67");
    assert_eq!(result.tier, Tier::Fragile);
}

#[test]
fn test_no_matching_question_is_zero_tier_one() {
    let (questions, coefs) = setup(&[("Q1", 1.0)]);
    let result = compute_grade(&questions, &coefs, &answers(&[("Q9", 3)]));
    assert_eq!(result.grade, 0.0);
    assert_eq!(result.tier, Tier::Insufficient);

    let result = compute_grade(&questions, &coefs, &BTreeMap::new());
    assert_eq!(result.grade, 0.0);
    assert_eq!(result.tier, Tier::Insufficient);
}

#[test]
fn test_unweighted_question_is_ignored() {
    let questions = vec!["Q1".to_string(), "Q2".to_string()];
    let coefs: HashMap<String, f64> = [("Q1".to_string(), 1.0)].into_iter().collect();
    let result = compute_grade(&questions, &coefs, &answers(&[("Q1", 3), ("Q2", 0)]));
    assert_eq!(result.grade, 20.0);
}

#[test]
fn test_grade_bounds_over_all_score_combinations() {
    let (questions, coefs) = setup(&[("Q1", 1.0), ("Q2", 2.5), ("Q3", 0.5)]);
    for a in 0..=3u8 {
        for b in 0..=3u8 {
            for c in 0..=3u8 {
                let result = compute_grade(
                    &questions,
                    &coefs,
                    &answers(&[("Q1", a), ("Q2", b), ("Q3", c)]),
                );
                assert!((0.0..=MAX_GRADE).contains(&result.grade));
                assert_eq!(result.tier, TierProfile::default_v1().classify(result.grade));
            }
        }
    }
}

#[test]
fn test_grade_independent_of_insertion_order() {
    let (questions, coefs) = setup(&[("Q1", 1.0), ("Q2", 3.0), ("Q3", 2.0)]);
    let mut forward = BTreeMap::new();
    for (q, s) in [("Q1", 2), ("Q2", 1), ("Q3", 3)] {
        forward.insert(q.to_string(), Score::new(s).unwrap());
    }
    let mut backward = BTreeMap::new();
    for (q, s) in [("Q3", 0), ("Q3", 3), ("Q2", 1), ("Q1", 2)] {
        backward.insert(q.to_string(), Score::new(s).unwrap());
    }
    assert_eq!(
        compute_grade(&questions, &coefs, &forward),
        compute_grade(&questions, &coefs, &backward)
    );
}

#[test]
fn test_tier_uses_unrounded_grade() {
    let (questions, coefs) = setup(&[("Q1", 5.0)]);
    let result = compute_grade(&questions, &coefs, &answers(&[("Q1", 2)]));
    assert_eq!(result.display_grade(), "13,33");
    assert_eq!(result.tier, Tier::Satisfactory);

    let profile = TierProfile::default_v1();
    // 11.996 displays as 12,00 but stays in tier 2.
    assert_eq!(format_grade(11.996), "12,00");
    assert_eq!(profile.classify(11.996), Tier::Fragile);
}

#[test]
fn test_format_and_parse_grade() {
    assert_eq!(format_grade(0.0), "0,00");
    assert_eq!(format_grade(13.333333), "13,33");
    assert_eq!(parse_grade("13,33"), Some(13.33));
    assert_eq!(parse_grade("7.5"), Some(7.5));
    assert_eq!(parse_grade("20,01"), None);
    assert_eq!(parse_grade("-1"), None);
    assert_eq!(parse_grade("abc"), None);
}

#[test]
fn test_format_grade_rounds_ties_up() {
    assert_eq!(format_grade(3.125), "3,13");
    assert_eq!(format_grade(20.0), "20,00");

    // 32 questions of weight 1, five answered 3 and the rest 0: 15 / 96 * 20.
    let ids: Vec<String> = (1..=32).map(|i| format!("Q{i}")).collect();
    let coefs: HashMap<String, f64> = ids.iter().map(|q| (q.clone(), 1.0)).collect();
    let responses: BTreeMap<String, Score> = ids
        .iter()
        .enumerate()
        .map(|(i, q)| (q.clone(), Score::new(if i < 5 { 3 } else { 0 }).unwrap()))
        .collect();
    let result = compute_grade(&ids, &coefs, &responses);
    assert_eq!(result.grade, 3.125);
    assert_eq!(result.display_grade(), "3,13");
}

#[test]
fn test_overflowing_coefficients_stay_in_range() {
    let (questions, coefs) = setup(&[("Q1", f64::MAX), ("Q2", f64::MAX)]);
    let result = compute_grade(&questions, &coefs, &answers(&[("Q1", 3), ("Q2", 3)]));
    assert!(result.grade.is_finite());
    assert!((0.0..=MAX_GRADE).contains(&result.grade));
    assert_eq!(parse_grade(&result.display_grade()), Some(result.grade));
}

#[test]
fn test_score_range() {
    assert_eq!(Score::new(3).unwrap().value(), 3);
    assert_eq!(Score::new(4), Err(crate::model::score::ScoreError(4)));
    assert!(serde_json::from_str::<Score>("2").is_ok());
    assert!(serde_json::from_str::<Score>("9").is_err());
}
