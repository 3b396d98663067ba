/*!

Synthetic survey data for the jewelry survey dashboard.

The dashboard shows, for each surveyed city, the answers to a fixed set of
questions. The answers are not measured: they are derived deterministically
from the city identifier, so that every city gets slightly different (but
always the same) numbers.

```
use survey_insights::navigation::SurveyIndex;

let index = SurveyIndex::new()?;
let matches = index.search("mumbai");
let mumbai = &matches[0];
assert_eq!(mumbai.month, "March");

let data = index.resolve(&mumbai.city)?;
assert_eq!(data.questions.len(), 14);
# Ok::<(), survey_insights::SurveyError>(())
```

See the [manual](crate::manual) for the command line interface.
*/
mod catalog;
mod config;
pub mod manual;
pub mod navigation;
pub mod summary;
mod templates;

use log::{debug, warn};
use snafu::OptionExt;

use crate::config::UnknownQuestionSnafu;

pub use crate::catalog::{cities, question, MONTH_NAMES, QUESTIONS};
pub use crate::config::*;

// Constants of the mixing function.
const MIX_MULTIPLIER: u64 = 9301;
const MIX_INCREMENT: u64 = 49297;
const MIX_MODULUS: u64 = 233280;

/// The seed of a city: the sum of the UTF-16 code units of its identifier.
pub fn city_seed(city_id: &str) -> u64 {
    city_id.encode_utf16().map(u64::from).sum()
}

/// A number in [0, 1) that depends only on the seed and the question.
pub fn question_hash(seed: u64, question_id: u32) -> f64 {
    let mixed = seed
        .wrapping_mul(u64::from(question_id))
        .wrapping_mul(MIX_MULTIPLIER)
        .wrapping_add(MIX_INCREMENT)
        % MIX_MODULUS;
    mixed as f64 / MIX_MODULUS as f64
}

/// Perturbs `base` by a deterministic amount in `[-range/2, range/2)`.
pub fn seeded_random(hash: f64, base: i64, range: i64) -> i64 {
    base + (hash * range as f64).floor() as i64 - range.div_euclid(2)
}

/// Generates the answers of one question for one city, keeping the generated values as they are.
pub fn generate_question_data(city_id: &str, question_id: u32) -> SurveyResult<QuestionData> {
    generate_question_data_with(city_id, question_id, DistributionPolicy::Faithful)
}

/// Generates the answers of one question for one city.
///
/// The output only depends on the arguments. Fails if the question is not in
/// the catalog.
pub fn generate_question_data_with(
    city_id: &str,
    question_id: u32,
    policy: DistributionPolicy,
) -> SurveyResult<QuestionData> {
    let definition =
        catalog::question(question_id).context(UnknownQuestionSnafu { question_id })?;
    let template =
        templates::template(question_id).context(UnknownQuestionSnafu { question_id })?;

    let hash = question_hash(city_seed(city_id), question_id);
    let perturbation = seeded_random(hash, 0, template.range);
    let generated = (template.values)(perturbation);
    debug!(
        "generate_question_data: city {} question {}: perturbation {} values {:?}",
        city_id, question_id, perturbation, generated
    );

    let values = match policy {
        DistributionPolicy::Faithful => {
            if !is_well_formed(&generated) {
                warn!(
                    "city {} question {}: distribution {:?} does not sum to 100",
                    city_id, question_id, generated
                );
            }
            generated
        }
        DistributionPolicy::Normalized => normalize_distribution(&generated),
    };

    let key_takeaways = (template.takeaways)(template.labels, &values);
    let insights = (template.insights)(template.labels, &values);

    Ok(QuestionData {
        question_id,
        question_text: definition.question_text.to_string(),
        chart_type: definition.chart_type,
        data: ChartData {
            labels: template.labels.iter().map(|l| l.to_string()).collect(),
            values,
            colors: None,
        },
        key_takeaways,
        insights,
    })
}

/// True if no value is negative and the values sum to 100.
pub fn is_well_formed(values: &[i64]) -> bool {
    values.iter().all(|v| *v >= 0) && values.iter().map(|v| i128::from(*v)).sum::<i128>() == 100
}

/// Clamps negative values to zero and rescales the values so that they sum to 100.
///
/// The rounding uses the largest remainder method: every value is first rounded
/// down, and the missing points go to the values with the largest remainders
/// (the first ones in case of ties). A distribution with no positive value is
/// split evenly.
///
/// Works for any input: the intermediate sums and products are computed on 128 bits.
pub fn normalize_distribution(values: &[i64]) -> Vec<i64> {
    if values.is_empty() {
        return Vec::new();
    }
    let clamped: Vec<i128> = values.iter().map(|v| i128::from((*v).max(0))).collect();
    let total: i128 = clamped.iter().sum();
    let n = clamped.len() as i64;

    let (mut res, remainders): (Vec<i64>, Vec<i128>) = if total == 0 {
        (vec![100 / n; clamped.len()], vec![0; clamped.len()])
    } else {
        // Each share is at most 100.
        clamped
            .iter()
            .map(|v| ((v * 100 / total) as i64, v * 100 % total))
            .unzip()
    };

    let missing = 100 - res.iter().sum::<i64>();
    let mut order: Vec<usize> = (0..res.len()).collect();
    // Stable: ties keep the label order.
    order.sort_by(|a, b| remainders[*b].cmp(&remainders[*a]));
    for idx in order.iter().cycle().take(missing as usize) {
        res[*idx] += 1;
    }
    if res != values {
        debug!("normalize_distribution: {:?} -> {:?}", values, res);
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn seed_sums_code_units() {
        assert_eq!(city_seed(""), 0);
        assert_eq!(city_seed("ab"), 97 + 98);
        assert_eq!(city_seed("mumbai-mar-w1"), 1213);
        assert_eq!(city_seed("pune-mar-w1"), 1018);
    }

    #[test]
    fn hash_is_in_unit_interval() {
        for seed in [0, 1, 1213, 2542, 99_999] {
            for q in 1..=14 {
                let h = question_hash(seed, q);
                assert!((0.0..1.0).contains(&h), "seed {} q {}: {}", seed, q, h);
            }
        }
        // (0 * q * 9301 + 49297) mod 233280
        assert_eq!(question_hash(0, 3), 49297.0 / 233280.0);
    }

    #[test]
    fn seeded_random_is_centered() {
        assert_eq!(seeded_random(0.0, 0, 10), -5);
        assert_eq!(seeded_random(0.999, 0, 10), 4);
        assert_eq!(seeded_random(0.5, 45, 10), 45);
        assert_eq!(seeded_random(0.0, 0, 7), -3);
    }

    #[test]
    fn mumbai_reference_values() {
        init();
        let q1 = generate_question_data("mumbai-mar-w1", 1).unwrap();
        assert_eq!(q1.data.values, vec![45, 30, 25]);
        assert_eq!(
            q1.data.labels,
            vec!["Bridal/Marriage", "Special Occasion", "Personal Use"]
        );
        assert_eq!(q1.chart_type, ChartType::Pie);
        assert_eq!(
            q1.key_takeaways[0],
            "Bridal/Marriage is the Primary Driver: 45% of consumers purchase jewelry for bridal/marriage purposes, making it the leading motivation for high-value jewelry purchases."
        );

        let q8 = generate_question_data("mumbai-mar-w1", 8).unwrap();
        assert_eq!(q8.data.values, vec![56, 44]);
        assert!(q8.insights.starts_with("Consumer brand loyalty remains strong, with 56%"));

        let q11 = generate_question_data("mumbai-mar-w1", 11).unwrap();
        assert_eq!(q11.data.values, vec![47, 42, 11]);
    }

    #[test]
    fn generation_is_deterministic() {
        for q in 1..=14 {
            let a = generate_question_data("jaipur-mar-w3", q).unwrap();
            let b = generate_question_data("jaipur-mar-w3", q).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn shapes_follow_templates() {
        for city in cities() {
            for def in QUESTIONS.iter() {
                let qd = generate_question_data(&city.id, def.question_id).unwrap();
                let template = templates::template(def.question_id).unwrap();
                assert_eq!(qd.data.labels.len(), qd.data.values.len());
                assert_eq!(qd.data.labels.len(), template.labels.len());
                assert_eq!(qd.data.total(), 100, "{} {}", city.id, def.question_id);
                assert_eq!(qd.question_text, def.question_text);
                assert!(!qd.key_takeaways.is_empty());
                assert!(!qd.insights.is_empty());
            }
        }
    }

    #[test]
    fn any_city_id_is_accepted() {
        let qd = generate_question_data("not-a-city ünïcode", 5).unwrap();
        assert_eq!(qd.data.values.len(), 3);
    }

    #[test]
    fn unknown_question_is_an_error() {
        let err = generate_question_data("mumbai-mar-w1", 15).unwrap_err();
        assert!(matches!(err, SurveyError::UnknownQuestion { question_id: 15 }));
        assert!(generate_question_data("mumbai-mar-w1", 0).is_err());
    }

    #[test]
    fn normalization_fixes_bad_distributions() {
        assert_eq!(normalize_distribution(&[45, 30, 25]), vec![45, 30, 25]);
        assert_eq!(normalize_distribution(&[-5, 60, 50]), vec![0, 55, 45]);
        assert_eq!(normalize_distribution(&[1, 1, 1]), vec![34, 33, 33]);
        assert_eq!(normalize_distribution(&[0, 0, 0, 0]), vec![25, 25, 25, 25]);
        assert_eq!(normalize_distribution(&[-1, -2, -3]), vec![34, 33, 33]);
        assert_eq!(normalize_distribution(&[]), Vec::<i64>::new());
        for values in [vec![7, 3], vec![13, 13, 13], vec![200, -1, 3, 9]] {
            let res = normalize_distribution(&values);
            assert!(is_well_formed(&res), "{:?} -> {:?}", values, res);
        }
    }

    #[test]
    fn normalization_of_huge_values() {
        let big = i64::MAX / 50;
        assert_eq!(normalize_distribution(&[big, 1]), vec![100, 0]);
        assert_eq!(normalize_distribution(&[big, big]), vec![50, 50]);
        let res = normalize_distribution(&[i64::MAX, i64::MAX, i64::MAX, i64::MIN]);
        assert_eq!(res, vec![34, 33, 33, 0]);
        assert!(is_well_formed(&res));
        assert!(!is_well_formed(&[i64::MAX, i64::MAX, 2]));
    }

    #[test]
    fn normalized_policy_keeps_well_formed_values() {
        let faithful = generate_question_data("kochi-may-w4", 10).unwrap();
        let normalized =
            generate_question_data_with("kochi-may-w4", 10, DistributionPolicy::Normalized)
                .unwrap();
        assert_eq!(faithful, normalized);
    }
}
