// ********* Catalog data structures ***********

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use snafu::Snafu;

/// One surveyed city.
///
/// The identifier is globally unique across the catalog and encodes the
/// month and week of the survey (`mumbai-mar-w1`), but the library never
/// parses it: the month and week are resolved from the hierarchy.
#[derive(Eq, PartialEq, Debug, Clone, Hash, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub state: String,
}

/// A survey week: always two cities.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u32,
    pub cities: [City; 2],
}

/// A survey month, with its weeks in ascending order.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Month {
    pub name: String,
    pub weeks: Vec<Week>,
}

/// The chart a question is displayed with by default.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Pie,
    Bar,
    HorizontalBar,
}

impl Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartType::Pie => write!(f, "pie"),
            ChartType::Bar => write!(f, "bar"),
            ChartType::HorizontalBar => write!(f, "horizontalBar"),
        }
    }
}

/// A question of the survey. The catalog of questions is the same for every city.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDefinition {
    pub question_id: u32,
    pub question_text: &'static str,
    pub chart_type: ChartType,
}

// ******** Output data structures *********

/// A labeled distribution of percentages.
///
/// Invariant: `labels` and `values` have the same length.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

impl ChartData {
    pub fn total(&self) -> i64 {
        self.values.iter().sum()
    }
}

/// The answers to one question for one city, with the generated commentary.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionData {
    pub question_id: u32,
    pub question_text: String,
    pub chart_type: ChartType,
    pub data: ChartData,
    pub key_takeaways: Vec<String>,
    pub insights: String,
}

/// Everything displayed for a selected city.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct CityData {
    pub city: City,
    pub month: String,
    pub week: u32,
    pub questions: Vec<QuestionData>,
}

/// A city with its position in the hierarchy. This is what the search returns.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct CityMatch {
    pub city: City,
    pub month: String,
    pub week: u32,
}

/// The complete dataset: the hierarchy and the data of every city, keyed by city id.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyData {
    pub months: Vec<Month>,
    pub city_data: BTreeMap<String, CityData>,
}

/// Summary card for one question: the answer with the highest share.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyInsight {
    pub question_id: u32,
    pub title: String,
    pub top_finding: String,
    pub percentage: i64,
    pub description: String,
}

// ********* Configuration **********

/// What is shown for a selected city.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    /// Every question with its chart, takeaways and insights.
    #[default]
    Questions,
    /// One summary card per question.
    Insights,
}

impl FromStr for ViewMode {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "questions" => Ok(ViewMode::Questions),
            "insights" => Ok(ViewMode::Insights),
            x => UnknownViewModeSnafu { name: x }.fail(),
        }
    }
}

/// How generated distributions are treated before they are returned.
///
/// The value formulas do not guarantee that a distribution sums to 100, or that
/// no value is negative. `Faithful` keeps the generated values as they are, which
/// reproduces the reference dataset exactly. `Normalized` clamps negative values
/// to zero and rescales the distribution to sum to exactly 100.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistributionPolicy {
    #[default]
    Faithful,
    Normalized,
}

/// Errors when looking up the static catalogs.
///
/// None of them can be retried: they point to a bad identifier upstream or to
/// an inconsistent catalog.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SurveyError {
    #[snafu(display("Question {question_id} is not part of the question catalog"))]
    UnknownQuestion { question_id: u32 },

    #[snafu(display("City {city_id} is not part of the survey hierarchy"))]
    CityNotFound { city_id: String },

    #[snafu(display(
        "Cannot split {cities} cities into months of {per_month} cities (month names available: {months})"
    ))]
    MalformedCatalog {
        cities: usize,
        per_month: usize,
        months: usize,
    },

    #[snafu(display("Unknown view mode {name:?} (expected 'questions' or 'insights')"))]
    UnknownViewMode { name: String },
}

pub type SurveyResult<T> = Result<T, SurveyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_names_follow_the_front_end() {
        let qd = QuestionData {
            question_id: 8,
            question_text: "Brands?".to_string(),
            chart_type: ChartType::HorizontalBar,
            data: ChartData {
                labels: vec!["Known".to_string(), "New".to_string()],
                values: vec![60, 40],
                colors: None,
            },
            key_takeaways: vec!["Most stick to known brands.".to_string()],
            insights: "Loyalty is strong.".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&qd).unwrap(),
            json!({
                "questionId": 8,
                "questionText": "Brands?",
                "chartType": "horizontalBar",
                "data": {"labels": ["Known", "New"], "values": [60, 40]},
                "keyTakeaways": ["Most stick to known brands."],
                "insights": "Loyalty is strong."
            })
        );
    }

    #[test]
    fn weeks_and_colors_from_json() {
        let week: Week = serde_json::from_value(json!({
            "weekNumber": 2,
            "cities": [
                {"id": "ahmedabad-mar-w2", "name": "Ahmedabad", "state": "Gujarat"},
                {"id": "surat-mar-w2", "name": "Surat", "state": "Gujarat"}
            ]
        }))
        .unwrap();
        assert_eq!(week.week_number, 2);
        assert_eq!(week.cities[1].name, "Surat");

        let data: ChartData = serde_json::from_value(json!({
            "labels": ["a"], "values": [100], "colors": ["#0d9488"]
        }))
        .unwrap();
        assert_eq!(data.colors, Some(vec!["#0d9488".to_string()]));
        assert_eq!(data.total(), 100);
    }

    #[test]
    fn view_modes() {
        assert_eq!("insights".parse::<ViewMode>().unwrap(), ViewMode::Insights);
        assert_eq!("questions".parse::<ViewMode>().unwrap(), ViewMode::Questions);
        assert!("Insights".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::default(), ViewMode::Questions);
        assert_eq!(ChartType::HorizontalBar.to_string(), "horizontalBar");
    }
}
