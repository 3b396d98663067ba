//! The month → week → city hierarchy, the city search and the resolution of a
//! city to its survey data.

use std::collections::BTreeMap;

use log::{debug, info};
use snafu::{ensure, OptionExt};

use crate::catalog::{self, CITIES_PER_WEEK, MONTH_NAMES, QUESTIONS, WEEKS_PER_MONTH};
use crate::config::*;

/// Splits the cities, in order, into weeks of two cities and months of four weeks.
///
/// Fails if the cities do not fill a whole number of months, or if there are
/// more months than month names.
pub fn build_hierarchy(cities: &[City]) -> SurveyResult<Vec<Month>> {
    let per_month = CITIES_PER_WEEK * WEEKS_PER_MONTH;
    ensure!(
        cities.len() % per_month == 0 && cities.len() / per_month <= MONTH_NAMES.len(),
        MalformedCatalogSnafu {
            cities: cities.len(),
            per_month,
            months: MONTH_NAMES.len(),
        }
    );

    let months = cities
        .chunks(per_month)
        .zip(MONTH_NAMES.iter())
        .map(|(month_cities, name)| Month {
            name: name.to_string(),
            weeks: month_cities
                .chunks(CITIES_PER_WEEK)
                .enumerate()
                .map(|(idx, pair)| Week {
                    week_number: idx as u32 + 1,
                    cities: [pair[0].clone(), pair[1].clone()],
                })
                .collect(),
        })
        .collect();
    Ok(months)
}

/// All the cities of the hierarchy, in display order, with their month and week.
pub fn flatten(months: &[Month]) -> Vec<CityMatch> {
    let mut res: Vec<CityMatch> = Vec::new();
    for month in months {
        for week in month.weeks.iter() {
            for city in week.cities.iter() {
                res.push(CityMatch {
                    city: city.clone(),
                    month: month.name.clone(),
                    week: week.week_number,
                });
            }
        }
    }
    res
}

/// Case-insensitive search on the name of the city or of its state.
///
/// An empty (or blank) query matches nothing. Matches are returned in the
/// order of the entries.
pub fn search(query: &str, entries: &[CityMatch]) -> Vec<CityMatch> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let q = query.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            e.city.name.to_lowercase().contains(&q) || e.city.state.to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}

/// The hierarchy of the survey and the searchable list of its cities.
///
/// Everything is built once from the static catalog; the index is read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct SurveyIndex {
    months: Vec<Month>,
    entries: Vec<CityMatch>,
    policy: DistributionPolicy,
}

impl SurveyIndex {
    pub fn new() -> SurveyResult<SurveyIndex> {
        SurveyIndex::from_cities(&catalog::cities())
    }

    pub fn from_cities(cities: &[City]) -> SurveyResult<SurveyIndex> {
        let months = build_hierarchy(cities)?;
        let entries = flatten(&months);
        info!(
            "Survey index: {} months, {} cities, {} questions",
            months.len(),
            entries.len(),
            QUESTIONS.len()
        );
        Ok(SurveyIndex {
            months,
            entries,
            policy: DistributionPolicy::default(),
        })
    }

    /// Changes how the generated distributions are treated by `resolve`.
    pub fn with_policy(self, policy: DistributionPolicy) -> SurveyIndex {
        SurveyIndex { policy, ..self }
    }

    pub fn policy(&self) -> DistributionPolicy {
        self.policy
    }

    pub fn hierarchy(&self) -> &[Month] {
        &self.months
    }

    pub fn entries(&self) -> &[CityMatch] {
        &self.entries
    }

    pub fn search(&self, query: &str) -> Vec<CityMatch> {
        let res = search(query, &self.entries);
        debug!("search: {:?} -> {} matches", query, res.len());
        res
    }

    pub fn find_city(&self, city_id: &str) -> Option<&CityMatch> {
        self.entries.iter().find(|e| e.city.id == city_id)
    }

    /// Finds a city by its display name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&CityMatch> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.city.name.to_lowercase() == name)
    }

    /// The month and the week opened by default in the navigation tree: the first ones.
    pub fn default_expansion(&self) -> Option<(&str, u32)> {
        let month = self.months.first()?;
        let week = month.weeks.first()?;
        Some((month.name.as_str(), week.week_number))
    }

    /// Generates the answers of all the questions for a city of the hierarchy.
    ///
    /// The city is looked up by identifier. Every call generates the data again;
    /// see `survey_data` to compute everything once.
    pub fn resolve(&self, city: &City) -> SurveyResult<CityData> {
        let entry = self
            .find_city(&city.id)
            .context(CityNotFoundSnafu { city_id: city.id.as_str() })?;
        info!(
            "Resolving {} ({}, {} week {})",
            entry.city.id, entry.city.state, entry.month, entry.week
        );
        let mut questions: Vec<QuestionData> = Vec::new();
        for q in QUESTIONS.iter() {
            questions.push(crate::generate_question_data_with(
                &entry.city.id,
                q.question_id,
                self.policy,
            )?);
        }
        Ok(CityData {
            city: entry.city.clone(),
            month: entry.month.clone(),
            week: entry.week,
            questions,
        })
    }

    /// Resolves every city once.
    pub fn survey_data(&self) -> SurveyResult<SurveyData> {
        let mut city_data: BTreeMap<String, CityData> = BTreeMap::new();
        for e in self.entries.iter() {
            city_data.insert(e.city.id.clone(), self.resolve(&e.city)?);
        }
        Ok(SurveyData {
            months: self.months.clone(),
            city_data,
        })
    }
}
