use survey_insights::{CityMatch, Month};

/// The navigation tree as text. The week opened by default is marked with `*`.
pub fn render_tree(months: &[Month], expanded: Option<(&str, u32)>) -> String {
    let mut res = String::new();
    for month in months {
        res.push_str(&format!("{}\n", month.name));
        for week in month.weeks.iter() {
            let marker = if expanded == Some((month.name.as_str(), week.week_number)) {
                " *"
            } else {
                ""
            };
            res.push_str(&format!("  Week {}{}\n", week.week_number, marker));
            for city in week.cities.iter() {
                res.push_str(&format!("    {} ({}) [{}]\n", city.name, city.state, city.id));
            }
        }
    }
    res
}

/// The search results, one line per city.
pub fn render_matches(query: &str, matches: &[CityMatch]) -> String {
    if query.trim().is_empty() {
        return String::new();
    }
    if matches.is_empty() {
        return "No cities found\n".to_string();
    }
    matches
        .iter()
        .map(|m| {
            format!(
                "{} ({}) · {} W{} [{}]\n",
                m.city.name, m.city.state, m.month, m.week, m.city.id
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_insights::navigation::SurveyIndex;

    #[test]
    fn tree() {
        let idx = SurveyIndex::new().unwrap();
        let text = render_tree(idx.hierarchy(), idx.default_expansion());
        let lines: Vec<&str> = text.lines().collect();
        // 3 months, 12 weeks, 24 cities
        assert_eq!(lines.len(), 39);
        assert_eq!(lines[0], "March");
        assert_eq!(lines[1], "  Week 1 *");
        assert_eq!(lines[2], "    Mumbai (Maharashtra) [mumbai-mar-w1]");
        assert_eq!(text.matches('*').count(), 1);
    }

    #[test]
    fn search_results() {
        let idx = SurveyIndex::new().unwrap();
        assert_eq!(
            render_matches("gujarat", &idx.search("gujarat")),
            "Ahmedabad (Gujarat) · March W2 [ahmedabad-mar-w2]\nSurat (Gujarat) · March W2 [surat-mar-w2]\n"
        );
        assert_eq!(render_matches("xyz", &idx.search("xyz")), "No cities found\n");
        assert_eq!(render_matches("  ", &idx.search("  ")), "");
    }
}
