//! Listing page backed by the fixed sample set.

use crate::domain::listing::{SampleSchool, sample_schools};
use crate::dto::listing::{ShowSchoolsPageData, ShowSchoolsQuery};

/// Keeps the schools whose name or city contains `search`, ignoring case.
///
/// The term is used verbatim, surrounding whitespace included; an empty term
/// keeps everything.
pub fn filter_schools(schools: Vec<SampleSchool>, search: Option<&str>) -> Vec<SampleSchool> {
    let Some(needle) = search.filter(|s| !s.is_empty()) else {
        return schools;
    };
    let needle = needle.to_lowercase();
    schools
        .into_iter()
        .filter(|school| school.matches(&needle))
        .collect()
}

/// Builds the listing page for the given query.
pub fn load_show_schools(query: ShowSchoolsQuery) -> ShowSchoolsPageData {
    let search_query = query.search.filter(|s| !s.is_empty());

    let schools = filter_schools(sample_schools(), search_query.as_deref());

    ShowSchoolsPageData {
        schools,
        search_query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(schools: &[SampleSchool]) -> Vec<i32> {
        schools.iter().map(|s| s.id).collect()
    }

    #[test]
    fn lucknow_matches_city_or_name() {
        let page = load_show_schools(ShowSchoolsQuery {
            search: Some("lucknow".to_string()),
        });
        assert_eq!(ids(&page.schools), vec![1, 2, 3, 4]);
        assert_eq!(page.search_query.as_deref(), Some("lucknow"));
    }

    #[test]
    fn search_ignores_case() {
        let schools = filter_schools(sample_schools(), Some("NOIDA"));
        assert_eq!(ids(&schools), vec![5, 6]);
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        assert!(filter_schools(sample_schools(), Some(" lucknow")).is_empty());
        // "Lucknow Public School" has a space after the city name.
        assert_eq!(ids(&filter_schools(sample_schools(), Some("lucknow "))), vec![4]);
    }

    #[test]
    fn search_matches_name_substring() {
        let schools = filter_schools(sample_schools(), Some("world school"));
        assert_eq!(ids(&schools), vec![5, 7, 8]);
    }

    #[test]
    fn empty_search_shows_everything() {
        let page = load_show_schools(ShowSchoolsQuery {
            search: Some(String::new()),
        });
        assert_eq!(page.schools.len(), 8);
        assert_eq!(page.search_query, None);
    }

    #[test]
    fn unmatched_search_is_empty() {
        assert!(filter_schools(sample_schools(), Some("mumbai")).is_empty());
    }
}
