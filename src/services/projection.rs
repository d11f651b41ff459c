//! Map data projection: one value per country for the selected metric

use crate::types::{ChoroplethPoint, CountryAggregate, Metric, Result};

/// Countries with a non-zero value for `metric`, highest first
/// (ties broken by country name).
pub fn project_for_metric(aggregates: &[CountryAggregate], metric: Metric) -> Vec<ChoroplethPoint> {
    let mut points: Vec<ChoroplethPoint> = aggregates
        .iter()
        .filter_map(|agg| {
            let value = agg.value(metric);
            (value > 0).then(|| ChoroplethPoint {
                country: agg.country.clone(),
                value,
            })
        })
        .collect();

    points.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.country.cmp(&b.country)));
    points
}

/// Same as [`project_for_metric`], keyed by a metric name such as
/// `"wins"` or `"total-finals"`. Unknown keys are an `InvalidArgument` error.
pub fn project_for_metric_key(
    aggregates: &[CountryAggregate],
    key: &str,
) -> Result<Vec<ChoroplethPoint>> {
    let metric: Metric = key.parse()?;
    Ok(project_for_metric(aggregates, metric))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Aggregator, DatasetStore};
    use crate::types::CupError;

    fn aggregates() -> Vec<CountryAggregate> {
        let store = DatasetStore::builtin().unwrap();
        Aggregator::compute_aggregates(store.records())
    }

    #[test]
    fn test_wins_projection_only_contains_winners() {
        let aggs = aggregates();
        let points = project_for_metric(&aggs, Metric::Wins);

        let expected: Vec<&CountryAggregate> = aggs.iter().filter(|a| a.wins > 0).collect();
        assert_eq!(points.len(), expected.len());
        for agg in expected {
            let point = points.iter().find(|p| p.country == agg.country).unwrap();
            assert_eq!(point.value, agg.wins);
        }
        assert!(points.iter().all(|p| p.country != "Netherlands"));
    }

    #[test]
    fn test_wins_projection_sorted_descending() {
        let points = project_for_metric(&aggregates(), Metric::Wins);

        assert_eq!(points[0].country, "Brazil");
        assert_eq!(points[0].value, 5);
        // Germany and Italy tie on 4, alphabetical
        assert_eq!(points[1].country, "Germany");
        assert_eq!(points[2].country, "Italy");
    }

    #[test]
    fn test_total_finals_covers_every_country() {
        let aggs = aggregates();
        let points = project_for_metric(&aggs, Metric::TotalFinals);
        assert_eq!(points.len(), aggs.len());
        assert_eq!(points[0].country, "Germany");
        assert_eq!(points[0].value, 8);
    }

    #[test]
    fn test_runner_ups_projection() {
        let points = project_for_metric(&aggregates(), Metric::RunnerUps);
        assert!(points.iter().all(|p| p.country != "Uruguay"));
        let netherlands = points.iter().find(|p| p.country == "Netherlands").unwrap();
        assert_eq!(netherlands.value, 3);
    }

    #[test]
    fn test_projection_empty_input() {
        assert!(project_for_metric(&[], Metric::Wins).is_empty());
    }

    #[test]
    fn test_projection_by_key() {
        let aggs = aggregates();
        let by_key = project_for_metric_key(&aggs, "wins").unwrap();
        assert_eq!(by_key, project_for_metric(&aggs, Metric::Wins));
    }

    #[test]
    fn test_projection_unknown_key() {
        let err = project_for_metric_key(&aggregates(), "goals").unwrap_err();
        assert!(matches!(err, CupError::InvalidArgument(_)));
    }
}
