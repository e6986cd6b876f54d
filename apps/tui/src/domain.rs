use crate::api::models::Country;

/// The six subscores a country prospect is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Geological,
    Political,
    Legal,
    Economic,
    MarketAccess,
    Security,
}

impl Metric {
    /// All metrics in dashboard order. Indexing with `metric as usize`
    /// matches this order.
    pub const ALL: [Self; 6] = [
        Self::Geological,
        Self::Political,
        Self::Legal,
        Self::Economic,
        Self::MarketAccess,
        Self::Security,
    ];

    /// Field name on the wire.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Geological => "geological_score",
            Self::Political => "political_score",
            Self::Legal => "legal_score",
            Self::Economic => "economic_score",
            Self::MarketAccess => "market_access_score",
            Self::Security => "security_score",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Geological => "Geological",
            Self::Political => "Political",
            Self::Legal => "Legal",
            Self::Economic => "Economic",
            Self::MarketAccess => "Market Access",
            Self::Security => "Security",
        }
    }

    /// Three-letter label for chart axes.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Geological => "GEO",
            Self::Political => "POL",
            Self::Legal => "LEG",
            Self::Economic => "ECO",
            Self::MarketAccess => "MKT",
            Self::Security => "SEC",
        }
    }

    /// Fixed ranking weight. The six weights sum to 1.0.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Geological => 0.25,
            Self::Political => 0.20,
            Self::Legal | Self::Economic | Self::MarketAccess => 0.15,
            Self::Security => 0.10,
        }
    }
}

/// Weighted total score: dot product of the six subscores with the fixed
/// weight vector, rounded to 2 decimals.
pub fn weighted_total(country: &Country) -> f64 {
    let total: f64 = Metric::ALL
        .iter()
        .map(|metric| country.metric(*metric) * metric.weight())
        .sum();

    (total * 100.0).round() / 100.0
}

/// Per-metric differences `a[k] - b[k]`, in dashboard order. Not aggregated.
pub fn metric_deltas(a: &Country, b: &Country) -> [(Metric, f64); 6] {
    Metric::ALL.map(|metric| (metric, a.metric(metric) - b.metric(metric)))
}

/// Mean of one metric across the cache. Zero for an empty cache.
pub fn metric_average(countries: &[Country], metric: Metric) -> f64 {
    if countries.is_empty() {
        return 0.0;
    }

    let sum: f64 = countries.iter().map(|country| country.metric(metric)).sum();
    #[allow(clippy::cast_precision_loss)]
    let count = countries.len() as f64;
    sum / count
}

#[cfg(test)]
mod tests {
    use super::{metric_average, metric_deltas, weighted_total, Metric};
    use crate::api::models::Country;

    fn country(name: &str, scores: [f64; 6]) -> Country {
        Country {
            id: 1,
            name: name.to_string(),
            geological_score: scores[0],
            political_score: scores[1],
            legal_score: scores[2],
            economic_score: scores[3],
            market_access_score: scores[4],
            security_score: scores[5],
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn weights_sum_to_one() {
        let sum: f64 = Metric::ALL.iter().map(|metric| metric.weight()).sum();
        assert_close(sum, 1.0);
    }

    #[test]
    fn weighted_total_matches_dot_product() {
        let c = country("Chile", [8.0, 7.0, 6.0, 5.0, 9.0, 4.0]);

        // 8*0.25 + 7*0.20 + 6*0.15 + 5*0.15 + 9*0.15 + 4*0.10 = 6.80
        assert_close(weighted_total(&c), 6.80);
    }

    #[test]
    fn weighted_total_rounds_to_two_decimals() {
        let c = country("Peru", [0.1, 0.1, 0.1, 0.1, 0.1, 0.1]);

        // Raw total is 0.1 with accumulated float noise; rounded to 0.1.
        assert_close(weighted_total(&c), 0.1);

        let d = country("Ghana", [1.234, 5.678, 9.876, 3.21, 6.54, 0.99]);
        let raw: f64 = Metric::ALL
            .iter()
            .map(|metric| d.metric(*metric) * metric.weight())
            .sum();
        assert_close(weighted_total(&d), (raw * 100.0).round() / 100.0);
    }

    #[test]
    fn extreme_scores_stay_in_range() {
        let min = country("Min", [0.0; 6]);
        let max = country("Max", [10.0; 6]);

        assert_close(weighted_total(&min), 0.0);
        assert_close(weighted_total(&max), 10.0);
    }

    #[test]
    fn deltas_against_self_are_zero() {
        let c = country("Chile", [8.0, 7.0, 6.0, 5.0, 9.0, 4.0]);

        for (_, delta) in metric_deltas(&c, &c) {
            assert_close(delta, 0.0);
        }
    }

    #[test]
    fn deltas_are_per_metric_and_signed() {
        let a = country("A", [8.0, 7.0, 6.0, 5.0, 9.0, 4.0]);
        let b = country("B", [6.0, 7.5, 6.0, 2.0, 9.5, 8.0]);

        let deltas = metric_deltas(&a, &b);
        assert_eq!(deltas[0].0, Metric::Geological);
        assert_close(deltas[0].1, 2.0);
        assert_close(deltas[1].1, -0.5);
        assert_close(deltas[2].1, 0.0);
        assert_close(deltas[3].1, 3.0);
        assert_close(deltas[4].1, -0.5);
        assert_close(deltas[5].1, -4.0);
    }

    #[test]
    fn average_over_empty_cache_is_zero() {
        assert_close(metric_average(&[], Metric::Geological), 0.0);
    }

    #[test]
    fn average_over_cache() {
        let cache = vec![
            country("A", [8.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            country("B", [4.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ];

        assert_close(metric_average(&cache, Metric::Geological), 6.0);
        assert_close(metric_average(&cache, Metric::Security), 0.0);
    }
}
