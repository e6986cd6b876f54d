use crate::domain::Metric;
use serde::{Deserialize, Serialize};

/// A country record as returned by `GET /countries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub geological_score: f64,
    pub political_score: f64,
    pub legal_score: f64,
    pub economic_score: f64,
    pub market_access_score: f64,
    pub security_score: f64,
}

impl Country {
    pub const fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Geological => self.geological_score,
            Metric::Political => self.political_score,
            Metric::Legal => self.legal_score,
            Metric::Economic => self.economic_score,
            Metric::MarketAccess => self.market_access_score,
            Metric::Security => self.security_score,
        }
    }
}

/// Body for `POST /countries`. The backend assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewCountry {
    pub name: String,
    pub geological_score: f64,
    pub political_score: f64,
    pub legal_score: f64,
    pub economic_score: f64,
    pub market_access_score: f64,
    pub security_score: f64,
}

/// One row of the `POST /score` response. Rows arrive sorted by
/// descending score; the client renders them in received order.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::{Country, NewCountry, RankingEntry};
    use crate::domain::Metric;

    #[test]
    fn country_parses_backend_json() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"[{
            "id": 3,
            "name": "Chile",
            "geological_score": 8.5,
            "political_score": 7.0,
            "legal_score": 6.5,
            "economic_score": 7.5,
            "market_access_score": 8.0,
            "security_score": 6.0
        }]"#;

        let countries: Vec<Country> = serde_json::from_str(body)?;
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].id, 3);
        assert_eq!(countries[0].name, "Chile");
        assert!((countries[0].metric(Metric::MarketAccess) - 8.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[test]
    fn new_country_serializes_wire_keys() -> Result<(), Box<dyn std::error::Error>> {
        let payload = NewCountry {
            name: "Ghana".to_string(),
            geological_score: 9.0,
            political_score: 5.0,
            legal_score: 5.5,
            economic_score: 6.0,
            market_access_score: 4.5,
            security_score: 5.0,
        };

        let value = serde_json::to_value(&payload)?;
        for metric in Metric::ALL {
            assert!(value.get(metric.key()).is_some(), "missing {}", metric.key());
        }
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "Ghana");

        Ok(())
    }

    #[test]
    fn ranking_rows_parse_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"[{"name": "Chile", "score": 7.43}, {"name": "Ghana", "score": 6.1}]"#;

        let rows: Vec<RankingEntry> = serde_json::from_str(body)?;
        assert_eq!(rows[0].name, "Chile");
        assert!((rows[0].score - 7.43).abs() < f64::EPSILON);
        assert_eq!(rows[1].name, "Ghana");

        Ok(())
    }

    #[test]
    fn metric_accessor_covers_every_field() {
        let country = Country {
            id: 1,
            name: "Peru".to_string(),
            geological_score: 1.0,
            political_score: 2.0,
            legal_score: 3.0,
            economic_score: 4.0,
            market_access_score: 5.0,
            security_score: 6.0,
        };

        let values: Vec<f64> = Metric::ALL.iter().map(|m| country.metric(*m)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
