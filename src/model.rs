//! Data Model
//!
//! Wire types for the metrics API: the genre reference list and the family
//! of per-genre metric records returned for a given (year, month).

use serde::{Deserialize, Serialize};

/// A market category. The full list is fetched once and never changes
/// during a session.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

/// Monetization metrics for one genre.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RevenueRecord {
    pub genre_id: String,
    pub count_apps: f64,
    pub count_download: f64,
    pub paid_download: f64,
    pub organic_download: f64,
    pub revenue: f64,
}

/// User-base metrics for one genre. Install base is cumulative active
/// installations, distinct from active users.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserRecord {
    pub genre_id: String,
    pub active_users: f64,
    pub install_base: f64,
}

/// Average store rating for one genre (0 to 5).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RatingRecord {
    pub genre_id: String,
    pub rating: f64,
}

/// Release cadence for one genre, split into major and minor updates.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct VersionRecord {
    pub genre_id: String,
    pub big_version: f64,
    pub small_version: f64,
}

/// Market entry and exit counts for one genre.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CountRecord {
    pub genre_id: String,
    pub new_entrant: f64,
    pub new_exit: f64,
}

/// Herfindahl-Hirschman concentration index for one genre.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HhiRecord {
    pub genre_id: String,
    pub hhi: f64,
}

/// Ranking stability for one genre, overall and for the top-5/10/20 cohorts.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StabilityRecord {
    pub genre_id: String,
    pub stability: f64,
    pub stability_5: f64,
    pub stability_10: f64,
    pub stability_20: f64,
}

/// One country's position in a genre's download ranking.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CountryRank {
    pub rank: u32,
    pub country_code: String,
    pub count_download: f64,
}

/// Per-country download rankings for one genre.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CountryRankRecord {
    pub genre_id: String,
    pub rankings: Vec<CountryRank>,
}

/// Anything tagged with a genre id. Lets one filter implementation serve
/// every record shape above.
pub trait GenreTagged {
    fn genre_id(&self) -> &str;
}

macro_rules! impl_genre_tagged {
    ($($record:ty),+ $(,)?) => {
        $(
            impl GenreTagged for $record {
                fn genre_id(&self) -> &str {
                    &self.genre_id
                }
            }
        )+
    };
}

impl_genre_tagged!(
    RevenueRecord,
    UserRecord,
    RatingRecord,
    VersionRecord,
    CountRecord,
    HhiRecord,
    StabilityRecord,
    CountryRankRecord,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_tagged_covers_record_family() {
        let record = HhiRecord {
            genre_id: "action".to_string(),
            hhi: 1250.0,
        };
        assert_eq!(record.genre_id(), "action");

        let record = StabilityRecord {
            genre_id: "rpg".to_string(),
            stability: 0.8,
            stability_5: 0.9,
            stability_10: 0.85,
            stability_20: 0.7,
        };
        assert_eq!(record.genre_id(), "rpg");
    }

    #[test]
    fn test_revenue_record_deserializes_from_api_shape() {
        let json = r#"{
            "genre_id": "puzzle",
            "count_apps": 420,
            "count_download": 1500000,
            "paid_download": 30000,
            "organic_download": 1470000,
            "revenue": 2500000
        }"#;

        let record: RevenueRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.genre_id, "puzzle");
        assert_eq!(record.revenue, 2_500_000.0);
    }

    #[test]
    fn test_country_rank_record_nested_rankings() {
        let json = r#"{
            "genre_id": "strategy",
            "rankings": [
                {"rank": 1, "country_code": "US", "count_download": 900000},
                {"rank": 2, "country_code": "JP", "count_download": 650000}
            ]
        }"#;

        let record: CountryRankRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.rankings.len(), 2);
        assert_eq!(record.rankings[0].country_code, "US");
    }
}
