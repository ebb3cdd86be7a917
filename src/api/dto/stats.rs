//! Response bodies for the statistics report.

use serde::Serialize;

use crate::application::services::StatisticSnapshot;

/// One entry of `GET /stats`.
#[derive(Debug, Serialize)]
pub struct UrlStatistic {
    pub link: String,
    pub orig_link: String,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
}

impl From<StatisticSnapshot> for UrlStatistic {
    fn from(snapshot: StatisticSnapshot) -> Self {
        Self {
            link: snapshot.short_url,
            orig_link: snapshot.origin_url,
            last_hour_clicks: snapshot.last_hour_clicks,
            last_day_clicks: snapshot.last_day_clicks,
        }
    }
}
