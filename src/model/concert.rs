use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y %I:%M %p";
const SHOW_DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const SHOW_DAY_FORMAT: &str = "%Y-%m-%d";

/// A single concert listing as returned by the remote API.
///
/// The upstream source guarantees none of these fields, so every one of them
/// is optional. Absent fields are omitted again on serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_show: Option<ShowDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_hall_name: Option<String>,
}

impl Concert {
    /// The concert name, or an empty string when the source omitted it.
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Show date formatted as `DD/MM/YYYY hh:mm AM`.
    ///
    /// Returns `None` when the date is missing or cannot be parsed.
    pub fn display_date(&self) -> Option<String> {
        self.date_of_show
            .as_ref()
            .and_then(ShowDate::to_datetime)
            .map(|dt| dt.format(DISPLAY_DATE_FORMAT).to_string())
    }

    /// Key identifying this listing among its siblings: the event date name
    /// followed by the raw show date.
    pub fn display_key(&self) -> String {
        let date = self
            .date_of_show
            .as_ref()
            .map(ShowDate::to_string)
            .unwrap_or_default();
        format!("{}{date}", self.event_date_name.as_deref().unwrap_or_default())
    }
}

/// When a show takes place, as sent by the API.
///
/// Usually an ISO 8601 string, but epoch milliseconds are accepted too.
/// Any JSON number decodes, so an odd timestamp never fails the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShowDate {
    Millis(serde_json::Number),
    Text(String),
}

impl ShowDate {
    /// Interpret the raw value as a wall-clock date and time.
    ///
    /// Offsets in RFC 3339 strings are kept as the local time of the show;
    /// epoch milliseconds are read as UTC.
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            ShowDate::Millis(ms) => ms
                .as_i64()
                .or_else(|| ms.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
                .and_then(DateTime::from_timestamp_millis)
                .map(|dt| dt.naive_utc()),
            ShowDate::Text(raw) => parse_show_date(raw.trim()),
        }
    }
}

impl Display for ShowDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShowDate::Millis(ms) => write!(f, "{ms}"),
            ShowDate::Text(raw) => write!(f, "{raw}"),
        }
    }
}

fn parse_show_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    SHOW_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, SHOW_DAY_FORMAT)
                .ok()
                .and_then(|day| day.and_hms_opt(0, 0, 0))
        })
}

/// The JSON envelope wrapping the concert list.
#[derive(Debug, Deserialize)]
pub(crate) struct ConcertEnvelope {
    pub results: Vec<Concert>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn with_date(date: ShowDate) -> Concert {
        Concert {
            date_of_show: Some(date),
            ..Concert::default()
        }
    }

    #[test]
    fn test_deserialize_full_listing() {
        let concert: Concert = serde_json::from_value(json!({
            "eventDateName": "Jólatónleikar",
            "name": "Björk Live",
            "dateOfShow": "2019-12-20T20:00:00",
            "userGroupName": "Harpa",
            "eventHallName": "Eldborg",
            "imageSource": "https://example.com/bjork.jpg"
        }))
        .unwrap();

        assert_eq!(concert.name.as_deref(), Some("Björk Live"));
        assert_eq!(concert.event_hall_name.as_deref(), Some("Eldborg"));
        assert_eq!(
            concert.image_source.as_deref(),
            Some("https://example.com/bjork.jpg")
        );
        assert_eq!(
            concert.date_of_show,
            Some(ShowDate::Text("2019-12-20T20:00:00".to_string()))
        );
    }

    #[test]
    fn test_missing_and_null_fields_are_absent() {
        let concert: Concert = serde_json::from_value(json!({ "name": null })).unwrap();
        assert_eq!(concert, Concert::default());
        assert_eq!(concert.title(), "");
        assert_eq!(concert.display_date(), None);
        assert_eq!(concert.display_key(), "");
    }

    #[test]
    fn test_serializes_back_to_source_shape() {
        let source = json!({
            "name": "Test Show",
            "dateOfShow": "2020-01-01",
            "eventHallName": "Hall A",
            "eventDateName": "ev1"
        });
        let concert: Concert = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(serde_json::to_value(&concert).unwrap(), source);
    }

    #[test]
    fn test_numeric_date_of_show() {
        let concert: Concert =
            serde_json::from_value(json!({ "dateOfShow": 1577880000000i64 })).unwrap();
        assert_eq!(
            concert.date_of_show,
            Some(ShowDate::Millis(1577880000000i64.into()))
        );
        assert_eq!(concert.display_date().as_deref(), Some("01/01/2020 12:00 PM"));
    }

    #[test]
    fn test_float_date_of_show() {
        let concert: Concert =
            serde_json::from_value(json!({ "dateOfShow": 1577880000000.0 })).unwrap();
        assert_eq!(concert.display_date().as_deref(), Some("01/01/2020 12:00 PM"));
        assert_eq!(concert.display_key(), "1577880000000.0");
    }

    #[test]
    fn test_out_of_range_date_of_show_has_no_display() {
        let concert: Concert =
            serde_json::from_value(json!({ "dateOfShow": u64::MAX })).unwrap();
        assert!(concert.date_of_show.is_some());
        assert_eq!(concert.display_date(), None);
    }

    #[test]
    fn test_display_date_formats() {
        let cases = [
            ("2019-12-20T20:00:00", "20/12/2019 08:00 PM"),
            ("2019-12-20T09:05:00.000", "20/12/2019 09:05 AM"),
            ("2019-12-20 21:30:00", "20/12/2019 09:30 PM"),
            ("2019-12-20T20:00:00+00:00", "20/12/2019 08:00 PM"),
            ("2020-01-01", "01/01/2020 12:00 AM"),
        ];
        for (raw, expected) in cases {
            let concert = with_date(ShowDate::Text(raw.to_string()));
            assert_eq!(concert.display_date().as_deref(), Some(expected), "{raw}");
        }
    }

    #[test]
    fn test_unparseable_date_has_no_display() {
        let concert = with_date(ShowDate::Text("next friday".to_string()));
        assert_eq!(concert.display_date(), None);
    }

    #[test]
    fn test_display_key_concatenates_date_name_and_date() {
        let concert = Concert {
            event_date_name: Some("ev1".to_string()),
            date_of_show: Some(ShowDate::Text("2020-01-01".to_string())),
            ..Concert::default()
        };
        assert_eq!(concert.display_key(), "ev12020-01-01");
    }

    #[test]
    fn test_envelope_requires_results() {
        let envelope: ConcertEnvelope =
            serde_json::from_str(r#"{"results":[{"name":"A"},{"name":"B"}]}"#).unwrap();
        assert_eq!(envelope.results.len(), 2);
        assert!(serde_json::from_str::<ConcertEnvelope>(r#"{"concerts":[]}"#).is_err());
    }
}
