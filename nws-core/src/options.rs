use std::collections::BTreeMap;

/// Query-string filters sent to the active alerts endpoint, keyed by filter name.
pub type QueryParams = BTreeMap<&'static str, String>;

/// User-supplied filters for an active alerts query.
///
/// Values are free-form; the API is the authority on which ones are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertOptions {
    /// actual, exercise, system, test, draft. Accepted but not sent.
    pub status: String,
    /// alert, update, cancel. Accepted but not sent.
    pub message_type: String,
    pub event: String,
    /// Event code. Accepted but not sent.
    pub code: String,
    /// State/territory code or marine area.
    pub area: String,
    /// "lat,lon". Accepted but not sent.
    pub point: String,
    /// Marine region code (AL, AT, GL, PA, PI).
    pub region: String,
    /// land or marine.
    pub region_type: String,
    pub zone: String,
    pub urgency: String,
    pub severity: String,
    pub certainty: String,
    /// Result limit. Accepted but not sent.
    pub limit: Option<u32>,
    /// API service selector. Accepted but not sent.
    pub service: String,
}

impl AlertOptions {
    /// Project populated filters into query parameters.
    ///
    /// Empty values are left out entirely; `area` is upper-cased.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();

        let filters = [
            ("urgency", &self.urgency),
            ("area", &self.area),
            ("severity", &self.severity),
            ("certainty", &self.certainty),
            ("region", &self.region),
            ("region_type", &self.region_type),
            ("event", &self.event),
            ("zone", &self.zone),
        ];

        for (key, value) in filters {
            if value.is_empty() {
                continue;
            }
            let value = if key == "area" { value.to_uppercase() } else { value.clone() };
            params.insert(key, value);
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_yield_no_params() {
        assert!(AlertOptions::default().to_params().is_empty());
    }

    #[test]
    fn area_is_uppercased() {
        let opts = AlertOptions { area: "fl".into(), ..Default::default() };
        let params = opts.to_params();

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("area").map(String::as_str), Some("FL"));
    }

    #[test]
    fn populated_filters_are_passed_verbatim() {
        let opts = AlertOptions {
            urgency: "Immediate".into(),
            severity: "severe".into(),
            certainty: "Observed".into(),
            region: "GL".into(),
            region_type: "marine".into(),
            event: "Flood Warning".into(),
            zone: "FLZ050".into(),
            ..Default::default()
        };
        let params = opts.to_params();

        assert_eq!(params.len(), 7);
        assert_eq!(params["severity"], "severe");
        assert_eq!(params["event"], "Flood Warning");
        assert_eq!(params["region_type"], "marine");
        assert!(!params.contains_key("area"));
    }

    #[test]
    fn unsupported_fields_never_projected() {
        let opts = AlertOptions {
            status: "actual".into(),
            message_type: "alert".into(),
            code: "FFW".into(),
            point: "27.9,-82.4".into(),
            limit: Some(10),
            service: "alerts".into(),
            ..Default::default()
        };

        assert!(opts.to_params().is_empty());
    }
}
