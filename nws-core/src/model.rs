use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Response of the active alerts endpoint (a GeoJSON feature collection).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertCollection {
    #[serde(rename = "@context", default)]
    pub context: Value,
    #[serde(rename = "type", default, deserialize_with = "nullable_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub updated: String,
    /// Kept in API order.
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

/// One alert within a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertFeature {
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "nullable_string")]
    pub kind: String,
    #[serde(default)]
    pub geometry: Value,
    #[serde(default)]
    pub properties: AlertProperties,
}

/// Alert details. Timestamps are kept as the API formats them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertProperties {
    #[serde(rename = "@id", default, deserialize_with = "nullable_string")]
    pub at_id: String,
    #[serde(rename = "@type", default, deserialize_with = "nullable_string")]
    pub at_type: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub area_desc: String,
    #[serde(default)]
    pub geocode: Value,
    #[serde(default)]
    pub affected_zones: Value,
    #[serde(default, deserialize_with = "nullable_string")]
    pub sent: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub effective: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub onset: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub expires: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub ends: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub message_type: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub category: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub severity: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub certainty: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub urgency: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub event: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub sender: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub sender_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub headline: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    /// Empty when the alert carries no instructions.
    #[serde(default, deserialize_with = "nullable_string")]
    pub instruction: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub response: String,
    #[serde(default)]
    pub parameters: Value,
}

/// Response of the active alert count endpoint.
///
/// `total` is reported as received; it is not checked against `land + marine`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertCountSummary {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub land: u64,
    #[serde(default)]
    pub marine: u64,
    #[serde(default)]
    pub regions: HashMap<String, u64>,
    #[serde(default)]
    pub areas: HashMap<String, u64>,
    #[serde(default)]
    pub zones: HashMap<String, u64>,
}

// The API sends `null` for absent text such as `instruction` or `ends`.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_text_decode_as_empty() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "id": "urn:oid:1",
                "geometry": null,
                "properties": {
                    "event": "Flood Warning",
                    "instruction": null,
                    "ends": null
                }
            }]
        }"#;

        let parsed: AlertCollection = serde_json::from_str(json).expect("valid collection");
        let props = &parsed.features[0].properties;

        assert_eq!(parsed.kind, "FeatureCollection");
        assert_eq!(parsed.title, "");
        assert_eq!(props.event, "Flood Warning");
        assert_eq!(props.instruction, "");
        assert_eq!(props.ends, "");
        assert_eq!(props.headline, "");
    }

    #[test]
    fn camel_case_and_at_prefixed_fields() {
        let json = r#"{
            "features": [{
                "properties": {
                    "@type": "wx:Alert",
                    "areaDesc": "Pinellas",
                    "messageType": "Update",
                    "senderName": "NWS Tampa Bay",
                    "affectedZones": ["https://api.weather.gov/zones/forecast/FLZ050"]
                }
            }]
        }"#;

        let parsed: AlertCollection = serde_json::from_str(json).expect("valid collection");
        let props = &parsed.features[0].properties;

        assert_eq!(props.at_type, "wx:Alert");
        assert_eq!(props.area_desc, "Pinellas");
        assert_eq!(props.message_type, "Update");
        assert_eq!(props.sender_name, "NWS Tampa Bay");
        assert!(props.affected_zones.is_array());
    }

    #[test]
    fn feature_order_is_preserved() {
        let json = r#"{"features": [{"id": "b"}, {"id": "a"}, {"id": "c"}]}"#;
        let parsed: AlertCollection = serde_json::from_str(json).expect("valid collection");
        let ids: Vec<_> = parsed.features.iter().map(|f| f.id.as_str()).collect();

        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn count_summary_is_not_validated() {
        let json = r#"{"total": 9, "land": 3, "marine": 2, "areas": {"FL": 2}}"#;
        let parsed: AlertCountSummary = serde_json::from_str(json).expect("valid summary");

        assert_eq!(parsed.total, 9);
        assert_eq!(parsed.land + parsed.marine, 5);
        assert_eq!(parsed.areas.get("FL"), Some(&2));
        assert!(parsed.regions.is_empty());
        assert!(parsed.zones.is_empty());
    }

    #[test]
    fn type_mismatch_is_a_decode_error() {
        let json = r#"{"total": "many"}"#;
        assert!(serde_json::from_str::<AlertCountSummary>(json).is_err());
    }
}
