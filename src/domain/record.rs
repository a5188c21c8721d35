use super::severity::{Facility, Priority};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single decoded Logplex syslog message.
///
/// Serialized as a flat JSON object: named fields first, then any passthrough
/// keys captured by a custom parsing expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pri: Option<String>,
    /// Timestamp token as sent by Logplex, or the delivery time when empty.
    pub time: String,
    /// Authoritative drain token from the request, never the captured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ident: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility: Option<Facility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Record {
    /// Look up a field by its wire name, including passthrough keys.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "pri" => self.pri.as_deref(),
            "time" => Some(self.time.as_str()),
            "drain_id" => self.drain_id.as_deref(),
            "ident" => self.ident.as_deref(),
            "pid" => self.pid.as_deref(),
            "message" => self.message.as_deref(),
            "facility" => self.facility.map(Facility::as_str),
            "priority" => self.priority.map(Priority::as_str),
            other => self.extra.get(other).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            pri: Some("158".to_string()),
            time: "2013-09-05T09:00:55Z".to_string(),
            drain_id: Some("d.123".to_string()),
            ident: Some("app".to_string()),
            pid: Some("web.3".to_string()),
            message: Some("State changed from starting to up".to_string()),
            facility: Some(Facility::Local3),
            priority: Some(Priority::Info),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_get_named_and_passthrough_fields() {
        let mut record = sample();
        record.extra.insert("router".to_string(), "heroku".to_string());

        assert_eq!(record.get("facility"), Some("local3"));
        assert_eq!(record.get("priority"), Some("info"));
        assert_eq!(record.get("drain_id"), Some("d.123"));
        assert_eq!(record.get("router"), Some("heroku"));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_serializes_flat_and_omits_absent_fields() {
        let mut record = sample();
        record.pid = None;
        record.facility = None;
        record.extra.insert("dyno".to_string(), "web.3".to_string());

        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("pid"));
        assert!(!obj.contains_key("facility"));
        assert_eq!(obj["priority"], "info");
        assert_eq!(obj["dyno"], "web.3");
    }

    #[test]
    fn test_deserializes_passthrough_keys_into_extra() {
        let json = r#"{"time":"2013-09-05T09:00:55Z","message":"hi","priority":"warn","dyno":"run.1"}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.priority, Some(Priority::Warn));
        assert_eq!(record.message.as_deref(), Some("hi"));
        assert_eq!(record.extra.get("dyno").map(String::as_str), Some("run.1"));
        assert!(record.drain_id.is_none());
    }
}
