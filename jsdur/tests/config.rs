//! Loads application config structs carrying durations from JSON and YAML.

use giztoy_jsdur::Duration;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct ServerConfig {
    name: String,
    #[serde(default)]
    read_timeout: Duration,
    #[serde(default)]
    idle_timeout: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    retry_backoff: Option<Duration>,
}

#[test]
fn test_yaml_config() {
    let yaml = r#"
name: gateway
read_timeout: 30s
idle_timeout: "1h30m"
retry_backoff: 250ms
"#;
    let cfg: ServerConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(cfg.name, "gateway");
    assert_eq!(cfg.read_timeout, Duration::from_secs(30));
    assert_eq!(cfg.idle_timeout, Duration::from_mins(90));
    assert_eq!(cfg.retry_backoff, Some(Duration::from_millis(250)));
}

#[test]
fn test_yaml_config_defaults() {
    let yaml = r#"
name: worker
idle_timeout: ""
"#;
    let cfg: ServerConfig = serde_yaml::from_str(yaml).unwrap();

    assert!(cfg.read_timeout.is_zero());
    assert!(cfg.idle_timeout.is_zero());
    assert_eq!(cfg.retry_backoff, None);
}

#[test]
fn test_yaml_config_invalid_duration() {
    let yaml = r#"
name: worker
read_timeout: 2d
"#;
    let err = serde_yaml::from_str::<ServerConfig>(yaml).unwrap_err();
    assert!(
        err.to_string().contains(r#"unknown unit "d" in duration "2d""#),
        "{err}"
    );
}

#[test]
fn test_yaml_round_trip() {
    let cfg = ServerConfig {
        name: "edge".to_string(),
        read_timeout: Duration::from_millis(1_500),
        idle_timeout: Duration::ZERO,
        retry_backoff: Some(Duration::from_micros(20)),
    };

    let yaml = serde_yaml::to_string(&cfg).unwrap();
    let restored: ServerConfig = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(restored, cfg);
}

#[test]
fn test_json_config() {
    let json = r#"{"name":"gateway","read_timeout":"0","idle_timeout":"5h12m47s"}"#;
    let cfg: ServerConfig = serde_json::from_str(json).unwrap();

    assert!(cfg.read_timeout.is_zero());
    assert_eq!(
        cfg.idle_timeout,
        Duration::from_hours(5) + Duration::from_mins(12) + Duration::from_secs(47)
    );

    // "0" comes back as "" on the way out.
    let out = serde_json::to_string(&cfg).unwrap();
    assert_eq!(
        out,
        r#"{"name":"gateway","read_timeout":"","idle_timeout":"5h12m47s"}"#
    );
}

#[test]
fn test_json_config_rejects_numeric_duration() {
    let json = r#"{"name":"gateway","read_timeout":30}"#;
    let err = serde_json::from_str::<ServerConfig>(json).unwrap_err();
    assert!(err.is_data(), "{err}");
    assert!(err.to_string().contains("expected a duration string"), "{err}");
}
