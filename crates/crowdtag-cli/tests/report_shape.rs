//! Report shape tests: runs the binary over a small batch and checks the
//! JSON field names and types that downstream writers rely on.

use std::io::Write;
use std::process::Command;

const EVENTS: &str = r#"[
    {"date": "2025-03-01", "state": "CA", "event_type": "march; rally",
     "claims_summary": "Stop ICE raids and tariffs; for democracy",
     "targets": "Trump administration", "size_mean": 100, "arrests_any": 1},
    {"date": "2025-03-02", "state": "NY",
     "claims_summary": "Stop ICE raids; for democracy",
     "targets": "local police department", "size_mean": "50"},
    {"date": "2025-01-19", "claims_summary": "for abortion rights", "valence": 1},
    {"date": "not a date", "claims_summary": "against abortion", "size_mean": "NA"}
]"#;

fn events_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(EVENTS.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_crowdtag"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_run_report_shape() {
    let file = events_file();
    let report = run(&["run", file.path().to_str().unwrap()]);

    assert_eq!(report["rule_version"], 2);
    assert_eq!(report["scope"], "all");
    assert_eq!(report["total_events"], 4);
    assert!(report["filtered_events"].is_number());

    let labels = report["labels"].as_array().unwrap();
    assert_eq!(labels.len(), 4);
    assert_eq!(labels[0]["index"], 0);
    assert_eq!(labels[0]["tags"]["immigration"], 1);
    assert_eq!(labels[0]["tags"]["trump"], 1);
    assert_eq!(labels[1]["tags"]["trump"], 0);
    assert!(labels[0]["leaning"]["left"].is_boolean());
    assert!(labels[0]["leaning"]["source"].is_string());
    assert!(labels[0]["tactics"].is_array());
    assert!(labels[0]["category"].is_string());

    let stats = report["tag_stats"].as_array().unwrap();
    assert_eq!(stats.len(), 11);
    for stat in stats {
        assert!(stat["tag"].is_string());
        assert!(stat["name"].is_string());
        assert!(stat["event_count"].is_number());
        assert!(stat["event_percentage"].is_number());
        assert!(stat["participant_count"].is_number());
        assert!(stat["participant_percentage"].is_number());
        assert!(stat["keywords"].is_array());
        assert!(stat["top_claims"].is_array());
    }
    // Abortion and immigration tie on two events; table order breaks the tie.
    assert_eq!(stats[0]["tag"], "abortion");
    assert_eq!(stats[1]["tag"], "immigration");
    assert_eq!(stats[1]["event_count"], 2);

    let claim = &report["claim_counts"][0];
    assert_eq!(claim["claim"], "for democracy");
    assert_eq!(claim["count"], 2);

    let mapped = report["claim_tags"].as_array().unwrap();
    assert!(mapped.iter().all(|m| m["tags"].is_array()));

    assert!(report["tactics"].is_array());
    assert!(report["categories"].is_array());
    assert!(report["orientation"]["left_only"]["mentions"].is_number());
    assert!(report["orientation"]["left_only"]["top"].is_array());
    assert_eq!(report["actor_timeline"]["total_events"], 1);
    assert_eq!(report["actor_timeline"]["top_claims"][0]["claim"], "Stop ICE raids and tariffs");

    let overview = &report["overview"];
    assert_eq!(overview["total_events"], 4);
    assert_eq!(overview["average_size"], 75.0);
    assert_eq!(overview["date_range"]["start"], "2025-01-19");
    assert_eq!(overview["date_range"]["end"], "2025-03-02");
    assert_eq!(overview["monthly"][0]["month"], "2025-01");

    let network = &report["claim_network"];
    assert_eq!(network["nodes"][0]["claim"], "for democracy");
    assert_eq!(network["links"].as_array().unwrap().len(), 2);
    assert_eq!(network["links"][0]["value"], 1);
}

#[test]
fn test_filtered_scope() {
    let file = events_file();
    let report = run(&["run", file.path().to_str().unwrap(), "--filtered"]);
    assert_eq!(report["scope"], "filtered");
    assert_eq!(report["filtered_events"], 2);
    assert_eq!(report["aggregated_events"], 2);
}

#[test]
fn test_rules_command() {
    let rules = run(&["rules"]);
    assert_eq!(rules["version"], 2);
    let kinds: Vec<&str> = rules["rules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["matcher"]["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"acronym"));
    assert!(kinds.contains(&"narrowed"));
    assert!(kinds.contains(&"keywords_or_targets"));
}
