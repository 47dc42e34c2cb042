// ==========================================
// 场景导入集成测试
// ==========================================
// 测试目标: JSON 场景 + CSV 物品清单 → Planner → 装箱报表
// ==========================================

use pack_planner::importer::{CsvItemParser, ImportError, RejectedSubject, ScenarioParser};
use pack_planner::{DuplicatePolicy, OversizeCheck, PackError, PlannerConfig};
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn temp_file_with(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SCENARIO: &str = r#"{
    "config": { "duplicate_policy": "KEEP_ALL", "oversize_check": "AT_ENQUEUE" },
    "containers": [
        { "id": "A", "capacity": 10.0 },
        { "id": "B", "capacity": 25.0 },
        { "id": "C", "capacity": 50.0 }
    ],
    "items": [
        { "name": "Wardrobe", "volume": 45.0 },
        { "name": "Sofa", "volume": 30.0 }
    ]
}"#;

#[test]
fn test_scenario_and_csv_end_to_end() {
    println!("\n=== 测试：场景 + CSV 端到端 ===");

    let scenario_file = temp_file_with(".json", SCENARIO);
    let csv_file = temp_file_with(".csv", "name,volume\nArmchair,22\nTV,20\nElephant,150\n\n");

    let mut scenario = ScenarioParser.parse_file(scenario_file.path()).unwrap();
    scenario
        .items
        .extend(CsvItemParser.parse_file(csv_file.path()).unwrap());

    let config = scenario.effective_config();
    assert_eq!(config.duplicate_policy, DuplicatePolicy::KeepAll);
    assert_eq!(config.oversize_check, OversizeCheck::AtEnqueue);

    let outcome = scenario.load(config);
    assert_eq!(outcome.rejections.len(), 1);
    assert_eq!(outcome.rejections[0].subject, RejectedSubject::Item);
    assert_eq!(outcome.rejections[0].label, "Elephant");

    let mut planner = outcome.planner;
    let err = planner.run_greedy_pass().unwrap_err();
    let unplaced: Vec<&str> = err.unplaced_items().iter().map(|i| i.name()).collect();
    assert_eq!(unplaced, vec!["Sofa", "TV"]);

    let report = planner.report();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["containers"][2]["items"][0]["name"], "Wardrobe");
    assert_eq!(json["containers"][1]["items"][0]["name"], "Armchair");
    assert_eq!(json["pending"].as_array().unwrap().len(), 2);

    println!("✓ 报表包含 {} 个箱子", report.containers.len());
}

#[test]
fn test_env_style_overrides_beat_scenario_config() {
    let scenario_file = temp_file_with(".json", SCENARIO);
    let scenario = ScenarioParser.parse_file(scenario_file.path()).unwrap();

    let mut config = scenario.effective_config();
    config
        .apply_overrides_from(|key| match key {
            "PACK_PLANNER_DUPLICATE_POLICY" => Some("COLLAPSE".to_string()),
            _ => None,
        })
        .unwrap();
    assert_eq!(
        config,
        PlannerConfig {
            duplicate_policy: DuplicatePolicy::Collapse,
            oversize_check: OversizeCheck::AtEnqueue,
        }
    );
}

#[test]
fn test_wrong_extension_rejected() {
    let file = temp_file_with(".txt", "name,volume\nTV,20\n");
    let err = CsvItemParser.parse_file(file.path()).unwrap_err();
    assert!(matches!(err, ImportError::UnsupportedFormat(ref ext) if ext == "txt"));
}

#[test]
fn test_missing_file_rejected() {
    let err = ScenarioParser
        .parse_file(std::path::Path::new("/definitely/not/here.json"))
        .unwrap_err();
    assert!(matches!(err, ImportError::FileNotFound(_)));
}

#[test]
fn test_malformed_json_rejected() {
    let file = temp_file_with(".json", "{ \"containers\": [ { \"id\": \"A\" } ] }");
    let err = ScenarioParser.parse_file(file.path()).unwrap_err();
    assert!(matches!(err, ImportError::JsonParseError(_)));
}

#[test]
fn test_invalid_rows_become_rejections() {
    let scenario_file = temp_file_with(
        ".json",
        r#"{ "containers": [ { "id": "A", "capacity": 0 } ], "items": [ { "name": "x", "volume": -2 } ] }"#,
    );
    let scenario = ScenarioParser.parse_file(scenario_file.path()).unwrap();
    let outcome = scenario.load(PlannerConfig::default());

    assert_eq!(outcome.rejections.len(), 2);
    assert!(outcome
        .rejections
        .iter()
        .all(|r| matches!(r.reason, PackError::InvalidDimension { .. })));
    assert!(outcome.planner.containers().is_empty());
    assert!(outcome.planner.queue().is_empty());
}
