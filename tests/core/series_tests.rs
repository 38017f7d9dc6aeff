//! Comprehensive tests for chart series construction
//!
//! Tests cover:
//! - Color index assignment by insertion order
//! - Timestamp scaling to milliseconds
//! - Legend label truncation
//! - Branched label formatting

use quickview::series::{build_series, truncate_label, MAX_LABEL_CHARS};

use crate::common::{branched_payload_json, flat_payload_json, parse_history};

// ============================================
// Color Index Tests
// ============================================

#[test]
fn test_flat_color_indices_sequential() {
    let history = parse_history(&flat_payload_json());
    let series = build_series(&history.data);
    let indices: Vec<usize> = series.iter().map(|s| s.color_index).collect();
    assert_eq!(
        indices,
        vec![0, 1],
        "color slots must follow payload insertion order"
    );
}

#[test]
fn test_branched_color_indices_run_on_across_branches() {
    let history = parse_history(&branched_payload_json());
    let series = build_series(&history.data);
    let indices: Vec<usize> = series.iter().map(|s| s.color_index).collect();
    assert_eq!(
        indices,
        vec![0, 1, 2],
        "indices keep counting across branch boundaries"
    );
}

#[test]
fn test_reparsing_same_payload_keeps_colors_stable() {
    let history_a = parse_history(&flat_payload_json());
    let history_b = parse_history(&flat_payload_json());
    let series_a = build_series(&history_a.data);
    let series_b = build_series(&history_b.data);
    for (a, b) in series_a.iter().zip(&series_b) {
        assert_eq!(a.command, b.command);
        assert_eq!(a.color_index, b.color_index);
    }
}

// ============================================
// Unit Conversion Tests
// ============================================

#[test]
fn test_point_times_scaled_to_millis() {
    let history = parse_history(&flat_payload_json());
    let series = build_series(&history.data);
    let build = &series[0];
    assert_eq!(build.points[0].time_ms, 1_706_000_000_000.0);
    assert_eq!(build.points[1].time_ms, 1_706_003_600_000.0);
}

#[test]
fn test_durations_stay_in_seconds() {
    let history = parse_history(&flat_payload_json());
    let series = build_series(&history.data);
    let durations: Vec<f64> = series[0].points.iter().map(|p| p.duration_secs).collect();
    assert_eq!(durations, vec![2.0, 3.0, 2.4]);
}

#[test]
fn test_vcs_carried_into_points() {
    let history = parse_history(&flat_payload_json());
    let series = build_series(&history.data);
    let point = &series[0].points[0];
    assert_eq!(point.vcs.commit.as_deref(), Some("abc123"));
    assert_eq!(point.vcs.branch.as_deref(), Some("main"));
    assert!(series[0].points[2].vcs.is_empty());
}

#[test]
fn test_empty_run_list_produces_empty_series() {
    let json = r#"{
        "repository": "r", "first_run": 0, "last_run": 1,
        "run_data": {"build": []}
    }"#;
    let history = parse_history(json);
    let series = build_series(&history.data);
    assert_eq!(series.len(), 1);
    assert!(series[0].points.is_empty());
}

// ============================================
// Label Tests
// ============================================

#[test]
fn test_flat_label_is_command() {
    let history = parse_history(&flat_payload_json());
    let series = build_series(&history.data);
    assert_eq!(series[0].label, "make build");
    assert_eq!(series[1].label, "cargo test --all");
}

#[test]
fn test_branched_label_is_command_at_branch() {
    let history = parse_history(&branched_payload_json());
    let series = build_series(&history.data);
    let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["make build@main", "make lint@main", "make build@develop"]
    );
}

#[test]
fn test_branched_series_keep_branch_field() {
    let history = parse_history(&branched_payload_json());
    let series = build_series(&history.data);
    assert_eq!(series[0].branch.as_deref(), Some("main"));
    assert_eq!(series[2].branch.as_deref(), Some("develop"));
}

#[test]
fn test_long_command_label_truncated_but_command_kept_whole() {
    let long_command = "x".repeat(80);
    let json = format!(
        r#"{{
            "repository": "r", "first_run": 0, "last_run": 1,
            "run_data": {{"{long_command}": [[1000, 2.0, {{}}]]}}
        }}"#
    );
    let history = parse_history(&json);
    let series = build_series(&history.data);
    assert_eq!(series[0].command, long_command, "command stays untruncated");
    assert_eq!(series[0].label.chars().count(), MAX_LABEL_CHARS + 2);
    assert!(series[0].label.ends_with("..."));
}

// ============================================
// Truncation Tests
// ============================================

#[test]
fn test_truncate_short_name_unchanged() {
    assert_eq!(truncate_label("make build", 50), "make build");
}

#[test]
fn test_truncate_exactly_at_limit_unchanged() {
    let name = "a".repeat(50);
    assert_eq!(truncate_label(&name, 50), name);
}

#[test]
fn test_truncate_one_past_limit() {
    let name = "b".repeat(51);
    let truncated = truncate_label(&name, 50);
    assert_eq!(truncated.chars().count(), 52, "49 kept chars plus '...'");
    assert_eq!(&truncated[..49], &name[..49]);
    assert!(truncated.ends_with("..."));
}

#[test]
fn test_truncate_counts_chars_not_bytes() {
    // 60 three-byte chars; byte-based slicing would panic or split mid-char
    let name = "日".repeat(60);
    let truncated = truncate_label(&name, 50);
    assert_eq!(truncated.chars().count(), 52);
    assert!(truncated.starts_with(&"日".repeat(49)));
    assert!(truncated.ends_with("..."));
}

#[test]
fn test_truncate_empty_name() {
    assert_eq!(truncate_label("", 50), "");
}
