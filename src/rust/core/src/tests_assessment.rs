// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! End-to-end assessment tests.
//!
//! Drive the JSON entry points the way the browser UI does.

use crate::assessment_kernel::AssessmentKernel;
use serde_json::json;

const FIELD_TEXT: &str = "54 56 55 53 58 55 54 55 52 57 55 56 54 55 59 42 55 56 54 55";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_rebound_field_series_end_to_end() {
    init_logging();
    println!(" Checking field series (KS F 2730, 20 strikes, horizontal)");

    let result_json = AssessmentKernel::evaluate_rebound_json(FIELD_TEXT, 0, 1000.0, 24.0);
    let response: serde_json::Value = serde_json::from_str(&result_json).unwrap();
    assert_eq!(response["ok"], true);

    let res = &response["result"];
    println!(" Result: {:#?}", res);

    assert_eq!(res["reading_count"], 20);
    assert_eq!(res["valid_count"], 19);
    assert_eq!(res["discard_count"], 1);
    assert_eq!(res["excluded"], json!([42.0]));
    assert!((res["raw_mean"].as_f64().unwrap() - 54.5).abs() < 1e-9);
    assert!((res["lower_bound"].as_f64().unwrap() - 43.6).abs() < 1e-9);
    assert!((res["upper_bound"].as_f64().unwrap() - 65.4).abs() < 1e-9);

    let r_avg = res["r_avg"].as_f64().unwrap();
    assert!((r_avg - 55.16).abs() < 0.01, "R_avg: {}", r_avg);
    assert_eq!(res["r0"].as_f64().unwrap(), r_avg);
    assert_eq!(res["age_coeff"].as_f64().unwrap(), 0.65);
    assert_eq!(res["family"], "General");

    let aij = res["estimates"]["aij"].as_f64().unwrap();
    let jsms = res["estimates"]["jsms"].as_f64().unwrap();
    assert!((aij - 32.0).abs() < 0.05, "AIJ: {}", aij);
    assert!((jsms - 33.8).abs() < 0.05, "JSMS: {}", jsms);

    let mean = res["mean_strength"].as_f64().unwrap();
    let ratio = res["ratio"].as_f64().unwrap();
    assert!((mean - 32.9).abs() < 0.05, "mean: {}", mean);
    assert!((ratio - 137.0).abs() < 0.5, "ratio: {}", ratio);
    assert_eq!(res["grade"], "A");
    assert_eq!(res["formula_table"][1]["label"], "JSMS (general)");
    assert_eq!(res["formula_table"][1]["selected"], true);
    assert_eq!(res["formula_table"][2]["selected"], false);

    println!(" ✓ {:.1} MPa, {:.0}% of design, grade A", mean, ratio);
}

#[test]
fn test_rebound_invalid_series() {
    init_logging();

    // 15 good strikes, 5 far off: more than 20% rejected
    let text = "50 50 50 50 50 50 50 50 50 50 50 50 50 50 50 20 20 80 80 80";
    let response: serde_json::Value =
        serde_json::from_str(&AssessmentKernel::evaluate_rebound_json(text, 0, 28.0, 24.0))
            .unwrap();

    assert_eq!(response["ok"], false);
    assert_eq!(response["error"]["kind"], "TestInvalid");
    assert_eq!(response["error"]["discarded"], 5);
    assert!(response["result"].is_null());
    assert!(response["reason"].as_str().unwrap().contains("re-measure"));
}

#[test]
fn test_rebound_non_numeric_input() {
    let response: serde_json::Value = serde_json::from_str(
        &AssessmentKernel::evaluate_rebound_json("54, 56, fifty", 0, 28.0, 24.0),
    )
    .unwrap();
    assert_eq!(response["ok"], false);
    assert_eq!(response["error"]["kind"], "ParseError");
    assert_eq!(response["error"]["token"], "fifty");
}

#[test]
fn test_carbonation_end_to_end() {
    println!(" Checking carbonation: 12 mm at 20 years, 40 mm cover");

    let response: serde_json::Value =
        serde_json::from_str(&AssessmentKernel::assess_carbonation_json(12.0, 40.0, 20.0))
            .unwrap();
    let res = &response["result"];

    assert_eq!(response["ok"], true);
    assert_eq!(res["remaining_depth"].as_f64().unwrap(), 28.0);
    assert_eq!(res["grade"], "B");
    assert_eq!(res["hazard"], false);

    let k = res["rate_coefficient"].as_f64().unwrap();
    assert!((k - 2.683).abs() < 1e-3, "k: {}", k);

    assert_eq!(res["predicted_life"]["status"], "Years");
    let life = res["predicted_life"]["years"].as_f64().unwrap();
    assert!((life - 202.2).abs() < 0.1, "life: {}", life);
    assert_eq!(res["life_display"], "202.2 years");
    assert_eq!(res["grade_description"], "Good (10 mm or more of cover remaining)");
    println!(" ✓ k = {:.4} mm/√yr, remaining life {:.1} years", k, life);
}

#[test]
fn test_carbonation_boundaries_end_to_end() {
    let no_depth: serde_json::Value =
        serde_json::from_str(&AssessmentKernel::assess_carbonation_json(0.0, 40.0, 20.0)).unwrap();
    assert_eq!(no_depth["result"]["predicted_life"]["status"], "NoProgression");
    assert_eq!(no_depth["result"]["life_display"], "99+ years (no progression)");

    let past: serde_json::Value =
        serde_json::from_str(&AssessmentKernel::assess_carbonation_json(40.1, 40.0, 20.0)).unwrap();
    assert_eq!(past["result"]["grade"], "D");
    assert_eq!(past["result"]["hazard"], true);
    assert_eq!(past["result"]["predicted_life"]["status"], "AlreadyReached");
    assert_eq!(past["events"][0]["severity"], "CRITICAL");
}

#[test]
fn test_batch_json_and_statistics() {
    init_logging();

    let rows = json!([
        { "location": "Col A1", "angle": 0, "age_days": 1000.0, "design_fck": 24.0, "readings": FIELD_TEXT },
        { "location": "Slab S2", "angle": -90, "age_days": 365.0, "design_fck": null, "readings": "38 40 41 39 42 40 37 41 40 39" },
        { "location": "Beam B3", "angle": 0, "age_days": 28.0, "design_fck": 24.0, "readings": "40 41" }
    ]);

    let response: serde_json::Value =
        serde_json::from_str(&AssessmentKernel::evaluate_batch_json(&rows.to_string())).unwrap();

    let outcomes = response["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0]["result"]["Ok"].is_object());
    assert!(outcomes[1]["result"]["Ok"].is_object());
    assert_eq!(outcomes[2]["result"]["Err"]["kind"], "DataInsufficient");
    assert_eq!(outcomes[1]["design_fck"], 24.0);

    let summary = &response["summary"];
    assert_eq!(summary["count"], 2);
    assert!(summary["std_dev"].as_f64().unwrap() > 0.0);

    let stats: serde_json::Value =
        serde_json::from_str(&AssessmentKernel::summarize_json("[30.0]", None)).unwrap();
    assert_eq!(stats["ok"], false);
    assert_eq!(stats["error"]["kind"], "InsufficientSamples");
}
