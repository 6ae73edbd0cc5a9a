/*!
 * Validation Tests
 * Malformed input is rejected before any simulation starts
 */

use cpu_sched_sim::{
    simulate, Algorithm, Engine, ProcessSpec, SchedulerError, SimulationConfig, SimulationReport,
};
use pretty_assertions::assert_eq;

#[test]
fn test_rejects_non_positive_burst() {
    for burst in [0.0, -3.0] {
        let err = simulate(Algorithm::Sjf, &[ProcessSpec::new("P1", 0.0, burst)], None)
            .unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidProcess { ref id, .. } if id == "P1"));
    }
}

#[test]
fn test_rejects_negative_arrival() {
    let err = simulate(
        Algorithm::RoundRobin,
        &[ProcessSpec::new("P1", -1.0, 2.0)],
        None,
    )
    .unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidProcess { .. }));
}

#[test]
fn test_rejects_times_too_large_to_step() {
    let huge_burst = [ProcessSpec::new("P1", 0.0, 1e17)];
    let huge_arrival = [ProcessSpec::new("P1", 1e17, 1.0)];
    for algorithm in Algorithm::ALL {
        assert!(matches!(
            simulate(algorithm, &huge_burst, None),
            Err(SchedulerError::InvalidProcess { .. })
        ));
        assert!(matches!(
            simulate(algorithm, &huge_arrival, None),
            Err(SchedulerError::InvalidProcess { .. })
        ));
    }
}

#[test]
fn test_rejects_duplicate_identifier_for_every_algorithm() {
    let workload = [ProcessSpec::new("P1", 0.0, 2.0), ProcessSpec::new("P1", 1.0, 2.0)];
    for algorithm in Algorithm::ALL {
        assert!(simulate(algorithm, &workload, None).is_err(), "{algorithm}");
    }
}

#[test]
fn test_unknown_algorithm_name() {
    let err = "Multilevel Feedback".parse::<Algorithm>().unwrap_err();
    assert_eq!(
        err,
        SchedulerError::UnknownAlgorithm("Multilevel Feedback".into())
    );
}

#[test]
fn test_invalid_quantum() {
    assert_eq!(
        SimulationConfig::new(Algorithm::RoundRobin).with_quantum(0.0),
        Err(SchedulerError::InvalidQuantum(0.0))
    );
    let err = simulate(
        Algorithm::RoundRobin,
        &[ProcessSpec::new("P1", 0.0, 2.0)],
        Some(-2.0),
    )
    .unwrap_err();
    assert_eq!(err, SchedulerError::InvalidQuantum(-2.0));

    let err = simulate(
        Algorithm::RoundRobin,
        &[ProcessSpec::new("P1", 0.0, 2.0)],
        Some(1e-20),
    )
    .unwrap_err();
    assert_eq!(err, SchedulerError::InvalidQuantum(1e-20));
}

#[test]
fn test_empty_workload_yields_empty_report() {
    for algorithm in Algorithm::ALL {
        let report = simulate(algorithm, &[], None).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.average_waiting_time(), None);
        assert_eq!(report.average_turnaround_time(), None);
    }
}

#[test]
fn test_json_workload_round_trip() {
    let input = r#"[
        {"id": "P1", "arrival": 0, "burst": 5},
        {"id": "P2", "arrival": 1, "burst": 2, "priority": 1}
    ]"#;
    let processes: Vec<ProcessSpec> = serde_json::from_str(input).unwrap();
    assert_eq!(processes[0].priority, 0.0);

    let report = Engine::with_algorithm(Algorithm::SjfPreemptive)
        .simulate(&processes)
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["algorithm"], "sjf_preemptive");
    assert_eq!(json["results"][0]["id"], "P2");
    assert_eq!(json["results"][0]["waiting_time"], 0.0);
    assert!(json.get("quantum").is_none());

    let parsed: SimulationReport = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_error_diagnostic_codes() {
    use miette::Diagnostic;

    let err = SchedulerError::InvalidQuantum(0.0);
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("scheduler::invalid_quantum".to_string())
    );
    assert!(err.help().is_some());
}
