use pandemic::io::trajectory_csv::write_trajectory;
use pandemic::{Mode, RunSummary, Scenario, ScenarioRun};

const SMALL_TOWN: &str = r#"{
  "model": "containment",
  "name": "small-town",
  "disease": { "reproduction_number": 3.0, "infectivity_rate": 0.1, "immunity_days": 365.0 },
  "population": {
    "total": 1000000.0, "infectious": 1000.0, "removed": 0.0,
    "initial_incidence": 10.0, "high_risk_fraction": 0.3, "vaccination_readiness": 0.7
  },
  "vaccine": {
    "daily_capacity": 20000.0, "doses_required": 2, "efficacy": 1.0,
    "delay_days": 14, "start_day": 10, "initially_vaccinated": 0.0
  },
  "lockdown": {
    "critical_incidence": 50.0, "subcritical_incidence": 20.0,
    "normal_reproduction_number": 2.0, "lockdown_reproduction_number": 0.8
  },
  "duration_days": 400
}"#;

#[test]
fn scenario_json_parses_flattened_bundles() {
    let scenario = Scenario::from_json_str(SMALL_TOWN).expect("parse");
    let Scenario::Containment(s) = &scenario else {
        panic!("expected containment scenario, got {}", scenario.model_kind());
    };
    assert_eq!(s.population.base.total, 1e6);
    assert_eq!(s.population.high_risk_fraction, 0.3);
    assert_eq!(s.vaccine.vaccine.doses_required, 2);
    assert_eq!(s.vaccine.delay_days, 14);
    // initial_mode may be omitted
    assert_eq!(s.lockdown.initial_mode, Mode::Normal);
    assert_eq!(scenario.name(), "small-town");
    assert_eq!(scenario.duration_days(), 400);
}

#[test]
fn scenario_files_round_trip() {
    let tmp = tempfile::tempdir().expect("tempdir");
    for scenario in [Scenario::germany_sirs(), Scenario::germany_containment()] {
        let path = tmp.path().join(format!("{}.json", scenario.name()));
        scenario.save_json(&path).expect("save");
        let loaded = Scenario::load_json(&path).expect("load");
        assert_eq!(loaded, scenario);
    }
}

#[test]
fn missing_scenario_file_reports_path() {
    let err = Scenario::load_json("/definitely/not/here.json").unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.json"));
}

#[test]
fn missing_field_is_a_parse_error() {
    let broken = SMALL_TOWN.replace(r#""doses_required": 2,"#, "");
    assert!(Scenario::from_json_str(&broken).is_err());
}

#[test]
fn invalid_scenario_fails_at_run() {
    let broken = SMALL_TOWN.replace(r#""duration_days": 400"#, r#""duration_days": 0"#);
    let scenario = Scenario::from_json_str(&broken).expect("parse");
    let err = scenario.run().unwrap_err();
    assert_eq!(err.parameter(), "duration_days");
}

#[test]
fn summary_totals_lockdown_days() {
    let scenario = Scenario::from_json_str(SMALL_TOWN).expect("parse");
    let run = scenario.run().expect("run");
    let ScenarioRun::Containment(traj) = &run else {
        panic!("expected containment trajectory");
    };

    let summary = run.summary();
    assert_eq!(summary.days, 400);
    assert_eq!(summary.lockdown_episodes, traj.lockdown_episodes());
    assert_eq!(summary.total_lockdown_days, traj.lockdown_episodes().iter().sum::<u32>());
    assert!(summary.total_lockdown_days > 0);

    let peak = traj.incidence().into_iter().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(summary.peak_incidence, peak);
    assert_eq!(traj.records()[summary.peak_day as usize].incidence, peak);
    assert_eq!(summary.final_vaccinated, traj.last().unwrap().vaccinated);
}

#[test]
fn sirs_summary_has_no_lockdowns() {
    let run = Scenario::germany_sirs().run().expect("run");
    let summary: RunSummary = run.summary();
    assert_eq!(summary.days, 1800);
    assert!(summary.lockdown_episodes.is_empty());
    assert_eq!(summary.total_lockdown_days, 0);
    assert_eq!(summary.final_vaccinated, 0.0);
}

#[test]
fn trajectory_csv_has_header_and_one_row_per_day() {
    let run = Scenario::germany_containment().run().expect("run");
    let ScenarioRun::Containment(traj) = &run else {
        panic!("expected containment trajectory");
    };

    let mut buf = Vec::new();
    write_trajectory(&mut buf, traj).expect("write csv");
    let text = String::from_utf8(buf).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "day,susceptible,infectious,removed,vaccinated,incidence,high_risk_fraction,mode,lockdown_day"
    );
    assert_eq!(lines.len(), traj.len() + 1);
    assert!(lines[1].starts_with("0,"));
    assert!(lines[1].ends_with(",lockdown,false"));
}

#[test]
fn csv_file_is_written_for_sirs_runs() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("sirs.csv");
    let run = Scenario::germany_sirs().run().expect("run");
    run.write_csv(&path).expect("write csv");

    let mut rdr = csv::Reader::from_path(&path).expect("open csv");
    let headers = rdr.headers().expect("headers").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), ["day", "susceptible", "infectious", "removed", "incidence"]);
    assert_eq!(rdr.records().count(), run.len());
}

#[test]
fn builtin_lookup() {
    assert!(Scenario::builtin("sirs").is_some());
    assert_eq!(Scenario::builtin("germany-containment"), Some(Scenario::germany_containment()));
    assert!(Scenario::builtin("mars").is_none());
}
