use pandemic::io::run_log::{write_run_log, RunLogHeader};
use pandemic::{
    ContainmentModel, Disease, LockdownPolicy, Mode, Population, StratifiedPopulation, Vaccine,
    VaccineRollout,
};

#[test]
fn containment_run_log_snapshot_small() {
    let model = ContainmentModel::new(
        Disease::new(2.5, 0.2, 180.0),
        StratifiedPopulation::new(Population::new(100_000.0, 500.0, 1_000.0), 40.0, 0.25, 0.6),
        VaccineRollout::new(Vaccine::new(1_000.0, 2, 0.9), 1, 0, 0.0),
        LockdownPolicy::new(150.0, 400.0, 1.8, 0.6, Mode::Normal),
    )
    .expect("model config invalid");

    let traj = model.simulate(8).expect("simulate");

    let tmp = tempfile::tempdir().expect("tempdir");
    let header = RunLogHeader {
        run_id: "TEST-SMALL",
        scenario: "small-town",
        model: "containment",
        total_population: 100_000.0,
    };
    let path = write_run_log(tmp.path(), &header, &traj).expect("write run log");
    assert!(path.ends_with("run_TEST-SMALL.txt"));

    let s = std::fs::read_to_string(path).expect("read run log");
    insta::assert_snapshot!(s, @r"
    run_id=TEST-SMALL
    scenario=small-town
    model=containment
    population=100000
    duration_days=8
    lockdown_episodes=[4]
    total_lockdown_days=4

    day,susceptible,infectious,removed,vaccinated,incidence,lockdown
    0,98500,500,1000,0,40.000000,0
    1,98328,577,1094,0,1241.100000,1
    2,97816,530,1204,500,476.825176,1
    3,97313,486,1303,997,435.443196,1
    4,96706,559,1393,1492,397.413528,1
    5,96077,642,1497,1983,1362.906096,1
    6,95573,588,1617,2472,518.212078,1
    7,95078,538,1726,2959,471.824162,1
    ");
}
