pub mod run_log;
pub mod scenario;
pub mod trajectory_csv;
