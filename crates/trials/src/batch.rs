mod config;
mod error;
mod record;
mod summary;

pub use config::Config;
pub use error::Error;
pub use record::{Outcome, TrialRecord};
pub use summary::{Batch, BatchSummary, Status};

use std::time::Instant;

use jerkcheck_core::{Category, Observer, Scenario, Solver};
use jerkcheck_sim::{sample_with_limit, verify};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::SolverClient;

/// Control actions supported by the batch runner.
pub enum Action {
    /// Stop after the current trial.
    StopEarly,
}

/// Event emitted once per finished trial.
pub struct Event<'a> {
    /// The trial that just finished.
    pub record: &'a TrialRecord,
}

/// Runs `config.n_tests` independent trials of one category.
///
/// Each trial draws a scenario, asks the solver for a trajectory, samples it
/// at `config.dt`, and compares the terminal state to the target. A trial that
/// fails at any step is recorded as invalid and the batch moves on, so the
/// batch completes even if every trial fails.
///
/// Observers see every finished trial and may stop the batch early, in which
/// case the summary covers only the trials that ran.
///
/// # Errors
///
/// Returns an error if the config is invalid. No solver call is made in that
/// case.
pub fn run<S, R, Obs>(
    solver: &S,
    config: &Config,
    category: Category,
    rng: &mut R,
    mut observer: Obs,
) -> Result<Batch, Error>
where
    S: Solver,
    R: Rng + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    debug!(
        %category,
        n_dim = config.n_dim,
        n_tests = config.n_tests,
        dt = config.dt,
        "starting batch"
    );

    let client = SolverClient::new(solver, &config.constraints);
    let mut records = Vec::with_capacity(config.n_tests);
    let mut status = Status::Complete;

    for index in 0..config.n_tests {
        let scenario = config.generator.scenario(rng, config.n_dim, category);
        let record = trial(&client, config, index, scenario);

        if !record.is_valid() {
            warn!(
                %category,
                index,
                reason = %record.outcome,
                initial = ?record.scenario.initial(),
                target = ?record.scenario.target(),
                final_times = ?record.trajectory.as_ref().map(|t| t.final_times()),
                "trial failed"
            );
        }

        let action = observer.observe(&Event { record: &record });
        records.push(record);

        if let Some(action) = action {
            match action {
                Action::StopEarly => {
                    status = Status::StoppedByObserver;
                    break;
                }
            }
        }
    }

    let summary = BatchSummary::from_records(category, &records);

    info!(
        %category,
        n_tests = summary.n_tests,
        n_passed = summary.n_passed(),
        n_failed = summary.n_failed,
        failure_rate = summary.failure_rate(),
        mean_ms = summary.mean_time_per_test.as_secs_f64() * 1e3,
        "batch finished"
    );

    Ok(Batch {
        status,
        summary,
        records,
    })
}

/// Runs a batch without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid.
pub fn run_unobserved<S, R>(
    solver: &S,
    config: &Config,
    category: Category,
    rng: &mut R,
) -> Result<Batch, Error>
where
    S: Solver,
    R: Rng + ?Sized,
{
    run(solver, config, category, rng, ())
}

fn trial<S: Solver>(
    client: &SolverClient<'_, S>,
    config: &Config,
    index: usize,
    scenario: Scenario,
) -> TrialRecord {
    let start = Instant::now();

    let (trajectory, outcome) = match client.solve(&scenario) {
        Err(failure) => (
            None,
            Outcome::SolverFailed {
                reason: failure.to_string(),
            },
        ),
        Ok(trajectory) => {
            let sampled = sample_with_limit(
                scenario.initial(),
                &trajectory,
                config.dt,
                config.max_samples,
            );
            let outcome = match sampled {
                Err(error) => Outcome::SimulationFailed { error },
                Ok(sampled) => {
                    let verdict = verify(scenario.target(), &sampled, &config.tolerance);
                    if verdict.is_valid() {
                        Outcome::Valid
                    } else {
                        Outcome::Mismatch {
                            verdict,
                            final_state: sampled.final_state(),
                        }
                    }
                }
            };
            (Some(trajectory), outcome)
        }
    };

    TrialRecord {
        index,
        scenario,
        trajectory,
        outcome,
        elapsed: start.elapsed(),
    }
}
