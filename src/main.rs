/*!
 * CPU Scheduling Simulator - Command Line Entry Point
 *
 * Usage: cpu-sched-sim [WORKLOAD|-] [ALGORITHM] [QUANTUM]
 *
 * Reads a JSON array of process records from WORKLOAD (stdin when absent or
 * `-`), runs one algorithm, and prints the JSON report to stdout.
 * ALGORITHM and QUANTUM override SCHED_ALGORITHM / SCHED_QUANTUM.
 */

use std::io::Read;

use cpu_sched_sim::{init_tracing, Engine, ProcessSpec, SimulationConfig};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let source = args.next().filter(|path| path != "-");

    let mut config = SimulationConfig::from_env()?;
    if let Some(name) = args.next() {
        config.algorithm = name.parse()?;
    }
    if let Some(raw) = args.next() {
        let units: f64 = raw
            .parse()
            .into_diagnostic()
            .wrap_err_with(|| format!("Quantum '{}' is not a number", raw))?;
        config = config.with_quantum(units)?;
    }

    let input = match &source {
        Some(path) => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read workload from {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .into_diagnostic()
                .wrap_err("Failed to read workload from stdin")?;
            buf
        }
    };

    let processes: Vec<ProcessSpec> = serde_json::from_str(&input)
        .into_diagnostic()
        .wrap_err("Workload must be a JSON array of process records")?;

    info!(
        source = source.as_deref().unwrap_or("stdin"),
        algorithm = %config.algorithm,
        processes = processes.len(),
        "Workload loaded"
    );

    let report = Engine::new(config).simulate(&processes)?;

    let output = serde_json::to_string_pretty(&report)
        .into_diagnostic()
        .wrap_err("Failed to serialize report")?;
    println!("{}", output);

    Ok(())
}
