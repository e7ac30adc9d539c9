use clap::Parser;
use tracing_subscriber::EnvFilter;

fn run(args: &unit_value_stepper::CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    unit_value_stepper::run_script(args.controller_config(), &args.events, stdout.lock())?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = unit_value_stepper::CliArgs::parse();
    run(&args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_ok() {
        let args = unit_value_stepper::CliArgs::try_parse_from([
            "unit_value_stepper",
            "type:12,5",
            "blur",
            "inc",
        ])
        .unwrap();

        let result = run(&args);

        assert!(result.is_ok());
    }

    #[test]
    fn test_run_rejects_zero_step() {
        let args =
            unit_value_stepper::CliArgs::try_parse_from(["unit_value_stepper", "--step", "0"])
                .unwrap();

        let result = run(&args);

        assert!(result.is_err());
    }
}
