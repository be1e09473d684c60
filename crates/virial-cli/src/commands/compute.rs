use crate::cli::ComputeArgs;
use crate::error::{CliError, Result};
use tracing::info;
use virialdb::physics::virial::{CalcMethod, PotentialParams, second_virial};

pub fn run(args: &ComputeArgs) -> Result<()> {
    let method: CalcMethod = args.method.parse()?;
    if args.temperature <= 0.0 {
        return Err(CliError::Argument(format!(
            "temperature must be positive, got {} K",
            args.temperature
        )));
    }
    if args.sigma <= 0.0 || args.epsilon <= 0.0 {
        return Err(CliError::Argument(
            "sigma and epsilon must be positive".to_string(),
        ));
    }

    let params = PotentialParams {
        sigma: args.sigma,
        epsilon: args.epsilon,
        mu: args.mu,
    };
    info!(
        "Integrating with sigma = {} Å, epsilon = {} K, mu = {} D, method = {}.",
        params.sigma, params.epsilon, params.mu, method
    );

    match args.t_end {
        None => {
            let b = second_virial(args.temperature, &params, method);
            println!("B({} K) = {:.4} cm³/mol", args.temperature, b);
        }
        Some(t_end) => {
            if t_end < args.temperature {
                return Err(CliError::Argument(format!(
                    "--t-end ({} K) is below the starting temperature ({} K)",
                    t_end, args.temperature
                )));
            }
            if args.t_step <= 0.0 {
                return Err(CliError::Argument(format!(
                    "--t-step must be positive, got {} K",
                    args.t_step
                )));
            }
            println!("{:>10} {:>14}", "T (K)", "B (cm³/mol)");
            let mut temperature = args.temperature;
            while temperature <= t_end + 1e-9 {
                let b = second_virial(temperature, &params, method);
                println!("{:>10.2} {:>14.4}", temperature, b);
                temperature += args.t_step;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use virialdb::physics::virial::VirialError;

    fn argon_args() -> ComputeArgs {
        ComputeArgs {
            temperature: 300.0,
            sigma: 3.4,
            epsilon: 120.0,
            mu: 0.0,
            method: "inf".to_string(),
            t_end: None,
            t_step: 25.0,
        }
    }

    #[test]
    fn single_temperature_with_valid_parameters_succeeds() {
        assert!(run(&argon_args()).is_ok());
    }

    #[test]
    fn non_positive_temperature_is_rejected() {
        for temperature in [0.0, -150.0] {
            let mut args = argon_args();
            args.temperature = temperature;
            assert!(matches!(run(&args), Err(CliError::Argument(_))));
        }
    }

    #[test]
    fn non_positive_sigma_is_rejected() {
        let mut args = argon_args();
        args.sigma = 0.0;
        assert!(matches!(run(&args), Err(CliError::Argument(_))));
    }

    #[test]
    fn non_positive_epsilon_is_rejected() {
        let mut args = argon_args();
        args.epsilon = -120.0;
        assert!(matches!(run(&args), Err(CliError::Argument(_))));
    }

    #[test]
    fn unknown_method_selector_is_rejected_before_parameter_checks() {
        let mut args = argon_args();
        args.method = "series".to_string();
        match run(&args) {
            Err(CliError::Virial(VirialError::UnsupportedMethod(selector))) => {
                assert_eq!(selector, "series");
            }
            other => panic!("expected UnsupportedMethod, got {:?}", other.err()),
        }
    }

    #[test]
    fn sweep_ending_below_the_start_is_rejected() {
        let mut args = argon_args();
        args.t_end = Some(200.0);
        assert!(matches!(run(&args), Err(CliError::Argument(_))));
    }

    #[test]
    fn non_positive_sweep_step_is_rejected() {
        let mut args = argon_args();
        args.t_end = Some(500.0);
        args.t_step = 0.0;
        assert!(matches!(run(&args), Err(CliError::Argument(_))));
    }

    #[test]
    fn degenerate_sweep_to_the_starting_temperature_succeeds() {
        let mut args = argon_args();
        args.t_end = Some(args.temperature);
        assert!(run(&args).is_ok());
    }
}
