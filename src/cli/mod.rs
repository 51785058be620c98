//! CLI argument parsing and logging setup.

mod args;
mod logging;

pub use args::{ArgsError, DirectArgs, OracleArgs};
pub use logging::init_tracing;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // ===========================================
    // OracleArgs::port tests
    // ===========================================

    #[test]
    fn test_port_single_argument() {
        let args = OracleArgs::parse_from(["synth-oracle", "6100"]);
        assert_eq!(args.port(), Ok(6100));
    }

    #[test]
    fn test_port_after_double_dash() {
        let args = OracleArgs::parse_from(["synth-oracle", "--", "6107"]);
        assert_eq!(args.port(), Ok(6107));
    }

    #[test]
    fn test_port_is_last_argument() {
        let args = OracleArgs::parse_from(["synth-oracle", "worker", "extra", "7000"]);
        assert_eq!(args.args.len(), 3);
        assert_eq!(args.port(), Ok(7000));
    }

    #[test]
    fn test_port_not_numeric() {
        let args = OracleArgs::parse_from(["synth-oracle", "6100", "http"]);
        assert_eq!(args.port(), Err(ArgsError::InvalidPort("http".to_string())));
    }

    #[test]
    fn test_port_out_of_range() {
        let args = OracleArgs::parse_from(["synth-oracle", "70000"]);
        assert!(matches!(args.port(), Err(ArgsError::InvalidPort(_))));
    }

    #[test]
    fn test_port_required() {
        let result = OracleArgs::try_parse_from(["synth-oracle"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_port_missing_when_constructed_empty() {
        let args = OracleArgs { args: Vec::new() };
        assert_eq!(args.port(), Err(ArgsError::MissingPort));
    }

    // ===========================================
    // DirectArgs
    // ===========================================

    #[test]
    fn test_direct_takes_no_arguments() {
        assert!(DirectArgs::try_parse_from(["synth-direct"]).is_ok());
        assert!(DirectArgs::try_parse_from(["synth-direct", "HELLO"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        OracleArgs::command().debug_assert();
        DirectArgs::command().debug_assert();
    }
}
