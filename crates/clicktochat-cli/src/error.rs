use anyhow::Error;
use clicktochat_config::ConfigError;
use clicktochat_state::error::StateError;
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if let Some(state_err) = cause.downcast_ref::<StateError>() {
            return state_exit_code(state_err);
        }
    }
    EXIT_FAILURE
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidCommand { .. }
        | ConfigError::MissingShareCommand
        | ConfigError::InvalidStatePath
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn state_exit_code(err: &StateError) -> u8 {
    match err {
        StateError::InvalidStatePath(_)
        | StateError::Parse { .. }
        | StateError::UnsupportedVersion(_) => EXIT_INVALID_INPUT,
        StateError::Io(_) | StateError::MissingHomeDir | StateError::Encode(_) => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_status_for, EXIT_FAILURE, EXIT_INVALID_INPUT};
    use anyhow::Context as _;
    use clicktochat_config::ConfigError;
    use clicktochat_state::error::StateError;

    #[test]
    fn unknown_errors_are_failures() {
        let err = anyhow::anyhow!("boom").context("open link");
        assert_eq!(exit_status_for(&err), EXIT_FAILURE);
    }

    #[test]
    fn wrapped_config_errors_keep_their_exit_code() {
        let err = anyhow::Error::from(ConfigError::MissingShareCommand).context("load config");
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn state_errors_split_between_input_and_failure() {
        let err: anyhow::Result<()> =
            Err(StateError::UnsupportedVersion(7)).with_context(|| "load state");
        assert_eq!(exit_status_for(&err.unwrap_err()), EXIT_INVALID_INPUT);

        let err = anyhow::Error::from(StateError::MissingHomeDir);
        assert_eq!(exit_status_for(&err), EXIT_FAILURE);
    }
}
