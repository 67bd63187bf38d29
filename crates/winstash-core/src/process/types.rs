use std::path::PathBuf;

use super::errors::ProcessError;

/// A program invocation ready to be spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl LaunchSpec {
    /// Split a stored command line plus extra arguments on whitespace.
    ///
    /// Quoting is not interpreted; stored commands are plain paths and flags.
    pub fn from_command_line(
        command: &str,
        extra: &str,
        cwd: impl Into<PathBuf>,
    ) -> Result<Self, ProcessError> {
        let mut tokens = command.split_whitespace();
        let program = tokens.next().ok_or(ProcessError::EmptyCommand)?.to_string();
        let args = tokens
            .chain(extra.split_whitespace())
            .map(str::to_string)
            .collect();

        Ok(Self {
            program,
            args,
            cwd: cwd.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command_line_splits_program_and_args() {
        let spec = LaunchSpec::from_command_line(
            "google-chrome --new-window",
            "--incognito",
            "/home/me",
        )
        .unwrap();
        assert_eq!(spec.program, "google-chrome");
        assert_eq!(spec.args, vec!["--new-window", "--incognito"]);
        assert_eq!(spec.cwd, PathBuf::from("/home/me"));
    }

    #[test]
    fn test_from_command_line_without_args() {
        let spec = LaunchSpec::from_command_line("/usr/bin/gedit", "", "/").unwrap();
        assert_eq!(spec.program, "/usr/bin/gedit");
        assert!(spec.args.is_empty());
    }

    #[test]
    fn test_from_command_line_rejects_blank() {
        assert!(matches!(
            LaunchSpec::from_command_line("   ", "--flag", "/"),
            Err(ProcessError::EmptyCommand)
        ));
    }
}
