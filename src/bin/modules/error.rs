use std::error::Error;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the core kenstone library.
    #[error("Selection error: {0}")]
    Selection(#[from] kenstone::KenstoneError),

    /// I/O errors associated with a specific file path.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not tied to a specific file.
    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    /// Errors parsing the numeric sample matrix.
    #[error("Failed to parse samples from {source_name}: {details}")]
    SampleParse {
        source_name: String,
        details: String,
    },

    /// Errors serializing results to JSON.
    #[error("Failed to serialize results to JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid combinations of command-line arguments.
    #[error("{0}")]
    Usage(String),
}

/// Prints the error and its full cause chain to stderr.
pub fn report(error: &CliError) {
    eprint!("{}", render(error));
}

fn render(error: &CliError) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "Error: {}", error);

    let mut source = error.source();
    while let Some(cause) = source {
        let _ = writeln!(out, "Caused by: {}", cause);
        source = cause.source();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_cause_chain() {
        let error = CliError::Io {
            path: PathBuf::from("samples.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let rendered = render(&error);
        assert!(rendered.starts_with("Error: I/O error for 'samples.csv'"));
        assert!(rendered.contains("Caused by: no such file"));
    }

    #[test]
    fn test_render_without_source_is_a_single_line() {
        let error = CliError::Usage("Exactly one of --size or --fraction is required".to_string());
        let rendered = render(&error);
        assert_eq!(rendered.lines().count(), 1);
    }
}
