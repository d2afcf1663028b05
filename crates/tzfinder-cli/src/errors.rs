use console::style;
use serde::Serialize;
use std::fmt;
use tzfinder_core::{FailureKind, TzError};

/// Error type with suggestions
pub struct CliError {
    pub message: String,
    pub kind: Option<FailureKind>,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: None,
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_kind(mut self, kind: FailureKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }

    pub fn display_json(&self) {
        #[derive(Serialize)]
        struct ErrorOutput<'a> {
            status: &'static str,
            message: &'a str,
            kind: Option<FailureKind>,
        }

        let output = ErrorOutput { status: "error", message: &self.message, kind: self.kind };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprintln!("{}", self.message),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<TzError> for CliError {
    fn from(error: TzError) -> Self {
        let base = CliError::new(error.to_string()).with_kind(error.kind());

        match &error {
            TzError::MissingCredential => base
                .with_suggestion("Set TZFINDER_API_KEY: export TZFINDER_API_KEY=\"your-key\"")
                .with_suggestion("Or add to tzfinder.toml:\n  api_key = \"your-key\"")
                .with_suggestion("Or pass --api-key on the command line")
                .with_help("Run: tzfinder config"),
            TzError::Auth { status } => base
                .with_context(format!("The provider answered HTTP {}.", status))
                .with_suggestion("Check that your Geoapify API key is valid and active")
                .with_help("Run: tzfinder config"),
            TzError::Timeout { after_ms } => base
                .with_context(format!("No response within {} ms.", after_ms))
                .with_suggestion("Retry, or raise the limit with --timeout-ms"),
            TzError::NotFound { .. } => base.with_help("Run: tzfinder search --help"),
            TzError::Validation { .. } => base.with_help("Run: tzfinder search --help"),
            TzError::Geolocation(_) => base
                .with_suggestion("Pass a position: tzfinder current --lat <LAT> --lon <LON>")
                .with_suggestion("Or search by address: tzfinder search \"<ADDRESS>\""),
            TzError::ConfigInvalid { .. } => base
                .with_suggestion("Check tzfinder.toml for syntax errors")
                .with_help("Run: tzfinder config"),
            TzError::Provider { .. } | TzError::Format { .. } => base,
        }
    }
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    let error = match error.downcast::<CliError>() {
        Ok(cli_error) => return cli_error,
        Err(error) => error,
    };

    if let Some(tz_error) = error.downcast_ref::<TzError>() {
        let mut cli_error = CliError::from(tz_error.clone());
        if error.chain().count() > 1 {
            cli_error = cli_error.with_context(format!("{:#}", error));
        }
        return cli_error;
    }

    CliError::new(format!("{:#}", error))
}

/// Print a failure in the selected output format
pub fn report(error: anyhow::Error, json: bool) {
    let cli_error = from_anyhow(error);
    if json {
        cli_error.display_json();
    } else {
        cli_error.display();
    }
}
