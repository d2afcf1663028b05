use console::style;
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }

    /// Human-only: JSON output carries the same facts in the result payload
    pub fn success(&self, message: impl Display) {
        if self.format == OutputFormat::Human {
            println!("{} {}", style("✓").green().bold(), message);
        }
    }

    pub fn info(&self, message: impl Display) {
        if self.format == OutputFormat::Human {
            println!("{} {}", style("ℹ").blue().bold(), message);
        }
    }

    pub fn warning(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("⚠").yellow().bold(), message);
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "status": "warning",
                    "message": message.to_string(),
                });
                eprintln!("{}", output);
            }
        }
    }

    pub fn table<T: Tabled>(&self, data: Vec<T>) {
        if data.is_empty() {
            println!("{}", style("(no data)").dim());
        } else {
            let mut table = Table::new(data);
            table.with(Style::rounded());
            println!("{}", table);
        }
    }

    /// Print the command result inside the JSON success envelope
    ///
    /// Human mode renders results through `kv`, `section` and `line` instead.
    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(&success_envelope(data)?)?);
        Ok(())
    }

    pub fn kv(&self, key: impl Display, value: impl Display) {
        if self.format == OutputFormat::Human {
            println!("{}: {}", style(key).bold(), value);
        }
    }

    pub fn section(&self, title: impl Display) {
        if self.format == OutputFormat::Human {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn line(&self, text: impl Display) {
        if self.format == OutputFormat::Human {
            println!("{}", text);
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

fn success_envelope<T: Serialize>(data: T) -> serde_json::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "status": "success",
        "data": serde_json::to_value(data)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        zone: &'static str,
    }

    #[test]
    fn test_result_is_wrapped_in_success_envelope() {
        let value = success_envelope(Sample { zone: "UTC" }).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["zone"], "UTC");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_format_follows_flag() {
        assert!(OutputWriter::new(true).is_json());
        assert!(!OutputWriter::new(false).is_json());
    }
}
