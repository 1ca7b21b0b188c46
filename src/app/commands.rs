use std::time::Instant;

use serde::Serialize;

use crate::adapters::{json, yaml, DefaultContext};
use crate::config::cli::{Base64Action, Command, HashAlgorithm};
use crate::config::{KlConfig, OutputFormat};
use crate::core::{base64, hash, text};
use crate::defer;
use crate::utils::error::{KlError, Result};

/// Result of one command, rendered as text, JSON or YAML.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOutput {
    pub command: &'static str,
    pub input: String,
    pub output: Option<String>,
    pub hash: Option<u32>,
    pub tokens: Option<Vec<String>>,
}

impl CommandOutput {
    fn new(command: &'static str, input: &str) -> Self {
        Self {
            command,
            input: input.to_string(),
            output: None,
            hash: None,
            tokens: None,
        }
    }
}

pub fn run(command: &Command, config: &KlConfig) -> Result<CommandOutput> {
    let started = Instant::now();
    defer! { tracing::debug!(elapsed = ?started.elapsed(), "command finished") }

    match command {
        Command::Base64 { action } => run_base64(action),
        Command::Hash { algorithm, input } => {
            let mut out = CommandOutput::new("hash", input);
            out.hash = Some(match algorithm {
                HashAlgorithm::Fnv1a => hash::fnv1a_str(input),
                HashAlgorithm::Hsieh => hash::hsieh(input.as_bytes()),
            });
            tracing::debug!(%algorithm, "hashed {} bytes", input.len());
            Ok(out)
        }
        Command::Split { input, .. } => {
            let mut out = CommandOutput::new("split", input);
            let tokens = text::split(input, &config.split.delimiters, config.split.skip_empty);
            tracing::debug!("split into {} tokens", tokens.len());
            out.tokens = Some(tokens);
            Ok(out)
        }
    }
}

fn run_base64(action: &Base64Action) -> Result<CommandOutput> {
    match action {
        Base64Action::Encode { input } => {
            let mut out = CommandOutput::new("base64-encode", input);
            out.output = Some(base64::encode(input.as_bytes()));
            Ok(out)
        }
        Base64Action::Decode { input } => {
            let decoded = base64::decode(input).ok_or_else(|| KlError::InvalidBase64 {
                input: input.clone(),
            })?;
            let mut out = CommandOutput::new("base64-decode", input);
            out.output = Some(String::from_utf8_lossy(&decoded).into_owned());
            Ok(out)
        }
    }
}

pub fn render(output: &CommandOutput, config: &KlConfig) -> Result<String> {
    let ctx = DefaultContext::new(config.output.skip_null_fields);

    match config.output.format {
        OutputFormat::Text => Ok(render_text(output, config)),
        OutputFormat::Json => {
            if config.output.pretty {
                let value = json::serialize_with(output, &ctx)?;
                Ok(serde_json::to_string_pretty(&value)?)
            } else {
                json::dump_with(output, &ctx)
            }
        }
        OutputFormat::Yaml => yaml::dump_with(output, &ctx),
    }
}

fn render_text(output: &CommandOutput, config: &KlConfig) -> String {
    if let Some(tokens) = &output.tokens {
        return text::stream_join(tokens)
            .delimiter(&config.join.delimiter)
            .empty_string(&config.join.empty)
            .to_string();
    }
    if let Some(hash) = output.hash {
        return format!("{:#010x}", hash);
    }
    output.output.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_cmd(algorithm: HashAlgorithm, input: &str) -> Command {
        Command::Hash {
            algorithm,
            input: input.to_string(),
        }
    }

    #[test]
    fn test_hash_commands() {
        let config = KlConfig::default();

        let out = run(&hash_cmd(HashAlgorithm::Fnv1a, "a"), &config).unwrap();
        assert_eq!(out.hash, Some(0xE40C292C));
        assert_eq!(render(&out, &config).unwrap(), "0xe40c292c");

        let out = run(&hash_cmd(HashAlgorithm::Hsieh, "QWEASD"), &config).unwrap();
        assert_eq!(out.hash, Some(0x79EF41CA));
    }

    #[test]
    fn test_base64_commands() {
        let config = KlConfig::default();
        let encode = Command::Base64 {
            action: Base64Action::Encode {
                input: "Hello".to_string(),
            },
        };
        let out = run(&encode, &config).unwrap();
        assert_eq!(render(&out, &config).unwrap(), "SGVsbG8=");

        let decode = Command::Base64 {
            action: Base64Action::Decode {
                input: "SGVsbG8=".to_string(),
            },
        };
        assert_eq!(run(&decode, &config).unwrap().output.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_malformed_base64() {
        let decode = Command::Base64 {
            action: Base64Action::Decode {
                input: "aa=a".to_string(),
            },
        };
        let err = run(&decode, &KlConfig::default()).unwrap_err();
        assert!(matches!(err, KlError::InvalidBase64 { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_split_renders_with_join_settings() {
        let mut config = KlConfig::default();
        config.split.delimiters = "/".to_string();
        config.join.delimiter = "|".to_string();

        let split = Command::Split {
            input: "a/b//c".to_string(),
            delims: None,
            keep_empty: false,
        };
        let out = run(&split, &config).unwrap();
        assert_eq!(render(&out, &config).unwrap(), "a|b|c");

        let empty = Command::Split {
            input: "///".to_string(),
            delims: None,
            keep_empty: false,
        };
        let out = run(&empty, &config).unwrap();
        assert_eq!(render(&out, &config).unwrap(), ".");
    }

    #[test]
    fn test_json_rendering_skips_nulls() {
        let mut config = KlConfig::default();
        config.output.format = OutputFormat::Json;

        let out = run(&hash_cmd(HashAlgorithm::Fnv1a, ""), &config).unwrap();
        assert_eq!(
            render(&out, &config).unwrap(),
            r#"{"command":"hash","input":"","hash":2166136261}"#
        );

        config.output.skip_null_fields = false;
        let rendered = render(&out, &config).unwrap();
        assert!(rendered.contains(r#""tokens":null"#));
    }
}
