//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::args::{OutputFormat, TweetextArgs};
use crate::error::Result;
use crate::stream::{AttributeValue, Event, StreamDefinition};

/// Result structure for tokenizing one input text.
#[derive(Debug, Serialize)]
pub struct TokenizeResult {
    pub input: String,
    pub tokens: Vec<String>,
}

/// Write the tokens of one input.
///
/// Human output is one token per line; JSON output is one object per input.
pub fn output_tokens<W: Write>(
    out: &mut W,
    result: &TokenizeResult,
    args: &TweetextArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for token in &result.tokens {
                writeln!(out, "{token}")?;
            }
        }
        OutputFormat::Json => output_json(out, result, args)?,
    }
    Ok(())
}

/// Write one output event of the stream command.
///
/// Human output is tab-separated values. Backslash, tab, newline and carriage
/// return in string values are escaped as `\\`, `\t`, `\n` and `\r`. JSON
/// output is an object keyed by attribute name.
pub fn output_event<W: Write>(
    out: &mut W,
    definition: &StreamDefinition,
    event: &Event,
    args: &TweetextArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            let line: Vec<String> = event.data.iter().map(human_value).collect();
            writeln!(out, "{}", line.join("\t"))?;
        }
        OutputFormat::Json => {
            let mut record = Map::new();
            for (attribute, value) in definition.attributes.iter().zip(&event.data) {
                record.insert(attribute.name.clone(), serde_json::to_value(value)?);
            }
            output_json(out, &Value::Object(record), args)?;
        }
    }
    Ok(())
}

fn output_json<W: Write, T: Serialize>(out: &mut W, value: &T, args: &TweetextArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

fn human_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Null => "null".to_string(),
        AttributeValue::Bool(v) => v.to_string(),
        AttributeValue::Int(v) => v.to_string(),
        AttributeValue::Long(v) => v.to_string(),
        AttributeValue::Float(v) => v.to_string(),
        AttributeValue::Double(v) => v.to_string(),
        AttributeValue::String(v) => escape_field(v),
    }
}

fn escape_field(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}
