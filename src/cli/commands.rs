//! Command implementations for the tweetext CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::Context;
use log::{info, warn};
use serde_json::{Map, Value};

use crate::analysis::analyzer::tweet::TweetAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, TweetextError};
use crate::stream::{AttributeValue, Event, StreamDefinition, TokenizeProcessor};

/// Execute a CLI command, writing results to stdout.
pub fn execute_command(args: TweetextArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut stdin.lock(), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI command against explicit input and output handles.
///
/// `stdin` is read only when the command has no other input source.
pub fn run<R: BufRead, W: Write>(args: &TweetextArgs, stdin: &mut R, out: &mut W) -> Result<()> {
    let config = args.tokenizer_config()?;
    let analyzer = config.build_analyzer()?;
    info!(
        "Filtering against {} non-meaningful words",
        analyzer.dictionary().len()
    );

    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args, &analyzer, args, stdin, out),
        Command::Stream(stream_args) => stream(stream_args, analyzer, args, stdin, out),
    }
}

/// Tokenize each text argument, or each input line.
fn tokenize<R: BufRead, W: Write>(
    tokenize_args: &TokenizeArgs,
    analyzer: &TweetAnalyzer,
    args: &TweetextArgs,
    stdin: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut inputs = 0usize;
    let mut tokens = 0usize;
    let mut emit = |input: String, out: &mut W| -> Result<()> {
        let result = TokenizeResult {
            tokens: analyzer.tokenize(&input).collect(),
            input,
        };
        inputs += 1;
        tokens += result.tokens.len();
        output_tokens(out, &result, args)
    };

    if !tokenize_args.texts.is_empty() {
        for text in &tokenize_args.texts {
            emit(text.clone(), out)?;
        }
    } else if let Some(path) = &tokenize_args.input {
        for line in open(path)?.lines() {
            emit(line?, out)?;
        }
    } else {
        for line in stdin.lines() {
            emit(line?, out)?;
        }
    }

    info!("Tokenized {inputs} inputs into {tokens} tokens");
    Ok(())
}

/// Run the tokenize processor over JSON Lines records.
fn stream<R: BufRead, W: Write>(
    stream_args: &StreamArgs,
    analyzer: TweetAnalyzer,
    args: &TweetextArgs,
    stdin: &mut R,
    out: &mut W,
) -> Result<()> {
    let definition = StreamDefinition::parse("input", &stream_args.schema)?;
    let processor = TokenizeProcessor::init(&definition, &[stream_args.field.as_str()], analyzer)?;
    let output_definition = processor.output_definition().clone();

    let mut records = Vec::new();
    let mut read = |line: io::Result<String>, line_num: usize| -> Result<()> {
        let line = line?;
        if line.trim().is_empty() {
            return Ok(());
        }
        match parse_record(&definition, &line) {
            Ok(event) => records.push(event),
            Err(e) => warn!("Skipping record on line {line_num}: {e}"),
        }
        Ok(())
    };

    match &stream_args.input {
        Some(path) => {
            for (i, line) in open(path)?.lines().enumerate() {
                read(line, i + 1)?;
            }
        }
        None => {
            for (i, line) in stdin.lines().enumerate() {
                read(line, i + 1)?;
            }
        }
    }

    info!("Read {} records", records.len());
    let output = if stream_args.parallel {
        processor.process_par(records)
    } else {
        processor.process_batch(records)
    };

    for event in &output {
        output_event(out, &output_definition, event, args)?;
    }
    info!("Emitted {} records", output.len());
    Ok(())
}

/// Convert one JSON object into an event ordered by `definition`.
///
/// Missing attributes become null.
fn parse_record(definition: &StreamDefinition, line: &str) -> Result<Event> {
    let mut object: Map<String, Value> = serde_json::from_str(line)?;
    let mut data = Vec::with_capacity(definition.attributes.len());

    for attribute in &definition.attributes {
        let value = object.remove(&attribute.name).unwrap_or(Value::Null);
        let value: AttributeValue = serde_json::from_value(value).map_err(|e| {
            TweetextError::analysis(format!("attribute {}: {e}", attribute.name))
        })?;
        if !value.conforms_to(attribute.attribute_type) {
            return Err(TweetextError::analysis(format!(
                "attribute {} should be of type {}, but found {value:?}",
                attribute.name, attribute.attribute_type
            )));
        }
        data.push(value);
    }

    Ok(Event::new(data))
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("failed to open input {}", path.display()))?;
    Ok(BufReader::new(file))
}
