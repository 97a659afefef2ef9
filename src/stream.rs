//! Stream boundary for hosting the tweet analyzer inside an event pipeline.
//!
//! A host describes its input records with a [`StreamDefinition`] and names
//! the attribute to tokenize. [`TokenizeProcessor::init`] validates that
//! choice once, before any data flows; a processor cannot be obtained any
//! other way. Afterwards each input [`Event`] is fanned out into one output
//! event per meaningful word: the input values, unchanged, followed by the
//! `token` attribute.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use tweetext::analysis::analyzer::tweet::TweetAnalyzer;
//! use tweetext::dictionary::WordDictionary;
//! use tweetext::stream::{
//!     Attribute, AttributeType, AttributeValue, Event, StreamDefinition, TokenizeProcessor,
//! };
//!
//! let definition = StreamDefinition::new("tweets")
//!     .attribute("id", AttributeType::Long)
//!     .attribute("text", AttributeType::String);
//! let analyzer = TweetAnalyzer::new(Arc::new(WordDictionary::from_words(["the"]))).unwrap();
//! let processor = TokenizeProcessor::init(&definition, &["text"], analyzer).unwrap();
//!
//! let input = Event::new(vec![AttributeValue::Long(7), AttributeValue::from("the red fox")]);
//! let output = processor.process_batch(vec![input]);
//!
//! assert_eq!(output.len(), 2);
//! assert_eq!(output[0].data[0], AttributeValue::Long(7));
//! assert_eq!(output[0].data[2], AttributeValue::from("red"));
//! assert_eq!(output[1].data[2], AttributeValue::from("fox"));
//! ```

use std::fmt;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::tweet::TweetAnalyzer;
use crate::error::{Result, TweetextError};

/// Name of the attribute appended to every output event.
pub const TOKEN_ATTRIBUTE: &str = "token";

/// Name under which the processor is registered with a host.
pub const FUNCTION_NAME: &str = "text:tokenize";

/// Declared type of a stream attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeType {
    String,
    Int,
    Long,
    Float,
    Double,
    Bool,
    Object,
}

impl AttributeType {
    /// Parse a type name such as `string` or `LONG`.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(AttributeType::String),
            "int" => Ok(AttributeType::Int),
            "long" => Ok(AttributeType::Long),
            "float" => Ok(AttributeType::Float),
            "double" => Ok(AttributeType::Double),
            "bool" => Ok(AttributeType::Bool),
            "object" => Ok(AttributeType::Object),
            other => Err(TweetextError::config(format!(
                "Unknown attribute type: {other}"
            ))),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeType::String => "STRING",
            AttributeType::Int => "INT",
            AttributeType::Long => "LONG",
            AttributeType::Float => "FLOAT",
            AttributeType::Double => "DOUBLE",
            AttributeType::Bool => "BOOL",
            AttributeType::Object => "OBJECT",
        };
        f.write_str(name)
    }
}

/// A named, typed attribute of a stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

impl Attribute {
    pub fn new<S: Into<String>>(name: S, attribute_type: AttributeType) -> Self {
        Attribute {
            name: name.into(),
            attribute_type,
        }
    }
}

/// The ordered attributes of the records flowing through a stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamDefinition {
    pub id: String,
    pub attributes: Vec<Attribute>,
}

impl StreamDefinition {
    /// Create a definition without attributes.
    pub fn new<S: Into<String>>(id: S) -> Self {
        StreamDefinition {
            id: id.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute.
    pub fn attribute<S: Into<String>>(mut self, name: S, attribute_type: AttributeType) -> Self {
        self.attributes.push(Attribute::new(name, attribute_type));
        self
    }

    /// Parse a compact schema such as `"id:long,text:string"`.
    pub fn parse<S: Into<String>>(id: S, schema: &str) -> Result<Self> {
        let mut definition = StreamDefinition::new(id);
        for field in schema.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            let (name, type_name) = field.split_once(':').ok_or_else(|| {
                TweetextError::config(format!("Expected name:type, but found {field}"))
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(TweetextError::config(format!(
                    "Missing attribute name in {field}"
                )));
            }
            if definition.attribute_index(name).is_some() {
                return Err(TweetextError::config(format!(
                    "Duplicate attribute: {name}"
                )));
            }
            definition = definition.attribute(name, AttributeType::parse(type_name)?);
        }
        Ok(definition)
    }

    /// Position of the attribute called `name`.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name == name)
    }
}

/// A value carried by an event attribute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Long(i64),
    Double(f64),
    String(String),
    // Variants below are never produced by JSON deserialization, which
    // picks the widest numeric type.
    Int(i32),
    Float(f32),
}

impl AttributeValue {
    /// The string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Check whether this value may populate an attribute of `attribute_type`.
    pub fn conforms_to(&self, attribute_type: AttributeType) -> bool {
        matches!(
            (self, attribute_type),
            (AttributeValue::Null, _)
                | (_, AttributeType::Object)
                | (AttributeValue::String(_), AttributeType::String)
                | (AttributeValue::Int(_), AttributeType::Int)
                | (AttributeValue::Long(_), AttributeType::Long | AttributeType::Int)
                | (AttributeValue::Float(_), AttributeType::Float)
                | (AttributeValue::Double(_), AttributeType::Double | AttributeType::Float)
                | (AttributeValue::Bool(_), AttributeType::Bool)
        )
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

/// A record flowing through a stream.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub data: Vec<AttributeValue>,
}

impl Event {
    pub fn new(data: Vec<AttributeValue>) -> Self {
        Event { data }
    }
}

/// Receiver of the events emitted by a processor.
pub trait EventSink {
    /// Accept one output event.
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

impl<F: FnMut(Event)> EventSink for F {
    fn emit(&mut self, event: Event) {
        self(event)
    }
}

/// Fans each input event out into one output event per meaningful word.
#[derive(Clone, Debug)]
pub struct TokenizeProcessor {
    analyzer: TweetAnalyzer,
    text_index: usize,
    output_definition: StreamDefinition,
}

impl TokenizeProcessor {
    /// Validate the arguments against `input` and build a processor.
    ///
    /// `arguments` are attribute names of `input`. Exactly one is accepted
    /// and it must be declared as a string.
    pub fn init(
        input: &StreamDefinition,
        arguments: &[&str],
        analyzer: TweetAnalyzer,
    ) -> Result<Self> {
        let [argument] = arguments else {
            return Err(TweetextError::config(format!(
                "Invalid no of arguments passed to {FUNCTION_NAME}() function, \
                 required 1, but found {}",
                arguments.len()
            )));
        };

        let text_index = input.attribute_index(argument).ok_or_else(|| {
            TweetextError::config(format!(
                "Attribute {argument} is not defined in stream {}",
                input.id
            ))
        })?;

        let attribute_type = input.attributes[text_index].attribute_type;
        if attribute_type != AttributeType::String {
            return Err(TweetextError::config(format!(
                "Text should be of type string. But found {attribute_type}"
            )));
        }

        if input.attribute_index(TOKEN_ATTRIBUTE).is_some() {
            return Err(TweetextError::config(format!(
                "Attribute {TOKEN_ATTRIBUTE} is already defined in stream {}",
                input.id
            )));
        }

        let mut output_definition = input.clone();
        output_definition
            .attributes
            .extend(Self::return_attributes());

        Ok(TokenizeProcessor {
            analyzer,
            text_index,
            output_definition,
        })
    }

    /// Attributes appended to every output event.
    pub fn return_attributes() -> Vec<Attribute> {
        vec![Attribute::new(TOKEN_ATTRIBUTE, AttributeType::String)]
    }

    /// The input attributes followed by the return attributes.
    pub fn output_definition(&self) -> &StreamDefinition {
        &self.output_definition
    }

    /// Get the analyzer used to tokenize the text attribute.
    pub fn analyzer(&self) -> &TweetAnalyzer {
        &self.analyzer
    }

    /// Process events in order, emitting one event per token to `sink`.
    pub fn process<I, S>(&self, events: I, sink: &mut S)
    where
        I: IntoIterator<Item = Event>,
        S: EventSink + ?Sized,
    {
        for event in events {
            self.process_event(&event, sink);
        }
    }

    /// Process a batch, collecting the output events in order.
    pub fn process_batch(&self, events: Vec<Event>) -> Vec<Event> {
        let mut output = Vec::new();
        self.process(events, &mut output);
        output
    }

    /// Process a batch on the rayon pool.
    ///
    /// The output order is the same as for [`process_batch`](Self::process_batch).
    pub fn process_par(&self, events: Vec<Event>) -> Vec<Event> {
        events
            .par_iter()
            .map(|event| {
                let mut output = Vec::new();
                self.process_event(event, &mut output);
                output
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    fn process_event<S>(&self, event: &Event, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        let Some(text) = event.data.get(self.text_index).and_then(AttributeValue::as_str) else {
            debug!(
                "Skipping event without a string at attribute {}: {:?}",
                self.text_index, event.data
            );
            return;
        };

        for token in self.analyzer.tokenize(text) {
            let mut data = Vec::with_capacity(event.data.len() + 1);
            data.extend_from_slice(&event.data);
            data.push(AttributeValue::String(token));
            sink.emit(Event::new(data));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dictionary::WordDictionary;

    fn analyzer() -> TweetAnalyzer {
        TweetAnalyzer::new(Arc::new(WordDictionary::from_words(["the", "is", "a"]))).unwrap()
    }

    fn definition() -> StreamDefinition {
        StreamDefinition::new("input")
            .attribute("id", AttributeType::Long)
            .attribute("text", AttributeType::String)
    }

    fn event(id: i64, text: &str) -> Event {
        Event::new(vec![AttributeValue::Long(id), AttributeValue::from(text)])
    }

    fn tokens(events: &[Event]) -> Vec<(i64, String)> {
        events
            .iter()
            .map(|e| match (&e.data[0], &e.data[2]) {
                (AttributeValue::Long(id), AttributeValue::String(t)) => (*id, t.clone()),
                other => panic!("unexpected event {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_init_rejects_wrong_arity() {
        let err = TokenizeProcessor::init(&definition(), &[], analyzer()).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("required 1, but found 0"));

        let err = TokenizeProcessor::init(&definition(), &["text", "id"], analyzer()).unwrap_err();
        assert!(err.to_string().contains("required 1, but found 2"));
    }

    #[test]
    fn test_init_rejects_wrong_type() {
        let err = TokenizeProcessor::init(&definition(), &["id"], analyzer()).unwrap_err();
        assert!(err.is_config());
        assert!(
            err.to_string()
                .contains("Text should be of type string. But found LONG")
        );
    }

    #[test]
    fn test_init_rejects_unknown_attribute() {
        let err = TokenizeProcessor::init(&definition(), &["body"], analyzer()).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("body"));
    }

    #[test]
    fn test_init_rejects_token_collision() {
        let definition = definition().attribute("token", AttributeType::String);
        let err = TokenizeProcessor::init(&definition, &["text"], analyzer()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_output_definition() {
        let processor = TokenizeProcessor::init(&definition(), &["text"], analyzer()).unwrap();
        let names: Vec<&str> = processor
            .output_definition()
            .attributes
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["id", "text", "token"]);
        assert_eq!(
            TokenizeProcessor::return_attributes(),
            vec![Attribute::new("token", AttributeType::String)]
        );
    }

    #[test]
    fn test_fan_out_preserves_order_and_fields() {
        let processor = TokenizeProcessor::init(&definition(), &["text"], analyzer()).unwrap();
        let output = processor.process_batch(vec![
            event(1, "the cat is here"),
            event(2, "@nobody"),
            event(3, "big dog"),
        ]);

        assert_eq!(
            tokens(&output),
            vec![
                (1, "cat".to_string()),
                (1, "here".to_string()),
                (3, "big".to_string()),
                (3, "dog".to_string()),
            ]
        );
        assert_eq!(output[0].data[1], AttributeValue::from("the cat is here"));
    }

    #[test]
    fn test_closure_sink() {
        let processor = TokenizeProcessor::init(&definition(), &["text"], analyzer()).unwrap();
        let mut count = 0;
        processor.process(vec![event(1, "one two three")], &mut |_event: Event| count += 1);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_non_string_value_is_skipped() {
        let processor = TokenizeProcessor::init(&definition(), &["text"], analyzer()).unwrap();
        let output = processor.process_batch(vec![
            Event::new(vec![AttributeValue::Long(1), AttributeValue::Null]),
            Event::new(vec![AttributeValue::Long(2)]),
            event(3, "ok"),
        ]);
        assert_eq!(tokens(&output), vec![(3, "ok".to_string())]);
    }

    #[test]
    fn test_process_par_matches_sequential() {
        let processor = TokenizeProcessor::init(&definition(), &["text"], analyzer()).unwrap();
        let events: Vec<Event> = (0..200)
            .map(|i| event(i, &format!("word{i} the other{i} thing")))
            .collect();

        let sequential = processor.process_batch(events.clone());
        let parallel = processor.process_par(events);
        assert_eq!(sequential, parallel);
        // Digits are stripped: "word{i}" becomes "word".
        assert_eq!(sequential.len(), 600);
    }

    #[test]
    fn test_parse_schema() {
        let definition = StreamDefinition::parse("s", "id:long, text:STRING").unwrap();
        assert_eq!(definition, definition_with_id("s"));

        assert!(StreamDefinition::parse("s", "id").unwrap_err().is_config());
        assert!(StreamDefinition::parse("s", "id:uuid").unwrap_err().is_config());
        assert!(StreamDefinition::parse("s", "a:int,a:int").unwrap_err().is_config());
    }

    fn definition_with_id(id: &str) -> StreamDefinition {
        StreamDefinition {
            id: id.to_string(),
            ..definition()
        }
    }

    #[test]
    fn test_value_conformance() {
        assert!(AttributeValue::from("x").conforms_to(AttributeType::String));
        assert!(AttributeValue::Long(1).conforms_to(AttributeType::Int));
        assert!(AttributeValue::Null.conforms_to(AttributeType::Double));
        assert!(!AttributeValue::Long(1).conforms_to(AttributeType::String));
        assert!(!AttributeValue::Bool(true).conforms_to(AttributeType::Long));
    }

    #[test]
    fn test_values_from_json() {
        let data: Vec<AttributeValue> =
            serde_json::from_str(r#"[1, "hi", null, true, 2.5]"#).unwrap();
        assert_eq!(
            data,
            vec![
                AttributeValue::Long(1),
                AttributeValue::from("hi"),
                AttributeValue::Null,
                AttributeValue::Bool(true),
                AttributeValue::Double(2.5),
            ]
        );
    }
}
