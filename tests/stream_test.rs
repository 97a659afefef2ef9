//! Integration tests for the tokenize processor.

use std::sync::Arc;

use tweetext::prelude::*;

fn processor(schema: &str, field: &str) -> Result<TokenizeProcessor> {
    let definition = StreamDefinition::parse("tweets", schema)?;
    let analyzer = TweetAnalyzer::new(Arc::new(WordDictionary::from_words(["the", "a"])))?;
    TokenizeProcessor::init(&definition, &[field], analyzer)
}

#[test]
fn test_setup_errors_are_reported_before_processing() {
    let err = processor("id:long,text:int", "text").unwrap_err();
    assert!(err.is_config());
    assert_eq!(
        err.to_string(),
        "Configuration error: Text should be of type string. But found INT"
    );

    let err = processor("id:long,text:string", "missing").unwrap_err();
    assert!(err.is_config());

    let definition = StreamDefinition::parse("tweets", "text:string").unwrap();
    let analyzer = TweetAnalyzer::new(Arc::new(WordDictionary::empty())).unwrap();
    let err = TokenizeProcessor::init(&definition, &["text", "text"], analyzer).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: Invalid no of arguments passed to text:tokenize() function, \
         required 1, but found 2"
    );
}

#[test]
fn test_one_record_per_token_with_copied_fields() -> Result<()> {
    let processor = processor("user:string,text:string,likes:long", "text")?;

    let input = Event::new(vec![
        AttributeValue::from("alice"),
        AttributeValue::from("The sun (finally) is out ☀ #summer"),
        AttributeValue::Long(12),
    ]);
    let output = processor.process_batch(vec![input.clone()]);

    let tokens: Vec<&str> = output.iter().map(|e| e.data[3].as_str().unwrap()).collect();
    assert_eq!(tokens, vec!["sun", "finally", "is", "out"]);
    for event in &output {
        assert_eq!(&event.data[..3], &input.data[..]);
    }
    Ok(())
}

#[test]
fn test_sink_sees_events_in_order() -> Result<()> {
    let processor = processor("text:string", "text")?;

    let mut seen = Vec::new();
    processor.process(
        vec![
            Event::new(vec![AttributeValue::from("one two")]),
            Event::new(vec![AttributeValue::from("")]),
            Event::new(vec![AttributeValue::from("three")]),
        ],
        &mut |event: Event| seen.push(event.data[1].as_str().unwrap().to_string()),
    );

    assert_eq!(seen, vec!["one", "two", "three"]);
    Ok(())
}

#[test]
fn test_parallel_processing_keeps_input_order() -> Result<()> {
    let processor = processor("id:long,text:string", "text")?;
    let events: Vec<Event> = (0..500)
        .map(|i| {
            Event::new(vec![
                AttributeValue::Long(i),
                AttributeValue::from(format!("alpha beta{i} the gamma")),
            ])
        })
        .collect();

    let output = processor.process_par(events);
    assert_eq!(output.len(), 1500);

    let ids: Vec<i64> = output
        .iter()
        .map(|e| match e.data[0] {
            AttributeValue::Long(id) => id,
            _ => unreachable!(),
        })
        .collect();
    assert!(ids.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(output[0].data[2], AttributeValue::from("alpha"));
    assert_eq!(output[1].data[2], AttributeValue::from("beta"));
    assert_eq!(output[2].data[2], AttributeValue::from("gamma"));
    Ok(())
}
