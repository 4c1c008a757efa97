//! Integration tests for the precis summarizer.

use precis::{
    extract_article, Config, FrequencyScorer, PrecisError, RankingTable, SentenceRanker,
    SplitterKind, StopwordSet, Summarizer, SummarizerConfig, SummaryOrder, Tokenizer,
};
use std::io::Write;
use std::sync::Arc;
use std::thread;
use tempfile::{tempdir, NamedTempFile};

/// A short article with a clear topic.
fn create_test_article() -> &'static str {
    "Solar power is growing quickly across the country. \
     Engineers say solar panels are cheaper than ever. \
     The weather was mild on Tuesday. \
     Cheaper panels mean more homes install solar power. \
     Some homes also add batteries to store power. \
     A local bakery opened a new shop downtown."
}

#[test]
fn test_summary_length_and_membership() {
    let summarizer = Summarizer::default();
    let text = create_test_article();
    let sentences = summarizer.sentences(text);
    assert_eq!(sentences.len(), 6);

    for n in 0..=sentences.len() {
        let summary = summarizer.summarize(text, n).unwrap();
        assert_eq!(summary.len(), n);
        for sentence in &summary {
            assert!(sentences.contains(&sentence.as_str()), "{:?} not a sentence", sentence);
        }
    }
}

#[test]
fn test_topic_sentences_rank_first() {
    let summarizer = Summarizer::default();
    let summary = summarizer.summarize(create_test_article(), 2).unwrap();

    // solar=3 and power=3 are removed by max_cut; panels, cheaper and homes
    // (2 each, weight 0.667) drive the ranking.
    assert_eq!(
        summary,
        vec![
            "Cheaper panels mean more homes install solar power.",
            "Engineers say solar panels are cheaper than ever.",
        ]
    );
}

#[test]
fn test_scores_descend_and_weather_ranks_last() {
    let summarizer = Summarizer::default();
    let summary = summarizer
        .summarize_detailed(create_test_article(), 6)
        .unwrap();

    let scores: Vec<f64> = summary.sentences.iter().map(|s| s.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));

    let last = summary.sentences.last().unwrap();
    assert_eq!(last.index, 2);
    assert!(last.text.starts_with("The weather"));
}

#[test]
fn test_determinism() {
    let summarizer = Summarizer::default();
    let text = create_test_article();
    let first = summarizer.summarize_detailed(text, 3).unwrap();
    let second = summarizer.summarize_detailed(text, 3).unwrap();
    assert_eq!(first, second);

    let other = Summarizer::default();
    assert_eq!(other.summarize(text, 3).unwrap(), first.into_texts());
}

#[test]
fn test_top_one_within_top_two() {
    let summarizer = Summarizer::default();
    let text = create_test_article();
    let top1 = summarizer.summarize(text, 1).unwrap();
    let top2 = summarizer.summarize(text, 2).unwrap();
    assert!(top2.contains(&top1[0]));
}

#[test]
fn test_cat_example_without_stemming() {
    let stopwords = Arc::new(StopwordSet::from_words(["the", "on", "are", "."]));
    let summarizer = Summarizer::default().with_stopwords(stopwords);
    let text = "The cat sat. The cat sat on the mat. Cats are animals.";

    let table = summarizer.frequencies(text).unwrap();
    assert!(table.contains("cats"));
    assert!(!table.contains("cat"));

    assert_eq!(summarizer.summarize(text, 1).unwrap(), vec!["Cats are animals."]);
}

#[test]
fn test_all_unique_words_use_tie_break() {
    let summarizer = Summarizer::default();
    let text = "Alpha beta gamma. Delta epsilon zeta. Eta theta iota. Kappa lambda mu.";

    let summary = summarizer.summarize_detailed(text, 2).unwrap();
    assert!(summary.frequencies.is_empty());
    assert!(summary.sentences.iter().all(|s| s.score == 0.0));
    assert_eq!(summary.texts(), vec!["Alpha beta gamma.", "Delta epsilon zeta."]);
}

#[test]
fn test_inverted_cutoffs_still_return_n() {
    let summarizer = Summarizer::new(0.9, 0.1).unwrap();
    let summary = summarizer.summarize(create_test_article(), 3).unwrap();
    assert_eq!(
        summary,
        vec![
            "Solar power is growing quickly across the country.",
            "Engineers say solar panels are cheaper than ever.",
            "The weather was mild on Tuesday.",
        ]
    );
}

#[test]
fn test_error_kinds() {
    let summarizer = Summarizer::default();

    let err = summarizer.summarize(create_test_article(), 7).unwrap_err();
    assert!(matches!(err, PrecisError::InvalidArgument(_)));

    let err = summarizer.summarize("", 0).unwrap_err();
    assert!(matches!(err, PrecisError::EmptyContent(_)));

    let err = summarizer.summarize("The. A? It!", 2).unwrap_err();
    assert!(matches!(err, PrecisError::EmptyContent(_)));

    assert!(matches!(Summarizer::new(0.1, 1.1), Err(PrecisError::Config(_))));
}

#[test]
fn test_document_order_is_post_processing() {
    let summarizer = Summarizer::default();
    let by_score = summarizer
        .summarize_detailed(create_test_article(), 3)
        .unwrap();
    let by_position = by_score.clone().ordered(SummaryOrder::Document);

    let mut expected = by_score.sentences.clone();
    expected.sort_by_key(|s| s.index);
    assert_eq!(by_position.sentences, expected);
}

#[test]
fn test_pipeline_stages_match_summarizer() {
    let text = create_test_article();
    let summarizer = Summarizer::default();

    let sentences = SplitterKind::Rules.split(text);
    let tokens = Tokenizer::default_config().tokenize_sentences(&sentences);
    let scorer = FrequencyScorer::new(SummarizerConfig::default(), StopwordSet::english());
    let table = scorer.compute(&tokens).unwrap();
    let ranking = RankingTable::build(&table, &tokens);
    let selected: Vec<String> = SentenceRanker
        .select(&ranking, 3)
        .into_iter()
        .map(|i| sentences[i].to_string())
        .collect();

    assert_eq!(selected, summarizer.summarize(text, 3).unwrap());
}

#[test]
fn test_shared_across_threads() {
    let summarizer = Arc::new(Summarizer::default());
    let expected = summarizer.summarize(create_test_article(), 2).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let summarizer = Arc::clone(&summarizer);
            thread::spawn(move || summarizer.summarize(create_test_article(), 2).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_config_and_stopwords_from_files() {
    let dir = tempdir().unwrap();

    let config_path = dir.path().join("precis.json");
    std::fs::write(
        &config_path,
        r#"{"summarizer": {"min_cut": 0.0, "max_cut": 1.0}, "text": {"splitter": "unicode"}}"#,
    )
    .unwrap();
    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(config.text.splitter, SplitterKind::Unicode);

    let mut stopword_file = NamedTempFile::new_in(dir.path()).unwrap();
    writeln!(stopword_file, "the\nis\n.").unwrap();
    let stopwords = StopwordSet::from_file(stopword_file.path()).unwrap();

    let summarizer = Summarizer::with_config(config)
        .unwrap()
        .with_stopwords(Arc::new(stopwords));

    // With max_cut 1.0 nothing is too common: "cat" (weight 1.0) is still
    // removed because the upper cutoff is exclusive.
    let table = summarizer.frequencies("The cat is here. The cat is there.").unwrap();
    assert!(!table.contains("cat"));
    assert_eq!(table.weight("here"), Some(0.5));
}

#[test]
fn test_html_to_summary() {
    let html = r#"<html><head><title>Solar Boom</title></head><body>
        <article><div class="article-body">
        <p>Solar power is growing quickly across the country.</p>
        <p>Engineers say solar panels are cheaper than ever.</p>
        <p>Cheaper panels mean more homes install solar power.</p>
        </div></article></body></html>"#;

    let extracted = extract_article(html).unwrap();
    assert_eq!(extracted.title.as_deref(), Some("Solar Boom"));

    let summarizer = Summarizer::default();
    assert_eq!(summarizer.sentences(&extracted.text).len(), 3);
    let summary = summarizer.summarize(&extracted.text, 1).unwrap();
    assert_eq!(summary.len(), 1);
}

#[test]
fn test_batch_summaries() {
    let summarizer = Summarizer::default();
    let texts = vec![
        create_test_article().to_string(),
        "Only one sentence here.".to_string(),
    ];

    let results = summarizer.summarize_batch(&texts, 2);
    assert_eq!(
        results[0].as_ref().unwrap(),
        &summarizer.summarize(create_test_article(), 2).unwrap()
    );
    assert!(matches!(results[1], Err(PrecisError::InvalidArgument(_))));
}
