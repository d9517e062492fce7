// Regression tests against the bundled reference stems.

use std::path::Path;

use porter2_rs::fixture::{load_fixture, verify};
use porter2_rs::{EnglishStemmer, Language, Stemmer};

const FIXTURE: &str = "tests/data/english_porter2_stems.csv";

fn fixture_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURE)
}

#[test]
fn reference_fixture_matches() {
    let pairs = load_fixture(fixture_path()).expect("fixture should load");
    assert!(pairs.len() > 300, "fixture looks truncated: {} rows", pairs.len());

    let mismatches = verify(&EnglishStemmer::new(), &pairs);
    assert!(
        mismatches.is_empty(),
        "{} mismatches, first few: {:?}",
        mismatches.len(),
        &mismatches[..mismatches.len().min(10)]
    );
}

#[test]
fn fixture_skips_comments() {
    let pairs = load_fixture(fixture_path()).unwrap();
    assert!(pairs.iter().all(|p| !p.input.trim_start().starts_with(';')));
    assert!(pairs.iter().any(|p| p.input == "had to" && p.expected == "must"));
}

#[test]
fn language_selected_stemmer_matches_fixture() {
    let pairs = load_fixture(fixture_path()).unwrap();
    let stemmer = Language::from_code("en").stemmer();
    assert!(verify(stemmer.as_ref(), &pairs).is_empty());
}

#[test]
fn word_families_collapse() {
    let stemmer = EnglishStemmer::new();
    let families: [&[&str]; 4] = [
        &["connect", "connected", "connecting", "connection"],
        &["consolidate", "consolidated", "consolidating"],
        &["knit", "knits", "knitting"],
        &["hope", "hoped", "hoping", "hopeful"],
    ];
    for family in families {
        let stems = stemmer.stem_all(family);
        assert!(
            stems.windows(2).all(|w| w[0] == w[1]),
            "{family:?} -> {stems:?}"
        );
    }
}

#[test]
fn stop_words_are_fixed_points() {
    let stemmer = EnglishStemmer::new();
    let lexicon = stemmer.lexicon();
    for word in &lexicon.stop_words {
        if lexicon.special_word(word).is_some() {
            continue;
        }
        assert_eq!(&stemmer.stem(word), word);
    }
}

#[test]
fn special_word_stems_are_fixed_points() {
    let stemmer = EnglishStemmer::new();
    for stem in ["ski", "sky", "die", "lie", "tie", "inning", "proceed", "news", "atlas"] {
        assert_eq!(stemmer.stem(stem), stem);
    }
    // Not every override output survives a second pass.
    assert_eq!(stemmer.stem("early"), "earli");
    assert_eq!(stemmer.stem("earli"), "ear");
}

#[test]
fn shared_stemmer_across_threads() {
    let handles: Vec<_> = ["running", "went", "skies", "agreed"]
        .into_iter()
        .map(|word| std::thread::spawn(move || porter2_rs::stem(word)))
        .collect();
    let stems: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(stems, vec!["run", "go", "sky", "agre"]);
}
