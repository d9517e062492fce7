use porter2_rs::fixture::{load_fixture, verify};
use porter2_rs::{Language, Stemmer};

fn main() {
    let stemmer = Language::English.stemmer();

    // With a path argument, check a fixture file instead.
    if let Some(path) = std::env::args().nth(1) {
        match load_fixture(&path) {
            Ok(pairs) => {
                let mismatches = verify(stemmer.as_ref(), &pairs);
                for m in &mismatches {
                    println!("{}: expected {}, got {}", m.input, m.expected, m.actual);
                }
                println!("{} rows, {} mismatches", pairs.len(), mismatches.len());
            }
            Err(e) => eprintln!("{e}"),
        }
        return;
    }

    let words = vec![
        "running", "caresses", "ponies", "skies", "went", "I\u{2019}ll", "hoping", "generously",
        "relational", "hopefulness",
    ];

    println!("=== Stemming (English) ===");
    for word in words {
        println!("{}: {}", word, stemmer.stem(word));
    }
}
