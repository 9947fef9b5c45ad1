//! Build script to generate embedded word lists
//!
//! Reads the per-length word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Word lengths that ship with embedded lists
const LENGTHS: [usize; 3] = [5, 6, 7];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordlists.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for length in LENGTHS {
        let answers = format!("data/answers_{length}.txt");
        let allowed = format!("data/allowed_{length}.txt");

        generate_word_list(
            &mut output,
            &answers,
            length,
            &format!("ANSWERS_{length}"),
            &format!("Daily answer words ({length} letters)"),
        );
        generate_word_list(
            &mut output,
            &allowed,
            length,
            &format!("ALLOWED_{length}"),
            &format!("All accepted guesses ({length} letters)"),
        );

        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={answers}");
        println!("cargo:rerun-if-changed={allowed}");
    }
}

fn generate_word_list(
    output: &mut fs::File,
    input_path: &str,
    length: usize,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_ascii_uppercase())
        .filter(|word| !word.is_empty())
        .collect();

    for word in &words {
        assert!(
            word.len() == length && word.bytes().all(|b| b.is_ascii_uppercase()),
            "{input_path}: '{word}' is not a {length}-letter word"
        );
    }

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
