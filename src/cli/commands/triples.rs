//! Triples command handler
//!
//! Prints the fixed university triple store, one statement per line, with
//! identifiers shortened to their terminal segments.

use uni_graph::core::university::build_university_store;

/// Run the triples command
pub fn run() {
    let store = build_university_store();
    print!("{store}");
}
