//! Triple store builder for the fixed university dataset
//!
//! Produces the hard-coded knowledge graph: one leader, three students,
//! a professor, and three courses, with names, titles, and the follows /
//! enrolledIn / teaches relationships between them. Construction cannot
//! fail; all values are literal constants.

use crate::core::models::triple::vocab;
use crate::core::models::{Triple, TripleStore};

/// Display label of the leader node, the anchor for the portrait overlay
pub const LEADER_LABEL: &str = "ImranKhan";

/// Build an entity identifier under the `ex:` namespace
fn ex(name: &str) -> String {
    format!("{}{name}", vocab::EX)
}

/// Build a type identifier under the `uni:` ontology namespace
fn uni(name: &str) -> String {
    format!("{}{name}", vocab::UNI)
}

/// Build the fixed university triple store.
///
/// The dataset holds 8 typed entities and 26 triples in total: 8 type
/// statements, 8 name/title attributes, and 10 relationships. Terminal
/// segments of all identifiers are globally unique, so display labels
/// never collide after truncation.
#[must_use]
pub fn build_university_store() -> TripleStore {
    let mut store = TripleStore::new();

    // Leader
    store.insert(Triple::entity(ex("ImranKhan"), vocab::RDF_TYPE, uni("Leader")));
    store.insert(Triple::literal(ex("ImranKhan"), vocab::FOAF_NAME, "Imran Khan"));

    // Students, each following the leader
    store.insert(Triple::entity(ex("Student1"), vocab::RDF_TYPE, uni("Student")));
    store.insert(Triple::literal(ex("Student1"), vocab::FOAF_NAME, "xxx"));
    store.insert(Triple::entity(ex("Student1"), vocab::UNI_FOLLOWS, ex("ImranKhan")));

    store.insert(Triple::entity(ex("Student2"), vocab::RDF_TYPE, uni("Student")));
    store.insert(Triple::literal(ex("Student2"), vocab::FOAF_NAME, "yyy"));
    store.insert(Triple::entity(ex("Student2"), vocab::UNI_FOLLOWS, ex("ImranKhan")));

    store.insert(Triple::entity(ex("Student3"), vocab::RDF_TYPE, uni("Student")));
    store.insert(Triple::literal(ex("Student3"), vocab::FOAF_NAME, "zzz"));
    store.insert(Triple::entity(ex("Student3"), vocab::UNI_FOLLOWS, ex("ImranKhan")));

    // Courses
    store.insert(Triple::entity(ex("Course1"), vocab::RDF_TYPE, uni("Course")));
    store.insert(Triple::literal(
        ex("Course1"),
        vocab::DC_TITLE,
        "Knowledge Reasoning and Representation",
    ));

    store.insert(Triple::entity(ex("Course2"), vocab::RDF_TYPE, uni("Course")));
    store.insert(Triple::literal(ex("Course2"), vocab::DC_TITLE, "Machine Learning"));

    store.insert(Triple::entity(ex("Course3"), vocab::RDF_TYPE, uni("Course")));
    store.insert(Triple::literal(
        ex("Course3"),
        vocab::DC_TITLE,
        "Knowledgebase Management System",
    ));

    // Professor, following the leader
    store.insert(Triple::entity(ex("Professor"), vocab::RDF_TYPE, uni("Professor")));
    store.insert(Triple::literal(ex("Professor"), vocab::FOAF_NAME, "ppp"));
    store.insert(Triple::entity(ex("Professor"), vocab::UNI_FOLLOWS, ex("ImranKhan")));

    // Enrollment, 1:1 pairing by index
    store.insert(Triple::entity(ex("Student1"), vocab::UNI_ENROLLED_IN, ex("Course1")));
    store.insert(Triple::entity(ex("Student2"), vocab::UNI_ENROLLED_IN, ex("Course2")));
    store.insert(Triple::entity(ex("Student3"), vocab::UNI_ENROLLED_IN, ex("Course3")));

    // The professor teaches all three courses
    store.insert(Triple::entity(ex("Professor"), vocab::UNI_TEACHES, ex("Course1")));
    store.insert(Triple::entity(ex("Professor"), vocab::UNI_TEACHES, ex("Course2")));
    store.insert(Triple::entity(ex("Professor"), vocab::UNI_TEACHES, ex("Course3")));

    store
}
