//! In-memory triple store
//!
//! An append-only collection of triples. Insertion order is irrelevant to
//! projection and duplicates are permitted; the store is built fully before
//! it is handed to the projector and never mutated afterwards.

use super::triple::{local_name, Object, Triple};

/// An unordered collection of (subject, predicate, object) statements
#[derive(Debug, Clone, Default)]
pub struct TripleStore {
    triples: Vec<Triple>,
}

impl TripleStore {
    /// Create a new empty triple store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triples: Vec::new(),
        }
    }

    /// Insert a triple into the store
    ///
    /// Duplicate triples are accepted; projection treats the store as a
    /// set-like collection iterated once.
    pub fn insert(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Get the number of triples in the store
    #[must_use]
    pub const fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check whether the store contains no triples
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over all triples in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }
}

impl<'a> IntoIterator for &'a TripleStore {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl std::fmt::Display for TripleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Triple store ({} triples):", self.triples.len())?;
        writeln!(f)?;

        for triple in &self.triples {
            let subject = local_name(&triple.subject);
            let predicate = local_name(&triple.predicate);
            match &triple.object {
                Object::Entity(uri) => {
                    writeln!(f, "  {subject} --{predicate}--> {}", local_name(uri))?;
                }
                Object::Literal(value) => {
                    writeln!(f, "  {subject} --{predicate}--> \"{value}\"")?;
                }
            }
        }

        Ok(())
    }
}
