//! Triple model and identifier parsing
//!
//! A triple is the atomic unit of the knowledge representation: an ordered
//! (subject, predicate, object) statement. Subjects and predicates are
//! URI-like identifiers; objects are either identifiers (relationships) or
//! plain string literals (attribute values).

/// Well-known predicate and namespace identifiers used by the university
/// dataset.
pub mod vocab {
    /// Base namespace for university entities.
    pub const EX: &str = "http://example.org/university/";

    /// Namespace for the university ontology (types and relationships).
    pub const UNI: &str = "http://example.org/university/ontology/";

    /// The rdf:type predicate. Triples with this predicate carry typing
    /// information and are dropped during projection.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// The foaf:name predicate (person names).
    pub const FOAF_NAME: &str = "http://xmlns.com/foaf/0.1/name";

    /// The dcterms:title predicate (course titles).
    pub const DC_TITLE: &str = "http://purl.org/dc/terms/title";

    /// The uni:follows relationship.
    pub const UNI_FOLLOWS: &str = "http://example.org/university/ontology/follows";

    /// The uni:enrolledIn relationship.
    pub const UNI_ENROLLED_IN: &str = "http://example.org/university/ontology/enrolledIn";

    /// The uni:teaches relationship.
    pub const UNI_TEACHES: &str = "http://example.org/university/ontology/teaches";
}

/// The object position of a triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// A reference to another entity by its URI-like identifier
    Entity(String),
    /// A plain string value (not a reference to another entity)
    Literal(String),
}

impl Object {
    /// Returns true if this object is a literal value
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// An ordered (subject, predicate, object) statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    /// Subject identifier (always an entity)
    pub subject: String,
    /// Predicate identifier naming the relationship or attribute
    pub predicate: String,
    /// Object: another entity or a literal value
    pub object: Object,
}

impl Triple {
    /// Create a triple whose object references another entity
    #[must_use]
    pub fn entity(subject: String, predicate: &str, object: String) -> Self {
        Self {
            subject,
            predicate: predicate.to_string(),
            object: Object::Entity(object),
        }
    }

    /// Create a triple whose object is a literal string value
    #[must_use]
    pub fn literal(subject: String, predicate: &str, value: &str) -> Self {
        Self {
            subject,
            predicate: predicate.to_string(),
            object: Object::Literal(value.to_string()),
        }
    }
}

/// Extract the terminal segment of a URI-like identifier.
///
/// The segment after the last `#` wins; otherwise the segment after the
/// last `/`; a separator-free identifier is returned whole. A trailing
/// separator yields the empty string — callers treat that as a malformed
/// identifier, not an error.
#[must_use]
pub fn local_name(uri: &str) -> &str {
    uri.rsplit_once('#')
        .or_else(|| uri.rsplit_once('/'))
        .map_or(uri, |(_, name)| name)
}
