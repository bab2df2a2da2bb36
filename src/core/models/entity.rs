//! Entity typing for the university domain
//!
//! Types are dropped from the projected graph (the rdf:type triples never
//! become nodes or edges); they drive the static style palette and the
//! legend instead.

/// The fixed set of entity types in the university dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    /// The single leader entity
    Leader,
    /// A student entity
    Student,
    /// The professor entity
    Professor,
    /// A course entity
    Course,
}

impl EntityType {
    /// All entity types, in legend order
    pub const ALL: [Self; 4] = [Self::Leader, Self::Student, Self::Professor, Self::Course];

    /// Human-readable type name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leader => "Leader",
            Self::Student => "Student",
            Self::Professor => "Professor",
            Self::Course => "Course",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_names() {
        assert_eq!(EntityType::Leader.as_str(), "Leader");
        assert_eq!(EntityType::Course.to_string(), "Course");
    }

    #[test]
    fn test_all_covers_four_types() {
        assert_eq!(EntityType::ALL.len(), 4);
    }
}
