//! Person domain model.
//!
//! # Responsibility
//! - Define the single durable record of the family-tree core.
//! - Provide constructors for in-process creation and external ingestion.
//!
//! # Invariants
//! - Wire field names are exactly `id`, `name`, `birthYear`, `gender`,
//!   `fatherId`, `motherId`, `position` (camelCase on the JSON channel).
//! - `position` is absent until the user first drags the node; once set it
//!   survives re-layout and save/load.
//! - `gender` limits eligibility as a selectable father (Male) or mother
//!   (Female) in the add-person collaborator; the core itself does not
//!   enforce it on ingested records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a person record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Ids created in-process are UUID v4 strings; imported ids are accepted
/// verbatim (the original dataset used epoch-millisecond strings).
pub type PersonId = String;

/// Gender of a person record.
///
/// Serialized with capitalized wire names to match the external dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A manually assigned layout-space coordinate.
///
/// Stored on a person after a drag gesture commits; always wins over the
/// computed tidy-tree coordinate on every subsequent rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Canonical durable record of the family-tree core.
///
/// Parent references are by id and may point at nonexistent persons; the
/// hierarchy builder degrades those to root classification instead of
/// rejecting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Stable id used for parent references and edge endpoints.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Birth year as entered in the form.
    pub birth_year: i32,
    /// Gender; drives form eligibility and node styling, nothing else.
    pub gender: Gender,
    /// Optional reference to the father's id. May dangle.
    #[serde(default)]
    pub father_id: Option<PersonId>,
    /// Optional reference to the mother's id. May dangle.
    #[serde(default)]
    pub mother_id: Option<PersonId>,
    /// Manual position override from a committed drag gesture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Person {
    /// Creates a person with a generated stable id and no parent links.
    pub fn new(name: impl Into<String>, birth_year: i32, gender: Gender) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, birth_year, gender)
    }

    /// Creates a person with a caller-provided stable id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: impl Into<PersonId>,
        name: impl Into<String>,
        birth_year: i32,
        gender: Gender,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth_year,
            gender,
            father_id: None,
            mother_id: None,
            position: None,
        }
    }

    /// Sets the father reference, builder style.
    pub fn father(mut self, id: impl Into<PersonId>) -> Self {
        self.father_id = Some(id.into());
        self
    }

    /// Sets the mother reference, builder style.
    pub fn mother(mut self, id: impl Into<PersonId>) -> Self {
        self.mother_id = Some(id.into());
        self
    }

    /// Returns whether this person carries no parent references at all.
    pub fn is_parentless(&self) -> bool {
        self.father_id.is_none() && self.mother_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{Gender, Person, Position};

    #[test]
    fn new_generates_unique_ids() {
        let a = Person::new("A", 1950, Gender::Male);
        let b = Person::new("B", 1952, Gender::Female);
        assert_ne!(a.id, b.id);
        assert!(a.is_parentless());
        assert_eq!(a.position, None);
    }

    #[test]
    fn serialization_uses_expected_wire_fields() {
        let mut person = Person::with_id("1727", "Ada", 1815, Gender::Female).father("1");
        person.position = Some(Position { x: 120.5, y: 420.0 });

        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["id"], "1727");
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["birthYear"], 1815);
        assert_eq!(json["gender"], "Female");
        assert_eq!(json["fatherId"], "1");
        assert_eq!(json["motherId"], serde_json::Value::Null);
        assert_eq!(json["position"]["x"], 120.5);
        assert_eq!(json["position"]["y"], 420.0);

        let decoded: Person = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, person);
    }

    #[test]
    fn position_field_is_omitted_until_set() {
        let person = Person::with_id("9", "Bo", 1980, Gender::Other);
        let json = serde_json::to_value(&person).unwrap();
        assert!(json.get("position").is_none());
    }

    #[test]
    fn deserialization_tolerates_missing_parent_fields() {
        let value = serde_json::json!({
            "id": "42",
            "name": "Solo",
            "birthYear": 1970,
            "gender": "Male"
        });
        let person: Person = serde_json::from_value(value).unwrap();
        assert!(person.is_parentless());
        assert_eq!(person.position, None);
    }
}
