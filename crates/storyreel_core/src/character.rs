//! The protagonist of a story.

use serde::{Deserialize, Serialize};

/// The protagonist supplied by the caller.
///
/// # Examples
///
/// ```
/// use storyreel_core::Character;
///
/// let morgan = Character::new("Morgan", "male", "night shift worker");
/// assert_eq!(morgan.name, "Morgan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Character {
    /// Display name
    pub name: String,
    /// Free-form gender
    pub gender: String,
    /// Short description ("night shift worker")
    pub description: String,
}

impl Character {
    /// Create a character from its three fields.
    pub fn new(
        name: impl Into<String>,
        gender: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
            description: description.into(),
        }
    }
}
