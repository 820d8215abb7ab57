/**
 * Sheet Types and Validation
 *
 * The character sheet model plus the create/update payloads. Creation
 * validates name, class, level and race and fills defaults for everything
 * else; updates touch only the four mutable fields and validate nothing.
 */

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Character level bounds enforced at creation
pub const MIN_LEVEL: i64 = 1;
pub const MAX_LEVEL: i64 = 20;

/// Game system used when the client does not pick one
pub const DEFAULT_SYSTEM: &str = "dnd";

const DEFAULT_ATTRIBUTE_NAMES: [&str; 6] = [
    "strength",
    "dexterity",
    "constitution",
    "intelligence",
    "wisdom",
    "charisma",
];
const DEFAULT_ATTRIBUTE_SCORE: i64 = 10;

/// A character sheet, exactly as stored and served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// Creation time in milliseconds since the epoch, as a decimal string
    pub id: String,
    /// Email of the owning user; every store query is scoped by it
    pub owner_email: String,
    /// Game system, e.g. "dnd"
    pub system: String,
    /// Character name
    pub name: String,
    /// Character level
    pub level: i64,
    /// Character class
    pub class: String,
    /// Character race
    pub race: String,
    /// Ability scores by name
    pub attributes: BTreeMap<String, i64>,
    /// Skills, proficiencies and other free-form entries
    pub abilities: Vec<String>,
}

/// Payload for `POST /sheets`
///
/// Required string fields use `#[serde(default)]` so an absent field reads
/// as empty and fails validation with its own message; the optional fields
/// fall back to defaults when absent.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateSheetRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub race: String,
    pub level: Option<i64>,
    pub system: Option<String>,
    pub attributes: Option<BTreeMap<String, i64>>,
    pub abilities: Option<Vec<String>>,
}

/// Payload for `PUT /sheets/{id}`
///
/// Only these four fields are mutable; absent fields keep their stored
/// values. No validation is applied on update.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateSheetRequest {
    pub name: Option<String>,
    pub class: Option<String>,
    pub level: Option<i64>,
    pub race: Option<String>,
}

impl CreateSheetRequest {
    /// Check the payload and report every violation at once
    pub fn validate(&self) -> Result<(), AppError> {
        let mut violations = Vec::new();

        if self.name.is_empty() {
            violations.push("name is required".to_string());
        }
        if self.class.is_empty() {
            violations.push("class is required".to_string());
        }
        match self.level {
            None => violations.push("level is required".to_string()),
            Some(level) if level < MIN_LEVEL => {
                violations.push(format!("level must be at least {MIN_LEVEL}"));
            }
            Some(level) if level > MAX_LEVEL => {
                violations.push(format!("level must be at most {MAX_LEVEL}"));
            }
            Some(_) => {}
        }
        if self.race.is_empty() {
            violations.push("race is required".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "invalid sheet data: {}",
                violations.join(", ")
            )))
        }
    }

    /// Validate and build the record to store, filling defaults
    ///
    /// The id is the creation time in milliseconds as a decimal string, the
    /// same scheme the store's primary key expects.
    pub fn into_sheet(self, owner_email: &str) -> Result<Sheet, AppError> {
        self.validate()?;

        Ok(Sheet {
            id: Utc::now().timestamp_millis().to_string(),
            owner_email: owner_email.to_string(),
            system: self.system.unwrap_or_else(|| DEFAULT_SYSTEM.to_string()),
            name: self.name,
            level: self.level.unwrap_or(MIN_LEVEL),
            class: self.class,
            race: self.race,
            attributes: self.attributes.unwrap_or_else(default_attributes),
            abilities: self.abilities.unwrap_or_default(),
        })
    }
}

/// Starting ability scores: the six standard stats at 10
pub fn default_attributes() -> BTreeMap<String, i64> {
    DEFAULT_ATTRIBUTE_NAMES
        .iter()
        .map(|name| (name.to_string(), DEFAULT_ATTRIBUTE_SCORE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_request() -> CreateSheetRequest {
        CreateSheetRequest {
            name: "Mordenkainen".to_string(),
            class: "wizard".to_string(),
            race: "human".to_string(),
            level: Some(5),
            system: None,
            attributes: None,
            abilities: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_validate_level_bounds() {
        let mut request = valid_request();
        request.level = Some(0);
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("level must be at least 1"));

        request.level = Some(21);
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("level must be at most 20"));

        request.level = Some(MIN_LEVEL);
        assert!(request.validate().is_ok());
        request.level = Some(MAX_LEVEL);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_every_violation() {
        let request = CreateSheetRequest {
            name: String::new(),
            class: String::new(),
            race: String::new(),
            level: None,
            system: None,
            attributes: None,
            abilities: None,
        };

        let message = request.validate().unwrap_err().to_string();
        assert_eq!(
            message,
            "invalid sheet data: name is required, class is required, \
             level is required, race is required"
        );
    }

    #[test]
    fn test_into_sheet_fills_defaults() {
        let sheet = valid_request().into_sheet("gm@example.com").unwrap();

        assert_eq!(sheet.owner_email, "gm@example.com");
        assert_eq!(sheet.system, DEFAULT_SYSTEM);
        assert_eq!(sheet.attributes, default_attributes());
        assert!(sheet.abilities.is_empty());
        assert!(sheet.id.parse::<i64>().is_ok());
    }

    #[test]
    fn test_into_sheet_keeps_provided_values() {
        let mut attributes = BTreeMap::new();
        attributes.insert("strength".to_string(), 18);

        let request = CreateSheetRequest {
            system: Some("pathfinder".to_string()),
            attributes: Some(attributes.clone()),
            abilities: Some(vec!["arcana".to_string(), "history".to_string()]),
            ..valid_request()
        };
        let sheet = request.into_sheet("gm@example.com").unwrap();

        assert_eq!(sheet.system, "pathfinder");
        assert_eq!(sheet.attributes, attributes);
        assert_eq!(sheet.abilities, vec!["arcana", "history"]);
    }

    #[test]
    fn test_default_attributes_standard_array() {
        let attributes = default_attributes();

        assert_eq!(attributes.len(), 6);
        assert!(attributes.values().all(|score| *score == 10));
        assert!(attributes.contains_key("strength"));
        assert!(attributes.contains_key("charisma"));
    }
}
