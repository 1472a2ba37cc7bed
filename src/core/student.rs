//! Student record model

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque identifier assigned by the remote store
///
/// Stores may issue string or numeric ids; both are accepted on the wire and
/// kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Integer(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => StudentId(s),
            RawId::Integer(n) => StudentId(n.to_string()),
            RawId::Unsigned(n) => StudentId(n.to_string()),
        })
    }
}

/// Class group a student belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    A1,
    A2,
    B1,
    B2,
}

impl Group {
    pub const ALL: [Group; 4] = [Group::A1, Group::A2, Group::B1, Group::B2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::A1 => "A1",
            Group::A2 => "A2",
            Group::B1 => "B1",
            Group::B2 => "B2",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text is not one of the known group codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown group '{0}'")]
pub struct UnknownGroup(pub String);

impl FromStr for Group {
    type Err = UnknownGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGroup(s.to_string()))
    }
}

/// Validated field values sent to the store on create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub firstname: String,
    pub lastname: String,
    pub group: Group,
}

/// A student as held by the remote store
///
/// `group` decodes strictly: a code outside A1/A2/B1/B2 (including lowercase
/// forms) is a decode error for the whole response it appears in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub firstname: String,
    pub lastname: String,
    pub group: Group,
}

impl StudentRecord {
    /// Fields the free-text search looks at
    pub const SEARCHABLE_FIELDS: [&'static str; 3] = ["firstname", "lastname", "group"];

    pub fn new(id: impl Into<StudentId>, fields: StudentFields) -> Self {
        Self {
            id: id.into(),
            firstname: fields.firstname,
            lastname: fields.lastname,
            group: fields.group,
        }
    }

    /// String form of a searchable field
    pub fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "firstname" => Some(&self.firstname),
            "lastname" => Some(&self.lastname),
            "group" => Some(self.group.as_str()),
            _ => None,
        }
    }

    pub fn fields(&self) -> StudentFields {
        StudentFields {
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            group: self.group,
        }
    }
}
