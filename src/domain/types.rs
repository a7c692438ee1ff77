// ==========================================
// Pensum Planner - Domain Type Definitions
// ==========================================
// Closed enumerations for roles, work fields and
// input units. Work-field names are a cross-component
// contract: downstream consumers match on the exact
// strings returned by `WorkField::as_str`.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Role (Funktion der Lehrperson)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Klassenlehrperson (class-responsible teacher)
    #[serde(rename = "KLP")]
    Klp,
    /// Fachlehrperson (subject teacher)
    #[serde(rename = "FLP")]
    Flp,
    /// Schulische Heilpädagogik (special-needs pedagogue)
    #[serde(rename = "SHP")]
    Shp,
    /// Deutsch als Zweitsprache (second-language support)
    #[serde(rename = "DaZ")]
    Daz,
}

impl Role {
    /// All roles in catalogue order.
    pub const ALL: [Role; 4] = [Role::Klp, Role::Flp, Role::Shp, Role::Daz];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Klp => "KLP",
            Role::Flp => "FLP",
            Role::Shp => "SHP",
            Role::Daz => "DaZ",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "KLP" => Some(Role::Klp),
            "FLP" => Some(Role::Flp),
            "SHP" => Some(Role::Shp),
            "DAZ" => Some(Role::Daz),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// WorkField (Arbeitsfeld)
// ==========================================
// Exactly 4 categories; every hour the engine books
// lands in one of them. The fixed order below is also
// the display order of the distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkField {
    #[serde(rename = "Teaching&Class")]
    TeachingAndClass,
    #[serde(rename = "Learners&Partners")]
    LearnersAndPartners,
    #[serde(rename = "School")]
    School,
    #[serde(rename = "Teacher")]
    Teacher,
}

impl WorkField {
    /// The 4 work fields in distribution order.
    pub const ALL: [WorkField; 4] = [
        WorkField::TeachingAndClass,
        WorkField::LearnersAndPartners,
        WorkField::School,
        WorkField::Teacher,
    ];

    /// Contract string consumed by the report and dashboard surfaces.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkField::TeachingAndClass => "Teaching&Class",
            WorkField::LearnersAndPartners => "Learners&Partners",
            WorkField::School => "School",
            WorkField::Teacher => "Teacher",
        }
    }

    /// Parse a category identifier. Returns None on any mismatch so a
    /// catalogue typo fails at configuration load, not silently at
    /// calculation time.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Teaching&Class" => Some(WorkField::TeachingAndClass),
            "Learners&Partners" => Some(WorkField::LearnersAndPartners),
            "School" => Some(WorkField::School),
            "Teacher" => Some(WorkField::Teacher),
            _ => None,
        }
    }
}

impl fmt::Display for WorkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// AllowedRoles (role restriction of a special function)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllowedRoles {
    #[serde(rename = "ALL")]
    All,
    #[serde(untagged)]
    Only(Role),
}

impl AllowedRoles {
    /// Whether a teacher with the given role may carry the function.
    pub fn permits(&self, role: Role) -> bool {
        match self {
            AllowedRoles::All => true,
            AllowedRoles::Only(r) => *r == role,
        }
    }
}

impl fmt::Display for AllowedRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowedRoles::All => write!(f, "ALL"),
            AllowedRoles::Only(r) => write!(f, "{}", r),
        }
    }
}

// ==========================================
// InputUnit (unit of an hours/lessons entry field)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputUnit {
    #[default]
    Hours,
    Lessons,
}

impl fmt::Display for InputUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputUnit::Hours => write!(f, "HOURS"),
            InputUnit::Lessons => write!(f, "LESSONS"),
        }
    }
}

// ==========================================
// Municipality (Gemeinde)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Municipality {
    #[default]
    #[serde(rename = "Glarus")]
    Glarus,
    #[serde(rename = "Glarus Nord")]
    GlarusNord,
    #[serde(rename = "Glarus Süd")]
    GlarusSued,
}

impl Municipality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Municipality::Glarus => "Glarus",
            Municipality::GlarusNord => "Glarus Nord",
            Municipality::GlarusSued => "Glarus Süd",
        }
    }
}

impl fmt::Display for Municipality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
