//! Subject listing kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::{ListingConfig, SiteConfig};

/// Which listing a subject is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    /// Full education programmes (`/utbildningar`)
    Education,

    /// Single courses (`/kurser`)
    Course,
}

impl SubjectKind {
    /// All kinds, in export order.
    pub const ALL: [SubjectKind; 2] = [SubjectKind::Education, SubjectKind::Course];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectKind::Education => "education",
            SubjectKind::Course => "course",
        }
    }

    /// The listing this kind is indexed from.
    pub fn listing<'a>(&self, site: &'a SiteConfig) -> &'a ListingConfig {
        match self {
            SubjectKind::Education => &site.education,
            SubjectKind::Course => &site.course,
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
