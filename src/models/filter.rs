//! Node filtering for joined text extraction.

use serde::{Deserialize, Serialize};

/// The non-breaking space the NBI site uses in decorative/boilerplate nodes.
pub const NBSP: &str = "\u{a0}";

/// Decides which matched nodes take part in joined text extraction.
///
/// The NBI detail pages pad layout-only elements with `&nbsp;`, so skipping
/// nodes that contain one drops most of the boilerplate. This is a property
/// of that site's markup, not of HTML in general, which is why it is a value
/// rather than hard-coded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeFilter {
    /// Keep every node.
    #[default]
    KeepAll,

    /// Drop nodes whose text contains the marker.
    SkipContaining(String),
}

impl NodeFilter {
    /// Filter that drops nodes containing a non-breaking space.
    pub fn skip_nbsp() -> Self {
        Self::SkipContaining(NBSP.to_string())
    }

    /// Build a filter from a marker string; an empty marker keeps everything.
    pub fn from_marker(marker: &str) -> Self {
        if marker.is_empty() {
            Self::KeepAll
        } else {
            Self::SkipContaining(marker.to_string())
        }
    }

    /// Whether a node with this text should be kept.
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            Self::KeepAll => true,
            Self::SkipContaining(marker) => !text.contains(marker.as_str()),
        }
    }
}
