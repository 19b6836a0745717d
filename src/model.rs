//! View model for the user card: the user record and its variant tag.
//!
//! DESIGN
//! ======
//! These types mirror the upstream payload shape so serde can consume it
//! unchanged (including the GraphQL-style `__typename` tag). The card never
//! mutates a `User`; it borrows one read-only for a single render. The
//! variant tag is a closed enum so the protected-only email rule is enforced
//! by exhaustive matching rather than convention.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A user record as supplied by the data-resolution layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name, also the key for the card's test id. Missing on the
    /// wire deserializes to the empty string.
    #[serde(default)]
    pub name: String,
    /// Opaque avatar reference, forwarded to the avatar renderer unmodified.
    #[serde(default)]
    pub avatar: AvatarRef,
    /// Privacy variant. Accepts the upstream `__typename` field name.
    #[serde(default, alias = "__typename")]
    pub variant: UserVariant,
    /// Email address; only meaningful (and only rendered) for
    /// [`UserVariant::Protected`] users.
    #[serde(default)]
    pub email: Option<String>,
}

/// Privacy variant of a user record.
///
/// Wire tags are `"User"` and `"ProtectedUser"`. Any other tag collapses to
/// `Standard` on deserialization: when in doubt the card withholds the email
/// rather than guessing a privileged rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum UserVariant {
    /// Regular user; the caption shows the name only.
    #[default]
    #[serde(rename = "User")]
    Standard,
    /// Protected user; the caption additionally shows the email.
    #[serde(rename = "ProtectedUser")]
    Protected,
}

impl UserVariant {
    /// Map a wire tag to a variant, treating unknown tags as `Standard`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ProtectedUser" => Self::Protected,
            "User" => Self::Standard,
            other => {
                log::warn!("unknown user variant tag {other:?}, treating as standard");
                Self::Standard
            }
        }
    }
}

impl<'de> Deserialize<'de> for UserVariant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Opaque avatar reference.
///
/// The card passes this through to the avatar renderer without looking
/// inside; its internal shape is the renderer's concern. Typed accessors
/// exist for the default renderer shipped in [`crate::components::avatar`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarRef(serde_json::Value);

impl AvatarRef {
    /// Wrap a raw JSON value as an avatar reference.
    #[must_use]
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Image URL, if the reference carries one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(|v| v.as_str())
    }

    /// The underlying JSON value.
    #[must_use]
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}
