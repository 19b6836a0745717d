//! The user-card rendering contract as a pure view-node builder.
//!
//! DESIGN
//! ======
//! This module is the testable core: given a user record, an avatar renderer,
//! and a style registry, it produces the card's view tree with no side
//! effects. The Leptos components in [`crate::components`] express the same
//! structure for the web UI and share the helpers here so the two surfaces
//! cannot drift.
//!
//! Structure: `figure` (class + test id) → [avatar sub-tree, `figcaption`
//! holding the name and, for protected users only, the email fragment].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::model::{AvatarRef, User, UserVariant};
use crate::style::StyleRegistry;
use crate::view::{Element, ViewNode};

/// Namespace prefix of the container's `data-testid` attribute.
pub const TEST_ID_PREFIX: &str = "user-card:";

/// Style registry key for the container class.
pub const CONTAINER_STYLE_KEY: &str = "user-card";

/// Renders the image/initials region of the card.
///
/// The card invokes this with exactly the user's name (as a fallback label)
/// and the opaque avatar reference, both unmodified. Implementations are
/// free to interpret the reference however they like; the card treats the
/// returned node as a black box.
pub trait RenderAvatar {
    /// Produce the avatar sub-tree for the given label and reference.
    fn render(&self, label: &str, avatar: &AvatarRef) -> ViewNode;
}

/// Test id for a card rendering the given name: `"user-card:" + name`.
///
/// Deterministic and reproducible; external automation relies on it to
/// locate a rendered instance.
#[must_use]
pub fn test_id(name: &str) -> String {
    format!("{TEST_ID_PREFIX}{name}")
}

/// Caption fragment carrying the email, for protected users only.
///
/// Returns `Some(" <email>")` when the variant is protected (a missing email
/// renders empty inside the brackets) and `None` for every other variant,
/// so the email value never reaches the output for non-protected users.
#[must_use]
pub fn email_fragment(user: &User) -> Option<String> {
    match user.variant {
        UserVariant::Protected => {
            Some(format!(" <{}>", user.email.as_deref().unwrap_or_default()))
        }
        UserVariant::Standard => None,
    }
}

/// Render the card for a user record.
#[must_use]
pub fn user_card(user: &User, avatar: &dyn RenderAvatar, styles: &StyleRegistry) -> ViewNode {
    let mut caption = Element::new("figcaption").text(user.name.clone());
    if let Some(fragment) = email_fragment(user) {
        caption = caption.text(fragment);
    }

    Element::new("figure")
        .attr("class", styles.class_for(CONTAINER_STYLE_KEY))
        .attr("data-testid", test_id(&user.name))
        .child(avatar.render(&user.name, &user.avatar))
        .child(caption)
        .into()
}
