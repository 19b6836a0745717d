//! Avatar rendering: an image when the reference carries a URL, an initials
//! badge otherwise.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use leptos::prelude::*;

use crate::model::AvatarRef;
use crate::render::RenderAvatar;
use crate::view::{Element, ViewNode};

/// Up to two uppercase initials derived from a display name.
///
/// An empty or whitespace-only name yields an empty string.
#[must_use]
pub fn initials(label: &str) -> String {
    label
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Default avatar renderer for the view-node pipeline.
///
/// Mirrors the [`Avatar`] component: `img` with the label as alt text when
/// the reference carries a URL, otherwise an initials badge.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicAvatar;

impl RenderAvatar for BasicAvatar {
    fn render(&self, label: &str, avatar: &AvatarRef) -> ViewNode {
        let inner = match avatar.url() {
            Some(url) => Element::new("img")
                .attr("class", "avatar__image")
                .attr("src", url)
                .attr("alt", label),
            None => Element::new("span")
                .attr("class", "avatar__initials")
                .text(initials(label)),
        };
        Element::new("span").attr("class", "avatar").child(inner).into()
    }
}

/// Avatar component: image or initials badge for a user.
#[component]
pub fn Avatar(label: String, avatar: AvatarRef) -> impl IntoView {
    match avatar.url() {
        Some(url) => {
            let src = url.to_owned();
            view! {
                <span class="avatar">
                    <img class="avatar__image" src=src alt=label/>
                </span>
            }
            .into_any()
        }
        None => view! {
            <span class="avatar">
                <span class="avatar__initials">{initials(&label)}</span>
            </span>
        }
        .into_any(),
    }
}
