//! User card: avatar plus a caption with the name and, for protected users,
//! the email.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::model::User;
use crate::render::{self, CONTAINER_STYLE_KEY};
use crate::style::StyleRegistry;

/// Card showing a user's avatar and name.
///
/// Protected users additionally get their email in the caption, formatted as
/// `name <email>`. The container carries a deterministic
/// `data-testid="user-card:{name}"` for automated tooling, and its class is
/// resolved through the [`StyleRegistry`] context when one is provided.
#[component]
pub fn UserCard(user: User) -> impl IntoView {
    let styles = use_context::<StyleRegistry>().unwrap_or_default();
    let class = styles.class_for(CONTAINER_STYLE_KEY).to_owned();
    let testid = render::test_id(&user.name);
    let email = render::email_fragment(&user);

    view! {
        <figure class=class attr:data-testid=testid>
            <Avatar label=user.name.clone() avatar=user.avatar/>
            <figcaption>{user.name}{email}</figcaption>
        </figure>
    }
}
