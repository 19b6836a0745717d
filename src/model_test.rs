use super::*;
use serde_json::json;

// =============================================================
// User deserialization
// =============================================================

#[test]
fn user_deserializes_from_upstream_shape() {
    let user: User = serde_json::from_value(json!({
        "__typename": "ProtectedUser",
        "name": "Grace Hopper",
        "email": "grace@navy.mil",
        "avatar": { "url": "/avatars/grace.png" },
    }))
    .unwrap();

    assert_eq!(user.name, "Grace Hopper");
    assert_eq!(user.variant, UserVariant::Protected);
    assert_eq!(user.email.as_deref(), Some("grace@navy.mil"));
    assert_eq!(user.avatar.url(), Some("/avatars/grace.png"));
}

#[test]
fn user_deserializes_with_variant_field_name() {
    let user: User = serde_json::from_value(json!({
        "variant": "User",
        "name": "Ada Lovelace",
    }))
    .unwrap();

    assert_eq!(user.variant, UserVariant::Standard);
    assert!(user.email.is_none());
}

#[test]
fn missing_fields_default_rather_than_fail() {
    let user: User = serde_json::from_value(json!({})).unwrap();
    assert_eq!(user.name, "");
    assert_eq!(user.variant, UserVariant::Standard);
    assert!(user.email.is_none());
    assert_eq!(user.avatar.url(), None);
}

// =============================================================
// Variant tag fail-safe
// =============================================================

#[test]
fn known_tags_map_to_variants() {
    assert_eq!(UserVariant::from_tag("User"), UserVariant::Standard);
    assert_eq!(UserVariant::from_tag("ProtectedUser"), UserVariant::Protected);
}

#[test]
fn unknown_tag_collapses_to_standard() {
    assert_eq!(UserVariant::from_tag("SuperUser"), UserVariant::Standard);
    assert_eq!(UserVariant::from_tag(""), UserVariant::Standard);
}

#[test]
fn unknown_tag_in_payload_withholds_email_variant() {
    let user: User = serde_json::from_value(json!({
        "__typename": "AdminUser",
        "name": "Anon",
        "email": "leak@x.com",
    }))
    .unwrap();
    assert_eq!(user.variant, UserVariant::Standard);
}

// =============================================================
// AvatarRef accessors
// =============================================================

#[test]
fn avatar_url_reads_string_url() {
    let avatar = AvatarRef::new(json!({ "url": "/a.png", "size": 64 }));
    assert_eq!(avatar.url(), Some("/a.png"));
}

#[test]
fn avatar_url_absent_or_non_string_is_none() {
    assert_eq!(AvatarRef::new(json!({})).url(), None);
    assert_eq!(AvatarRef::new(json!({ "url": 7 })).url(), None);
    assert_eq!(AvatarRef::default().url(), None);
}

#[test]
fn avatar_ref_round_trips_opaquely() {
    let value = json!({ "url": "/a.png", "palette": ["#aaa", "#bbb"] });
    let avatar = AvatarRef::new(value.clone());
    let encoded = serde_json::to_value(&avatar).unwrap();
    assert_eq!(encoded, value);
    assert_eq!(avatar.as_value(), &value);
}
