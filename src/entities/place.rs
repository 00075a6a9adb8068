use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

const IMAGE_SEED_BASE: &str = "https://picsum.photos/seed";

// Everything except the characters a URI component leaves untouched.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub description: String,
    pub image_url: String,
    pub maps_uri: String,
    pub maps_title: String,
}

impl Place {
    /// Builds a place whose identity is its map link.
    pub fn new(
        name: String,
        category: String,
        rating: f64,
        description: String,
        maps_uri: String,
        maps_title: String,
    ) -> Self {
        Self {
            id: maps_uri.clone(),
            image_url: image_url(&name),
            name,
            category,
            rating,
            description,
            maps_uri,
            maps_title,
        }
    }
}

/// Placeholder image address seeded by the place name.
pub fn image_url(name: &str) -> String {
    format!(
        "{}/{}/800/600",
        IMAGE_SEED_BASE,
        utf8_percent_encode(name, COMPONENT)
    )
}

#[test]
fn image_url_is_seeded_by_name() {
    assert_eq!(
        image_url("Kuakata Beach"),
        "https://picsum.photos/seed/Kuakata%20Beach/800/600"
    );
    assert_eq!(
        image_url("Fatrar Char (Forest)"),
        "https://picsum.photos/seed/Fatrar%20Char%20(Forest)/800/600"
    );
    assert_eq!(image_url("Sea/Shore"), image_url("Sea/Shore"));
    assert!(image_url("Sea/Shore").contains("Sea%2FShore"));
}

#[test]
fn place_identity_is_maps_uri() {
    let place = Place::new(
        "Kuakata Beach".into(),
        "Beach".into(),
        4.8,
        "A long sandy shoreline.".into(),
        "https://maps.google.com/?cid=1".into(),
        "Kuakata Sea Beach".into(),
    );

    assert_eq!(place.id, "https://maps.google.com/?cid=1");
    assert_eq!(place.maps_uri, place.id);
    assert_eq!(place.image_url, image_url("Kuakata Beach"));

    let json = serde_json::to_value(&place).unwrap();
    assert_eq!(json["imageUrl"], place.image_url.as_str());
    assert_eq!(json["mapsTitle"], "Kuakata Sea Beach");
}
