use serde::Serialize;

use crate::entities::{Category, Place};
use crate::state::AppState;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPill {
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rating: String,
    pub image_url: String,
    pub is_selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rating: String,
    pub description: String,
    pub image_url: String,
    pub maps_uri: String,
    pub maps_title: String,
    pub is_favorite: bool,
    pub favorite_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Content {
    Loading,
    Error { message: String },
    Empty { message: String },
    Cards { cards: Vec<Card> },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub filters: Vec<FilterPill>,
    pub advisory: Option<String>,
    pub content: Content,
    pub detail: Option<Detail>,
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

pub fn favorite_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "Favorite"
    } else {
        "Add to Favorites"
    }
}

fn card(state: &AppState, place: &Place) -> Card {
    Card {
        id: place.id.clone(),
        name: place.name.clone(),
        category: place.category.clone(),
        rating: format_rating(place.rating),
        image_url: place.image_url.clone(),
        is_selected: state.is_selected(&place.id),
    }
}

fn detail(state: &AppState, place: &Place) -> Detail {
    let is_favorite = state.is_favorite(&place.id);

    Detail {
        id: place.id.clone(),
        name: place.name.clone(),
        category: place.category.clone(),
        rating: format_rating(place.rating),
        description: place.description.clone(),
        image_url: place.image_url.clone(),
        maps_uri: place.maps_uri.clone(),
        maps_title: place.maps_title.clone(),
        is_favorite,
        favorite_label: favorite_label(is_favorite),
    }
}

/// Projects the state into what the page shows.
pub fn render(state: &AppState) -> Page {
    let filters = Category::ALL
        .iter()
        .map(|category| FilterPill {
            label: category.label(),
            active: *category == state.filter,
        })
        .collect();

    let content = if state.loading {
        Content::Loading
    } else if let Some(message) = &state.error {
        Content::Error {
            message: message.clone(),
        }
    } else {
        let visible = state.visible_places();
        if visible.is_empty() {
            Content::Empty {
                message: format!("No places found for \"{}\".", state.filter),
            }
        } else {
            Content::Cards {
                cards: visible.into_iter().map(|place| card(state, place)).collect(),
            }
        }
    };

    Page {
        filters,
        advisory: state.advisory.clone(),
        content,
        detail: state.selected.as_ref().map(|place| detail(state, place)),
    }
}
