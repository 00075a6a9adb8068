use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entities::{Category, Place};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    LocationResolved { advisory: Option<String> },
    LoadStarted,
    LoadSucceeded(Vec<Place>),
    LoadFailed(String),
    SetFilter(Category),
    Select(Option<String>),
    KeyPressed(Key),
    ToggleFavorite(String),
}

/// Everything the gallery shows. Changed only through `reduce`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub places: Vec<Place>,
    pub loading: bool,
    pub error: Option<String>,
    pub advisory: Option<String>,
    pub filter: Category,
    pub selected: Option<Place>,
    pub favorites: HashSet<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            places: vec![],
            loading: true,
            error: None,
            advisory: None,
            filter: Category::All,
            selected: None,
            favorites: HashSet::new(),
        }
    }
}

impl AppState {
    pub fn visible_places(&self) -> Vec<&Place> {
        self.places
            .iter()
            .filter(|place| self.filter.matches(&place.category))
            .collect()
    }

    pub fn find_place(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().map_or(false, |place| place.id == id)
    }
}

pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::LocationResolved { advisory } => {
            state.advisory = advisory;
        }
        Action::LoadStarted => {
            state.loading = true;
            state.error = None;
        }
        Action::LoadSucceeded(places) => {
            state.loading = false;
            state.error = None;
            state.places = places;

            let still_listed = state
                .selected
                .as_ref()
                .map_or(false, |selected| state.places.iter().any(|p| p.id == selected.id));
            if !still_listed {
                state.selected = None;
            }
        }
        Action::LoadFailed(message) => {
            state.loading = false;
            state.places = vec![];
            state.selected = None;
            state.error = Some(message);
        }
        Action::SetFilter(category) => {
            state.filter = category;
        }
        Action::Select(None) | Action::KeyPressed(Key::Escape) => {
            state.selected = None;
        }
        Action::Select(Some(id)) => {
            if let Some(place) = state.find_place(&id).cloned() {
                state.selected = Some(place);
            }
        }
        Action::KeyPressed(Key::Other) => {}
        Action::ToggleFavorite(id) => {
            if !state.favorites.remove(&id) {
                state.favorites.insert(id);
            }
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str, category: &str) -> Place {
        Place::new(
            format!("Place {}", id),
            category.into(),
            4.0,
            "Worth a visit.".into(),
            id.into(),
            format!("Place {}", id),
        )
    }

    fn loaded() -> AppState {
        let places = vec![
            place("L1", "Beach"),
            place("L2", "Park"),
            place("L3", "Beach"),
            place("L4", "Lighthouse"),
        ];

        reduce(AppState::default(), Action::LoadSucceeded(places))
    }

    fn ids(places: &[&Place]) -> Vec<String> {
        places.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn starts_loading() {
        let state = AppState::default();

        assert!(state.loading);
        assert_eq!(state.filter, Category::All);
        assert!(state.places.is_empty());
    }

    #[test]
    fn load_success_clears_loading_and_error() {
        let state = reduce(AppState::default(), Action::LoadStarted);
        let state = reduce(state, Action::LoadSucceeded(vec![place("L1", "Beach")]));

        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.places.len(), 1);
    }

    #[test]
    fn load_failure_shows_only_the_error() {
        let state = reduce(loaded(), Action::LoadStarted);
        let state = reduce(state, Action::LoadFailed("boom".into()));

        assert!(!state.loading);
        assert!(state.places.is_empty());
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn new_batch_replaces_old() {
        let state = reduce(loaded(), Action::Select(Some("L2".into())));
        let state = reduce(state, Action::LoadSucceeded(vec![place("L9", "Temple")]));

        assert_eq!(ids(&state.visible_places()), ["L9"]);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn advisory_survives_load() {
        let state = reduce(
            AppState::default(),
            Action::LocationResolved {
                advisory: Some("fallback".into()),
            },
        );
        let state = reduce(state, Action::LoadStarted);
        let state = reduce(state, Action::LoadSucceeded(vec![]));

        assert_eq!(state.advisory.as_deref(), Some("fallback"));
    }

    #[test]
    fn filter_then_all_restores_list() {
        let state = loaded();
        let all = ids(&state.visible_places());

        let state = reduce(state, Action::SetFilter(Category::Beach));
        assert_eq!(ids(&state.visible_places()), ["L1", "L3"]);

        let state = reduce(state, Action::SetFilter(Category::Temple));
        assert!(state.visible_places().is_empty());

        let state = reduce(state, Action::SetFilter(Category::All));
        assert_eq!(ids(&state.visible_places()), all);
        assert_eq!(all, ["L1", "L2", "L3", "L4"]);
    }

    #[test]
    fn selection() {
        let state = reduce(loaded(), Action::Select(Some("L3".into())));
        assert!(state.is_selected("L3"));
        assert!(!state.is_selected("L1"));

        let state = reduce(state, Action::Select(Some("L1".into())));
        assert!(state.is_selected("L1"));
        assert!(!state.is_selected("L3"));

        let state = reduce(state, Action::Select(Some("missing".into())));
        assert!(state.is_selected("L1"));

        let state = reduce(state, Action::Select(None));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn escape_closes_detail() {
        let state = reduce(loaded(), Action::Select(Some("L2".into())));

        let state = reduce(state, Action::KeyPressed(Key::Other));
        assert!(state.is_selected("L2"));

        let state = reduce(state, Action::KeyPressed(Key::Escape));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn favorite_toggle_round_trip() {
        for id in ["L1", "not-listed"] {
            let before = loaded();

            let state = reduce(before.clone(), Action::ToggleFavorite(id.into()));
            assert!(state.is_favorite(id));

            let state = reduce(state, Action::ToggleFavorite(id.into()));
            assert!(!state.is_favorite(id));
            assert_eq!(state.favorites, before.favorites);
        }
    }

    #[test]
    fn key_names() {
        let key: Key = serde_json::from_str("\"Escape\"").unwrap();
        assert_eq!(key, Key::Escape);

        let key: Key = serde_json::from_str("\"Enter\"").unwrap();
        assert_eq!(key, Key::Other);
    }
}
