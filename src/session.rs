use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    api::DynAPI,
    error::{unknown_place_error, Error},
    external::geolocation::{resolve_location, DynLocationProvider},
    state::{reduce, Action, AppState},
};

/// Owns the single `AppState`; every change goes through `dispatch`.
#[derive(Default)]
pub struct Session {
    state: RwLock<AppState>,
}

pub type SharedSession = Arc<Session>;

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip(self))]
    pub async fn dispatch(&self, action: Action) -> AppState {
        let mut state = self.state.write().await;
        let next = reduce(state.clone(), action);
        *state = next.clone();
        next
    }

    /// Selects a listed place. The lookup and the change happen under one
    /// write lock, so an unknown id never reports success.
    #[tracing::instrument(skip(self))]
    pub async fn select(&self, id: String) -> Result<AppState, Error> {
        let mut state = self.state.write().await;
        if state.find_place(&id).is_none() {
            return Err(unknown_place_error());
        }

        let next = reduce(state.clone(), Action::Select(Some(id)));
        *state = next.clone();
        Ok(next)
    }

    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }
}

/// Locates the user once, then generates the guide once for that position.
#[tracing::instrument(skip_all)]
pub async fn bootstrap(api: DynAPI, provider: DynLocationProvider, session: SharedSession) {
    let location = resolve_location(provider.as_ref()).await;

    session
        .dispatch(Action::LocationResolved {
            advisory: location.advisory,
        })
        .await;
    session.dispatch(Action::LoadStarted).await;

    let action = match api.fetch_places(location.coordinates).await {
        Ok(places) => Action::LoadSucceeded(places),
        Err(err) => Action::LoadFailed(err.message),
    };

    session.dispatch(action).await;
}
