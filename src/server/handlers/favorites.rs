use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::server::SharedSession;
use crate::state::Action;

#[derive(Serialize, Deserialize)]
pub struct ToggleParams {
    id: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    id: String,
    is_favorite: bool,
}

pub async fn toggle(
    Extension(session): Extension<SharedSession>,
    Json(params): Json<ToggleParams>,
) -> Json<FavoriteStatus> {
    let state = session
        .dispatch(Action::ToggleFavorite(params.id.clone()))
        .await;

    FavoriteStatus {
        is_favorite: state.is_favorite(&params.id),
        id: params.id,
    }
    .into()
}

pub async fn list(Extension(session): Extension<SharedSession>) -> Json<Vec<String>> {
    let state = session.snapshot().await;
    let mut ids: Vec<String> = state.favorites.into_iter().collect();
    ids.sort();

    ids.into()
}
