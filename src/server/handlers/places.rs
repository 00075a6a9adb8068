use axum::extract::{Extension, Json};

use crate::entities::{Category, Place};
use crate::server::SharedSession;

pub async fn list(Extension(session): Extension<SharedSession>) -> Json<Vec<Place>> {
    let state = session.snapshot().await;
    let places: Vec<Place> = state.visible_places().into_iter().cloned().collect();

    places.into()
}

pub async fn categories() -> Json<Vec<&'static str>> {
    let labels: Vec<&'static str> = Category::ALL.iter().map(Category::label).collect();

    labels.into()
}
