use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::server::SharedSession;
use crate::state::{Action, Key};
use crate::view::{render, Page};

#[derive(Serialize, Deserialize)]
pub struct PressParams {
    key: Key,
}

pub async fn press(
    Extension(session): Extension<SharedSession>,
    Json(params): Json<PressParams>,
) -> Json<Page> {
    let state = session.dispatch(Action::KeyPressed(params.key)).await;

    render(&state).into()
}
