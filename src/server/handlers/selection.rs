use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::server::SharedSession;
use crate::state::Action;
use crate::view::{render, Page};

#[derive(Serialize, Deserialize)]
pub struct UpdateParams {
    id: String,
}

pub async fn update(
    Extension(session): Extension<SharedSession>,
    Json(params): Json<UpdateParams>,
) -> Result<Json<Page>, Error> {
    let state = session.select(params.id).await?;

    Ok(render(&state).into())
}

pub async fn close(Extension(session): Extension<SharedSession>) -> Json<Page> {
    let state = session.dispatch(Action::Select(None)).await;

    render(&state).into()
}
