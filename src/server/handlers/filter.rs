use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::Category;
use crate::error::Error;
use crate::server::SharedSession;
use crate::state::Action;
use crate::view::{render, Page};

#[derive(Serialize, Deserialize)]
pub struct UpdateParams {
    category: String,
}

pub async fn update(
    Extension(session): Extension<SharedSession>,
    Json(params): Json<UpdateParams>,
) -> Result<Json<Page>, Error> {
    let category: Category = params.category.parse()?;
    let state = session.dispatch(Action::SetFilter(category)).await;

    Ok(render(&state).into())
}
