use axum::extract::{Extension, Json};

use crate::server::SharedSession;
use crate::view::{render, Page};

pub async fn find(Extension(session): Extension<SharedSession>) -> Json<Page> {
    let state = session.snapshot().await;

    render(&state).into()
}
