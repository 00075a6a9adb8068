mod handlers;

use std::net::SocketAddr;

use axum::{
    extract::Extension,
    routing::{get, post, put},
    Router,
};

pub use crate::session::SharedSession;

use crate::error::{unexpected_error, Error};
use crate::server::handlers::{favorites, filter, keys, page, places, selection};

pub fn router(session: SharedSession) -> Router {
    Router::new()
        .route("/page", get(page::find))
        .route("/places", get(places::list))
        .route("/categories", get(places::categories))
        .route("/filter", put(filter::update))
        .route(
            "/selection",
            put(selection::update).delete(selection::close),
        )
        .route("/keys", post(keys::press))
        .route("/favorites", get(favorites::list))
        .route("/favorites/toggle", post(favorites::toggle))
        .layer(Extension(session))
}

pub async fn serve(session: SharedSession, addr: SocketAddr) -> Result<(), Error> {
    let app = router(session);

    let server = axum::Server::try_bind(&addr).map_err(|err| {
        tracing::error!("failed to bind {}: {}", addr, err);
        unexpected_error()
    })?;

    tracing::info!("listening on {}", addr);

    server
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            unexpected_error()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Place;
    use crate::session::Session;
    use crate::state::Action;
    use serde_json::{json, Value};
    use std::sync::Arc;

    async fn spawn_app() -> (String, SharedSession) {
        let session = Arc::new(Session::new());
        session
            .dispatch(Action::LoadSucceeded(vec![
                Place::new(
                    "Kuakata Beach".into(),
                    "Beach".into(),
                    4.8,
                    "A long sandy shoreline.".into(),
                    "https://maps.example/1".into(),
                    "Kuakata Sea Beach".into(),
                ),
                Place::new(
                    "Gangamati Forest".into(),
                    "Park".into(),
                    4.5,
                    "A dense mangrove reserve.".into(),
                    "https://maps.example/2".into(),
                    "Gangamati".into(),
                ),
            ]))
            .await;

        let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap())
            .serve(router(session.clone()).into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);

        (format!("http://{}", addr), session)
    }

    #[tokio::test]
    async fn page_and_filter() {
        let (base, _) = spawn_app().await;
        let client = reqwest::Client::new();

        let page: Value = client
            .get(format!("{}/page", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(page["content"]["kind"], "cards");
        assert_eq!(page["content"]["cards"].as_array().unwrap().len(), 2);

        let page: Value = client
            .put(format!("{}/filter", base))
            .json(&json!({ "category": "Park" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(page["content"]["cards"][0]["name"], "Gangamati Forest");

        let places: Vec<Place> = client
            .get(format!("{}/places", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(places.len(), 1);

        let res = client
            .put(format!("{}/filter", base))
            .json(&json!({ "category": "Museum" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status().as_u16(), 400);
    }

    #[tokio::test]
    async fn select_favorite_and_escape() {
        let (base, session) = spawn_app().await;
        let client = reqwest::Client::new();
        let id = "https://maps.example/1";

        let res = client
            .put(format!("{}/selection", base))
            .json(&json!({ "id": "https://maps.example/404" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status().as_u16(), 400);

        let page: Value = client
            .put(format!("{}/selection", base))
            .json(&json!({ "id": id }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(page["detail"]["favoriteLabel"], "Add to Favorites");

        let status: Value = client
            .post(format!("{}/favorites/toggle", base))
            .json(&json!({ "id": id }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(status, json!({ "id": id, "isFavorite": true }));

        let favorites: Vec<String> = client
            .get(format!("{}/favorites", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(favorites, [id]);

        let page: Value = client
            .post(format!("{}/keys", base))
            .json(&json!({ "key": "Escape" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(page["detail"].is_null());
        assert!(session.snapshot().await.is_favorite(id));
    }

    #[tokio::test]
    async fn categories_are_fixed() {
        let (base, _) = spawn_app().await;

        let labels: Vec<String> = reqwest::get(format!("{}/categories", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(labels, ["All", "Beach", "Viewpoint", "Park", "Temple", "Hotspot"]);
    }
}
