use super::Engine;

use async_trait::async_trait;

use crate::{
    api::GuideAPI,
    entities::{Coordinates, Place},
    error::{generation_failed_error, Error},
    external::gemini,
    guide::{guide_prompt, parse_places},
};

#[async_trait]
impl GuideAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn fetch_places(&self, location: Coordinates) -> Result<Vec<Place>, Error> {
        let prompt = guide_prompt(&self.destination);

        let response = gemini::generate_guide(&self.client, &self.gemini, &prompt, location)
            .await
            .map_err(|err| {
                tracing::error!("error fetching places: {}", err);
                generation_failed_error()
            })?;

        let places = parse_places(&response.text, &response.grounding);

        tracing::info!(places = places.len(), "guide generated");

        Ok(places)
    }
}
