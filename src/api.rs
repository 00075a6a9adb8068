use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Coordinates, Place};
use crate::error::Error;

#[async_trait]
pub trait GuideAPI {
    /// Generates a fresh batch of places near `location`.
    async fn fetch_places(&self, location: Coordinates) -> Result<Vec<Place>, Error>;
}

pub type DynAPI = Arc<dyn GuideAPI + Send + Sync>;
