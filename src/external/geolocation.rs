use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    config::with_scheme,
    entities::Coordinates,
    error::{location_unavailable_error, upstream_error, Error, LOCATION_ADVISORY_MESSAGE},
};

#[async_trait]
pub trait LocationProvider {
    async fn current_position(&self) -> Result<Coordinates, Error>;
}

pub type DynLocationProvider = Arc<dyn LocationProvider + Send + Sync>;

/// A position configured up front.
pub struct FixedPosition(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates, Error> {
        Ok(self.0)
    }
}

/// Used when nothing can tell us where the device is.
pub struct Unavailable;

#[async_trait]
impl LocationProvider for Unavailable {
    async fn current_position(&self) -> Result<Coordinates, Error> {
        Err(location_unavailable_error())
    }
}

/// Coarse position from the caller's public IP.
pub struct IpGeolocation {
    client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct IpLookup {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl IpGeolocation {
    pub fn new(client: reqwest::Client, api_base: &str) -> Self {
        Self {
            client,
            api_base: with_scheme(api_base),
        }
    }
}

#[async_trait]
impl LocationProvider for IpGeolocation {
    #[tracing::instrument(name = "IpGeolocation::current_position", skip(self))]
    async fn current_position(&self) -> Result<Coordinates, Error> {
        let url = format!("{}/json", self.api_base);

        let res = self.client.get(url).send().await?;

        if res.status().as_u16() != 200 {
            return Err(upstream_error());
        }

        let data: IpLookup = res.json().await?;

        match (data.status.as_str(), data.lat, data.lon) {
            ("success", Some(latitude), Some(longitude)) => {
                let coordinates = Coordinates::new(latitude, longitude);
                if coordinates.is_valid() {
                    Ok(coordinates)
                } else {
                    Err(location_unavailable_error())
                }
            }
            _ => Err(location_unavailable_error()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedLocation {
    pub coordinates: Coordinates,
    pub advisory: Option<String>,
}

/// Asks the provider once. Any failure falls back to `Coordinates::FALLBACK`
/// with an advisory for the user.
#[tracing::instrument(skip(provider))]
pub async fn resolve_location(provider: &(dyn LocationProvider + Send + Sync)) -> ResolvedLocation {
    match provider.current_position().await {
        Ok(coordinates) => ResolvedLocation {
            coordinates,
            advisory: None,
        },
        Err(err) => {
            tracing::error!("geolocation error: {}", err);
            ResolvedLocation {
                coordinates: Coordinates::FALLBACK,
                advisory: Some(LOCATION_ADVISORY_MESSAGE.into()),
            }
        }
    }
}
