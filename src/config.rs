use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::entities::Coordinates;
use crate::error::{invalid_config_error, Error};

const DEFAULT_GEMINI_API_BASE: &str = "generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_DESTINATION: &str = "Kuakata, Bangladesh";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct GeminiSettings {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

impl GeminiSettings {
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            with_scheme(&self.api_base),
            self.model
        )
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini: GeminiSettings,
    pub destination: String,
    pub position: Option<Coordinates>,
    pub geolocation_api_base: Option<String>,
    pub bind_addr: SocketAddr,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| invalid_config_error("GEMINI_API_KEY"))?;

        let gemini = GeminiSettings {
            api_base: lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.into()),
            api_key,
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into()),
        };

        let latitude = parse_var::<f64, _>(&lookup, "GUIDE_LATITUDE")?;
        let longitude = parse_var::<f64, _>(&lookup, "GUIDE_LONGITUDE")?;
        let position = match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => {
                let coordinates = Coordinates::new(latitude, longitude);
                if !coordinates.is_valid() {
                    return Err(invalid_config_error("GUIDE_LATITUDE/GUIDE_LONGITUDE"));
                }
                Some(coordinates)
            }
            (None, None) => None,
            _ => return Err(invalid_config_error("GUIDE_LATITUDE/GUIDE_LONGITUDE")),
        };

        let bind_addr = match parse_var::<SocketAddr, _>(&lookup, "GUIDE_BIND_ADDR")? {
            Some(addr) => addr,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| invalid_config_error("GUIDE_BIND_ADDR"))?,
        };

        let timeout_secs =
            parse_var::<u64, _>(&lookup, "HTTP_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            gemini,
            destination: lookup("GUIDE_DESTINATION").unwrap_or_else(|| DEFAULT_DESTINATION.into()),
            position,
            geolocation_api_base: lookup("GEOLOCATION_API_BASE").filter(|base| !base.is_empty()),
            bind_addr,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, Error>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| invalid_config_error(key)),
        None => Ok(None),
    }
}

/// Bare hosts get `https://`; explicit schemes are kept.
pub fn with_scheme(base: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.starts_with("http://") || base.starts_with("https://") {
        base.into()
    } else {
        format!("https://{}", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "secret")])).unwrap();

        assert_eq!(config.gemini.api_key, "secret");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(
            config.gemini.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(config.destination, "Kuakata, Bangladesh");
        assert_eq!(config.position, None);
        assert_eq!(config.geolocation_api_base, None);
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn api_key_is_required() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.code, 7);

        let err = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "")])).unwrap_err();
        assert_eq!(err.code, 7);
    }

    #[test]
    fn fixed_position() {
        let config = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "secret"),
            ("GUIDE_LATITUDE", "21.81"),
            ("GUIDE_LONGITUDE", " 90.12 "),
        ]))
        .unwrap();

        assert_eq!(config.position, Some(Coordinates::new(21.81, 90.12)));
    }

    #[test]
    fn half_a_position_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "secret"),
            ("GUIDE_LATITUDE", "21.81"),
        ]))
        .unwrap_err();

        assert_eq!(err.code, 7);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "secret"),
            ("HTTP_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();

        assert!(err.message.contains("HTTP_TIMEOUT_SECS"));
    }

    #[test]
    fn scheme_handling() {
        assert_eq!(with_scheme("example.com/"), "https://example.com");
        assert_eq!(with_scheme("http://127.0.0.1:8080"), "http://127.0.0.1:8080");
    }
}
