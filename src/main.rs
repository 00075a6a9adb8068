use std::sync::Arc;

use kuakata_guide::api::DynAPI;
use kuakata_guide::config::Config;
use kuakata_guide::engine::{http_client, Engine};
use kuakata_guide::error::Error;
use kuakata_guide::external::geolocation::{
    DynLocationProvider, FixedPosition, IpGeolocation, Unavailable,
};
use kuakata_guide::server::serve;
use kuakata_guide::session::{bootstrap, Session};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let client = http_client(&config)?;

    let provider: DynLocationProvider = match (config.position, &config.geolocation_api_base) {
        (Some(position), _) => Arc::new(FixedPosition(position)),
        (None, Some(api_base)) => Arc::new(IpGeolocation::new(client.clone(), api_base)),
        (None, None) => Arc::new(Unavailable),
    };

    let api = Arc::new(Engine::new(&config, client)) as DynAPI;
    let session = Arc::new(Session::new());

    tokio::spawn(bootstrap(api, provider, session.clone()));

    serve(session, config.bind_addr).await
}
