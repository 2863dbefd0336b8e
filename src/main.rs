//!
#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;

use anyhow::Error;
use dotenv::dotenv;

#[macro_use]
mod macros;

mod auth;
mod backend;
mod config;
mod errors;
mod games;
mod home;
mod navigation;
mod paths;
mod render;
mod server;
mod theme;
mod users;
mod validator;

#[actix_web::main]
async fn main() -> anyhow::Result<(), Error> {
    init().await?;

    Ok(())
}

async fn init() -> anyhow::Result<(), Error> {
    dotenv().ok();

    let (tracer, _uninstall) = opentelemetry_jaeger::new_pipeline()
        .with_service_name("peladafc")
        .with_agent_endpoint(config::Config::opentelemetry_endpoint())
        .install()
        .expect("unable to connect to opentelemetry agent");

    // Create a tracing layer with the configured tracer
    let opentelemetry = tracing_opentelemetry::layer().with_tracer(tracer);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(opentelemetry)
        .try_init()
        .expect("unable to initialize the tokio tracer");

    let backend: Option<Arc<dyn backend::Backend>> = match config::Config::supabase() {
        Some(supabase) => {
            let client = backend::Client::new(&supabase)
                .map_err(|e| anyhow::anyhow!("unable to set up the Supabase client: {}", e))?;
            Some(Arc::new(client))
        }
        None => {
            warn!("SUPABASE_URL or SUPABASE_ANON_KEY is missing, pages will ask to connect Supabase");
            None
        }
    };

    debug!("launching the actix webserver");
    server::launch(server::State::new(backend)).await?;

    Ok(())
}
