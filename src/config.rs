use chrono::{FixedOffset, Offset, Utc};
use url::Url;
use validator::Validate;

#[derive(Deserialize, Debug, Validate)]
pub struct Config {
    supabase_url: Option<String>,
    supabase_anon_key: Option<String>,
    api_host: Option<String>,
    api_port: Option<usize>,
    #[validate(length(min = 32))]
    session_private_key: String,
    #[serde(default)]
    secure_cookies: bool,
    /// hours east of UTC used to display game times, defaults to Brasília time
    #[serde(default = "default_utc_offset")]
    display_utc_offset: i32,
    /// defaults to localhost, which shouldn't cause issues if you're using udp
    opentelemetry_endpoint: Option<String>,
}

fn default_utc_offset() -> i32 {
    -3
}

lazy_static! {
    static ref CONFIG: Config = match envy::from_env::<Config>() {
        Ok(config) => {
            match config.validate() {
                Ok(()) => config,
                Err(e) => panic!("invalid environment variable: {}", e),
            }
        }
        Err(error) => panic!("Missing or incorrect environment variable: {}", error),
    };
}

/// connection details of the hosted backend
#[derive(Debug, Clone)]
pub struct Supabase {
    pub url: Url,
    pub anon_key: String,
}

impl Config {
    /// returns the backend connection details when the integration is configured,
    /// meaning both variables are set and the url is valid
    pub fn supabase() -> Option<Supabase> {
        Config::supabase_from(
            CONFIG.supabase_url.as_deref(),
            CONFIG.supabase_anon_key.as_deref(),
        )
    }

    fn supabase_from(url: Option<&str>, anon_key: Option<&str>) -> Option<Supabase> {
        let url = url.map(str::trim).filter(|url| !url.is_empty())?;
        let anon_key = anon_key.map(str::trim).filter(|key| !key.is_empty())?;

        match Url::parse(url) {
            Ok(url) => Some(Supabase {
                url,
                anon_key: anon_key.to_string(),
            }),
            Err(e) => {
                error!("SUPABASE_URL is not a valid url: {}", e);
                None
            }
        }
    }

    pub fn api_host() -> &'static str {
        match &CONFIG.api_host {
            Some(host) => host.as_ref(),
            None => "localhost",
        }
    }

    pub fn api_port() -> usize {
        CONFIG.api_port.unwrap_or(8080)
    }

    pub fn session_private_key() -> &'static str {
        CONFIG.session_private_key.as_ref()
    }

    pub fn secure_cookies() -> bool {
        CONFIG.secure_cookies
    }

    pub fn display_offset() -> FixedOffset {
        display_offset_from(CONFIG.display_utc_offset)
    }

    pub fn opentelemetry_endpoint() -> &'static str {
        match &CONFIG.opentelemetry_endpoint {
            Some(endpoint) => endpoint.as_ref(),
            None => "127.0.0.1:6831",
        }
    }
}

fn display_offset_from(hours: i32) -> FixedOffset {
    match FixedOffset::east_opt(hours * 3600) {
        Some(offset) if (-12..=14).contains(&hours) => offset,
        _ => {
            warn!("DISPLAY_UTC_OFFSET {} is out of range, using UTC", hours);
            Utc.fix()
        }
    }
}
