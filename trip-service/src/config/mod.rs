use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub ocr: OcrSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    /// SQLite connection URL, e.g. `sqlite://data/trips.sqlite`.
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Insert the demo users and sample trips into an empty database at
    /// startup.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OcrSettings {
    /// Latency of the simulated bill scan.
    #[serde(default = "default_scan_delay_ms")]
    pub scan_delay_ms: u64,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            scan_delay_ms: default_scan_delay_ms(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_scan_delay_ms() -> u64 {
    2000
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    // Check if we're already in trip-service directory or need to navigate to it
    let configuration_directory = if base_path.ends_with("trip-service") {
        base_path.join("config")
    } else {
        base_path.join("trip-service").join("config")
    };

    let settings = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 5001_i64)?
        .set_default("database.url", "sqlite://trips.sqlite")?
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
