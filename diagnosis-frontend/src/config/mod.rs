use serde::Deserialize;
use service_core::config::TelemetryConfig;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub server: ServerSettings,
    pub data: DataSettings,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

/// Location and layout of the model artifact and lookup tables.
#[derive(Deserialize, Clone, Debug)]
pub struct DataSettings {
    /// Directory holding every data file below.
    pub dir: PathBuf,
    #[serde(default = "default_model_file")]
    pub model_file: String,
    /// Training table whose header defines the symptom order.
    #[serde(default = "default_training_file")]
    pub training_file: String,
    #[serde(default = "default_description_file")]
    pub description_file: String,
    #[serde(default = "default_precautions_file")]
    pub precautions_file: String,
    #[serde(default = "default_medications_file")]
    pub medications_file: String,
    #[serde(default = "default_diets_file")]
    pub diets_file: String,
    #[serde(default = "default_workout_file")]
    pub workout_file: String,
    /// Training columns holding the disease label (case-insensitive);
    /// excluded from the schema.
    #[serde(default = "default_label_columns")]
    pub label_columns: Vec<String>,
    /// Lookup table column holding the disease name (case-insensitive).
    #[serde(default = "default_key_column")]
    pub key_column: String,
    #[serde(default = "default_description_column")]
    pub description_column: String,
}

fn default_model_file() -> String {
    "model.json".to_string()
}

fn default_training_file() -> String {
    "Training.csv".to_string()
}

fn default_description_file() -> String {
    "description.csv".to_string()
}

fn default_precautions_file() -> String {
    "precautions_df.csv".to_string()
}

fn default_medications_file() -> String {
    "medications.csv".to_string()
}

fn default_diets_file() -> String {
    "diets.csv".to_string()
}

fn default_workout_file() -> String {
    "workout_df.csv".to_string()
}

fn default_label_columns() -> Vec<String> {
    vec!["Disease".to_string(), "prognosis".to_string()]
}

fn default_key_column() -> String {
    "disease".to_string()
}

fn default_description_column() -> String {
    "description".to_string()
}

impl DataSettings {
    /// Settings with every file name at its default, rooted at `dir`.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            model_file: default_model_file(),
            training_file: default_training_file(),
            description_file: default_description_file(),
            precautions_file: default_precautions_file(),
            medications_file: default_medications_file(),
            diets_file: default_diets_file(),
            workout_file: default_workout_file(),
            label_columns: default_label_columns(),
            key_column: default_key_column(),
            description_column: default_description_column(),
        }
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

impl Settings {
    /// Anchor relative data and asset directories at the crate directory so
    /// the service runs from either the workspace root or the crate itself.
    fn resolve_paths(mut self, crate_dir: &Path) -> Self {
        if self.data.dir.is_relative() {
            self.data.dir = crate_dir.join(&self.data.dir);
        }
        if self.server.static_dir.is_relative() {
            self.server.static_dir = crate_dir.join(&self.server.static_dir);
        }
        self
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    // Check if we're already in the crate directory or need to navigate to it
    let crate_dir = if base_path.ends_with("diagnosis-frontend") {
        base_path
    } else {
        base_path.join("diagnosis-frontend")
    };
    let configuration_directory = crate_dir.join("config");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings
        .try_deserialize::<Settings>()?
        .resolve_paths(&crate_dir))
}
