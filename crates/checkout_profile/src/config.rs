use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validation::document::DocumentType;
use crate::validation::phone::{PhoneCountry, default_countries};

pub const ENV_PREFIX: &str = "CHECKOUT_PROFILE";

/// Static configuration of the profile form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Document type used when the snapshot has none.
    pub default_document_type: DocumentType,
    /// ISO3 code preselected in the calling-code selector.
    pub default_phone_country: String,
    pub phone_countries: Vec<PhoneCountry>,
    /// Store root path, prefixed to absolute links (logout).
    pub root_path: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_document_type: DocumentType::Cpf,
            default_phone_country: "BRA".into(),
            phone_countries: default_countries(),
            root_path: String::new(),
        }
    }
}

impl FormConfig {
    /// Load defaults, then `config.toml` / `config.json5` from `config_dir`
    /// (both optional), then `CHECKOUT_PROFILE_*` environment variables.
    pub fn load(config_dir: Option<&Path>) -> Result<Self, config::ConfigError> {
        let defaults = serde_json::to_string(&FormConfig::default())
            .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(&defaults, config::FileFormat::Json));

        if let Some(dir) = config_dir {
            let config_files = [
                ("config.toml", config::FileFormat::Toml),
                ("config.json5", config::FileFormat::Json5),
            ];
            for (file, format) in &config_files {
                let path = dir.join(file);
                debug!(path = %path.display(), exists = path.exists(), "config source");
                builder =
                    builder.add_source(config::File::from(path).format(*format).required(false));
            }
        }

        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));
        builder.build()?.try_deserialize()
    }

    pub fn phone_country(&self, iso3: &str) -> Option<&PhoneCountry> {
        self.phone_countries.iter().find(|c| c.country_iso3 == iso3)
    }

    /// Preselected calling code; first table entry if the configured one is
    /// unknown, Brazil if the table is empty.
    pub fn default_country(&self) -> PhoneCountry {
        self.phone_country(&self.default_phone_country)
            .or_else(|| self.phone_countries.first())
            .cloned()
            .unwrap_or_else(|| PhoneCountry::new("BRA", "55"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn load_without_files_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = FormConfig::load(Some(dir.path())).unwrap();
        assert_eq!(cfg, FormConfig::default());
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            r#"
root_path = "/br"
default_phone_country = "ARG"
"#,
        )
        .unwrap();
        let cfg = FormConfig::load(Some(dir.path())).unwrap();
        assert_eq!(cfg.root_path, "/br");
        assert_eq!(cfg.default_country(), PhoneCountry::new("ARG", "54"));
        assert_eq!(cfg.phone_countries.len(), 2);
    }

    #[test]
    fn json5_is_read_after_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "root_path = \"/toml\"\n").unwrap();
        fs::write(dir.path().join("config.json5"), "{ root_path: '/json5' }").unwrap();
        let cfg = FormConfig::load(Some(dir.path())).unwrap();
        assert_eq!(cfg.root_path, "/json5");
    }

    #[test]
    fn lookup_by_iso3() {
        let cfg = FormConfig::default();
        assert_eq!(cfg.phone_country("BRA").map(|c| c.country_code.as_str()), Some("55"));
        assert_eq!(cfg.phone_country("PRT"), None);
    }

    #[test]
    fn empty_table_falls_back_to_brazil() {
        let cfg = FormConfig {
            phone_countries: Vec::new(),
            ..Default::default()
        };
        assert_eq!(cfg.default_country(), PhoneCountry::new("BRA", "55"));
    }
}
