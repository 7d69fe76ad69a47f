use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use fxbook_core::config::AppConfig;

/// 默认配置文件位置 (可选，不存在时使用默认值)
pub const DEFAULT_CONFIG_PATH: &str = "config/fxbook.toml";

/// # Summary
/// 加载应用配置。
///
/// # Logic
/// 1. 以 `AppConfig::default()` 为底。
/// 2. 叠加可选的 TOML 配置文件。
/// 3. 叠加 `FXBOOK__SECTION__KEY` 形式的环境变量。
/// 4. 若最终仍未配置 API Key，则回退到 `gemini_api_key` (通常来自 `GEMINI_API_KEY`)。
///
/// # Arguments
/// * `path` - 配置文件路径。
/// * `gemini_api_key` - 备用的 Gemini API Key。
pub fn load(path: &Path, gemini_api_key: Option<String>) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(Config::try_from(&AppConfig::default())?)
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("FXBOOK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;
    if config.suggestion.api_key.trim().is_empty() {
        if let Some(key) = gemini_api_key {
            config.suggestion.api_key = key;
        }
    }
    Ok(config)
}
