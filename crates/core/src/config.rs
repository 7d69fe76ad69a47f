use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub suggestion: SuggestionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite 文件与日志目录所在的根目录
    pub data_dir: String,
    /// 日志文档在键值存储中的 Key
    pub document_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// 为空时建议功能仍可注册，但调用会返回配置错误
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl AppConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            storage: StorageConfig {
                data_dir: "data".to_string(),
                document_key: "forexTradeLogs".to_string(),
            },
            suggestion: SuggestionConfig {
                api_key: String::new(), // Supplied via GEMINI_API_KEY or config file
                model: "gemini-2.5-flash".to_string(),
                base_url: "https://generativelanguage.googleapis.com".to_string(),
            },
        }
    }
}
