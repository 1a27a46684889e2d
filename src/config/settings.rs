// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、数据库、数据源、抓取行为和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 数据源配置
    pub source: SourceSettings,
    /// 抓取配置
    pub scraper: ScraperSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 数据源配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// 拼接相对链接时使用的站点域名
    pub domain: String,
    /// 要抓取的目录页面URL
    pub url: String,
}

/// 单条目录项提取失败时的处理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemFailurePolicy {
    /// 任意一项失败则整页失败
    #[default]
    Abort,
    /// 记录日志并跳过失败项
    Skip,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 目录项提取失败策略
    #[serde(default)]
    pub on_item_error: ItemFailurePolicy,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出器
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次从默认值、配置文件、`CATALOGRS__*` 环境变量以及
    /// `SOURCE_DOMAIN` / `SOURCE_URL` 环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败，例如缺少数据源配置
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::builder_with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("CATALOGRS").separator("__"))
            // Plain variables take precedence so existing deployments keep working
            .set_override_option("source.domain", std::env::var("SOURCE_DOMAIN").ok())?
            .set_override_option("source.url", std::env::var("SOURCE_URL").ok())?;

        builder.build()?.try_deserialize()
    }

    /// 使用默认值和给定的数据源构建配置，主要用于测试
    pub fn with_source(domain: &str, url: &str) -> Result<Self, ConfigError> {
        Self::builder_with_defaults()?
            .set_override("source.domain", domain)?
            .set_override("source.url", url)?
            .set_override("database.url", "sqlite::memory:")?
            .set_override("database.max_connections", 1)?
            .build()?
            .try_deserialize()
    }

    fn builder_with_defaults(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Default DB settings
            .set_default("database.url", "sqlite://catalog.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default scraper settings
            .set_default("scraper.timeout_secs", 30)?
            .set_default("scraper.user_agent", "Mozilla/5.0 (compatible; catalogrs/0.1)")?
            .set_default("scraper.on_item_error", "abort")?
            // Default metrics settings
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
