// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

pub const SCRAPES_TOTAL: &str = "catalog_scrapes_total";
pub const SCRAPE_FAILURES_TOTAL: &str = "catalog_scrape_failures_total";
pub const RECORDS_EXTRACTED_TOTAL: &str = "catalog_records_extracted_total";
pub const ITEM_FAILURES_TOTAL: &str = "catalog_item_failures_total";
pub const SCRAPE_DURATION_SECONDS: &str = "catalog_scrape_duration_seconds";

/// 初始化指标系统
///
/// 启用时安装 Prometheus 导出器并注册抓取相关指标；
/// 未启用时指标宏调用不会产生任何效果
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(SCRAPES_TOTAL, "Total number of catalog scrapes started");
    describe_counter!(
        SCRAPE_FAILURES_TOTAL,
        "Total number of catalog scrapes that failed"
    );
    describe_counter!(
        RECORDS_EXTRACTED_TOTAL,
        "Total number of catalog records extracted"
    );
    describe_counter!(
        ITEM_FAILURES_TOTAL,
        "Total number of catalog items that could not be extracted"
    );
    describe_histogram!(
        SCRAPE_DURATION_SECONDS,
        "Duration of a full scrape and persist cycle in seconds"
    );

    info!("Metrics exporter listening on {}", addr);
}
