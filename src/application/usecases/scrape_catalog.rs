// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::{Duration, Instant};

use metrics::{counter, histogram};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::settings::{ItemFailurePolicy, Settings};
use crate::domain::models::catalog_record::CatalogRecord;
use crate::domain::repositories::catalog_record_repository::{
    CatalogRecordRepository, RepositoryError,
};
use crate::domain::services::extraction_service::{CatalogExtractor, ExtractionError};
use crate::engines::traits::{EngineError, ScrapeRequest, ScraperEngine};
use crate::infrastructure::metrics::{
    ITEM_FAILURES_TOTAL, RECORDS_EXTRACTED_TOTAL, SCRAPES_TOTAL, SCRAPE_DURATION_SECONDS,
    SCRAPE_FAILURES_TOTAL,
};

// === Section: Errors ===

/// 抓取流程错误
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// 网络请求失败
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// 目录页面返回了非 2xx 状态码
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },
    /// 页面结构与预期不符
    #[error("Catalog item {index} could not be extracted: {source}")]
    Extraction {
        index: usize,
        #[source]
        source: ExtractionError,
    },
    /// 持久化失败
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 单页抓取结果
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    /// 成功提取的记录，保持文档顺序
    pub records: Vec<CatalogRecord>,
    /// 被跳过的条目及其失败原因
    pub skipped: Vec<(usize, ExtractionError)>,
}

// === Section: Use Case Definition ===

pub struct ScrapeCatalogUseCase {
    engine: Arc<dyn ScraperEngine>,
    repository: Arc<dyn CatalogRecordRepository>,
    extractor: CatalogExtractor,
    source_url: String,
    timeout: Duration,
    user_agent: String,
    policy: ItemFailurePolicy,
}

// === Section: Implementation ===

impl ScrapeCatalogUseCase {
    pub fn new(
        settings: &Settings,
        engine: Arc<dyn ScraperEngine>,
        repository: Arc<dyn CatalogRecordRepository>,
    ) -> Result<Self, ExtractionError> {
        Ok(Self {
            engine,
            repository,
            extractor: CatalogExtractor::new(settings.source.domain.clone())?,
            source_url: settings.source.url.clone(),
            timeout: Duration::from_secs(settings.scraper.timeout_secs),
            user_agent: settings.scraper.user_agent.clone(),
            policy: settings.scraper.on_item_error,
        })
    }

    /// 抓取配置的目录页面并批量写入，返回写入结果
    pub async fn execute(&self) -> Result<bool, ScrapeError> {
        let start = Instant::now();
        counter!(SCRAPES_TOTAL).increment(1);

        let result = self.scrape_and_persist().await;

        histogram!(SCRAPE_DURATION_SECONDS).record(start.elapsed().as_secs_f64());
        if let Err(e) = &result {
            counter!(SCRAPE_FAILURES_TOTAL).increment(1);
            warn!("Scrape of {} failed: {}", self.source_url, e);
        }
        result
    }

    async fn scrape_and_persist(&self) -> Result<bool, ScrapeError> {
        let outcome = self.scrape_page(&self.source_url).await?;
        let count = outcome.records.len();
        let inserted = self.repository.bulk_insert(outcome.records).await?;
        info!(
            "Persisted {} catalog records from {} ({} skipped)",
            count,
            self.source_url,
            outcome.skipped.len()
        );
        Ok(inserted)
    }

    /// 抓取单个页面并提取全部目录条目
    ///
    /// # 参数
    ///
    /// * `url` - 目录页面地址
    ///
    /// # 返回值
    ///
    /// * `Ok(ScrapeOutcome)` - 按文档顺序排列的记录
    /// * `Err(ScrapeError)` - 请求失败、状态码异常，或在 `Abort` 策略下有条目提取失败
    pub async fn scrape_page(&self, url: &str) -> Result<ScrapeOutcome, ScrapeError> {
        let request = ScrapeRequest::new(url, self.timeout, self.user_agent.clone());
        let response = self.engine.scrape(&request).await?;

        if !response.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                url: url.to_string(),
                status: response.status_code,
            });
        }

        let outcomes = self.extractor.transform_document(&response.content);
        let outcome = self.apply_policy(outcomes)?;

        counter!(RECORDS_EXTRACTED_TOTAL).increment(outcome.records.len() as u64);
        Ok(outcome)
    }

    fn apply_policy(
        &self,
        outcomes: Vec<Result<CatalogRecord, ExtractionError>>,
    ) -> Result<ScrapeOutcome, ScrapeError> {
        let mut outcome = ScrapeOutcome::default();

        for (index, item) in outcomes.into_iter().enumerate() {
            match item {
                Ok(record) => outcome.records.push(record),
                Err(source) => {
                    counter!(ITEM_FAILURES_TOTAL).increment(1);
                    match self.policy {
                        ItemFailurePolicy::Abort => {
                            return Err(ScrapeError::Extraction { index, source })
                        }
                        ItemFailurePolicy::Skip => {
                            warn!("Skipping catalog item {}: {}", index, source);
                            outcome.skipped.push((index, source));
                        }
                    }
                }
            }
        }

        Ok(outcome)
    }
}
