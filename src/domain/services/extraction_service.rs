// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::catalog_record::CatalogRecord;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

/// 目录条目片段的选择器
pub const ITEM_SELECTOR: &str = "li.dataset-item.has-organization";
/// 标题容器选择器
pub const HEADING_SELECTOR: &str = "h3.dataset-heading";
/// 标题内链接选择器
pub const ANCHOR_SELECTOR: &str = "a";
/// 备注容器选择器
pub const NOTES_SELECTOR: &str = "div.notes";
/// 发布机构段落选择器
pub const ORGANIZATION_SELECTOR: &str = "p.dataset-organization";
/// 描述块选择器
pub const DESCRIPTION_SELECTOR: &str = "div";

const TRAILING_DASH: char = '—';

/// 提取错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// 缺少必需的元素
    #[error("Missing element matching `{selector}`")]
    MissingElement { selector: &'static str },
    /// 元素缺少必需的属性
    #[error("Element `{selector}` has no `{attribute}` attribute")]
    MissingAttribute {
        selector: &'static str,
        attribute: &'static str,
    },
    /// 选择器无法解析
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        selector: &'static str,
        reason: String,
    },
}

/// 单个目录条目的提取结果
pub type ItemOutcome = Result<CatalogRecord, ExtractionError>;

/// 目录提取器
///
/// 持有预编译的选择器和用于拼接链接的站点域名，
/// 负责把目录页面中的每个条目转换为 [`CatalogRecord`]
#[derive(Debug)]
pub struct CatalogExtractor {
    source_domain: String,
    item: Selector,
    heading: Selector,
    anchor: Selector,
    notes: Selector,
    organization: Selector,
    description: Selector,
}

impl CatalogExtractor {
    /// 创建提取器
    ///
    /// # 参数
    ///
    /// * `source_domain` - 拼接相对链接使用的域名
    ///
    /// # 返回值
    ///
    /// * `Ok(CatalogExtractor)` - 选择器全部编译成功
    /// * `Err(ExtractionError)` - 选择器无法解析
    pub fn new(source_domain: impl Into<String>) -> Result<Self, ExtractionError> {
        Ok(Self {
            source_domain: source_domain.into(),
            item: compile(ITEM_SELECTOR)?,
            heading: compile(HEADING_SELECTOR)?,
            anchor: compile(ANCHOR_SELECTOR)?,
            notes: compile(NOTES_SELECTOR)?,
            organization: compile(ORGANIZATION_SELECTOR)?,
            description: compile(DESCRIPTION_SELECTOR)?,
        })
    }

    /// 转换整个HTML文档
    ///
    /// 按文档顺序为每个匹配的目录条目返回一个提取结果。
    /// 没有匹配条目时返回空列表。
    pub fn transform_document(&self, html: &str) -> Vec<ItemOutcome> {
        let document = Html::parse_document(html);
        document
            .select(&self.item)
            .map(|item| self.transform_item(item))
            .collect()
    }

    /// 把单个目录条目转换为记录，任一字段缺失即返回错误
    pub fn transform_item(&self, item: ElementRef<'_>) -> ItemOutcome {
        Ok(CatalogRecord {
            name: self.find_name(item)?,
            organization: self.find_organization(item)?,
            description: self.find_description(item)?,
            link: self.find_link(item)?,
        })
    }

    /// 提取数据集名称：标题内第一个链接的文本
    pub fn find_name(&self, item: ElementRef<'_>) -> Result<String, ExtractionError> {
        let anchor = self.heading_anchor(item)?;
        Ok(text_of(anchor))
    }

    /// 提取发布机构，去除末尾的破折号
    pub fn find_organization(&self, item: ElementRef<'_>) -> Result<String, ExtractionError> {
        let notes = first(item, &self.notes, NOTES_SELECTOR)?;
        let paragraph = first(notes, &self.organization, ORGANIZATION_SELECTOR)?;
        Ok(strip_trailing_dash(&text_of(paragraph)))
    }

    /// 提取描述：备注容器内第一个 `div` 的原始文本
    pub fn find_description(&self, item: ElementRef<'_>) -> Result<String, ExtractionError> {
        let notes = first(item, &self.notes, NOTES_SELECTOR)?;
        let block = first(notes, &self.description, DESCRIPTION_SELECTOR)?;
        Ok(text_of(block))
    }

    /// 提取数据集链接
    pub fn find_link(&self, item: ElementRef<'_>) -> Result<String, ExtractionError> {
        let anchor = self.heading_anchor(item)?;
        let href = anchor
            .value()
            .attr("href")
            .ok_or(ExtractionError::MissingAttribute {
                selector: ANCHOR_SELECTOR,
                attribute: "href",
            })?;
        Ok(build_link(&self.source_domain, href))
    }

    fn heading_anchor<'a>(&self, item: ElementRef<'a>) -> Result<ElementRef<'a>, ExtractionError> {
        let heading = first(item, &self.heading, HEADING_SELECTOR)?;
        first(heading, &self.anchor, ANCHOR_SELECTOR)
    }
}

/// 去除末尾的破折号及其两侧空白；不以破折号结尾时原样返回
pub fn strip_trailing_dash(text: &str) -> String {
    match text.strip_suffix(TRAILING_DASH) {
        Some(stripped) => stripped.trim().to_string(),
        None => text.to_string(),
    }
}

/// 拼接链接
///
/// 站内相对路径直接与域名做字符串拼接，不处理重复的斜杠；
/// 已经是绝对URL的 href 原样返回；以 `//` 开头的 href 沿用域名的协议。
pub fn build_link(source_domain: &str, href: &str) -> String {
    if Url::parse(href).is_ok() {
        return href.to_string();
    }
    if href.starts_with("//") {
        if let Ok(joined) = Url::parse(source_domain).and_then(|base| base.join(href)) {
            return joined.to_string();
        }
    }
    format!("{}{}", source_domain, href)
}

fn compile(selector: &'static str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::InvalidSelector {
        selector,
        reason: format!("{:?}", e),
    })
}

fn first<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    name: &'static str,
) -> Result<ElementRef<'a>, ExtractionError> {
    scope
        .select(selector)
        .next()
        .ok_or(ExtractionError::MissingElement { selector: name })
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
