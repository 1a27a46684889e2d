// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 目录记录
///
/// 从目录页面的单个条目中提取出的规范化数据集信息。
/// 只在一次抓取过程中存在，随后整批交给持久化层。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// 数据集显示名称
    pub name: String,
    /// 发布机构，去除末尾破折号后可能为空
    pub organization: String,
    /// 数据集描述，保持原文
    pub description: String,
    /// 数据集的绝对链接
    pub link: String,
}

impl CatalogRecord {
    pub fn new(
        name: impl Into<String>,
        organization: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            organization: organization.into(),
            description: description.into(),
            link: link.into(),
        }
    }
}

/// 已持久化的目录记录
///
/// 在 [`CatalogRecord`] 的基础上携带存储层分配的标识符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCatalogRecord {
    /// 存储层分配的自增ID
    pub id: i32,
    pub name: String,
    pub organization: String,
    pub description: String,
    pub link: String,
}

impl StoredCatalogRecord {
    /// 丢弃标识符，返回纯记录
    pub fn into_record(self) -> CatalogRecord {
        CatalogRecord {
            name: self.name,
            organization: self.organization,
            description: self.description,
            link: self.link,
        }
    }
}
