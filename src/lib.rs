// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含抓取并持久化目录数据的用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含目录记录实体、提取服务和仓库接口
pub mod domain;

/// 引擎模块
///
/// 实现获取目录页面的HTTP抓取引擎
pub mod engines;

/// 基础设施模块
///
/// 提供数据库、仓库实现和指标等外部服务集成
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由和处理器
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
