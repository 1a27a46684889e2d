// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含协调领域服务、抓取引擎和仓库的用例实现
pub mod usecases;
