//! # Application Dependencies / 应用依赖
//!
//! This module defines the dependency grouping for use case construction.
//! 此模块定义用例构造的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern, just parameter grouping.

use std::sync::Arc;

use mc_core::navigation::DashboardVariant;
use mc_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required - no defaults, no optional fields.
#[derive(Clone)]
pub struct AppDeps {
    // Backend / 后端接口
    pub member_api: Arc<dyn MemberApiPort>,
    pub authorization: Arc<dyn AuthorizationPort>,

    // Caching / 缓存
    pub member_detail_cache: Arc<dyn MemberDetailCachePort>,

    // UI / 界面
    pub notifier: Arc<dyn NotificationPort>,
    pub dashboard_variant: DashboardVariant,
}
