//! 翻译功能模块
//!
//! 页面文本的双语切换：收集可见文本、记录原文快照、按词表原地替换，
//! 并能随时逐字恢复。
//!
//! ## 模块组织
//!
//! - `collector` - 文本节点与占位符元素的收集
//! - `snapshot` - 以节点身份为键的一次写入快照
//! - `table` / `dictionary` - 精确匹配词表与内置数据
//! - `engine` - 语言状态、基线捕获、切换与恢复
//! - `switcher` - 国旗按钮到引擎入口的绑定
//! - `config` - 配置加载与验证
//! - `error` - 错误类型

pub mod collector;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod snapshot;
pub mod switcher;
pub mod table;

pub use collector::{collect_text_nodes, CollectionStats, CollectorConfig, TextCollector};
pub use config::{ConfigManager, TranslationConfig};
pub use engine::{
    Activation, ActivationReport, CaptureReport, EngineStats, Locale, SubstitutionEngine,
};
pub use error::{TranslationError, TranslationResult};
pub use snapshot::NodeSnapshot;
pub use switcher::{ButtonBinding, LocaleSwitcher};
pub use table::TranslationTable;

use markup5ever_rcdom::Handle;

/// 按配置为文档构建引擎
pub fn engine_for_document(
    document: Handle,
    config: &TranslationConfig,
) -> TranslationResult<SubstitutionEngine> {
    let table = config.load_table()?;
    Ok(SubstitutionEngine::with_collector(
        document,
        table,
        config.collector_config(),
    ))
}
