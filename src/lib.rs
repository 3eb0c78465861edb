//! # Locale Patch Library
//!
//! 渲染后补丁层：在生成的单页站点上，于源语言与目标语言之间可逆地替换可见文本。
//!
//! ## 模块组织
//!
//! - `core` - 静态文档处理流程（解析、捕获、切换、序列化）
//! - `parsers` - HTML 解析、DOM 操作与序列化
//! - `translation` - 文本收集、快照、词表、替换引擎与切换按钮
//! - `env` - 类型安全的环境变量

pub mod core;
pub mod env;
pub mod parsers;
pub mod translation;

// Re-export commonly used items for convenience
pub use parsers::*;
pub use translation::{Locale, LocaleSwitcher, SubstitutionEngine, TranslationTable};
