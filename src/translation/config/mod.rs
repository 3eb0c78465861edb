//! 翻译配置管理模块
//!
//! 提供简化的配置管理，支持环境变量、配置文件和默认值

pub mod manager;

pub use manager::{ConfigManager, TranslationConfig};

/// 配置常量
pub mod constants {
    // 默认语言
    pub const DEFAULT_SOURCE_LANG: &str = "pt";
    pub const DEFAULT_TARGET_LANG: &str = "en";

    // 不可见文本所在的元素，收集时不进入
    pub const SKIP_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

    // 带占位符的表单元素
    pub const PLACEHOLDER_ELEMENTS: &[&str] = &["input", "textarea"];

    pub const PLACEHOLDER_ATTR: &str = "placeholder";

    // 语言切换按钮的标记
    pub const SWITCH_BUTTON_ELEMENT: &str = "button";
    pub const TARGET_MARKERS: &[&str] = &["🇺🇸", "US"];
    pub const SOURCE_MARKERS: &[&str] = &["🇧🇷", "BR"];

    // 配置文件搜索路径
    pub const CONFIG_PATHS: &[&str] = &[
        "locale-patch.toml",
        ".locale-patch.toml",
        "locale-patch.json",
        "~/.config/locale-patch/config.toml",
    ];
}
