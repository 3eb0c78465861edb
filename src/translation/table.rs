//! 翻译词表模块
//!
//! 精确匹配的 源文本 → 目标文本 映射，构造后不可变。
//! 没有模糊匹配、子串匹配、复数规则或插值。

use std::collections::HashMap;
use std::path::Path;

use crate::html::trim_text;
use crate::translation::dictionary;
use crate::translation::error::{helpers, TranslationResult};

/// 不可变翻译词表
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// 从键值对构建词表，重复键以后者为准
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for key in entries.keys() {
            if trim_text(key) != key {
                tracing::debug!("词表键含首尾空白，只能匹配占位符原文: {:?}", key);
            }
        }

        Self { entries }
    }

    /// 站点自带的葡萄牙语 → 英语词表
    pub fn builtin() -> Self {
        Self::from_pairs(dictionary::PT_EN.iter().copied())
    }

    /// 从扁平 JSON 对象解析
    pub fn from_json_str(content: &str) -> TranslationResult<Self> {
        let map: HashMap<String, String> = serde_json::from_str(content)?;
        Ok(Self::from_pairs(map))
    }

    /// 从扁平 TOML 表解析
    pub fn from_toml_str(content: &str) -> TranslationResult<Self> {
        let map: HashMap<String, String> = toml::from_str(content)?;
        Ok(Self::from_pairs(map))
    }

    /// 从文件加载，`.toml` 按 TOML 解析，其余按 JSON 解析
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TranslationResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            helpers::table_error(format!("读取词表文件失败: {}", e)).with_context(path.display())
        })?;

        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let table = if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
        .map_err(|e| e.with_context(path.display()))?;

        tracing::info!("已加载词表 {}: {} 条", path.display(), table.len());
        Ok(table)
    }

    /// 合并两个词表，`other` 中的条目优先
    pub fn merged(mut self, other: TranslationTable) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// 精确查找；值为空的条目视为未命中
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
