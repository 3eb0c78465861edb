//! 简化的配置管理器
//!
//! 提供统一的配置接口，支持文件配置、环境变量和默认值

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::constants;
use crate::translation::collector::CollectorConfig;
use crate::translation::error::{helpers, TranslationError, TranslationResult};
use crate::translation::table::TranslationTable;

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// 翻译配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    // 语言
    pub source_lang: String,
    pub target_lang: String,

    // 词表
    pub table_path: Option<String>,
    pub builtin_table: bool,

    // 收集
    pub skip_elements: Vec<String>,
    pub placeholder_elements: Vec<String>,

    // 切换按钮
    pub target_markers: Vec<String>,
    pub source_markers: Vec<String>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source_lang: constants::DEFAULT_SOURCE_LANG.to_string(),
            target_lang: constants::DEFAULT_TARGET_LANG.to_string(),

            table_path: None,
            builtin_table: true,

            skip_elements: to_strings(constants::SKIP_ELEMENTS),
            placeholder_elements: to_strings(constants::PLACEHOLDER_ELEMENTS),

            target_markers: to_strings(constants::TARGET_MARKERS),
            source_markers: to_strings(constants::SOURCE_MARKERS),
        }
    }
}

impl TranslationConfig {
    /// 验证配置
    pub fn validate(&self) -> TranslationResult<()> {
        if self.source_lang.trim().is_empty() || self.target_lang.trim().is_empty() {
            return Err(helpers::config_error("语言代码不能为空"));
        }

        if self.source_lang.eq_ignore_ascii_case(&self.target_lang) {
            return Err(helpers::config_error(format!(
                "源语言与目标语言相同: {}",
                self.source_lang
            )));
        }

        if self.placeholder_elements.is_empty() {
            return Err(helpers::config_error("占位符元素列表不能为空"));
        }

        if self.target_markers.iter().all(|m| m.is_empty())
            || self.source_markers.iter().all(|m| m.is_empty())
        {
            return Err(helpers::config_error("切换按钮标记不能为空"));
        }

        if !self.builtin_table && self.table_path.is_none() {
            tracing::warn!("未启用内置词表且未指定词表文件，所有文本都将原样保留");
        }

        Ok(())
    }

    /// 应用环境变量覆盖
    pub fn apply_env_overrides(&mut self) {
        use crate::env::{translation, EnvVar};

        if let Ok(source_lang) = translation::SourceLang::get() {
            self.source_lang = source_lang;
        }

        if let Ok(target_lang) = translation::TargetLang::get() {
            self.target_lang = target_lang;
        }

        if let Ok(table_path) = translation::TablePath::get() {
            tracing::info!("环境变量覆盖词表路径: {}", table_path);
            self.table_path = Some(table_path);
        }

        if let Ok(builtin) = translation::BuiltinTable::get() {
            self.builtin_table = builtin;
        }
    }

    /// 构建词表：内置词表（可选）叠加词表文件
    pub fn load_table(&self) -> TranslationResult<TranslationTable> {
        let base = if self.builtin_table {
            TranslationTable::builtin()
        } else {
            TranslationTable::default()
        };

        match &self.table_path {
            Some(path) => {
                let expanded = shellexpand::tilde(path);
                let extra = TranslationTable::load_from_file(expanded.as_ref())?;
                Ok(base.merged(extra))
            }
            None => Ok(base),
        }
    }

    /// 收集器配置
    pub fn collector_config(&self) -> CollectorConfig {
        CollectorConfig {
            skip_elements: self.skip_elements.clone(),
            placeholder_elements: self.placeholder_elements.clone(),
        }
    }
}

/// 简化的配置管理器
#[derive(Debug)]
pub struct ConfigManager {
    config: TranslationConfig,
    config_path: Option<String>,
}

impl ConfigManager {
    /// 按搜索路径加载配置，再应用环境变量并验证
    pub fn new() -> TranslationResult<Self> {
        Self::load_dotenv();

        for path in constants::CONFIG_PATHS {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                tracing::info!("加载配置文件: {}", expanded_path);
                return Self::from_file(expanded_path.as_ref());
            }
        }

        tracing::debug!("未找到配置文件，使用默认配置");
        Self::from_config(TranslationConfig::default(), None)
    }

    /// 从指定文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> TranslationResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TranslationError::ConfigError(format!("读取配置文件失败: {}", e))
                .with_context(path.display())
        })?;

        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let config: TranslationConfig = if is_toml {
            toml::from_str(&content).map_err(|e| {
                TranslationError::ConfigError(format!("解析TOML配置失败: {}", e))
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                TranslationError::ConfigError(format!("解析JSON配置失败: {}", e))
            })?
        };

        Self::from_config(config, Some(path.display().to_string()))
    }

    fn from_config(mut config: TranslationConfig, config_path: Option<String>) -> TranslationResult<Self> {
        config.apply_env_overrides();
        config.validate()?;

        Ok(Self {
            config,
            config_path,
        })
    }

    /// 获取配置
    pub fn get_config(&self) -> &TranslationConfig {
        &self.config
    }

    pub fn into_config(self) -> TranslationConfig {
        self.config
    }

    /// 实际使用的配置文件路径
    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    /// 加载 .env 文件
    fn load_dotenv() {
        let env_files = [".env.local", ".env"];

        for env_file in &env_files {
            if Path::new(env_file).exists() && dotenv::from_filename(env_file).is_ok() {
                tracing::info!("已加载环境变量文件: {}", env_file);
                break;
            }
        }
    }

    /// 生成示例配置文件
    pub fn generate_example_config<P: AsRef<Path>>(path: P) -> TranslationResult<()> {
        let config = TranslationConfig::default();
        let content = toml::to_string_pretty(&config)?;

        std::fs::write(path.as_ref(), content)?;

        Ok(())
    }
}
