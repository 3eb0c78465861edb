//! 双语替换引擎
//!
//! 持有语言状态、原文快照和词表，在源语言与目标语言之间原地改写文档。
//! 外部渲染器可能在两次调用之间改动文档：快照只记录首次观察到的原文，
//! 渲染器替换掉的节点自然变成“未跟踪”，既不报错也不再被改写。

use markup5ever_rcdom::Handle;

use crate::html::{get_body, get_node_attr, get_text, set_node_attr, set_text, trim_text};
use crate::translation::collector::{CollectorConfig, TextCollector};
use crate::translation::config::constants::PLACEHOLDER_ATTR;
use crate::translation::snapshot::NodeSnapshot;
use crate::translation::table::TranslationTable;

/// 语言状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// 文档自带的语言
    #[default]
    Source,
    /// 切换后的语言
    Target,
}

/// 一次 `capture_baseline` 新记录的条目数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureReport {
    pub new_texts: usize,
    pub new_placeholders: usize,
}

/// 一次切换的改写统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivationReport {
    /// 改写的文本节点
    pub rewritten: usize,
    /// 词表未命中、保持原样的文本节点
    pub passed_through: usize,
    /// 已被渲染器释放的节点
    pub lost: usize,
    /// 改写的占位符
    pub placeholders_rewritten: usize,
}

/// 切换结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Applied(ActivationReport),
    /// 已经处于目标语言，未做任何事
    AlreadyActive,
}

impl Activation {
    pub fn is_applied(&self) -> bool {
        matches!(self, Activation::Applied(_))
    }

    pub fn report(&self) -> Option<&ActivationReport> {
        match self {
            Activation::Applied(report) => Some(report),
            Activation::AlreadyActive => None,
        }
    }
}

/// 引擎统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    pub locale: Locale,
    pub tracked_texts: usize,
    pub live_texts: usize,
    pub tracked_placeholders: usize,
}

/// 替换引擎，每个文档会话构造一次
#[derive(Debug)]
pub struct SubstitutionEngine {
    document: Handle,
    table: TranslationTable,
    collector: TextCollector,
    locale: Locale,
    texts: NodeSnapshot<String>,
    placeholders: NodeSnapshot<String>,
    baseline_captured: bool,
}

impl SubstitutionEngine {
    /// `document` 是文档根节点（`RcDom::document`）
    pub fn new(document: Handle, table: TranslationTable) -> Self {
        Self::with_collector(document, table, CollectorConfig::default())
    }

    pub fn with_collector(document: Handle, table: TranslationTable, config: CollectorConfig) -> Self {
        Self {
            document,
            table,
            collector: TextCollector::new(config),
            locale: Locale::Source,
            texts: NodeSnapshot::new(),
            placeholders: NodeSnapshot::new(),
            baseline_captured: false,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub fn document(&self) -> &Handle {
        &self.document
    }

    /// 记录尚未跟踪的文本节点和占位符的当前值
    ///
    /// 已记录的节点不会被覆盖，目标语言状态下重复调用也不会把译文当成原文。
    pub fn capture_baseline(&mut self) -> CaptureReport {
        let body = get_body(&self.document);
        let mut report = CaptureReport::default();

        for node in self.collector.collect(body.as_ref()) {
            if self
                .texts
                .capture_with(&node, || get_text(&node).unwrap_or_default())
            {
                report.new_texts += 1;
            }
        }

        for element in self.collector.collect_placeholders(body.as_ref()) {
            if self.placeholders.capture_with(&element, || {
                get_node_attr(&element, PLACEHOLDER_ATTR).unwrap_or_default()
            }) {
                report.new_placeholders += 1;
            }
        }

        self.baseline_captured = true;
        tracing::debug!(
            "基线捕获: 新增 {} 个文本, {} 个占位符（共 {} / {}）",
            report.new_texts,
            report.new_placeholders,
            self.texts.len(),
            self.placeholders.len()
        );

        report
    }

    /// 切换到目标语言
    ///
    /// 仅在从未捕获过基线时自动捕获；之后新插入的节点需要调用方再次
    /// `capture_baseline` 才会被覆盖。
    pub fn activate_target(&mut self) -> Activation {
        if self.locale == Locale::Target {
            tracing::debug!("已处于目标语言，忽略");
            return Activation::AlreadyActive;
        }

        if !self.baseline_captured {
            self.capture_baseline();
        }

        let mut report = ActivationReport::default();

        for (node, original) in self.texts.iter() {
            let Some(node) = node else {
                report.lost += 1;
                continue;
            };

            match substitute(original, &self.table) {
                Some(translated) => {
                    set_text(&node, &translated);
                    report.rewritten += 1;
                }
                None => report.passed_through += 1,
            }
        }

        for (element, original) in self.placeholders.iter() {
            let Some(element) = element else {
                continue;
            };

            if let Some(translated) = self.table.lookup(original) {
                set_node_attr(&element, PLACEHOLDER_ATTR, Some(translated.to_string()));
                report.placeholders_rewritten += 1;
            }
        }

        self.locale = Locale::Target;
        tracing::info!(
            "已切换到目标语言: 改写 {} 个文本, {} 个未命中, {} 个丢失, {} 个占位符",
            report.rewritten,
            report.passed_through,
            report.lost,
            report.placeholders_rewritten
        );

        Activation::Applied(report)
    }

    /// 切换回源语言，逐字恢复所有已记录的原文
    pub fn activate_source(&mut self) -> Activation {
        if self.locale == Locale::Source {
            tracing::debug!("已处于源语言，忽略");
            return Activation::AlreadyActive;
        }

        let mut report = ActivationReport::default();

        for (node, original) in self.texts.iter() {
            match node {
                Some(node) => {
                    set_text(&node, original);
                    report.rewritten += 1;
                }
                None => report.lost += 1,
            }
        }

        for (element, original) in self.placeholders.iter() {
            if let Some(element) = element {
                set_node_attr(&element, PLACEHOLDER_ATTR, Some(original.clone()));
                report.placeholders_rewritten += 1;
            }
        }

        self.locale = Locale::Source;
        tracing::info!(
            "已切换回源语言: 恢复 {} 个文本, {} 个占位符",
            report.rewritten,
            report.placeholders_rewritten
        );

        Activation::Applied(report)
    }

    /// 按当前语言分派
    pub fn activate(&mut self, locale: Locale) -> Activation {
        match locale {
            Locale::Source => self.activate_source(),
            Locale::Target => self.activate_target(),
        }
    }

    /// 词表中缺失的原文（去除首尾空白、去重，按首次捕获顺序）
    pub fn untranslated(&self) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();

        for original in self.texts.values() {
            let trimmed = trim_text(original);
            if self.table.lookup(trimmed).is_none() && !missing.iter().any(|m| m == trimmed) {
                missing.push(trimmed.to_string());
            }
        }

        missing
    }

    pub fn original_text(&self, node: &Handle) -> Option<&str> {
        self.texts.get(node).map(String::as_str)
    }

    pub fn original_placeholder(&self, element: &Handle) -> Option<&str> {
        self.placeholders.get(element).map(String::as_str)
    }

    pub fn is_tracked(&self, node: &Handle) -> bool {
        self.texts.contains(node) || self.placeholders.contains(node)
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            locale: self.locale,
            tracked_texts: self.texts.len(),
            live_texts: self.texts.live_len(),
            tracked_placeholders: self.placeholders.len(),
        }
    }
}

/// 用译文替换原文中去除首尾空白的部分，保留原有的首尾空白
fn substitute(original: &str, table: &TranslationTable) -> Option<String> {
    let trimmed = trim_text(original);
    if trimmed.is_empty() {
        return None;
    }

    table
        .lookup(trimmed)
        .map(|translated| original.replacen(trimmed, translated, 1))
}
