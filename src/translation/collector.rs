//! 文本收集器模块
//!
//! 按文档顺序（先序）收集可替换的文本节点和带占位符的表单元素。
//! 收集过程不修改文档，可以反复调用。

use markup5ever_rcdom::{Handle, NodeData};

use crate::html::{get_node_attr, get_node_name, is_attached, is_blank};
use crate::translation::config::constants;

/// 文本收集器配置
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 不进入的元素（其文本不可见）
    pub skip_elements: Vec<String>,
    /// 收集 placeholder 的元素
    pub placeholder_elements: Vec<String>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            skip_elements: constants::SKIP_ELEMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            placeholder_elements: constants::PLACEHOLDER_ELEMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// DOM文本收集器
#[derive(Debug, Default)]
pub struct TextCollector {
    config: CollectorConfig,
    stats: CollectionStats,
}

impl TextCollector {
    /// 创建新的文本收集器
    pub fn new(config: CollectorConfig) -> Self {
        Self {
            config,
            stats: CollectionStats::default(),
        }
    }

    /// 收集根节点下所有非空白文本节点
    ///
    /// 根节点缺失或已脱离文档时返回空序列。
    pub fn collect(&mut self, root: Option<&Handle>) -> Vec<Handle> {
        self.stats.reset();

        let mut texts = Vec::new();
        let Some(root) = root.filter(|root| is_attached(root)) else {
            tracing::debug!("根节点不存在或已脱离文档，跳过收集");
            return texts;
        };

        self.walk(root, |node, stats| {
            if let NodeData::Text { ref contents } = node.data {
                stats.text_nodes_found += 1;

                if is_blank(&contents.borrow()) {
                    stats.whitespace_filtered += 1;
                } else {
                    texts.push(node.clone());
                }
            }
        });

        self.stats.eligible_texts = texts.len();
        tracing::debug!(
            "收集到 {} 个文本节点（访问 {} 个节点）",
            texts.len(),
            self.stats.nodes_visited
        );

        texts
    }

    /// 收集根节点下带 placeholder 属性的表单元素
    pub fn collect_placeholders(&mut self, root: Option<&Handle>) -> Vec<Handle> {
        let mut elements = Vec::new();
        let Some(root) = root.filter(|root| is_attached(root)) else {
            return elements;
        };

        let placeholder_elements = self.config.placeholder_elements.clone();
        self.walk(root, |node, _| {
            let matches = get_node_name(node)
                .map(|name| placeholder_elements.iter().any(|e| e.eq_ignore_ascii_case(name)))
                .unwrap_or(false);

            if matches && get_node_attr(node, constants::PLACEHOLDER_ATTR).is_some() {
                elements.push(node.clone());
            }
        });

        self.stats.placeholder_elements = elements.len();
        elements
    }

    /// 先序遍历，不进入跳过的元素
    fn walk<F>(&mut self, root: &Handle, mut visit: F)
    where
        F: FnMut(&Handle, &mut CollectionStats),
    {
        let mut stack = vec![root.clone()];

        while let Some(node) = stack.pop() {
            self.stats.nodes_visited += 1;

            if let Some(name) = get_node_name(&node) {
                if self.should_skip_element(name) {
                    self.stats.elements_skipped += 1;
                    continue;
                }
            }

            visit(&node, &mut self.stats);

            for child in node.children.borrow().iter().rev() {
                stack.push(child.clone());
            }
        }
    }

    /// 检查是否应该跳过元素
    fn should_skip_element(&self, tag_name: &str) -> bool {
        self.config
            .skip_elements
            .iter()
            .any(|e| e.eq_ignore_ascii_case(tag_name))
    }

    /// 获取最近一次收集的统计信息
    pub fn get_stats(&self) -> &CollectionStats {
        &self.stats
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }
}

/// 收集统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionStats {
    pub nodes_visited: usize,
    pub elements_skipped: usize,
    pub text_nodes_found: usize,
    pub whitespace_filtered: usize,
    pub eligible_texts: usize,
    pub placeholder_elements: usize,
}

impl CollectionStats {
    /// 重置统计
    pub fn reset(&mut self) {
        *self = Default::default();
    }
}

/// 便利函数：用默认配置收集文本节点
pub fn collect_text_nodes(root: Option<&Handle>) -> Vec<Handle> {
    TextCollector::default().collect(root)
}
