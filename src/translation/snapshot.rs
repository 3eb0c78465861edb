//! 节点快照模块
//!
//! 以节点身份（而不是内容）为键保存首次观察到的值。快照只持有弱引用，
//! 渲染器删除的节点不会因为快照而存活，也不会让后续查找失败。

use std::collections::HashMap;
use std::rc::Rc;

use markup5ever_rcdom::{Handle, Node, WeakHandle};

/// 快照条目
#[derive(Debug)]
struct SnapshotEntry<V> {
    node: WeakHandle,
    value: V,
}

/// 按节点身份索引的一次写入映射
///
/// 条目按首次捕获的顺序保存。已存在的条目永远不会被覆盖，也不会被淘汰。
#[derive(Debug)]
pub struct NodeSnapshot<V> {
    entries: Vec<SnapshotEntry<V>>,
    // 弱引用让分配本身保持存活，条目存在期间地址不会被别的节点复用
    index: HashMap<*const Node, usize>,
}

impl<V> Default for NodeSnapshot<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> NodeSnapshot<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 节点是否已有快照
    pub fn contains(&self, node: &Handle) -> bool {
        self.index.contains_key(&Rc::as_ptr(node))
    }

    /// 仅在节点尚未记录时写入，返回是否发生了写入
    ///
    /// `value` 只在需要写入时才会被调用。
    pub fn capture_with<F>(&mut self, node: &Handle, value: F) -> bool
    where
        F: FnOnce() -> V,
    {
        let key = Rc::as_ptr(node);
        if self.index.contains_key(&key) {
            return false;
        }

        self.index.insert(key, self.entries.len());
        self.entries.push(SnapshotEntry {
            node: Rc::downgrade(node),
            value: value(),
        });
        true
    }

    /// 读取节点的快照值
    pub fn get(&self, node: &Handle) -> Option<&V> {
        self.index
            .get(&Rc::as_ptr(node))
            .map(|&i| &self.entries[i].value)
    }

    /// 按捕获顺序遍历，已被释放的节点给出 `None`
    pub fn iter(&self) -> impl Iterator<Item = (Option<Handle>, &V)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.node.upgrade(), &entry.value))
    }

    /// 按捕获顺序遍历值
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// 条目总数（含已释放的节点）
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 仍然存活的节点数
    pub fn live_len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.node.strong_count() > 0)
            .count()
    }
}
