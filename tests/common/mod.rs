// 集成测试公共模块
//
// 提供测试 DOM 构建和“外部渲染器”式的文档改动

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::parse_document;
use html5ever::tendril::{StrTendril, TendrilSink};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

use locale_patch::html::{get_body, get_node_attr, get_node_name, get_text};

/// 站点片段：导航、标题、混合文本、表单和国旗按钮
pub const SITE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Dr Susan Estética</title><style>.hero { color: red; }</style></head>
<body>
  <nav>
    <a href="/ginecologia">Ginecologia</a>
    <a href="/contato">  Contato  </a>
    <span>Olá Ginecologia</span>
  </nav>
  <main>
    <h2>QUAL O SEU OBJETIVO?</h2>
    <p>Dr Susan</p>
    <form>
      <input type="text" placeholder="Seu nome completo">
      <textarea placeholder="Texto sem tradução"></textarea>
    </form>
  </main>
  <div class="flags">
    <button>🇺🇸 US</button>
    <button>🇧🇷 BR</button>
  </div>
  <script>console.log("Ginecologia");</script>
</body>
</html>"#;

pub fn create_test_dom(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

pub fn body(dom: &RcDom) -> Handle {
    get_body(&dom.document).expect("test document has a body")
}

/// 按先序返回第一个匹配条件的节点
pub fn find_node<F>(root: &Handle, predicate: F) -> Option<Handle>
where
    F: Fn(&Handle) -> bool,
{
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if predicate(&node) {
            return Some(node);
        }
        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }
    None
}

/// 找到内容（去除首尾空白后）等于 `text` 的文本节点
pub fn find_text_node(dom: &RcDom, text: &str) -> Handle {
    find_node(&dom.document, |node| {
        get_text(node).map(|t| t.trim() == text).unwrap_or(false)
    })
    .unwrap_or_else(|| panic!("no text node {:?}", text))
}

pub fn find_element(dom: &RcDom, name: &str) -> Handle {
    find_node(&dom.document, |node| get_node_name(node) == Some(name))
        .unwrap_or_else(|| panic!("no element <{}>", name))
}

pub fn text_of(node: &Handle) -> String {
    get_text(node).expect("text node")
}

pub fn placeholder_of(element: &Handle) -> Option<String> {
    get_node_attr(element, "placeholder")
}

pub fn new_text_node(text: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from_slice(text)),
    })
}

/// 渲染器在 `parent` 末尾插入新文本节点
pub fn append_text(parent: &Handle, text: &str) -> Handle {
    let node = new_text_node(text);
    node.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(node.clone());
    node
}

/// 渲染器把节点从文档中移除
pub fn detach(node: &Handle) {
    if let Some(parent) = node.parent.take().and_then(|weak| weak.upgrade()) {
        parent
            .children
            .borrow_mut()
            .retain(|child| !Rc::ptr_eq(child, node));
    }
}

/// 渲染器用内容相同的新节点整体替换旧节点
pub fn replace_with_new_text(node: &Handle, text: &str) -> Handle {
    let parent = node
        .parent
        .take()
        .and_then(|weak| weak.upgrade())
        .expect("attached node");

    let replacement = new_text_node(text);
    replacement.parent.set(Some(Rc::downgrade(&parent)));

    let mut children = parent.children.borrow_mut();
    let index = children
        .iter()
        .position(|child| Rc::ptr_eq(child, node))
        .expect("child of its parent");
    children[index] = replacement.clone();

    replacement
}

/// 文档中所有文本节点内容（含空白节点），用于整体比较
pub fn all_texts(dom: &RcDom) -> Vec<String> {
    let mut out = Vec::new();
    let mut stack = vec![dom.document.clone()];
    while let Some(node) = stack.pop() {
        if let Some(text) = get_text(&node) {
            out.push(text);
        }
        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }
    out
}
