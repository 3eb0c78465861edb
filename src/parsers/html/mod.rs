//! HTML解析和处理模块
//!
//! - `utils`: 基础工具函数和常量
//! - `dom`: 基础DOM操作（解析、文本与属性读写、挂载检查）
//! - `serializer`: 序列化功能

pub mod dom;
pub mod serializer;
pub mod utils;

pub use dom::{
    find_nodes, get_body, get_node_attr, get_node_name, get_parent_node, get_text, html_to_dom,
    is_attached, set_node_attr, set_text, text_content,
};
pub use serializer::serialize_document;
pub use utils::{
    is_blank, normalize_encoding, trim_text, BYTE_ORDER_MARK, DEFAULT_ENCODING, WHITESPACES,
};
