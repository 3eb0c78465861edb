//! 语言切换按钮
//!
//! 在文档中找到国旗按钮，并把点击分派到引擎的两个入口。
//! 引擎由调用方注入，切换器不持有任何全局状态。

use std::rc::Rc;

use markup5ever_rcdom::{Handle, WeakHandle};

use crate::html::{get_node_name, text_content};
use crate::translation::config::{constants, TranslationConfig};
use crate::translation::engine::{Activation, Locale, SubstitutionEngine};

/// 按钮与语言的绑定
#[derive(Debug, Clone)]
pub struct ButtonBinding {
    button: WeakHandle,
    locale: Locale,
}

impl ButtonBinding {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn button(&self) -> Option<Handle> {
        self.button.upgrade()
    }
}

/// 语言切换器
#[derive(Debug)]
pub struct LocaleSwitcher {
    engine: SubstitutionEngine,
    bindings: Vec<ButtonBinding>,
}

impl LocaleSwitcher {
    /// 扫描引擎所属文档中的按钮并绑定
    ///
    /// 同一个按钮可以同时带两种标记，此时先切到目标语言再切回源语言。
    pub fn bind(engine: SubstitutionEngine, config: &TranslationConfig) -> Self {
        let mut bindings = Vec::new();

        for button in find_buttons(engine.document()) {
            let label = text_content(&button);

            if contains_marker(&label, &config.target_markers) {
                bindings.push(ButtonBinding {
                    button: Rc::downgrade(&button),
                    locale: Locale::Target,
                });
            }

            if contains_marker(&label, &config.source_markers) {
                bindings.push(ButtonBinding {
                    button: Rc::downgrade(&button),
                    locale: Locale::Source,
                });
            }
        }

        tracing::debug!("绑定了 {} 个语言切换按钮", bindings.len());

        Self { engine, bindings }
    }

    /// 处理按钮点击，返回该按钮是否有绑定
    pub fn click(&mut self, button: &Handle) -> bool {
        let locales: Vec<Locale> = self
            .bindings
            .iter()
            .filter(|binding| {
                binding
                    .button()
                    .map(|bound| Rc::ptr_eq(&bound, button))
                    .unwrap_or(false)
            })
            .map(|binding| binding.locale)
            .collect();

        for locale in &locales {
            self.select(*locale);
        }

        !locales.is_empty()
    }

    /// 直接切换语言，已处于该语言时不做任何事
    pub fn select(&mut self, locale: Locale) -> Activation {
        if self.engine.locale() == locale {
            return Activation::AlreadyActive;
        }
        self.engine.activate(locale)
    }

    pub fn bindings(&self) -> &[ButtonBinding] {
        &self.bindings
    }

    pub fn engine(&self) -> &SubstitutionEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SubstitutionEngine {
        &mut self.engine
    }

    pub fn into_engine(self) -> SubstitutionEngine {
        self.engine
    }
}

fn contains_marker(label: &str, markers: &[String]) -> bool {
    markers
        .iter()
        .any(|marker| !marker.is_empty() && label.contains(marker.as_str()))
}

fn find_buttons(document: &Handle) -> Vec<Handle> {
    let mut buttons = Vec::new();
    let mut stack = vec![document.clone()];

    while let Some(node) = stack.pop() {
        if get_node_name(&node) == Some(constants::SWITCH_BUTTON_ELEMENT) {
            buttons.push(node.clone());
        }

        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }

    buttons
}
