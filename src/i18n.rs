// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 翻译接口
///
/// 导入组件通过该接口获取提示信息，不直接依赖全局 locale。
pub trait Translator: Send + Sync {
    /// 翻译消息（无参数）
    fn translate(&self, key: &str) -> String;

    /// 翻译消息（带参数，占位符格式 `%{name}`）
    fn translate_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        replace_placeholders(self.translate(key), args)
    }
}

/// 绑定固定语言的翻译器
#[derive(Debug, Clone)]
pub struct I18nTranslator {
    locale: String,
}

impl I18nTranslator {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

impl Translator for I18nTranslator {
    fn translate(&self, key: &str) -> String {
        rust_i18n::t!(key, locale = self.locale.as_str()).to_string()
    }
}

fn replace_placeholders(mut message: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        message = message.replace(&placeholder, v);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_english() {
        let translator = I18nTranslator::new("en");

        assert_eq!(translator.translate("entity.name"), "Product Suppliers");
        assert_eq!(
            translator.translate_with_args("import.product_not_found", &[("id", "12")]),
            "Product with ID 12 not found, ignoring this line"
        );
    }

    #[test]
    fn test_translate_chinese() {
        let translator = I18nTranslator::new("zh-CN");

        let msg = translator.translate_with_args("import.supplier_not_found", &[("id", "4")]);
        assert!(msg.contains('4'));
        assert!(msg.contains("供应商"));
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let translator = I18nTranslator::new("de");

        assert_eq!(
            translator.translate("import.product_unresolved"),
            "Failed to resolve product"
        );
    }

    #[test]
    fn test_placeholder_replacement() {
        assert_eq!(
            replace_placeholders("a %{x} b %{x} %{y}".to_string(), &[("x", "1"), ("y", "2")]),
            "a 1 b 1 2"
        );
    }
}
