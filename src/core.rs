use std::fs;
use std::path::Path;

use crate::parsers::html::{html_to_dom, normalize_encoding, serialize_document};
use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::{engine_for_document, ActivationReport, Locale, TranslationConfig};

/// Options controlling how a static document is patched
#[derive(Debug, Clone, Default)]
pub struct PatchOptions {
    /// Character encoding of the input (defaults to UTF-8)
    pub encoding: Option<String>,
    /// Locale the output document should be rendered in
    pub locale: Locale,
    /// Collect trimmed fragments that have no table entry
    pub report_untranslated: bool,
}

/// Result of patching one document
#[derive(Debug, Clone)]
pub struct PatchOutput {
    /// Serialized document, in the input encoding
    pub data: Vec<u8>,
    /// Rewrite counts, `None` when the requested locale was already active
    pub report: Option<ActivationReport>,
    /// Fragments without a translation (empty unless requested)
    pub untranslated: Vec<String>,
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Patches a document held in memory
///
/// The document is parsed, its baseline captured, the requested locale
/// activated, and the result serialized back using the same encoding.
///
/// # Examples
///
/// ```
/// use locale_patch::core::{patch_document_from_data, PatchOptions};
/// use locale_patch::translation::{Locale, TranslationConfig};
///
/// let options = PatchOptions {
///     locale: Locale::Target,
///     ..PatchOptions::default()
/// };
/// let html = b"<html><body><a>Contato</a></body></html>";
///
/// let output = patch_document_from_data(html, &options, &TranslationConfig::default()).unwrap();
/// assert!(String::from_utf8_lossy(&output.data).contains("<a>Contact</a>"));
/// ```
pub fn patch_document_from_data(
    input_data: &[u8],
    options: &PatchOptions,
    config: &TranslationConfig,
) -> TranslationResult<PatchOutput> {
    let encoding = normalize_encoding(options.encoding.as_deref());

    let dom = html_to_dom(input_data, &encoding)
        .map_err(|e| TranslationError::ParseError(format!("无法解析文档: {}", e)))?;

    let mut engine = engine_for_document(dom.document.clone(), config)?;
    engine.capture_baseline();

    let report = engine.activate(options.locale).report().copied();

    let untranslated = if options.report_untranslated {
        engine.untranslated()
    } else {
        Vec::new()
    };

    let data = serialize_document(&dom, &encoding)
        .map_err(|e| TranslationError::SerializationError(format!("无法序列化文档: {}", e)))?;

    Ok(PatchOutput {
        data,
        report,
        untranslated,
    })
}

/// Patches a local HTML file
pub fn patch_document<P: AsRef<Path>>(
    path: P,
    options: &PatchOptions,
    config: &TranslationConfig,
) -> TranslationResult<PatchOutput> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TranslationError::InvalidInput(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let data = fs::read(path).map_err(|e| TranslationError::from(e).with_context(path.display()))?;
    patch_document_from_data(&data, options, config)
}

/// Substitutes `%lang%` in an output path template
pub fn format_output_path(path: &str, lang: &str) -> String {
    path.replace(
        "%lang%",
        &lang.replace(['/', '\\', ':', '?', '"', '|', '<', '>'], "_"),
    )
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_locale_leaves_document_alone() {
        let html = b"<html><head></head><body><p>Prevenir</p></body></html>";
        let output =
            patch_document_from_data(html, &PatchOptions::default(), &TranslationConfig::default())
                .unwrap();

        assert!(output.report.is_none());
        assert!(String::from_utf8_lossy(&output.data).contains("<p>Prevenir</p>"));
    }

    #[test]
    fn missing_file_is_invalid_input() {
        let err = patch_document(
            "/nonexistent/page.html",
            &PatchOptions::default(),
            &TranslationConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, TranslationError::InvalidInput(_)));
    }
}
