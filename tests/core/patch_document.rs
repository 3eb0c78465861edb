//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use std::fs;

    use locale_patch::core::{patch_document, patch_document_from_data, PatchOptions};
    use locale_patch::translation::{Locale, TranslationConfig};

    fn target() -> PatchOptions {
        PatchOptions {
            locale: Locale::Target,
            ..PatchOptions::default()
        }
    }

    #[test]
    fn translates_body_text_and_placeholders() {
        let html = br#"<html><head><title>Contato</title></head><body><nav><a>  Contato  </a></nav><input placeholder="Seu melhor e-mail"></body></html>"#;

        let output = patch_document_from_data(html, &target(), &TranslationConfig::default()).unwrap();
        let result = String::from_utf8_lossy(&output.data);

        assert!(result.contains("<a>  Contact  </a>"));
        assert!(result.contains(r#"placeholder="Your best email""#));
        // head 中的文本不在收集范围内
        assert!(result.contains("<title>Contato</title>"));

        let report = output.report.expect("target locale should apply");
        assert_eq!(report.rewritten, 1);
        assert_eq!(report.placeholders_rewritten, 1);
    }

    #[test]
    fn translates_site_sections() {
        let html = "<html><body><h3>Ginecologia Estética</h3><input placeholder=\"Seu melhor e-mail\"><button>Enviar Mensagem</button></body></html>";

        let output =
            patch_document_from_data(html.as_bytes(), &target(), &TranslationConfig::default()).unwrap();
        let result = String::from_utf8_lossy(&output.data);

        assert!(result.contains("<h3>Aesthetic Gynecology</h3>"));
        assert!(result.contains(r#"placeholder="Your best email""#));
        assert!(result.contains("<button>Send Message</button>"));
    }

    #[test]
    fn script_text_is_untouched() {
        let html = b"<html><body><p>Ginecologia</p><script>var t = 'Ginecologia';</script></body></html>";

        let output = patch_document_from_data(html, &target(), &TranslationConfig::default()).unwrap();
        let result = String::from_utf8_lossy(&output.data);

        assert!(result.contains("<p>Gynecology</p>"));
        assert!(result.contains("var t = 'Ginecologia';"));
    }

    #[test]
    fn reports_untranslated_fragments() {
        let options = PatchOptions {
            report_untranslated: true,
            ..target()
        };
        let html = b"<html><body><p>Dr Susan</p><p>Prevenir</p><p> Dr Susan </p></body></html>";

        let output = patch_document_from_data(html, &options, &TranslationConfig::default()).unwrap();

        assert_eq!(output.untranslated, vec!["Dr Susan".to_string()]);
    }

    #[test]
    fn custom_table_without_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let table_path = dir.path().join("table.json");
        fs::write(&table_path, r#"{ "Prevenir": "Prévenir" }"#).unwrap();

        let config = TranslationConfig {
            target_lang: "fr".to_string(),
            table_path: Some(table_path.display().to_string()),
            builtin_table: false,
            ..TranslationConfig::default()
        };
        let html = b"<html><body><p>Prevenir</p><p>Contato</p></body></html>";

        let output = patch_document_from_data(html, &target(), &config).unwrap();
        let result = String::from_utf8_lossy(&output.data);

        assert!(result.contains("<p>Prévenir</p>"));
        assert!(result.contains("<p>Contato</p>"));
    }

    #[test]
    fn keeps_input_encoding() {
        let (encoded, _, _) =
            encoding_rs::WINDOWS_1252.encode("<html><body><p>Clínicas</p><p>Olá</p></body></html>");
        let options = PatchOptions {
            encoding: Some("windows-1252".to_string()),
            ..target()
        };

        let output = patch_document_from_data(&encoded, &options, &TranslationConfig::default()).unwrap();
        let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&output.data);

        assert!(decoded.contains("<p>Clinics</p>"));
        assert!(decoded.contains("<p>Olá</p>"));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, "<html><body><h2>QUAL O SEU OBJETIVO?</h2></body></html>").unwrap();

        let output = patch_document(&page, &target(), &TranslationConfig::default()).unwrap();

        assert!(String::from_utf8_lossy(&output.data).contains("<h2>WHAT IS YOUR GOAL?</h2>"));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use locale_patch::core::{patch_document, patch_document_from_data, PatchOptions};
    use locale_patch::translation::{TranslationConfig, TranslationError};

    #[test]
    fn missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.html");

        let err = patch_document(&missing, &PatchOptions::default(), &TranslationConfig::default())
            .unwrap_err();

        assert!(matches!(err, TranslationError::InvalidInput(_)));
    }

    #[test]
    fn missing_table_file() {
        let config = TranslationConfig {
            table_path: Some("/nonexistent/locale-patch/table.json".to_string()),
            ..TranslationConfig::default()
        };

        let err = patch_document_from_data(
            b"<html><body></body></html>",
            &PatchOptions::default(),
            &config,
        )
        .unwrap_err();

        assert!(matches!(err, TranslationError::TableError(_)));
    }
}
