//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use locale_patch::core::format_output_path;

    #[test]
    fn as_is() {
        let final_destination = format_output_path("/home/username/site/index.html", "en");

        assert_eq!(final_destination, "/home/username/site/index.html");
    }

    #[test]
    fn substitute_lang() {
        let final_destination = format_output_path("/home/username/site/index.%lang%.html", "en");

        assert_eq!(final_destination, "/home/username/site/index.en.html");
    }

    #[test]
    fn substitute_lang_multi() {
        let final_destination = format_output_path("/srv/%lang%/index.%lang%.html", "pt");

        assert_eq!(final_destination, "/srv/pt/index.pt.html");
    }

    #[test]
    fn sanitize() {
        let final_destination = format_output_path("out/%lang%.html", r#"en/US:"x"|?"#);

        assert_eq!(final_destination, "out/en_US__x___.html");
    }

    #[test]
    fn region_subtag() {
        let final_destination = format_output_path("%lang%.html", "pt-BR");

        assert_eq!(final_destination, "pt-BR.html");
    }
}
