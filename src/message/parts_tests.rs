//! Tests for embed sub-objects.

use serde_json::{Value, json};

use super::{Author, Field, Footer, Image, Thumbnail, ValidationError};

fn parse(json: &str) -> Value {
    serde_json::from_str(json).unwrap()
}

mod footer {
    use super::*;

    #[test]
    fn text_only_omits_icon() {
        let mut footer = Footer::new();
        footer.text("built by ci");

        assert_eq!(footer.serialize().unwrap(), r#"{"text":"built by ci"}"#);
    }

    #[test]
    fn icon_is_emitted_as_icon_url() {
        let mut footer = Footer::new();
        footer.text("t").icon("https://cdn.example.com/i.png");

        assert_eq!(
            parse(&footer.serialize().unwrap()),
            json!({"text": "t", "icon_url": "https://cdn.example.com/i.png"})
        );
    }

    #[test]
    fn missing_text_is_reported() {
        let mut footer = Footer::new();
        footer.icon("https://cdn.example.com/i.png");

        assert_eq!(footer.serialize(), Err(ValidationError::missing("text")));
    }

    #[test]
    fn text_at_limit_is_accepted() {
        let mut footer = Footer::new();
        footer.text("a".repeat(2048));

        assert!(footer.serialize().is_ok());
    }

    #[test]
    fn text_over_limit_is_rejected() {
        let mut footer = Footer::new();
        footer.text("a".repeat(2049));

        assert_eq!(
            footer.serialize(),
            Err(ValidationError::too_long("text", 2048))
        );
    }

    #[test]
    fn last_write_wins() {
        let mut footer = Footer::new();
        footer.text("first").text("second");

        assert_eq!(footer.serialize().unwrap(), r#"{"text":"second"}"#);
    }
}

mod media {
    use super::*;

    #[test]
    fn thumbnail_emits_url() {
        let mut thumbnail = Thumbnail::new();
        thumbnail.url("https://example.com/t.png");

        assert_eq!(
            thumbnail.serialize().unwrap(),
            r#"{"url":"https://example.com/t.png"}"#
        );
    }

    #[test]
    fn thumbnail_without_url_is_rejected() {
        assert_eq!(
            Thumbnail::new().serialize(),
            Err(ValidationError::missing("url"))
        );
    }

    #[test]
    fn image_emits_url() {
        let mut image = Image::new();
        image.url("https://example.com/i.png");

        assert_eq!(
            image.serialize().unwrap(),
            r#"{"url":"https://example.com/i.png"}"#
        );
    }

    #[test]
    fn image_without_url_is_rejected() {
        assert_eq!(Image::new().serialize(), Err(ValidationError::missing("url")));
    }
}

mod author {
    use super::*;

    #[test]
    fn all_keys_use_platform_names() {
        let mut author = Author::new();
        author
            .name("Ada")
            .url("https://example.com/ada")
            .icon("https://example.com/ada.png");

        assert_eq!(
            author.serialize().unwrap(),
            r#"{"name":"Ada","author_url":"https://example.com/ada","icon_url":"https://example.com/ada.png"}"#
        );
    }

    #[test]
    fn name_only_omits_optional_keys() {
        let mut author = Author::new();
        author.name("Ada");

        assert_eq!(author.serialize().unwrap(), r#"{"name":"Ada"}"#);
    }

    #[test]
    fn missing_name_is_rejected() {
        let mut author = Author::new();
        author.url("https://example.com");

        assert_eq!(author.serialize(), Err(ValidationError::missing("name")));
    }

    #[test]
    fn long_name_is_rejected() {
        let mut author = Author::new();
        author.name("x".repeat(257));

        assert_eq!(
            author.serialize(),
            Err(ValidationError::too_long("name", 256))
        );
    }
}

mod field {
    use super::*;

    #[test]
    fn inline_defaults_to_false() {
        let mut field = Field::new();
        field.name("Region").value("eu");

        assert_eq!(
            field.serialize().unwrap(),
            r#"{"name":"Region","value":"eu","inline":false}"#
        );
    }

    #[test]
    fn inline_flag_is_emitted() {
        let mut field = Field::new();
        field.name("n").value("v").inline(true);

        assert_eq!(parse(&field.serialize().unwrap())["inline"], json!(true));
    }

    #[test]
    fn missing_name_is_checked_before_value() {
        assert_eq!(Field::new().serialize(), Err(ValidationError::missing("name")));
    }

    #[test]
    fn missing_value_is_rejected() {
        let mut field = Field::new();
        field.name("n");

        assert_eq!(field.serialize(), Err(ValidationError::missing("value")));
    }

    #[test]
    fn long_name_is_rejected() {
        let mut field = Field::new();
        field.name("n".repeat(257)).value("v");

        assert_eq!(field.serialize(), Err(ValidationError::too_long("name", 256)));
    }

    #[test]
    fn long_value_is_rejected() {
        let mut field = Field::new();
        field.name("n").value("v".repeat(1025));

        assert_eq!(
            field.serialize(),
            Err(ValidationError::too_long("value", 1024))
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut field = Field::new();
        field.name("é".repeat(256)).value("ü".repeat(1024));

        assert!(field.serialize().is_ok());
    }

    #[test]
    fn special_characters_are_escaped() {
        let mut field = Field::new();
        field.name(r#"say "hi""#).value("back\\slash\nnew line\u{1}");

        let json = field.serialize().unwrap();
        let value = parse(&json);

        assert_eq!(value["name"], json!(r#"say "hi""#));
        assert_eq!(value["value"], json!("back\\slash\nnew line\u{1}"));
        assert!(json.contains(r#"\"hi\""#));
        assert!(json.contains(r"\u0001"));
    }
}
