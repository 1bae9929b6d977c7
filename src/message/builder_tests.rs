//! Tests for `Message` and the `webhook` entry point.

use serde_json::{Value, json};

use super::{Embed, Message, MessageFlag, ValidationError, webhook};

fn parse(json: &str) -> Value {
    serde_json::from_str(json).unwrap()
}

fn embed_with_description(description: &str) -> Embed {
    let mut embed = Embed::new();
    embed.description(description);
    embed
}

fn top_level_keys(json: &str) -> Vec<String> {
    let mut keys: Vec<String> = parse(json).as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

mod scenarios {
    use super::*;

    #[test]
    fn content_only_emits_content_and_null_embeds() {
        let message = webhook(|m| {
            m.content("hello");
        });

        assert_eq!(
            message.serialize().unwrap(),
            r#"{"embeds":null,"content":"hello"}"#
        );
        assert_eq!(
            parse(&message.serialize().unwrap()),
            json!({"content": "hello", "embeds": null})
        );
    }

    #[test]
    fn empty_message_is_missing_content() {
        assert_eq!(
            Message::new().serialize(),
            Err(ValidationError::MissingContent)
        );
    }

    #[test]
    fn embed_without_content_is_accepted() {
        let message = webhook(|m| {
            m.embed(|e| {
                e.description("x").color_rgb(255, 0, 0);
            });
        });

        assert_eq!(
            message.serialize().unwrap(),
            r#"{"embeds":[{"description":"x","color":16711680}]}"#
        );
    }

    #[test]
    fn long_field_name_propagates_from_nested_embed() {
        let message = webhook(|m| {
            m.content("hi").embed(|e| {
                e.field(|f| {
                    f.name("n".repeat(257)).value("v");
                });
            });
        });

        assert_eq!(
            message.serialize(),
            Err(ValidationError::too_long("name", 256))
        );
    }

    #[test]
    fn suppress_embeds_with_embeds_is_incompatible() {
        let message = webhook(|m| {
            m.add_embed(embed_with_description("x"))
                .add_flags([MessageFlag::SuppressEmbeds]);
        });

        assert_eq!(message.serialize(), Err(ValidationError::IncompatibleFlag));
    }

    #[test]
    fn suppress_embeds_without_embeds_is_accepted() {
        let message = webhook(|m| {
            m.content("see https://example.com")
                .add_flags([MessageFlag::SuppressEmbeds]);
        });

        assert_eq!(parse(&message.serialize().unwrap())["flags"], json!(4));
    }
}

mod lengths {
    use super::*;

    #[test]
    fn username_over_80_is_rejected() {
        let message = webhook(|m| {
            m.username("u".repeat(81)).content("c");
        });

        assert_eq!(
            message.serialize(),
            Err(ValidationError::too_long("username", 80))
        );
    }

    #[test]
    fn username_at_80_is_accepted() {
        let message = webhook(|m| {
            m.username("u".repeat(80)).content("c");
        });

        assert!(message.serialize().is_ok());
    }

    #[test]
    fn content_over_2000_is_rejected() {
        let message = webhook(|m| {
            m.content("c".repeat(2001));
        });

        assert_eq!(
            message.serialize(),
            Err(ValidationError::too_long("content", 2000))
        );
    }

    #[test]
    fn thread_name_over_100_is_rejected() {
        let message = webhook(|m| {
            m.content("c").thread_name("t".repeat(101));
        });

        assert_eq!(
            message.serialize(),
            Err(ValidationError::too_long("thread_name", 100))
        );
    }

    #[test]
    fn embed_title_over_256_is_rejected() {
        let message = webhook(|m| {
            m.embed(|e| {
                e.description("d").title("t".repeat(257));
            });
        });

        assert_eq!(
            message.serialize(),
            Err(ValidationError::too_long("title", 256))
        );
    }
}

mod ordering {
    use super::*;

    #[test]
    fn username_is_checked_before_embeds() {
        let message = webhook(|m| {
            m.username("u".repeat(81)).add_embed(Embed::new());
        });

        assert_eq!(
            message.serialize(),
            Err(ValidationError::too_long("username", 80))
        );
    }

    #[test]
    fn embeds_are_checked_before_content() {
        let message = webhook(|m| {
            m.content("c".repeat(2001)).add_embed(Embed::new());
        });

        assert_eq!(message.serialize(), Err(ValidationError::MissingContent));
    }

    #[test]
    fn content_length_is_checked_before_thread_name() {
        let message = webhook(|m| {
            m.content("c".repeat(2001)).thread_name("t".repeat(101));
        });

        assert_eq!(
            message.serialize(),
            Err(ValidationError::too_long("content", 2000))
        );
    }

    #[test]
    fn thread_name_is_checked_before_flags() {
        let message = webhook(|m| {
            m.add_embed(embed_with_description("x"))
                .thread_name("t".repeat(101))
                .add_flags([MessageFlag::SuppressEmbeds]);
        });

        assert_eq!(
            message.serialize(),
            Err(ValidationError::too_long("thread_name", 100))
        );
    }

    #[test]
    fn keys_follow_platform_order() {
        let message = webhook(|m| {
            m.add_flags([MessageFlag::SuppressNotifications])
                .thread_name("release")
                .avatar("https://example.com/a.png")
                .content("hi")
                .add_embed(embed_with_description("x"))
                .username("bot");
        });

        assert_eq!(
            message.serialize().unwrap(),
            concat!(
                r#"{"username":"bot","embeds":[{"description":"x"}],"content":"hi","#,
                r#""avatar_url":"https://example.com/a.png","thread_name":"release","flags":4096}"#
            )
        );
    }
}

mod embeds {
    use super::*;

    #[test]
    fn embeds_keep_insertion_order() {
        let message = webhook(|m| {
            m.add_embed(embed_with_description("first"))
                .embed(|e| {
                    e.description("second");
                })
                .add_embed(embed_with_description("third"));
        });

        let value = parse(&message.serialize().unwrap());
        let descriptions: Vec<_> = value["embeds"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["description"].as_str().unwrap())
            .collect();

        assert_eq!(descriptions, vec!["first", "second", "third"]);
        assert_eq!(message.embeds().len(), 3);
    }

    #[test]
    fn eleven_embeds_exceed_default_cap() {
        let mut message = Message::new();
        for i in 0..11 {
            message.add_embed(embed_with_description(&i.to_string()));
        }

        assert_eq!(
            message.serialize(),
            Err(ValidationError::TooManyEmbeds {
                count: 11,
                limit: 10
            })
        );
    }

    #[test]
    fn ten_embeds_fit_default_cap() {
        let mut message = Message::new();
        for i in 0..10 {
            message.add_embed(embed_with_description(&i.to_string()));
        }

        assert!(message.serialize().is_ok());
    }

    #[test]
    fn cap_can_be_lowered_or_disabled() {
        let mut message = Message::new();
        message
            .add_embed(embed_with_description("a"))
            .add_embed(embed_with_description("b"))
            .max_embeds(Some(1));

        assert_eq!(
            message.serialize(),
            Err(ValidationError::TooManyEmbeds { count: 2, limit: 1 })
        );

        for i in 0..20 {
            message.add_embed(embed_with_description(&i.to_string()));
        }
        message.max_embeds(None);

        assert!(message.serialize().is_ok());
    }
}

mod flags {
    use super::*;

    #[test]
    fn no_flags_omits_key() {
        let message = webhook(|m| {
            m.content("c");
        });

        assert!(parse(&message.serialize().unwrap()).get("flags").is_none());
    }

    #[test]
    fn flags_are_summed() {
        let message = webhook(|m| {
            m.content("c").add_flags([
                MessageFlag::SuppressEmbeds,
                MessageFlag::SuppressNotifications,
            ]);
        });

        assert_eq!(parse(&message.serialize().unwrap())["flags"], json!(4100));
    }

    #[test]
    fn repeated_flag_counts_once() {
        let message = webhook(|m| {
            m.content("c")
                .add_flags([MessageFlag::SuppressNotifications])
                .add_flags([
                    MessageFlag::SuppressNotifications,
                    MessageFlag::SuppressNotifications,
                ]);
        });

        assert_eq!(parse(&message.serialize().unwrap())["flags"], json!(4096));
        assert!(message.flags().contains(MessageFlag::SuppressNotifications));
    }
}

mod properties {
    use super::*;

    #[test]
    fn serialize_twice_is_byte_identical() {
        let message = webhook(|m| {
            m.username("bot").content("c").embed(|e| {
                e.title("t").description("d").field(|f| {
                    f.name("n").value("v");
                });
            });
        });

        assert_eq!(message.serialize().unwrap(), message.serialize().unwrap());
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let message = webhook(|m| {
            m.content("c").avatar("https://example.com/a.png");
        });

        assert_eq!(
            top_level_keys(&message.serialize().unwrap()),
            vec!["avatar_url", "content", "embeds"]
        );
    }

    #[test]
    fn strings_are_json_escaped() {
        let text = "quote \" backslash \\ newline \n tab \t";
        let message = webhook(|m| {
            m.content(text).username("a\"b");
        });

        let value = parse(&message.serialize().unwrap());

        assert_eq!(value["content"], json!(text));
        assert_eq!(value["username"], json!("a\"b"));
    }

    #[test]
    fn avatar_is_emitted_verbatim() {
        let url = "https://cdn.example.com/avatars/1.png?size=64&v=2";
        let message = webhook(|m| {
            m.content("c").avatar(url);
        });

        assert_eq!(parse(&message.serialize().unwrap())["avatar_url"], json!(url));
    }

    #[test]
    fn failed_serialize_leaves_builder_usable() {
        let mut message = Message::new();
        assert!(message.serialize().is_err());

        message.content("fixed");

        assert!(message.serialize().is_ok());
    }
}
