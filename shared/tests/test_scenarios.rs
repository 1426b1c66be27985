#[cfg(test)]
mod tests {
    use site_enhance_shared::{
        counter::{self, CounterAnimation, CounterFrame},
        menu::{self, Menu, MenuCommand, MenuEvent, MenuState},
        modal::{ModalPhase, ModalState},
        submission::{self, SubmitDecision},
        validation::{FieldSnapshot, RuleTable},
        EnhanceConfig,
    };

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("site_enhance_shared=debug")
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn contact_form_with_empty_required_name_never_proceeds() {
        init_tracing();
        let rules = RuleTable::contact_form().expect("rules");
        let fields = [
            FieldSnapshot {
                name: "firstName",
                value: "",
                required: true,
                label: Some("First name*"),
                ..FieldSnapshot::default()
            },
            FieldSnapshot {
                name: "email",
                value: "a@b.com",
                required: true,
                ..FieldSnapshot::default()
            },
        ];
        let verdicts: Vec<_> = fields.iter().map(|field| rules.validate(field)).collect();

        assert_eq!(verdicts[0].message(), Some("First name is required."));
        assert!(verdicts[1].is_valid());
        assert!(matches!(
            submission::decide(&verdicts, Some(true)),
            SubmitDecision::Blocked {
                invalid_fields: 1,
                ..
            }
        ));
    }

    #[test]
    fn narrow_viewport_toggle_sequence() {
        init_tracing();
        let mut menu = Menu::new(&EnhanceConfig::default());
        let click = MenuEvent::ToggleClicked {
            header_height: None,
        };

        assert!(matches!(menu.handle(click), MenuCommand::Open { .. }));
        assert_eq!(menu::aria_expanded(menu.state()), "true");
        assert_eq!(menu.handle(MenuEvent::Resized { width: 500.0 }), MenuCommand::Nothing);
        assert_eq!(menu.handle(click), MenuCommand::Close);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn counter_from_attribute_lands_on_target() {
        let target = counter::parse_target(Some("1234"));
        let mut animation = CounterAnimation::new(target, 2000);
        let mut last = animation.step();
        while let CounterFrame::Running(_) = last {
            last = animation.step();
        }
        assert_eq!(last, CounterFrame::Done(1234));
    }

    #[test]
    fn modal_lifecycle_with_custom_fade() {
        let config = EnhanceConfig::from_json(r#"{"modal_fade_ms": 120}"#).expect("config");
        assert_eq!(config.modal_fade_ms, 120);

        let mut modal = ModalState::new();
        modal.show("Title", "Body");
        let token = modal.close().expect("token");
        assert!(modal.finish_close(token));
        assert_eq!(modal.phase(), ModalPhase::Hidden);
        assert!(!modal.finish_close(token));
    }
}
