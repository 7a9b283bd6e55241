#[cfg(test)]
mod tests {
    use tipkit_anim::AnimationMode;
    use tipkit_geom::{Corner9, Origin, PointerPolicy};

    use crate::{Error, FontWeight, MAX_PIXELS, RawTooltip, State, TooltipConfig, parse_rgb};

    #[test]
    fn overlay_replaces_only_given_fields() {
        let base = TooltipConfig::default();

        let user_overlay = ron::from_str::<RawTooltip>(
            "(show_delay: Some(400), fg: Some(\"red\"), bg: Some(\"#222222\"), widget_anchor: Some(\"S\"))",
        )
        .unwrap();

        let merged = user_overlay.overlay(&base).unwrap();

        assert_eq!(merged.show_delay, 400);
        assert_eq!(merged.fg, parse_rgb("red").unwrap());
        assert_eq!(merged.bg, parse_rgb("#222222").unwrap());
        assert_eq!(merged.widget_anchor, Corner9::S);
        // Fields not overridden stay from base
        assert_eq!(merged.hide_delay, base.hide_delay);
        assert_eq!(merged.font, base.font);
    }

    #[test]
    fn application_then_instance_layers() {
        let app = ron::from_str::<RawTooltip>(
            "(origin: Some(widget), animation: Some(none), font: Some((size: Some(12.0))))",
        )
        .unwrap();
        let instance = ron::from_str::<RawTooltip>(
            "(animation: Some(slide), font: Some((weight: Some(bold))), pointer_policy: Some(avoid_pointer(padding: 12)))",
        )
        .unwrap();

        let config = TooltipConfig::overlay_all(&[app, instance]).unwrap();

        assert_eq!(config.origin, Origin::Widget);
        assert_eq!(config.animation, AnimationMode::Slide);
        assert_eq!(config.font.size, 12.0);
        assert_eq!(config.font.weight, FontWeight::Bold);
        assert_eq!(config.font.family, "TkDefaultFont");
        assert_eq!(
            config.pointer_policy,
            PointerPolicy::AvoidPointer { padding: 12 }
        );
    }

    #[test]
    fn bad_values_name_their_field() {
        let cases = [
            ("(state: Some(\"hidden\"))", "state"),
            ("(widget_anchor: Some(\"up\"))", "widget_anchor"),
            ("(tooltip_anchor: Some(\"\"))", "tooltip_anchor"),
            ("(bg: Some(\"not-a-color\"))", "bg"),
            ("(opacity: Some(-0.1))", "opacity"),
            ("(ipadx: Some(-1))", "ipadx"),
        ];
        for (src, expected) in cases {
            let raw = ron::from_str::<RawTooltip>(src).unwrap();
            match raw.overlay(&TooltipConfig::default()) {
                Err(Error::Validation { field, .. }) => assert_eq!(field, expected, "{src}"),
                other => panic!("{src}: expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn distances_beyond_screen_scale_are_rejected() {
        let base = TooltipConfig::default();
        let cases = [
            (
                RawTooltip {
                    padx: Some(i32::MAX),
                    ..RawTooltip::default()
                },
                "padx",
            ),
            (
                RawTooltip {
                    pady: Some(i32::MIN),
                    ..RawTooltip::default()
                },
                "pady",
            ),
            (
                RawTooltip {
                    slide_distance: Some(i32::MAX),
                    ..RawTooltip::default()
                },
                "slide_distance",
            ),
            (
                RawTooltip {
                    pointer_policy: Some(PointerPolicy::AvoidPointer { padding: i32::MAX }),
                    ..RawTooltip::default()
                },
                "pointer_policy",
            ),
        ];
        for (raw, expected) in cases {
            match raw.overlay(&base) {
                Err(Error::Validation { field, .. }) => assert_eq!(field, expected),
                other => panic!("{expected}: expected validation error, got {other:?}"),
            }
        }

        let edge = RawTooltip {
            padx: Some(MAX_PIXELS),
            pady: Some(-MAX_PIXELS),
            slide_distance: Some(MAX_PIXELS),
            ..RawTooltip::default()
        };
        let config = edge.overlay(&base).unwrap();
        assert_eq!(config.anchor_spec().offset_x, MAX_PIXELS);
    }

    #[test]
    fn state_string_is_case_insensitive() {
        let raw = RawTooltip {
            state: Some("DISABLED".into()),
            ..RawTooltip::default()
        };
        let config = raw.overlay(&TooltipConfig::default()).unwrap();
        assert_eq!(config.state, State::Disabled);
        assert!(!config.is_enabled());
        assert!(RawTooltip::default().is_empty());
        assert!(!raw.is_empty());
    }

    #[test]
    fn resolved_config_round_trips_through_json() {
        let config = TooltipConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: TooltipConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
