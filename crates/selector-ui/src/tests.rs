#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use selector_core::*;
    use web_time::{Duration, Instant};

    use crate::selector::{ACTIVE_OPACITY, SLIDER_TAG, TRACK_TAG, fraction};
    use crate::*;

    const LABELS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

    fn options(n: usize) -> Vec<SelectorOption<&'static str>> {
        LABELS[..n]
            .iter()
            .map(|l| SelectorOption::new(*l, *l))
            .collect()
    }

    type Log<T> = Rc<RefCell<Vec<Selection<T>>>>;

    fn with_recorder<T: Clone + 'static>(props: SelectorProps<T>) -> (SelectorProps<T>, Log<T>) {
        let log: Log<T> = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (props.on_press(move |s| sink.borrow_mut().push(s)), log)
    }

    fn selector(
        props: SelectorProps<&'static str>,
    ) -> (SwitchSelector<&'static str>, ManualClock) {
        let clock = ManualClock::new(Instant::now());
        let s = SwitchSelector::with_clock(props, Arc::new(clock.clone())).unwrap();
        (s, clock)
    }

    fn touch(clock: &ManualClock, kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
        PointerEvent::touch(1, kind, Vec2::new(x, y), clock.now())
    }

    fn text_of(view: &View) -> (String, Color) {
        match &view.kind {
            ViewKind::Text { text, color, .. } => (text.clone(), *color),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_fraction_sign_rule() {
        for n in 1..=6 {
            for i in 0..n {
                let ltr = fraction(i, n, TextDirection::Ltr);
                let rtl = fraction(i, n, TextDirection::Rtl);
                assert_eq!(ltr, i as f32 / n as f32);
                assert_eq!(rtl, -(i as f32 / n as f32));
                assert!((0.0..1.0).contains(&ltr));
            }
        }
    }

    #[test]
    fn test_initialize_defaults_and_fallbacks() {
        let (s, _) = selector(SelectorProps::new(options(4)));
        assert_eq!(s.selected_index(), 0);
        assert_eq!(s.animated_position(), 0.0);
        assert_eq!(s.phase(), SelectorPhase::Unmeasured);

        let (s, _) = selector(SelectorProps::new(options(4)).initial(2));
        assert_eq!(s.selected_index(), 2);
        assert_eq!(s.animated_position(), 0.5);

        let (s, _) = selector(
            SelectorProps::new(options(4))
                .initial(3)
                .direction(TextDirection::Rtl),
        );
        assert_eq!(s.animated_position(), -0.75);

        let (s, _) = selector(SelectorProps::new(options(2)).initial(7));
        assert_eq!(s.selected_index(), 0);
    }

    #[test]
    fn test_ambient_direction_is_used_without_override() {
        let s = with_text_direction(TextDirection::Rtl, || {
            SwitchSelector::new(SelectorProps::new(options(2)).initial(1)).unwrap()
        });
        assert_eq!(s.animated_position(), -0.5);
    }

    #[test]
    fn test_empty_options_rejected() {
        let err = SwitchSelector::new(SelectorProps::<u8>::new(vec![]))
            .err()
            .expect("empty option list must fail");
        assert!(matches!(err, SelectorError::NoOptions));
    }

    #[test]
    fn test_tap_selects_and_reports_value() {
        let (props, log) = with_recorder(SelectorProps::new(options(3)));
        let (mut s, _) = selector(props);

        assert!(s.select_by_tap(2));
        assert_eq!(s.selected_index(), 2);
        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert!(matches!(log[0], Selection::Value("C")));
    }

    #[test]
    fn test_tap_with_return_object_reports_option() {
        let (props, log) = with_recorder(SelectorProps::new(options(3)).return_object(true));
        let (mut s, _) = selector(props);

        s.select_by_tap(1);
        let log = log.borrow();
        match &log[0] {
            Selection::Full(o) => {
                assert_eq!(o.label, "B");
                assert_eq!(o.value, "B");
            }
            other => panic!("expected full option, got {other:?}"),
        }
        assert_eq!(*log[0].value(), "B");
    }

    #[test]
    fn test_tap_guards() {
        let (props, log) = with_recorder(SelectorProps::new(options(3)).disabled(true));
        let (mut s, _) = selector(props);
        assert!(!s.select_by_tap(1));
        assert_eq!(s.selected_index(), 0);
        assert!(log.borrow().is_empty());

        let (props, log) = with_recorder(SelectorProps::new(options(1)));
        let (mut s, _) = selector(props);
        assert!(!s.select_by_tap(0));
        assert!(log.borrow().is_empty());

        let (props, log) = with_recorder(SelectorProps::new(options(3)));
        let (mut s, _) = selector(props);
        assert!(!s.select_by_tap(3));
        assert_eq!(s.selected_index(), 0);
        assert!(log.borrow().is_empty());
        assert!(!s.is_animating());
    }

    #[test]
    fn test_tap_without_handler_still_selects() {
        let (mut s, _) = selector(SelectorProps::new(options(2)));
        assert!(s.select_by_tap(1));
        assert_eq!(s.selected_index(), 1);
    }

    #[test]
    fn test_swipe_moves_one_step_and_stops_at_edges() {
        let right = GestureState {
            dx: 50.0,
            dy: 10.0,
            vx: 0.2,
            ..Default::default()
        };
        let left = GestureState {
            dx: -50.0,
            dy: 10.0,
            vx: -0.2,
            ..Default::default()
        };

        let (props, log) = with_recorder(SelectorProps::new(options(3)));
        let (mut s, _) = selector(props);

        assert_eq!(s.select_by_swipe(&left), Some(SwipeDirection::Left));
        assert_eq!(s.selected_index(), 0);
        assert!(log.borrow().is_empty());

        s.select_by_swipe(&right);
        s.select_by_swipe(&right);
        assert_eq!(s.selected_index(), 2);
        s.select_by_swipe(&right);
        assert_eq!(s.selected_index(), 2);
        assert_eq!(log.borrow().len(), 2);

        s.select_by_swipe(&left);
        assert_eq!(s.selected_index(), 1);

        let steep = GestureState {
            dy: 100.0,
            ..right
        };
        assert_eq!(s.select_by_swipe(&steep), None);
        assert_eq!(s.selected_index(), 1);
    }

    #[test]
    fn test_swipe_ignored_when_disabled() {
        let (mut s, _) = selector(SelectorProps::new(options(3)).disabled(true));
        let g = GestureState {
            dx: 50.0,
            vx: 1.0,
            ..Default::default()
        };
        assert_eq!(s.select_by_swipe(&g), None);
        assert_eq!(s.selected_index(), 0);
    }

    #[test]
    fn test_controlled_value_changes_once() {
        let (props, log) = with_recorder(SelectorProps::new(options(4)));
        let (mut s, _) = selector(props);

        s.set_value(Some(2));
        assert_eq!(s.selected_index(), 2);
        assert_eq!(log.borrow().len(), 1);

        s.set_value(Some(2));
        assert_eq!(log.borrow().len(), 1);

        // Null guard: clearing the value leaves the selection alone.
        s.set_value(None);
        assert_eq!(s.selected_index(), 2);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_controlled_value_with_suppressed_callback() {
        let (props, log) = with_recorder(
            SelectorProps::new(options(3))
                .disable_value_change_on_press(true)
                .disabled(true),
        );
        let (mut s, _) = selector(props);

        s.set_value(Some(1));
        assert_eq!(s.selected_index(), 1);
        assert!(s.is_animating());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_set_props_reconciles_value_and_clamps() {
        let (mut s, _) = selector(SelectorProps::new(options(4)).initial(3));

        s.set_props(SelectorProps::new(options(2))).unwrap();
        assert_eq!(s.selected_index(), 1);
        assert_eq!(s.animated_position(), 0.5);

        let (props, log) = with_recorder(SelectorProps::new(options(2)).value(Some(0)));
        s.set_props(props).unwrap();
        assert_eq!(s.selected_index(), 0);
        assert_eq!(log.borrow().len(), 1);

        assert!(matches!(
            s.set_props(SelectorProps::new(vec![])),
            Err(SelectorError::NoOptions)
        ));
        assert_eq!(s.props().options.len(), 2);
    }

    #[test]
    fn test_slider_hidden_until_measured() {
        for n in 1..=5 {
            let (mut s, _) = selector(SelectorProps::new(options(n)));
            assert!(s.render().find_tagged(SLIDER_TAG).is_none());
            assert_eq!(s.slider_offset_px(), None);

            s.on_layout_measured(300.0);
            assert_eq!(s.phase(), SelectorPhase::Idle);
            let view = s.render();
            let slider = view.find_tagged(SLIDER_TAG).expect("slider after measure");
            assert_eq!(slider.modifier.width, Some(300.0 / n as f32));
            assert_eq!(s.slider_width_px(), Some(300.0 / n as f32));
        }
    }

    #[test]
    fn test_layout_measurement_edge_cases() {
        let (mut s, _) = selector(SelectorProps::new(options(2)));
        s.on_layout_measured(0.0);
        assert_eq!(s.phase(), SelectorPhase::Unmeasured);
        s.on_layout_measured(f32::NAN);
        assert_eq!(s.track_width(), None);

        s.on_layout_measured(240.0);
        s.on_layout_measured(240.0);
        assert_eq!(s.track_width(), Some(240.0));

        s.select_by_tap(1);
        s.on_layout_measured(400.0);
        assert_eq!(s.track_width(), Some(400.0));
        assert_eq!(s.slider_offset_px(), Some(0.0));
    }

    #[test]
    fn test_measure_runs_layout() {
        let (mut s, _) = selector(SelectorProps::new(options(3)));
        let width = s.measure(300.0).unwrap();
        assert!((width - 300.0).abs() < 0.01);
        assert_eq!(s.track_width(), Some(width));

        let regions = s.hit_regions();
        assert_eq!(regions.len(), 3);
        assert!((regions[1].rect.x - 100.0).abs() < 0.01);
        assert!((regions[1].rect.w - 100.0).abs() < 0.01);
        assert!((regions[1].rect.h - 42.0).abs() < 0.01);

        let result = layout(&s.render(), 300.0).unwrap();
        let slider = result.rect_of_tag(SLIDER_TAG).unwrap();
        assert!((slider.w - 100.0).abs() < 0.01);
        assert!(result.rect_of_tag(TRACK_TAG).is_some());
        assert_eq!(result.hit_test(Vec2::new(150.0, 10.0)), Some(1));
    }

    #[test]
    fn test_measure_respects_density() {
        let (mut s, _) = selector(SelectorProps::new(options(2)));
        let width = with_density(Density { scale: 2.0 }, || s.measure(200.0)).unwrap();
        assert!((width - 200.0).abs() < 0.01);
        assert!((s.hit_regions()[1].rect.x - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_tween_uses_cubic_easing_by_default() {
        let (mut s, clock) = selector(SelectorProps::new(options(4)));
        s.on_layout_measured(200.0);
        s.select_by_tap(2);

        clock.advance_ms(50);
        assert!(s.tick());
        assert!((s.animated_position() - 0.0625).abs() < 1e-4);

        clock.advance_ms(50);
        assert!(!s.tick());
        assert_eq!(s.animated_position(), 0.5);
        assert_eq!(s.slider_offset_px(), Some(100.0));
    }

    #[test]
    fn test_retrigger_starts_from_nominal_position() {
        let (mut s, clock) = selector(
            SelectorProps::new(options(4))
                .easing(Easing::Linear)
                .animation_duration(Duration::from_millis(100)),
        );
        s.select_by_tap(1);
        clock.advance_ms(50);
        s.tick();
        assert!((s.animated_position() - 0.125).abs() < 1e-4);

        s.select_by_tap(2);
        assert_eq!(s.animated_position(), 0.25);

        clock.advance_ms(50);
        s.tick();
        assert!((s.animated_position() - 0.375).abs() < 1e-4);
        clock.advance_ms(50);
        s.tick();
        assert_eq!(s.animated_position(), 0.5);
    }

    #[test]
    fn test_pointer_swipe_right() {
        let (props, log) = with_recorder(SelectorProps::new(options(3)));
        let (mut s, clock) = selector(props);
        s.measure(300.0).unwrap();

        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 50.0, 20.0));
        assert_eq!(s.phase(), SelectorPhase::Idle);

        clock.advance_ms(10);
        s.handle_pointer(&touch(&clock, PointerEventKind::Move, 60.0, 20.0));
        assert_eq!(s.phase(), SelectorPhase::Dragging);

        clock.advance_ms(10);
        s.handle_pointer(&touch(&clock, PointerEventKind::Move, 90.0, 22.0));
        s.handle_pointer(&touch(&clock, PointerEventKind::Up, 90.0, 22.0));

        assert_eq!(s.selected_index(), 1);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(s.phase(), SelectorPhase::Dragging);

        clock.advance_ms(100);
        assert!(!s.tick());
        assert_eq!(s.phase(), SelectorPhase::Idle);
    }

    #[test]
    fn test_pointer_slow_drag_is_not_a_swipe() {
        let (mut s, clock) = selector(SelectorProps::new(options(3)));
        s.measure(300.0).unwrap();

        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 50.0, 20.0));
        clock.advance_ms(10);
        s.handle_pointer(&touch(&clock, PointerEventKind::Move, 60.0, 20.0));
        clock.advance_ms(100);
        s.handle_pointer(&touch(&clock, PointerEventKind::Move, 61.0, 20.0));
        s.handle_pointer(&touch(&clock, PointerEventKind::Up, 61.0, 20.0));

        assert_eq!(s.selected_index(), 0);
        assert_eq!(s.phase(), SelectorPhase::Idle);
    }

    #[test]
    fn test_pointer_terminate_evaluates_swipe() {
        let (mut s, clock) = selector(SelectorProps::new(options(3)).initial(2));
        s.measure(300.0).unwrap();

        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 250.0, 20.0));
        clock.advance_ms(10);
        s.handle_pointer(&touch(&clock, PointerEventKind::Move, 240.0, 20.0));
        clock.advance_ms(10);
        s.handle_pointer(&touch(&clock, PointerEventKind::Move, 200.0, 20.0));
        s.handle_pointer(&touch(&clock, PointerEventKind::Cancel, 200.0, 20.0));

        assert_eq!(s.selected_index(), 1);
    }

    #[test]
    fn test_pointer_tap_hits_option_band() {
        let (props, log) = with_recorder(SelectorProps::new(options(3)));
        let (mut s, clock) = selector(props);
        s.measure(300.0).unwrap();

        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 150.0, 20.0));
        clock.advance_ms(30);
        // Inside the deadzone: still a tap.
        s.handle_pointer(&touch(&clock, PointerEventKind::Move, 153.0, 23.0));
        s.handle_pointer(&touch(&clock, PointerEventKind::Up, 153.0, 23.0));
        assert_eq!(s.selected_index(), 1);

        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 250.0, 20.0));
        s.handle_pointer(&touch(&clock, PointerEventKind::Up, 250.0, 20.0));
        assert_eq!(s.selected_index(), 2);
        assert_eq!(log.borrow().len(), 2);

        // Outside every band.
        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 150.0, 80.0));
        s.handle_pointer(&touch(&clock, PointerEventKind::Up, 150.0, 80.0));
        assert_eq!(s.selected_index(), 2);
    }

    #[test]
    fn test_pointer_tap_rtl_mirrors_bands() {
        let (mut s, clock) = selector(SelectorProps::new(options(3)).direction(TextDirection::Rtl));
        s.measure(300.0).unwrap();

        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 40.0, 20.0));
        s.handle_pointer(&touch(&clock, PointerEventKind::Up, 40.0, 20.0));
        assert_eq!(s.selected_index(), 2);
        assert_eq!(s.fraction(2), -2.0 / 3.0);

        clock.advance_ms(200);
        s.tick();
        assert!((s.slider_offset_px().unwrap() + 200.0).abs() < 0.01);
    }

    #[test]
    fn test_tap_falls_back_to_equal_bands_without_layout() {
        let (mut s, _) = selector(SelectorProps::new(options(4)));
        assert_eq!(s.option_at(Vec2::new(10.0, 0.0)), None);
        s.on_layout_measured(400.0);
        assert_eq!(s.option_at(Vec2::new(10.0, 0.0)), Some(0));
        assert_eq!(s.option_at(Vec2::new(399.0, 0.0)), Some(3));
        assert_eq!(s.option_at(Vec2::new(401.0, 0.0)), None);
    }

    #[test]
    fn test_two_fingers_never_swipe_or_tap() {
        let (mut s, clock) = selector(SelectorProps::new(options(3)));
        s.measure(300.0).unwrap();

        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 50.0, 20.0));
        s.handle_pointer(&PointerEvent::touch(
            2,
            PointerEventKind::Down,
            Vec2::new(150.0, 20.0),
            clock.now(),
        ));
        clock.advance_ms(10);
        s.handle_pointer(&touch(&clock, PointerEventKind::Move, 120.0, 20.0));
        assert_eq!(s.phase(), SelectorPhase::Idle);

        s.handle_pointer(&touch(&clock, PointerEventKind::Up, 120.0, 20.0));
        s.handle_pointer(&PointerEvent::touch(
            2,
            PointerEventKind::Up,
            Vec2::new(150.0, 20.0),
            clock.now(),
        ));
        assert_eq!(s.selected_index(), 0);
    }

    #[test]
    fn test_render_colors_follow_palette_and_overrides() {
        let props = SelectorProps::new(vec![
            SelectorOption::new("Off", "off"),
            SelectorOption::new("On", "on").active_color(Color::from_hex("#00FF00")),
        ]);
        let (mut s, _) = selector(props);
        s.on_layout_measured(200.0);

        let view = s.render();
        let palette = style::resolve(StyleType::Default);
        let track = view.find_tagged(TRACK_TAG).unwrap();
        assert_eq!(track.modifier.background, Some(palette.foreground));
        assert_eq!(track.modifier.height, Some(42.0));
        assert_eq!(
            view.find_tagged(SLIDER_TAG).unwrap().modifier.background,
            Some(palette.background)
        );

        let (label, color) = text_of(view.find_tagged(0).unwrap().children.last().unwrap());
        assert_eq!(label, "Off");
        assert_eq!(color, palette.foreground);
        let (_, color) = text_of(view.find_tagged(1).unwrap().children.last().unwrap());
        assert_eq!(color, palette.foreground_inverse);

        s.select_by_tap(1);
        let view = s.render();
        assert_eq!(
            view.find_tagged(SLIDER_TAG).unwrap().modifier.background,
            Some(Color::from_hex("#00FF00"))
        );
    }

    #[test]
    fn test_style_config_from_json() {
        let style: SelectorStyle = serde_json::from_str(
            r##"{
                "type": "danger",
                "size": "large",
                "rounded": true,
                "button_color": "#112233",
                "selected_text_style": { "color": "#FFFF00", "font_family": "Inter" }
            }"##,
        )
        .unwrap();
        assert_eq!(style.style_type, StyleType::Danger);
        assert_eq!(style.border_radius, 13.0);
        assert_eq!(style.image_style, ImageStyle::default());

        let (mut s, _) = selector(SelectorProps::new(options(2)).style(style));
        s.on_layout_measured(300.0);
        assert_eq!(s.button_height(), 54.0);

        let view = s.render();
        let track = view.find_tagged(TRACK_TAG).unwrap();
        assert_eq!(track.modifier.clip_rounded, Some(27.0));
        let slider = view.find_tagged(SLIDER_TAG).unwrap();
        assert_eq!(slider.modifier.background, Some(Color(0x11, 0x22, 0x33, 255)));

        match &view.find_tagged(0).unwrap().children[0].kind {
            ViewKind::Text {
                color,
                font_size,
                font_family,
                ..
            } => {
                assert_eq!(*color, Color::from_hex("#FFFF00"));
                assert_eq!(*font_size, 18.0);
                assert_eq!(font_family, "Inter");
            }
            other => panic!("unexpected {other:?}"),
        }
        match &view.find_tagged(1).unwrap().children[0].kind {
            ViewKind::Text { color, font_family, .. } => {
                assert_eq!(*color, style::resolve(StyleType::Danger).foreground_inverse);
                assert_eq!(font_family, "System");
            }
            other => panic!("unexpected {other:?}"),
        }

        let back = serde_json::to_value(s.props().style.clone()).unwrap();
        assert_eq!(back["type"], "danger");
        assert_eq!(back["button_color"], "#112233");
    }

    #[test]
    fn test_tight_and_fixed_height() {
        let style = SelectorStyle {
            tight: true,
            button_height: Some(30.0),
            ..Default::default()
        };
        let (s, _) = selector(SelectorProps::new(options(2)).style(style));
        let view = s.render();
        let h = view.find_tagged(TRACK_TAG).unwrap().modifier.height.unwrap();
        assert!((h - 22.0).abs() < 1e-3);
        // Corner radius keeps the configured value unless rounded.
        assert_eq!(
            view.find_tagged(TRACK_TAG).unwrap().modifier.clip_rounded,
            Some(13.0)
        );
    }

    #[test]
    fn test_label_icon_precedence() {
        let style = LabelStyle {
            color: Color::WHITE,
            icon_tint: Color::BLACK,
            icon_width: 30.0,
            icon_height: 30.0,
            font_size: 14.0,
            line_height: 20.0,
            font_family: "System".into(),
        };
        let custom = Box(Modifier::new().size(12.0, 12.0));

        let both = SelectorOption::new("x", 1)
            .image(ImageSource::Asset("x.png".into()))
            .icon(custom);
        let views = OptionLabel(&both, false, &style);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].kind, ViewKind::Box);

        let factory = SelectorOption::new("y", 2).icon_fn(|selected| {
            Text(if selected { "on" } else { "off" })
        });
        let views = OptionLabel(&factory, true, &style);
        assert_eq!(text_of(&views[0]).0, "on");

        let image = SelectorOption::new("z", 3).image(ImageSource::Uri("https://x/z.png".into()));
        let views = OptionLabel(&image, false, &style);
        match &views[0].kind {
            ViewKind::Image { tint, .. } => assert_eq!(*tint, Some(Color::BLACK)),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(views[0].modifier.width, Some(30.0));

        let plain = SelectorOption::new("w", 4);
        let views = OptionLabel(&plain, false, &style);
        assert_eq!(views.len(), 1);
        assert_eq!(text_of(&views[0]), ("w".to_string(), Color::WHITE));
    }

    #[test]
    fn test_band_semantics() {
        let (s, _) = selector(SelectorProps::new(options(2)).disabled(true));
        let view = s.render();
        let band = view.find_tagged(0).unwrap();
        let sem = band.semantics.as_ref().unwrap();
        assert_eq!(sem.role, Role::Button);
        assert_eq!(sem.label.as_deref(), Some("A"));
        assert_eq!(sem.selected, Some(true));
        assert!(!sem.enabled);
        assert!(band.modifier.click);
    }

    #[test]
    fn test_slider_lands_on_selected_band() {
        for direction in [TextDirection::Ltr, TextDirection::Rtl] {
            let (mut s, clock) = selector(SelectorProps::new(options(3)).direction(direction));
            s.measure(300.0).unwrap();

            for index in [2, 1, 0] {
                s.select_by_tap(index);
                clock.advance_ms(200);
                s.tick();

                let view = s.render();
                let result = with_text_direction(direction, || layout(&view, 300.0)).unwrap();
                let slider = result.rect_of_tag(SLIDER_TAG).unwrap();
                let band = result.rect_of_tag(index as u64).unwrap();
                assert!(
                    (slider.x - band.x).abs() < 0.01,
                    "{direction:?} index {index}: slider at {} band at {}",
                    slider.x,
                    band.x
                );
                assert!((slider.w - band.w).abs() < 0.01);

                if direction.is_rtl() {
                    let expected = 200.0 - 100.0 * index as f32;
                    assert!((band.x - expected).abs() < 0.01);
                }
            }
        }
    }

    #[test]
    fn test_image_style_overrides_icon() {
        let style: SelectorStyle = serde_json::from_str(
            r##"{ "image_style": { "width": 24, "height": 18, "tint": "#FF0000" } }"##,
        )
        .unwrap();
        let props = SelectorProps::new(vec![
            SelectorOption::new("Off", 0).image(ImageSource::Asset("off.png".into())),
            SelectorOption::new("On", 1).image(ImageSource::Asset("on.png".into())),
        ])
        .style(style);
        let s = SwitchSelector::new(props).unwrap();

        let view = s.render();
        for tag in [0, 1] {
            let icon = &view.find_tagged(tag).unwrap().children[0];
            assert_eq!(icon.modifier.width, Some(24.0));
            assert_eq!(icon.modifier.height, Some(18.0));
            match &icon.kind {
                ViewKind::Image { tint, .. } => assert_eq!(*tint, Some(Color::from_hex("#FF0000"))),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_container_padding_insets_track() {
        let (mut s, clock) = selector(
            SelectorProps::new(options(2)).container(Modifier::new().padding(10.0)),
        );
        let width = s.measure(300.0).unwrap();
        assert!((width - 280.0).abs() < 0.01);

        let regions = s.hit_regions();
        assert!((regions[0].rect.x - 10.0).abs() < 0.01);
        assert!((regions[1].rect.x - 150.0).abs() < 0.01);

        // A tap in the padding misses every band.
        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 295.0, 20.0));
        s.handle_pointer(&touch(&clock, PointerEventKind::Up, 295.0, 20.0));
        assert_eq!(s.selected_index(), 0);

        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 285.0, 20.0));
        s.handle_pointer(&touch(&clock, PointerEventKind::Up, 285.0, 20.0));
        assert_eq!(s.selected_index(), 1);
    }

    #[test]
    fn test_pressed_band_dims_until_drag_or_release() {
        let (mut s, clock) = selector(SelectorProps::new(options(3)));
        s.measure(300.0).unwrap();

        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 150.0, 20.0));
        assert_eq!(s.pressed_index(), Some(1));
        let view = s.render();
        assert_eq!(view.find_tagged(1).unwrap().modifier.alpha, Some(ACTIVE_OPACITY));
        assert_eq!(view.find_tagged(0).unwrap().modifier.alpha, None);

        clock.advance_ms(10);
        s.handle_pointer(&touch(&clock, PointerEventKind::Move, 152.0, 21.0));
        assert_eq!(s.pressed_index(), Some(1));

        // Leaving the deadzone turns the press into a drag.
        clock.advance_ms(10);
        s.handle_pointer(&touch(&clock, PointerEventKind::Move, 170.0, 21.0));
        assert_eq!(s.pressed_index(), None);
        s.handle_pointer(&touch(&clock, PointerEventKind::Up, 170.0, 21.0));

        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 250.0, 20.0));
        assert_eq!(s.pressed_index(), Some(2));
        s.handle_pointer(&touch(&clock, PointerEventKind::Up, 250.0, 20.0));
        assert_eq!(s.pressed_index(), None);
        assert!(s.render().find_tagged(2).unwrap().modifier.alpha.is_none());

        let (mut s, clock) = selector(SelectorProps::new(options(3)).disabled(true));
        s.measure(300.0).unwrap();
        s.handle_pointer(&touch(&clock, PointerEventKind::Down, 150.0, 20.0));
        assert_eq!(s.pressed_index(), None);
    }

    #[test]
    fn test_render_outline() {
        let (mut s, _) = selector(SelectorProps::new(vec![
            SelectorOption::new("Off", "off"),
            SelectorOption::new("On", "on"),
        ]));
        s.on_layout_measured(200.0);

        insta::assert_snapshot!(s.render().outline().trim_end(), @r#"
        Row
          Box tag=18446744073709551615 h=42.0 bg=#FFFFFF
            Row
              Box tag=18446744073709551614 w=100.0 h=42.0 bg=#2196F3 dx=0.0
              Row tag=0 click
                Text "Off" #FFFFFF 14.0
              Row tag=1 click
                Text "On" #333333 14.0
        "#);
    }
}
