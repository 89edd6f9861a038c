use std::sync::Arc;

use selector_core::*;
use selector_ui::*;
use web_time::Instant;

const TRACK_WIDTH: f32 = 300.0;

fn options() -> Vec<SelectorOption<&'static str>> {
    vec![
        SelectorOption::new("Off", "off"),
        SelectorOption::new("Auto", "auto").image(ImageSource::Asset("auto.png".into())),
        SelectorOption::new("On", "on").active_color(Color::from_hex("#4CAF50")),
    ]
}

fn settle(selector: &mut SwitchSelector<&'static str>, clock: &ManualClock) {
    loop {
        clock.advance_ms(16);
        let running = selector.tick();
        log::info!(
            "slider at {:>7.2}px ({:?})",
            selector.slider_offset_px().unwrap_or(0.0),
            selector.phase()
        );
        if !running {
            break;
        }
    }
}

fn tap(selector: &mut SwitchSelector<&'static str>, clock: &ManualClock, x: f32) {
    let p = Vec2::new(x, 20.0);
    selector.handle_pointer(&PointerEvent::touch(1, PointerEventKind::Down, p, clock.now()));
    clock.advance_ms(40);
    selector.handle_pointer(&PointerEvent::touch(1, PointerEventKind::Up, p, clock.now()));
}

fn swipe(selector: &mut SwitchSelector<&'static str>, clock: &ManualClock, from: f32, to: f32) {
    let steps = 5;
    selector.handle_pointer(&PointerEvent::touch(
        1,
        PointerEventKind::Down,
        Vec2::new(from, 20.0),
        clock.now(),
    ));
    for i in 1..=steps {
        clock.advance_ms(10);
        let x = from + (to - from) * i as f32 / steps as f32;
        selector.handle_pointer(&PointerEvent::touch(
            1,
            PointerEventKind::Move,
            Vec2::new(x, 22.0),
            clock.now(),
        ));
    }
    selector.handle_pointer(&PointerEvent::touch(
        1,
        PointerEventKind::Up,
        Vec2::new(to, 22.0),
        clock.now(),
    ));
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let clock = ManualClock::new(Instant::now());
    let props = SelectorProps::new(options())
        .initial(0)
        .on_press(|s: Selection<&'static str>| log::info!("on_press -> {:?}", s.value()));
    let mut selector = SwitchSelector::with_clock(props, Arc::new(clock.clone()))?;

    let width = selector.measure(TRACK_WIDTH)?;
    log::info!("track measured at {width}px, phase {:?}", selector.phase());

    log::info!("tap on \"On\"");
    tap(&mut selector, &clock, 250.0);
    settle(&mut selector, &clock);

    log::info!("swipe left");
    swipe(&mut selector, &clock, 250.0, 180.0);
    settle(&mut selector, &clock);

    log::info!("host sets value to 0 without notification");
    let quiet = SelectorProps::new(options())
        .value(Some(0))
        .disable_value_change_on_press(true);
    selector.set_props(quiet)?;
    settle(&mut selector, &clock);

    println!("{}", selector.render().outline());
    Ok(())
}
