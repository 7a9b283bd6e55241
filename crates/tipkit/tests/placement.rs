//! Where the controller puts the overlay.

use std::{rc::Rc, time::Duration};

use tipkit::{ManualScheduler, Point, Rect, Size, Tooltip, TooltipConfig, sim::SimHost};
use tipkit_geom::{Corner9, Origin, PointerPolicy};

const WIDGET: Rect = Rect::new(100, 100, 80, 24);

fn shown_at(host: SimHost, config: TooltipConfig, text: &str, pointer: Point) -> Point {
    let host = Rc::new(host);
    let sched = Rc::new(ManualScheduler::new());
    let tip = Tooltip::bind(host.clone(), sched.clone(), config, text).unwrap();
    tip.pointer_enter(pointer);
    sched.advance(Duration::from_millis(500));
    let pos = tip.overlay_position().unwrap();
    assert_eq!(host.single_window().unwrap().position, pos);
    pos
}

fn screen() -> SimHost {
    SimHost::new(WIDGET, Size::new(1280, 800))
}

#[test]
fn mouse_origin_offsets_from_pointer() {
    let pos = shown_at(
        screen(),
        TooltipConfig::default(),
        "Save",
        Point::new(120, 110),
    );
    assert_eq!(pos, Point::new(121, 111));
}

#[test]
fn widget_origin_centers_on_widget() {
    let config = TooltipConfig {
        origin: Origin::Widget,
        widget_anchor: Corner9::Center,
        tooltip_anchor: Corner9::Center,
        padx: 0,
        pady: 0,
        ..TooltipConfig::default()
    };
    // "Save" measures 26x16; widget centre is (140, 112).
    let pos = shown_at(screen(), config, "Save", Point::new(0, 0));
    assert_eq!(pos, Point::new(127, 104));
}

#[test]
fn widget_origin_below_widget() {
    let config = TooltipConfig {
        origin: Origin::Widget,
        widget_anchor: Corner9::SW,
        tooltip_anchor: Corner9::NW,
        padx: 0,
        pady: 4,
        ..TooltipConfig::default()
    };
    let pos = shown_at(screen(), config, "Save", Point::new(0, 0));
    assert_eq!(pos, Point::new(100, 128));
}

#[test]
fn clamps_against_the_right_edge() {
    let pos = shown_at(
        screen(),
        TooltipConfig::default(),
        "Save",
        Point::new(1270, 10),
    );
    assert_eq!(pos, Point::new(1280 - 5 - 26, 11));
}

#[test]
fn respects_a_reserved_menu_bar() {
    let host = screen();
    host.set_work_area(Some(Rect::new(0, 25, 1280, 775)));
    let pos = shown_at(host, TooltipConfig::default(), "Save", Point::new(50, 0));
    assert_eq!(pos, Point::new(51, 30));
}

#[test]
fn falls_back_to_screen_without_work_area() {
    let host = screen();
    host.set_work_area(None);
    let pos = shown_at(
        host,
        TooltipConfig::default(),
        "Save",
        Point::new(1279, 799),
    );
    assert_eq!(pos, Point::new(1280 - 5 - 26, 800 - 5 - 16));
}

#[test]
fn avoid_pointer_moves_the_box_off_the_cursor() {
    let config = TooltipConfig {
        tooltip_anchor: Corner9::Center,
        padx: 0,
        pady: 0,
        pointer_policy: PointerPolicy::avoid(),
        ..TooltipConfig::default()
    };
    let pointer = Point::new(400, 300);
    let pos = shown_at(screen(), config, "Save", pointer);
    // Centred on the pointer would be (387, 292); the first fallback is below.
    assert_eq!(pos, Point::new(387, 320));
    let boxed = Rect::new(pos.x, pos.y, 26, 16);
    assert!(!tipkit_geom::point_in_rect(pointer, &boxed));
}
