use proptest::prelude::*;

use crate::{
    AnchorSpec, Corner9, EDGE_MARGIN, Origin, Point, PointerPolicy, Rect, Size,
    corner_to_fraction, resolve_position,
};

fn corner_strategy() -> impl Strategy<Value = Corner9> {
    prop::sample::select(Corner9::ALL.to_vec())
}

fn area_strategy() -> impl Strategy<Value = Rect> {
    (-2000i32..2000, -2000i32..2000, 50i32..3000, 50i32..3000)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn policy_strategy() -> impl Strategy<Value = PointerPolicy> {
    prop_oneof![
        Just(PointerPolicy::AllowOverlap),
        (0i32..60).prop_map(|padding| PointerPolicy::AvoidPointer { padding }),
    ]
}

proptest! {
    #[test]
    fn resolved_box_stays_inside_work_area(
        area in area_strategy(),
        widget_anchor in corner_strategy(),
        tooltip_anchor in corner_strategy(),
        widget_origin in any::<bool>(),
        wx in -4000i32..4000,
        wy in -4000i32..4000,
        ww in 0i32..500,
        wh in 0i32..500,
        tw in 1i32..400,
        th in 1i32..200,
        px in -4000i32..4000,
        py in -4000i32..4000,
        ox in -50i32..50,
        oy in -50i32..50,
        policy in policy_strategy(),
    ) {
        let anchor = AnchorSpec {
            origin: if widget_origin { Origin::Widget } else { Origin::Mouse },
            widget_anchor,
            tooltip_anchor,
            offset_x: ox,
            offset_y: oy,
        };
        let tip = Size::new(tw, th);
        let p = resolve_position(
            &anchor,
            &Rect::new(wx, wy, ww, wh),
            tip,
            Point::new(px, py),
            &area,
            policy,
        );
        if tw <= area.w - 2 * EDGE_MARGIN {
            prop_assert!(p.x >= area.left() + EDGE_MARGIN);
            prop_assert!(p.x + tw <= area.right() - EDGE_MARGIN);
        } else {
            prop_assert_eq!(p.x, area.left());
        }
        if th <= area.h - 2 * EDGE_MARGIN {
            prop_assert!(p.y >= area.top() + EDGE_MARGIN);
            prop_assert!(p.y + th <= area.bottom() - EDGE_MARGIN);
        } else {
            prop_assert_eq!(p.y, area.top());
        }
    }
}

proptest! {
    #[test]
    fn fractions_scale_widget_extent(corner in corner_strategy(), w in 0i32..2000, h in 0i32..2000) {
        let (rx, ry) = corner_to_fraction(corner);
        let (dx, dy) = corner.offset_in(w, h);
        prop_assert_eq!(dx, (w as f32 * rx).floor() as i32);
        prop_assert_eq!(dy, (h as f32 * ry).floor() as i32);
    }
}
