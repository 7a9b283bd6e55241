//! Value parsers for geometry flags.

use tipkit_geom::{Point, Rect, Size};

/// Parse `sep`-separated integers, requiring exactly `n` of them.
fn ints(s: &str, sep: char, n: usize, what: &str) -> Result<Vec<i32>, String> {
    let parts: Vec<&str> = s.split(sep).map(str::trim).collect();
    if parts.len() != n {
        return Err(format!("expected {what}, got {s:?}"));
    }
    parts
        .iter()
        .map(|p| {
            p.parse::<i32>()
                .map_err(|e| format!("bad number {p:?} in {s:?}: {e}"))
        })
        .collect()
}

/// `X,Y`
pub fn parse_point(s: &str) -> Result<Point, String> {
    let v = ints(s, ',', 2, "X,Y")?;
    Ok(Point::new(v[0], v[1]))
}

/// `X,Y,W,H`
pub fn parse_rect(s: &str) -> Result<Rect, String> {
    let v = ints(s, ',', 4, "X,Y,W,H")?;
    if v[2] < 0 || v[3] < 0 {
        return Err(format!("negative extent in {s:?}"));
    }
    Ok(Rect::new(v[0], v[1], v[2], v[3]))
}

/// `WxH`
pub fn parse_size(s: &str) -> Result<Size, String> {
    let v = ints(&s.to_ascii_lowercase(), 'x', 2, "WxH")?;
    if v[0] < 0 || v[1] < 0 {
        return Err(format!("negative size {s:?}"));
    }
    Ok(Size::new(v[0], v[1]))
}
