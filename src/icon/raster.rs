//! Minimal aliased rasterizer over `RgbaImage`.
//!
//! Shapes are given as inclusive pixel boxes (`[x0, y0, x1, y1]` covers
//! columns `x0..=x1`). A pixel is covered when its centre lies inside the
//! shape. Later shapes overwrite earlier ones; anything outside the canvas
//! is clipped.

use image::{Rgba, RgbaImage};

/// Write `color` at `(x, y)`, ignoring out-of-bounds writes.
fn plot(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    canvas.put_pixel(x as u32, y as u32, color);
}

/// Clamp an inclusive span to `0..limit`, returning `None` when empty.
fn clip_span(lo: i32, hi: i32, limit: u32) -> Option<(i32, i32)> {
    let lo = lo.max(0);
    let hi = hi.min(limit as i32 - 1);
    (lo <= hi).then_some((lo, hi))
}

/// Ellipse inscribed in an inclusive box, in continuous pixel coordinates.
#[derive(Debug, Clone, Copy)]
struct Ellipse {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl Ellipse {
    fn from_bbox([x0, y0, x1, y1]: [i32; 4]) -> Self {
        Self {
            cx: (x0 + x1 + 1) as f64 / 2.0,
            cy: (y0 + y1 + 1) as f64 / 2.0,
            rx: (x1 - x0 + 1) as f64 / 2.0,
            ry: (y1 - y0 + 1) as f64 / 2.0,
        }
    }

    fn shrink(self, by: f64) -> Option<Self> {
        let rx = self.rx - by;
        let ry = self.ry - by;
        (rx > 0.0 && ry > 0.0).then_some(Self { rx, ry, ..self })
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        let dx = (x as f64 + 0.5 - self.cx) / self.rx;
        let dy = (y as f64 + 0.5 - self.cy) / self.ry;
        dx * dx + dy * dy <= 1.0
    }
}

/// Fill the ellipse inscribed in `bbox`.
pub fn fill_ellipse(canvas: &mut RgbaImage, bbox: [i32; 4], color: Rgba<u8>) {
    if bbox[2] < bbox[0] || bbox[3] < bbox[1] {
        return;
    }
    let ellipse = Ellipse::from_bbox(bbox);
    let Some((x0, x1)) = clip_span(bbox[0], bbox[2], canvas.width()) else {
        return;
    };
    let Some((y0, y1)) = clip_span(bbox[1], bbox[3], canvas.height()) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            if ellipse.contains(x, y) {
                plot(canvas, x, y, color);
            }
        }
    }
}

/// Fill the ellipse inscribed in `bbox` and stroke a `width`-pixel ring
/// along its inside edge.
pub fn outline_ellipse(
    canvas: &mut RgbaImage,
    bbox: [i32; 4],
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    width: i32,
) {
    if bbox[2] < bbox[0] || bbox[3] < bbox[1] {
        return;
    }
    let outer = Ellipse::from_bbox(bbox);
    let inner = outer.shrink(width.max(0) as f64);
    let Some((x0, x1)) = clip_span(bbox[0], bbox[2], canvas.width()) else {
        return;
    };
    let Some((y0, y1)) = clip_span(bbox[1], bbox[3], canvas.height()) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            if !outer.contains(x, y) {
                continue;
            }
            match inner {
                Some(inner) if inner.contains(x, y) => plot(canvas, x, y, fill),
                _ => plot(canvas, x, y, outline),
            }
        }
    }
}

/// Draw a butt-capped segment of the given width between the pixel centres
/// of `from` and `to`, both ends inclusive.
pub fn draw_line(
    canvas: &mut RgbaImage,
    from: (i32, i32),
    to: (i32, i32),
    color: Rgba<u8>,
    width: i32,
) {
    let width = width.max(1);
    let half = width as f64 / 2.0;
    let (from, to) = if from <= to { (from, to) } else { (to, from) };

    let (ax, ay) = (from.0 as f64, from.1 as f64);
    let (dx, dy) = ((to.0 - from.0) as f64, (to.1 - from.1) as f64);
    let len = (dx * dx + dy * dy).sqrt();

    // Square of side `width` for a degenerate segment.
    if len == 0.0 {
        let lo = -(width / 2);
        for oy in lo..lo + width {
            for ox in lo..lo + width {
                plot(canvas, from.0 + ox, from.1 + oy, color);
            }
        }
        return;
    }

    let (ux, uy) = (dx / len, dy / len);
    // Even widths put the extra row above horizontal lines and the extra
    // column right of vertical lines.
    let (nx, ny) = (-uy, ux);

    let reach = width + 1;
    let Some((x0, x1)) = clip_span(
        from.0.min(to.0) - reach,
        from.0.max(to.0) + reach,
        canvas.width(),
    ) else {
        return;
    };
    let Some((y0, y1)) = clip_span(
        from.1.min(to.1) - reach,
        from.1.max(to.1) + reach,
        canvas.height(),
    ) else {
        return;
    };

    const EPS: f64 = 1e-9;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let (px, py) = (x as f64 - ax, y as f64 - ay);
            let along = px * ux + py * uy;
            if along < -EPS || along > len + EPS {
                continue;
            }
            let across = px * nx + py * ny;
            if across >= -half - EPS && across < half - EPS {
                plot(canvas, x, y, color);
            }
        }
    }
}
