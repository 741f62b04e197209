/// Shape parameters for one icon, derived from its side length.
///
/// Every value uses floor division so the same `size` always yields the
/// same geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub center: i32,
    pub radius: i32,
    pub outline_width: i32,
    pub line_width: i32,
    pub line_length: i32,
    pub dot_radius: i32,
}

impl IconGeometry {
    pub fn for_size(size: i32) -> Self {
        let radius = size / 3;
        Self {
            center: size / 2,
            radius,
            outline_width: (size / 32).max(1),
            line_width: (size / 16).max(1),
            line_length: radius / 2,
            dot_radius: (size / 32).max(1),
        }
    }

    /// Inclusive bounding box of the main circle.
    pub fn circle_bbox(&self) -> [i32; 4] {
        let (c, r) = (self.center, self.radius);
        [c - r, c - r, c + r, c + r]
    }

    /// Connector segments as (inner, outer) endpoints: left, right, top, bottom.
    pub fn connectors(&self) -> [((i32, i32), (i32, i32)); 4] {
        let (c, r, l) = (self.center, self.radius, self.line_length);
        [
            ((c - r - l, c), (c - r, c)),
            ((c + r, c), (c + r + l, c)),
            ((c, c - r - l), (c, c - r)),
            ((c, c + r), (c, c + r + l)),
        ]
    }

    /// Outer end of each connector, in the same order as [`Self::connectors`].
    pub fn line_ends(&self) -> [(i32, i32); 4] {
        let (c, r, l) = (self.center, self.radius, self.line_length);
        [
            (c - r - l, c),
            (c + r + l, c),
            (c, c - r - l),
            (c, c + r + l),
        ]
    }

    /// Inclusive bounding box of the dot centred on `(x, y)`.
    pub fn dot_bbox(&self, (x, y): (i32, i32)) -> [i32; 4] {
        let d = self.dot_radius;
        [x - d, y - d, x + d, y + d]
    }
}
