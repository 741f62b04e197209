pub mod geometry;
pub mod raster;

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::IconError;
use geometry::IconGeometry;

/// Fill and accent colors for one icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgba<u8>,
    pub secondary: Rgba<u8>,
}

impl Palette {
    pub const NORMAL: Palette = Palette {
        primary: Rgba([102, 126, 234, 255]),
        secondary: Rgba([118, 75, 162, 255]),
    };

    pub const DISABLED: Palette = Palette {
        primary: Rgba([128, 128, 128, 255]),
        secondary: Rgba([96, 96, 96, 255]),
    };

    pub fn for_state(disabled: bool) -> Self {
        if disabled {
            Self::DISABLED
        } else {
            Self::NORMAL
        }
    }
}

/// One entry of the generated icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub disabled: bool,
}

impl IconSpec {
    pub fn new(size: u32, disabled: bool) -> Self {
        Self { size, disabled }
    }

    /// `icon32.png`, or `icon32-disabled.png` for the gray variant.
    pub fn file_name(&self) -> String {
        let suffix = if self.disabled { "-disabled" } else { "" };
        format!("icon{}{}.png", self.size, suffix)
    }

    pub fn render(&self) -> Result<RgbaImage, IconError> {
        render(self.size, self.disabled)
    }
}

/// Draw the icon: an outlined circle with four connectors, each ending in a dot.
///
/// The result depends only on `size` and `disabled`.
pub fn render(size: u32, disabled: bool) -> Result<RgbaImage, IconError> {
    let side = match i32::try_from(size) {
        Ok(side) if side > 0 => side,
        _ => return Err(IconError::InvalidSize(size)),
    };

    let palette = Palette::for_state(disabled);
    let geometry = IconGeometry::for_size(side);
    debug!(size, disabled, ?geometry, "Rendering icon");

    let mut canvas = RgbaImage::new(size, size);

    raster::outline_ellipse(
        &mut canvas,
        geometry.circle_bbox(),
        palette.primary,
        palette.secondary,
        geometry.outline_width,
    );

    for (from, to) in geometry.connectors() {
        raster::draw_line(&mut canvas, from, to, palette.secondary, geometry.line_width);
    }

    // Dots go last so they sit on top of the line ends.
    for end in geometry.line_ends() {
        raster::fill_ellipse(&mut canvas, geometry.dot_bbox(end), palette.secondary);
    }

    Ok(canvas)
}
