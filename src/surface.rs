//! Drawing surface seam between the face engine and a display.
//!
//! The engine only talks to [`DrawingSurface`]: a small set of stateful
//! drawing calls (current stroke/fill color, stroke width, antialiasing) plus
//! line, polygon and rectangle primitives. [`GraphicsContext`] implements it
//! for any embedded-graphics `DrawTarget`, so the same face draws onto a real
//! panel driver or a `MockDisplay` in tests.

use core::fmt::Debug;

use embedded_graphics::{
    draw_target::DrawTarget,
    prelude::{Dimensions, Point, Primitive, RgbColor, Size},
    primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle},
    Drawable,
};

/// Colors the face draws with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaceColor {
    Black,
    White,
}

impl FaceColor {
    /// Maps onto the target's own color type.
    pub fn to_rgb<C: RgbColor>(self) -> C {
        match self {
            FaceColor::Black => C::BLACK,
            FaceColor::White => C::WHITE,
        }
    }
}

/// Capability set the face renderer draws through.
///
/// Polygons are given as ordered outlines; the face only ever passes convex
/// hand shapes.
pub trait DrawingSurface {
    fn set_stroke_color(&mut self, color: FaceColor);
    fn set_fill_color(&mut self, color: FaceColor);
    fn set_stroke_width(&mut self, width: u8);
    fn set_antialiased(&mut self, enabled: bool);

    fn draw_line(&mut self, from: Point, to: Point);
    fn fill_polygon(&mut self, points: &[Point]);
    fn draw_polygon_outline(&mut self, points: &[Point]);
    fn fill_rect(&mut self, rect: Rectangle, corner_radius: u32);
}

/// [`DrawingSurface`] over an embedded-graphics draw target.
///
/// embedded-graphics has no antialiased rasterizer; the flag is tracked so
/// callers can query it but lines are drawn aliased.
pub struct GraphicsContext<'a, D> {
    target: &'a mut D,
    stroke_color: FaceColor,
    fill_color: FaceColor,
    stroke_width: u8,
    antialiased: bool,
    background: FaceColor,
}

impl<'a, D> GraphicsContext<'a, D>
where
    D: DrawTarget,
    D::Color: RgbColor,
    D::Error: Debug,
{
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            stroke_color: FaceColor::White,
            fill_color: FaceColor::White,
            stroke_width: 1,
            antialiased: false,
            background: FaceColor::Black,
        }
    }

    /// Background used by [`GraphicsContext::clear`].
    pub fn with_background(mut self, color: FaceColor) -> Self {
        self.background = color;
        self
    }

    /// Fills the whole target with the background color.
    pub fn clear(&mut self) {
        let color = self.background.to_rgb();
        if let Err(e) = self.target.clear(color) {
            log::warn!("clear failed: {:?}", e);
        }
    }

    /// Bounding rectangle of the underlying target.
    pub fn bounds(&self) -> Rectangle {
        self.target.bounding_box()
    }

    pub fn antialiased(&self) -> bool {
        self.antialiased
    }

    fn stroke_style(&self) -> PrimitiveStyle<D::Color> {
        PrimitiveStyle::with_stroke(self.stroke_color.to_rgb(), self.stroke_width as u32)
    }

    fn fill_style(&self) -> PrimitiveStyle<D::Color> {
        PrimitiveStyle::with_fill(self.fill_color.to_rgb())
    }

    fn report(result: Result<(), D::Error>) {
        if let Err(e) = result {
            log::warn!("draw command dropped: {:?}", e);
        }
    }
}

impl<'a, D> DrawingSurface for GraphicsContext<'a, D>
where
    D: DrawTarget,
    D::Color: RgbColor,
    D::Error: Debug,
{
    fn set_stroke_color(&mut self, color: FaceColor) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: FaceColor) {
        self.fill_color = color;
    }

    fn set_stroke_width(&mut self, width: u8) {
        self.stroke_width = width;
    }

    fn set_antialiased(&mut self, enabled: bool) {
        self.antialiased = enabled;
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let style = self.stroke_style();
        Self::report(Line::new(from, to).into_styled(style).draw(self.target));
    }

    // Fan triangulation from the first point; exact for convex outlines.
    fn fill_polygon(&mut self, points: &[Point]) {
        let Some((&anchor, rest)) = points.split_first() else {
            return;
        };
        let style = self.fill_style();
        for pair in rest.windows(2) {
            Self::report(
                Triangle::new(anchor, pair[0], pair[1])
                    .into_styled(style)
                    .draw(self.target),
            );
        }
    }

    fn draw_polygon_outline(&mut self, points: &[Point]) {
        if points.len() < 2 {
            return;
        }
        let style = self.stroke_style();
        let closing = (points[points.len() - 1], points[0]);
        for (from, to) in points
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(core::iter::once(closing))
        {
            Self::report(Line::new(from, to).into_styled(style).draw(self.target));
        }
    }

    fn fill_rect(&mut self, rect: Rectangle, corner_radius: u32) {
        let style = self.fill_style();
        let result = if corner_radius == 0 {
            rect.into_styled(style).draw(self.target)
        } else {
            RoundedRectangle::with_equal_corners(rect, Size::new_equal(corner_radius))
                .into_styled(style)
                .draw(self.target)
        };
        Self::report(result);
    }
}
