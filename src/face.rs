//! The analog face renderer.
//!
//! [`WatchFace`] owns the two hand paths and the per-minute text state and is
//! driven from outside through [`WatchFace::on_second_tick`] and
//! [`WatchFace::on_minute_tick`]. Each frame is recomputed from the time
//! sample and the bounds it is given; the only state carried over is the hand
//! rotation, which the next frame overwrites anyway.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::{ConfigError, FaceConfig};
use crate::geometry::{center_point, offset, second_hand_point_with, tick_marks_with};
use crate::hand::HandPath;
use crate::surface::DrawingSurface;
use crate::time::{TimeSample, TimeText};
use crate::trig::Angle;

/// Minute hand angle, `minute / 60` of a rotation.
pub fn minute_angle(now: &TimeSample) -> Angle {
    Angle::from_fraction(now.minute as i32, 60)
}

/// Hour hand angle.
///
/// The dial is split into 72 steps (12 hours of 6 steps each) and the hand
/// moves one step every 10 minutes.
pub fn hour_angle(now: &TimeSample) -> Angle {
    let step = now.dial_hour() as i32 * 6 + now.minute as i32 / 10;
    Angle::from_fraction(step, 12 * 6)
}

/// Analog face engine: validated config, both hands and the minute text.
pub struct WatchFace {
    config: FaceConfig,
    minute_arrow: HandPath,
    hour_arrow: HandPath,
    time_text: TimeText,
}

impl WatchFace {
    /// Builds a face and anchors both hands at the center of `bounds`.
    pub fn new(config: FaceConfig, bounds: Rectangle) -> Result<Self, ConfigError> {
        config.validate()?;

        let center = center_point(&bounds);
        let mut minute_arrow = HandPath::new(config.minute_hand);
        let mut hour_arrow = HandPath::new(config.hour_hand);
        minute_arrow.move_to(center);
        hour_arrow.move_to(center);

        log::debug!(
            "watch face ready: {}x{} at ({}, {}), {} ticks",
            bounds.size.width,
            bounds.size.height,
            center.x,
            center.y,
            config.tick_count
        );

        Ok(Self {
            config,
            minute_arrow,
            hour_arrow,
            time_text: TimeText::default(),
        })
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn minute_hand(&self) -> &HandPath {
        &self.minute_arrow
    }

    pub fn hour_hand(&self) -> &HandPath {
        &self.hour_arrow
    }

    /// Text refreshed by the last minute tick.
    pub fn time_text(&self) -> &TimeText {
        &self.time_text
    }

    /// Second tick: renders exactly one frame.
    pub fn on_second_tick<S: DrawingSurface>(
        &mut self,
        now: TimeSample,
        bounds: Rectangle,
        surface: &mut S,
    ) {
        self.render(&now, &bounds, surface);
    }

    /// Minute tick: refreshes the hour and minute text.
    pub fn on_minute_tick(&mut self, now: TimeSample) {
        self.time_text.update(&now, self.config.clock_24h);
        log::debug!(
            "time text {}:{}",
            self.time_text.hour(),
            self.time_text.minute()
        );
    }

    /// Draws ticks, minute hand, hour hand, second hand and center dot, in
    /// that order, for one time sample.
    ///
    /// The background is left to the surface. Bounds with no area draw
    /// nothing.
    pub fn render<S: DrawingSurface>(
        &mut self,
        now: &TimeSample,
        bounds: &Rectangle,
        surface: &mut S,
    ) {
        let center = center_point(bounds);
        self.anchor(center);

        if bounds.size.width == 0 || bounds.size.height == 0 {
            log::debug!("skipping frame for empty bounds");
            return;
        }

        log::trace!(
            "frame {:02}:{:02}:{:02}",
            now.hour,
            now.minute,
            now.second
        );

        let fg = self.config.foreground;
        let bg = self.config.background;

        // dial
        surface.set_antialiased(self.config.antialiased);
        surface.set_fill_color(fg);
        surface.set_stroke_color(fg);
        surface.set_stroke_width(self.config.tick_stroke_width);
        for tick in tick_marks_with(bounds, self.config.tick_count, self.config.tick_length) {
            surface.draw_line(tick.end, tick.start);
        }

        // Computed now, drawn after the hands so it stays on top.
        let second_tip = second_hand_point_with(bounds, now.second, self.config.second_hand_inset);

        surface.set_stroke_width(self.config.hand_stroke_width);
        surface.set_fill_color(bg);
        surface.set_stroke_color(fg);

        self.minute_arrow.rotate_to(minute_angle(now));
        let minute_points = self.minute_arrow.points();
        surface.fill_polygon(&minute_points);
        surface.draw_polygon_outline(&minute_points);

        self.hour_arrow.rotate_to(hour_angle(now));
        let hour_points = self.hour_arrow.points();
        surface.fill_polygon(&hour_points);
        surface.draw_polygon_outline(&hour_points);

        surface.set_stroke_color(fg);
        surface.draw_line(second_tip, center);

        // dot in the middle
        let dot = self.config.center_dot_size;
        let half = (dot / 2) as i32;
        surface.set_fill_color(fg);
        surface.fill_rect(
            Rectangle::new(offset(center, Point::new(-half, -half)), Size::new_equal(dot)),
            0,
        );
    }

    fn anchor(&mut self, center: Point) {
        if self.minute_arrow.pivot() != center || self.hour_arrow.pivot() != center {
            log::debug!("re-anchoring hands at ({}, {})", center.x, center.y);
            self.minute_arrow.move_to(center);
            self.hour_arrow.move_to(center);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::HandShape;
    use crate::surface::FaceColor;
    use crate::trig::TRIG_MAX_ANGLE;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Cmd {
        Stroke(FaceColor),
        Fill(FaceColor),
        Width(u8),
        Antialias(bool),
        Line(Point, Point),
        FillPoly(Vec<Point>),
        OutlinePoly(Vec<Point>),
        Rect(Rectangle, u32),
    }

    #[derive(Default)]
    struct Recorder(Vec<Cmd>);

    impl DrawingSurface for Recorder {
        fn set_stroke_color(&mut self, color: FaceColor) {
            self.0.push(Cmd::Stroke(color));
        }
        fn set_fill_color(&mut self, color: FaceColor) {
            self.0.push(Cmd::Fill(color));
        }
        fn set_stroke_width(&mut self, width: u8) {
            self.0.push(Cmd::Width(width));
        }
        fn set_antialiased(&mut self, enabled: bool) {
            self.0.push(Cmd::Antialias(enabled));
        }
        fn draw_line(&mut self, from: Point, to: Point) {
            self.0.push(Cmd::Line(from, to));
        }
        fn fill_polygon(&mut self, points: &[Point]) {
            self.0.push(Cmd::FillPoly(points.to_vec()));
        }
        fn draw_polygon_outline(&mut self, points: &[Point]) {
            self.0.push(Cmd::OutlinePoly(points.to_vec()));
        }
        fn fill_rect(&mut self, rect: Rectangle, corner_radius: u32) {
            self.0.push(Cmd::Rect(rect, corner_radius));
        }
    }

    fn bounds() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(144, 168))
    }

    fn t(hour: u8, minute: u8, second: u8) -> TimeSample {
        TimeSample::from_hms(hour, minute, second).unwrap()
    }

    fn face() -> WatchFace {
        WatchFace::new(FaceConfig::default(), bounds()).unwrap()
    }

    fn draw(face: &mut WatchFace, now: TimeSample, bounds: Rectangle) -> Vec<Cmd> {
        let mut rec = Recorder::default();
        face.on_second_tick(now, bounds, &mut rec);
        rec.0
    }

    #[test]
    fn minute_angles() {
        assert_eq!(minute_angle(&t(4, 0, 0)), Angle::ZERO);
        assert_eq!(minute_angle(&t(4, 30, 0)), Angle::HALF);
        assert_eq!(minute_angle(&t(4, 30, 0)).as_fraction(), 0.5);
        assert_eq!(minute_angle(&t(4, 15, 0)), Angle::QUARTER);
    }

    #[test]
    fn hour_angles() {
        assert_eq!(hour_angle(&t(3, 0, 0)), Angle::QUARTER);
        assert_eq!(hour_angle(&t(15, 0, 0)), Angle::QUARTER);
        assert_eq!(hour_angle(&t(0, 0, 0)), Angle::ZERO);
        assert_eq!(hour_angle(&t(12, 0, 0)), Angle::ZERO);
        assert_eq!(hour_angle(&t(6, 0, 0)), Angle::HALF);
    }

    #[test]
    fn hour_hand_creeps_every_ten_minutes() {
        let on_the_hour = hour_angle(&t(3, 0, 0));
        assert_eq!(hour_angle(&t(3, 9, 0)), on_the_hour);
        let step = Angle::from_fraction(19, 72);
        assert_eq!(hour_angle(&t(3, 10, 0)), step);
        assert_eq!(hour_angle(&t(3, 59, 0)), Angle::from_fraction(23, 72));
    }

    #[test]
    fn hour_angle_is_monotonic_over_twelve_hours() {
        let mut last = Angle::ZERO;
        for hour in 0..12 {
            for minute in 0..60 {
                let angle = hour_angle(&t(hour, minute, 0));
                assert!(angle >= last, "{hour}:{minute} went backwards");
                assert!(angle.raw() < TRIG_MAX_ANGLE);
                last = angle;
            }
        }
        assert!(last.as_fraction() < 1.0);
        assert_eq!(hour_angle(&t(12, 0, 0)), Angle::ZERO);
    }

    #[test]
    fn draw_order() {
        let mut face = face();
        let cmds = draw(&mut face, t(10, 8, 15), bounds());

        let lines: Vec<_> = cmds
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, Cmd::Line(..)))
            .map(|(i, _)| i)
            .collect();
        // 12 ticks and the second hand
        assert_eq!(lines.len(), 13);

        let fills: Vec<_> = cmds
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, Cmd::FillPoly(_)))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(fills.len(), 2);

        let rect = cmds.iter().position(|c| matches!(c, Cmd::Rect(..))).unwrap();
        let second_hand = lines[12];
        assert!(lines[11] < fills[0]);
        assert!(fills[1] < second_hand);
        assert!(second_hand < rect);
        assert_eq!(rect, cmds.len() - 1);

        assert_eq!(cmds[second_hand], Cmd::Line(Point::new(72 + 69, 84), Point::new(72, 84)));
        assert_eq!(
            cmds[rect],
            Cmd::Rect(Rectangle::new(Point::new(71, 83), Size::new(3, 3)), 0)
        );
    }

    #[test]
    fn styles_match_the_face() {
        let mut face = face();
        let cmds = draw(&mut face, t(10, 8, 15), bounds());
        assert_eq!(
            &cmds[..4],
            &[
                Cmd::Antialias(true),
                Cmd::Fill(FaceColor::White),
                Cmd::Stroke(FaceColor::White),
                Cmd::Width(2),
            ]
        );
        let first_fill = cmds.iter().position(|c| matches!(c, Cmd::FillPoly(_))).unwrap();
        assert_eq!(
            &cmds[first_fill - 3..first_fill],
            &[
                Cmd::Width(1),
                Cmd::Fill(FaceColor::Black),
                Cmd::Stroke(FaceColor::White),
            ]
        );
        // the center dot is white
        assert_eq!(cmds[cmds.len() - 2], Cmd::Fill(FaceColor::White));
    }

    #[test]
    fn hands_follow_the_sample() {
        let mut face = face();
        let cmds = draw(&mut face, t(3, 15, 0), bounds());
        let polys: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::FillPoly(p) => Some(p.clone()),
                _ => None,
            })
            .collect();
        // minute hand at quarter past points right
        assert_eq!(polys[0][2], Point::new(72 + 66, 84 - 2));
        // hour hand at 3:15 is one step past the quarter, still right of center
        assert!(polys[1][2].x > 72 + 40);
        assert_eq!(face.minute_hand().rotation(), Angle::QUARTER);
        assert_eq!(face.hour_hand().rotation(), Angle::from_fraction(19, 72));
    }

    #[test]
    fn identical_inputs_draw_identically() {
        let mut face = face();
        let first = draw(&mut face, t(7, 41, 33), bounds());
        let second = draw(&mut face, t(7, 41, 33), bounds());
        assert_eq!(first, second);

        // A different frame in between leaves no trace.
        let _ = draw(&mut face, t(1, 2, 3), bounds());
        let third = draw(&mut face, t(7, 41, 33), bounds());
        assert_eq!(first, third);
    }

    #[test]
    fn empty_bounds_draw_nothing() {
        let mut face = face();
        let empty = Rectangle::new(Point::zero(), Size::zero());
        let cmds = draw(&mut face, t(9, 30, 45), empty);
        assert!(cmds.is_empty());
        assert_eq!(face.minute_hand().pivot(), Point::zero());
    }

    #[test]
    fn resize_reanchors_hands() {
        let mut face = face();
        assert_eq!(face.hour_hand().pivot(), Point::new(72, 84));
        let round = Rectangle::new(Point::zero(), Size::new(240, 240));
        let cmds = draw(&mut face, t(12, 0, 0), round);
        assert_eq!(face.hour_hand().pivot(), Point::new(120, 120));
        assert_eq!(face.minute_hand().pivot(), Point::new(120, 120));
        assert_eq!(
            cmds.last(),
            Some(&Cmd::Rect(Rectangle::new(Point::new(119, 119), Size::new(3, 3)), 0))
        );
    }

    #[test]
    fn minute_tick_updates_text_only() {
        let mut face = WatchFace::new(FaceConfig::default().with_clock_24h(false), bounds()).unwrap();
        face.on_minute_tick(t(21, 7, 0));
        assert_eq!(face.time_text().hour(), "09");
        assert_eq!(face.time_text().minute(), "07");
        assert_eq!(face.minute_hand().rotation(), Angle::ZERO);
    }

    #[test]
    fn custom_config_reaches_the_surface() {
        let minute = HandShape::new([
            Point::new(1, 0),
            Point::new(-1, 0),
            Point::new(-1, -20),
            Point::new(1, -20),
        ]);
        let hour = HandShape::new([
            Point::new(2, 0),
            Point::new(-2, 0),
            Point::new(-2, -10),
            Point::new(2, -10),
        ]);
        let config = FaceConfig::default()
            .with_antialiasing(false)
            .with_tick_length(20)
            .with_hands(minute, hour);
        let mut face = WatchFace::new(config, bounds()).unwrap();
        assert_eq!(face.config(), &config);

        let cmds = draw(&mut face, t(12, 0, 0), bounds());
        assert_eq!(cmds[0], Cmd::Antialias(false));
        assert_eq!(cmds[4], Cmd::Line(Point::new(72, 12), Point::new(72, 32)));

        let polys: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::FillPoly(p) => Some(p.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            polys[0],
            vec![
                Point::new(73, 84),
                Point::new(71, 84),
                Point::new(71, 64),
                Point::new(73, 64),
            ]
        );
        assert_eq!(polys[1][2], Point::new(70, 74));
    }

    #[test]
    fn dense_dial_renders() {
        let config = FaceConfig::default().with_tick_count(40_000);
        let mut face = WatchFace::new(config, bounds()).unwrap();
        let cmds = draw(&mut face, t(4, 20, 10), bounds());
        let lines = cmds.iter().filter(|c| matches!(c, Cmd::Line(..))).count();
        assert_eq!(lines, 40_000 + 1);
    }

    #[test]
    fn extreme_bounds_render() {
        let mut face = face();
        let corner = Rectangle::new(Point::new(i32::MIN, i32::MIN), Size::new(1, 1));
        let cmds = draw(&mut face, t(8, 0, 30), corner);
        assert_eq!(
            cmds.last(),
            Some(&Cmd::Rect(
                Rectangle::new(Point::new(i32::MIN, i32::MIN), Size::new(3, 3)),
                0
            ))
        );

        let wide = Rectangle::new(Point::zero(), Size::new(70_000, 100));
        let cmds = draw(&mut face, t(8, 0, 30), wide);
        assert!(cmds.contains(&Cmd::Line(
            Point::new(35_000, 50 + 34_997),
            Point::new(35_000, 50)
        )));
    }

    #[test]
    fn oversized_tick_count_is_rejected() {
        let result = WatchFace::new(FaceConfig::default().with_tick_count(u32::MAX), bounds());
        assert!(matches!(result, Err(ConfigError::TooManyTicks(u32::MAX))));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = WatchFace::new(FaceConfig::default().with_tick_count(0), bounds());
        assert!(matches!(result, Err(ConfigError::NoTicks)));
    }
}
