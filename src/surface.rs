// Drawing target for the particle field. The browser implementation lives in
// `renderer`; tests record calls instead of drawing.

use crate::color::Color;

pub trait Surface {
    type Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        center: [f64; 2],
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        alpha: f64,
        line_width: f64,
    ) -> Result<(), Self::Error>;
}

#[cfg(test)]
pub mod recording {
    use super::Surface;
    use crate::color::Color;
    use std::convert::Infallible;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear { width: f64, height: f64 },
        Circle { center: [f64; 2], radius: f64, alpha: f64 },
        Line { from: [f64; 2], to: [f64; 2], alpha: f64 },
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn circles(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, DrawCall::Circle { .. }))
                .count()
        }

        pub fn lines(&self) -> Vec<&DrawCall> {
            self.calls
                .iter()
                .filter(|c| matches!(c, DrawCall::Line { .. }))
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        type Error = Infallible;

        fn clear(&mut self, width: f64, height: f64) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Clear { width, height });
            Ok(())
        }

        fn fill_circle(
            &mut self,
            center: [f64; 2],
            radius: f64,
            _color: Color,
            alpha: f64,
        ) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Circle {
                center,
                radius,
                alpha,
            });
            Ok(())
        }

        fn stroke_line(
            &mut self,
            from: [f64; 2],
            to: [f64; 2],
            _color: Color,
            alpha: f64,
            _line_width: f64,
        ) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Line { from, to, alpha });
            Ok(())
        }
    }
}
