//! Drawing surface abstraction
//!
//! The particle field only needs four primitives: clear, filled circle,
//! stroked line, and the current pixel size. The browser implements them on a
//! Canvas 2D context (`platform::canvas`); native runs and tests record them.

use glam::Vec2;

use crate::field::ColorTag;

/// A 2D pixel surface the background renders into
pub trait DrawSurface {
    /// Current pixel size (width, height)
    fn size(&self) -> (u32, u32);

    /// Resize the pixel buffer
    fn set_size(&mut self, width: u32, height: u32);

    /// Clear the whole surface to transparent
    fn clear(&mut self);

    /// Fill a circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: ColorTag, alpha: f32);

    /// Stroke a straight line segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: ColorTag, alpha: f32);
}

/// A single recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: ColorTag,
        alpha: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: ColorTag,
        alpha: f32,
    },
}

/// Surface that records commands instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Recorded circles
    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    /// Recorded lines
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    /// Drop recorded commands (size is kept)
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        // Only the current frame is of interest
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: ColorTag, alpha: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: ColorTag, alpha: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
            alpha,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_keeps_only_current_frame() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.fill_circle(Vec2::ZERO, 1.0, ColorTag::Red, 0.5);
        surface.clear();
        assert_eq!(surface.commands, vec![DrawCommand::Clear]);
    }

    #[test]
    fn test_set_size() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.set_size(640, 480);
        assert_eq!(surface.size(), (640, 480));
    }
}
