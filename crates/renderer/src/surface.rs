//! The output surface a window renders onto.
//!
//! A [`Surface`] is the only contact point with a windowing backend: it
//! reports its geometry, accepts a handful of immediate-mode draw calls, and
//! hands out structural notifications. [`PixelSurface`] is the in-memory
//! implementation used headless and in tests.

use espresso_core::{Color, Vector2};
use std::collections::VecDeque;
use std::time::Duration;
use strum_macros::Display;
use thiserror::Error;

/// Largest width or height a [`PixelSurface`] accepts.
pub const MAX_SURFACE_DIMENSION: i32 = 16384;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height}, expected 1..={MAX_SURFACE_DIMENSION} per axis")]
    InvalidSize { width: i32, height: i32 },

    #[error("surface backend failed: {0}")]
    Backend(String),
}

/// Notifications delivered by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The drawable area changed to this size.
    Resized(Vector2<i32>),
    /// The surface moved to this screen position.
    Moved(Vector2<i32>),
    CloseRequested,
    /// The contents were damaged and should be redrawn.
    Exposed,
}

/// How draw calls combine with pixels already on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum DrawBlend {
    /// Overwrite, alpha included.
    None,
    /// Source-over alpha compositing.
    #[default]
    Alpha,
}

pub trait Surface {
    fn size(&self) -> Vector2<i32>;

    fn position(&self) -> Vector2<i32>;

    fn set_draw_color(&mut self, color: Color);

    fn set_blend_mode(&mut self, blend: DrawBlend);

    /// Fills the whole surface with the draw color, ignoring the blend mode.
    fn clear(&mut self);

    /// Fills a rectangle with the draw color. Parts outside the surface are
    /// dropped.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn present(&mut self) -> Result<(), SurfaceError>;

    /// Blocks for at most `timeout` waiting for the next notification.
    fn wait_event(&mut self, timeout: Duration) -> Option<SurfaceEvent>;
}

fn validate_size(size: Vector2<i32>) -> Result<(), SurfaceError> {
    let valid = 1..=MAX_SURFACE_DIMENSION;
    if valid.contains(&size.x) && valid.contains(&size.y) {
        Ok(())
    } else {
        Err(SurfaceError::InvalidSize {
            width: size.x,
            height: size.y,
        })
    }
}

/// Source-over composite of two `0xAARRGGBB` pixels.
pub fn blend_over(destination: u32, source: u32) -> u32 {
    let source_alpha = source >> 24;
    if source_alpha == 0xFF {
        return source;
    }
    if source_alpha == 0 {
        return destination;
    }

    let destination_alpha = destination >> 24;
    let inverse = 255 - source_alpha;
    let out_alpha = source_alpha + (destination_alpha * inverse + 127) / 255;
    if out_alpha == 0 {
        return 0;
    }

    let channel = |shift: u32| {
        let s = (source >> shift) & 0xFF;
        let d = (destination >> shift) & 0xFF;
        let premultiplied = s * source_alpha * 255 + d * destination_alpha * inverse;
        let denominator = out_alpha * 255;
        ((premultiplied + denominator / 2) / denominator).min(255)
    };

    (out_alpha << 24) | (channel(16) << 16) | (channel(8) << 8) | channel(0)
}

/// An ARGB8888 framebuffer with an injectable notification queue.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    size: Vector2<i32>,
    position: Vector2<i32>,
    pixels: Vec<u32>,
    draw_color: u32,
    blend: DrawBlend,
    events: VecDeque<SurfaceEvent>,
    frames_presented: u64,
}

impl PixelSurface {
    pub fn new(size: Vector2<i32>, position: Vector2<i32>) -> Result<Self, SurfaceError> {
        validate_size(size)?;
        Ok(Self {
            size,
            position,
            pixels: vec![0; (size.x * size.y) as usize],
            draw_color: Color::black().to_argb8888(),
            blend: DrawBlend::default(),
            events: VecDeque::new(),
            frames_presented: 0,
        })
    }

    /// Queues a notification as if the backend had produced it.
    pub fn push_event(&mut self, event: SurfaceEvent) {
        self.events.push_back(event);
    }

    /// Resizes the framebuffer, clearing it, and queues [`SurfaceEvent::Resized`].
    pub fn resize(&mut self, size: Vector2<i32>) -> Result<(), SurfaceError> {
        validate_size(size)?;
        self.size = size;
        self.pixels = vec![0; (size.x * size.y) as usize];
        self.push_event(SurfaceEvent::Resized(size));
        Ok(())
    }

    /// Moves the surface and queues [`SurfaceEvent::Moved`].
    pub fn move_to(&mut self, position: Vector2<i32>) {
        self.position = position;
        self.push_event(SurfaceEvent::Moved(position));
    }

    pub fn request_close(&mut self) {
        self.push_event(SurfaceEvent::CloseRequested);
    }

    /// The pixel at `(x, y)` as `0xAARRGGBB`, `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.size.x || y >= self.size.y {
            return None;
        }
        self.pixels.get((y * self.size.x + x) as usize).copied()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn count_pixels(&self, argb: u32) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel == argb).count()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Surface for PixelSurface {
    fn size(&self) -> Vector2<i32> {
        self.size
    }

    fn position(&self) -> Vector2<i32> {
        self.position
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color.to_argb8888();
    }

    fn set_blend_mode(&mut self, blend: DrawBlend) {
        self.blend = blend;
    }

    fn clear(&mut self) {
        self.pixels.fill(self.draw_color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(width).min(self.size.x);
        let y1 = y.saturating_add(height).min(self.size.y);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.size.x as usize;
        for row in y0 as usize..y1 as usize {
            let line = &mut self.pixels[row * stride + x0 as usize..row * stride + x1 as usize];
            match self.blend {
                DrawBlend::None => line.fill(self.draw_color),
                DrawBlend::Alpha => {
                    for pixel in line {
                        *pixel = blend_over(*pixel, self.draw_color);
                    }
                }
            }
        }
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.frames_presented += 1;
        Ok(())
    }

    fn wait_event(&mut self, timeout: Duration) -> Option<SurfaceEvent> {
        let event = self.events.pop_front();
        if event.is_none() && !timeout.is_zero() {
            std::thread::sleep(timeout);
        }
        event
    }
}
