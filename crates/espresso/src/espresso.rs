//! # Espresso
//!
//! A retained-mode 2D interface toolkit. A [`Window`] owns a [`SceneGraph`]
//! whose root is the output surface; frames and canvases are laid out with
//! scale-plus-offset vectors and rasterized onto the surface every frame.
//!
//! ```no_run
//! use espresso::{Color, Config, LayoutVector};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     espresso::EspressoLogger::init(config.log_level)?;
//!
//!     let mut window = espresso::headless(&config)?;
//!     let root = window.root();
//!     let panel = window.graph_mut().create_frame(root)?;
//!     if let Some(interface) = window.graph_mut().interface_mut(panel) {
//!         interface.size = LayoutVector::from_scale(0.5, 0.5);
//!         interface.background_color = Color::rgb(40, 90, 160);
//!     }
//!
//!     window.run(|_, _| {})
//! }
//! ```

mod config;
mod logger;
mod window;

pub use config::{CloseOperation, Config};
pub use logger::{log_section, EspressoLogger};
pub use window::{FrameTick, StopHandle, Window};

pub use espresso_core::{
    BlendMode, Bounds, Color, GrayscaleMethod, LayoutVector, NamedColor, Vector2, Vector3,
};
pub use node::{DrawInfo, Drawable, Line, LineStyle, Point, Rectangle, Shape, Triangle, TriangleType};
pub use renderer::{PixelSurface, Renderer, Surface, SurfaceError, SurfaceEvent};
pub use scene_graph::{
    Border, Corner, ModifierKind, NodeId, NodeKind, ScaleRule, SceneError, SceneEvent, SceneGraph,
    SizeConstraint,
};

use anyhow::{Context, Result};

/// Creates a window over an in-memory [`PixelSurface`] sized from `config`.
pub fn headless(config: &Config) -> Result<Window<PixelSurface>> {
    let surface = PixelSurface::new(config.size, config.position)
        .with_context(|| format!("Failed to create surface for {}", config.title))?;
    Ok(Window::new(surface, config))
}
