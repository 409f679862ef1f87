//! The window: a scene graph rooted on an output surface, plus its render loop.

use crate::config::{CloseOperation, Config};
use anyhow::{Context, Result};
use renderer::{FrameStats, Renderer, Surface, SurfaceError, SurfaceEvent};
use scene_graph::{NodeId, SceneGraph};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Stops a running [`Window::run`] loop between frames. Cloneable and safe to
/// use from other threads.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Timing passed to the per-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTick {
    /// Zero-based index of the frame just presented.
    pub frame: u64,
    /// Time since the loop started.
    pub elapsed: Duration,
    /// Time since the previous frame was presented.
    pub delta: Duration,
}

pub struct Window<S: Surface> {
    title: String,
    surface: S,
    graph: SceneGraph,
    renderer: Renderer,
    close_operation: CloseOperation,
    frame_interval: Duration,
    stop: StopHandle,
}

impl<S: Surface> Window<S> {
    /// Wraps `surface`. The root node takes the surface's current geometry and
    /// the configured fill.
    pub fn new(surface: S, config: &Config) -> Self {
        let mut graph = SceneGraph::new();
        graph.set_surface_geometry(surface.size(), surface.position());
        graph.set_surface_fill(config.fill);

        Self {
            title: config.title.clone(),
            surface,
            graph,
            renderer: Renderer::new(),
            close_operation: config.close_operation,
            frame_interval: config.frame_interval(),
            stop: StopHandle::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    pub fn root(&self) -> NodeId {
        self.graph.root()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn close_operation(&self) -> CloseOperation {
        self.close_operation
    }

    pub fn set_close_operation(&mut self, close_operation: CloseOperation) {
        self.close_operation = close_operation;
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Renders and presents one frame.
    pub fn render(&mut self) -> Result<FrameStats, SurfaceError> {
        self.renderer.render(&mut self.graph, &mut self.surface)
    }

    /// Applies a backend notification to the root node or the loop state.
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Resized(size) => {
                log::debug!("{}: resized to {}", self.title, size);
                let position = self.graph.surface().position;
                self.graph.set_surface_geometry(size, position);
            }
            SurfaceEvent::Moved(position) => {
                let size = self.graph.surface().size;
                self.graph.set_surface_geometry(size, position);
            }
            SurfaceEvent::CloseRequested => match self.close_operation {
                CloseOperation::None => {
                    log::debug!("{}: close request ignored", self.title);
                }
                CloseOperation::Close | CloseOperation::Confirm => self.stop.stop(),
            },
            SurfaceEvent::Exposed => {}
        }
    }

    /// Runs the render loop until stopped.
    ///
    /// Each iteration renders the whole tree, calls `on_frame`, then waits up
    /// to the frame interval for the next event and handles every event
    /// already queued. The stop flag is checked before each frame.
    pub fn run<F>(&mut self, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&mut SceneGraph, FrameTick),
    {
        log::info!("{}: render loop started", self.title);

        let start = Instant::now();
        let mut last = start;
        let mut frame = 0;

        while !self.stop.is_stopped() {
            self.render()
                .with_context(|| format!("Failed to render frame {frame}"))?;

            let now = Instant::now();
            on_frame(
                &mut self.graph,
                FrameTick {
                    frame,
                    elapsed: now - start,
                    delta: now - last,
                },
            );
            last = now;
            frame += 1;

            if let Some(event) = self.surface.wait_event(self.frame_interval) {
                self.handle_event(event);
                while let Some(event) = self.surface.wait_event(Duration::ZERO) {
                    self.handle_event(event);
                }
            }
        }

        log::info!("{}: render loop stopped after {} frames", self.title, frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use espresso_core::{Color, Vector2};
    use renderer::PixelSurface;

    fn window(close_operation: CloseOperation) -> Window<PixelSurface> {
        let config = Config {
            frame_interval_ms: 0,
            close_operation,
            fill: Color::black(),
            ..Config::default()
        };
        let surface = PixelSurface::new(Vector2::new(32, 24), Vector2::new(5, 6)).unwrap();
        Window::new(surface, &config)
    }

    #[test]
    fn test_root_takes_surface_geometry() {
        let window = window(CloseOperation::Close);
        let surface = window.graph().surface();
        assert_eq!(surface.size, Vector2::new(32, 24));
        assert_eq!(surface.position, Vector2::new(5, 6));
        assert_eq!(surface.fill, Color::black());
        assert_eq!(window.title(), "Espresso v1.0.0");
    }

    #[test]
    fn test_resize_and_move_update_root() {
        let mut window = window(CloseOperation::Close);
        window.handle_event(SurfaceEvent::Resized(Vector2::new(64, 48)));
        window.handle_event(SurfaceEvent::Moved(Vector2::new(1, 2)));

        let surface = window.graph().surface();
        assert_eq!(surface.size, Vector2::new(64, 48));
        assert_eq!(surface.position, Vector2::new(1, 2));
    }

    #[test]
    fn test_close_follows_close_operation() {
        let mut ignoring = window(CloseOperation::None);
        ignoring.handle_event(SurfaceEvent::CloseRequested);
        assert!(!ignoring.stop_handle().is_stopped());

        for operation in [CloseOperation::Close, CloseOperation::Confirm] {
            let mut closing = window(operation);
            closing.handle_event(SurfaceEvent::CloseRequested);
            assert!(closing.stop_handle().is_stopped());
        }
    }

    #[test]
    fn test_stopped_window_renders_nothing() {
        let mut window = window(CloseOperation::Close);
        window.stop_handle().stop();
        window.run(|_, _| panic!("no frame expected")).unwrap();
        assert_eq!(window.surface().frames_presented(), 0);
    }
}
