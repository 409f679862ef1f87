use espresso_core::{Color, LayoutVector, Vector2};
use node::{Drawable, Rectangle, Triangle, TriangleType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use renderer::{coverage, scanline_spans, PixelSurface, Renderer};
use scene_graph::{ScaleRule, SceneGraph};

const RED: u32 = 0xFFFF_0000;
const GREEN: u32 = 0xFF00_FF00;
const BLACK: u32 = 0xFF00_0000;

fn setup(width: i32, height: i32) -> (SceneGraph, PixelSurface) {
    let mut graph = SceneGraph::new();
    graph.set_surface_geometry(Vector2::new(width, height), Vector2::zero());
    graph.set_surface_fill(Color::black());
    let surface = PixelSurface::new(Vector2::new(width, height), Vector2::zero()).unwrap();
    (graph, surface)
}

#[test]
fn axis_aligned_rectangles_cover_their_area() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let width = rng.random_range(1..60) as f32;
        let height = rng.random_range(1..60) as f32;
        let x = rng.random_range(-30..30) as f32;
        let y = rng.random_range(-30..30) as f32;
        let rectangle = Rectangle::new(
            Vector2::new(width, height),
            Vector2::new(x + width / 2.0, y + height / 2.0),
        );

        let spans = scanline_spans(&rectangle.to_shape(), None);
        assert_eq!(coverage(&spans), (width * height) as usize);
    }
}

#[test]
fn later_children_paint_over_earlier_ones() {
    let (mut graph, mut surface) = setup(20, 20);
    let root = graph.root();
    let under = graph.create_frame(root).unwrap();
    let over = graph.create_frame(root).unwrap();
    for (id, offset, color) in [(under, 0, Color::rgb(255, 0, 0)), (over, 5, Color::rgb(0, 255, 0))] {
        let interface = graph.interface_mut(id).unwrap();
        interface.size = LayoutVector::from_offset(10, 10);
        interface.position = LayoutVector::from_offset(offset, offset);
        interface.background_color = color;
    }

    Renderer::new().render(&mut graph, &mut surface).unwrap();

    assert_eq!(surface.count_pixels(GREEN), 100);
    assert_eq!(surface.count_pixels(RED), 100 - 25);
    assert_eq!(surface.pixel(7, 7), Some(GREEN));
}

#[test]
fn clipping_frame_crops_its_children() {
    let (mut graph, mut surface) = setup(40, 40);
    let clip = graph.create_frame(graph.root()).unwrap();
    {
        let interface = graph.interface_mut(clip).unwrap();
        interface.size = LayoutVector::from_offset(10, 10);
        interface.background_color = Color::rgb(255, 0, 0);
        interface.clip = true;
    }
    let child = graph.create_frame(clip).unwrap();
    {
        let interface = graph.interface_mut(child).unwrap();
        interface.size = LayoutVector::from_offset(20, 20);
        interface.position = LayoutVector::from_offset(5, 5);
        interface.background_color = Color::rgb(0, 255, 0);
    }

    Renderer::new().render(&mut graph, &mut surface).unwrap();

    assert_eq!(surface.count_pixels(GREEN), 25);
    assert_eq!(surface.pixel(20, 20), Some(BLACK));
}

#[test]
fn translucent_frame_blends_with_root_fill() {
    let (mut graph, mut surface) = setup(4, 4);
    graph.set_surface_fill(Color::white());
    let frame = graph.create_frame(graph.root()).unwrap();
    {
        let interface = graph.interface_mut(frame).unwrap();
        interface.size = LayoutVector::from_scale(1.0, 1.0);
        interface.background_color = Color::black();
        interface.set_opacity(0.5);
    }

    Renderer::new().render(&mut graph, &mut surface).unwrap();

    assert_eq!(surface.count_pixels(0xFF7F_7F7F), 16);
}

#[test]
fn canvas_drawings_are_painted_in_canvas_space() {
    let (mut graph, mut surface) = setup(100, 100);
    let canvas = graph.create_canvas(graph.root()).unwrap();
    {
        let interface = graph.interface_mut(canvas).unwrap();
        interface.size = LayoutVector::from_offset(40, 40);
        interface.position = LayoutVector::from_offset(50, 50);
        interface.background_color = Color::black();
    }
    let square = Rectangle::new(Vector2::new(10.0, 10.0), Vector2::new(5.0, 5.0))
        .with_fill(Color::rgb(255, 0, 0));
    graph.draw_drawable(canvas, &square).unwrap();

    Renderer::new().render(&mut graph, &mut surface).unwrap();
    assert_eq!(surface.count_pixels(RED), 100);
    assert_eq!(surface.pixel(50, 50), Some(RED));
    assert_eq!(surface.pixel(49, 49), Some(BLACK));

    graph.set_scale_rule(canvas, ScaleRule::Stretch).unwrap();
    Renderer::new().render(&mut graph, &mut surface).unwrap();
    assert_eq!(surface.count_pixels(RED), 40 * 40);
}

#[test]
fn triangles_render_inside_their_bounds() {
    let (mut graph, mut surface) = setup(64, 64);
    let canvas = graph.create_canvas(graph.root()).unwrap();
    {
        let interface = graph.interface_mut(canvas).unwrap();
        interface.size = LayoutVector::from_scale(1.0, 1.0);
        interface.background_color = Color::black();
    }
    let triangle = Triangle::new(
        TriangleType::Right,
        Vector2::new(32.0, 32.0),
        Vector2::new(32.0, 32.0),
    )
    .with_fill(Color::rgb(0, 255, 0));
    graph.draw_drawable(canvas, &triangle).unwrap();

    Renderer::new().render(&mut graph, &mut surface).unwrap();

    let painted = surface.count_pixels(GREEN);
    assert!(painted > 400 && painted < 32 * 32, "painted {painted}");
    assert_eq!(surface.pixel(0, 0), Some(BLACK));
    assert_eq!(surface.pixel(63, 63), Some(BLACK));
}
