// Randomized checks of the primitive generators. Sizes and positions are
// integer valued so that translating back and forth is exact in f32.

use espresso_core::Vector2;
use glam::Vec2;
use node::{Rectangle, Triangle, TriangleType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f32 = 1e-5;

fn random_vector(rng: &mut StdRng, min: i32, max: i32) -> Vector2<f32> {
    Vector2::new(
        rng.random_range(min..max) as f32,
        rng.random_range(min..max) as f32,
    )
}

#[test]
fn test_unrotated_rectangle_is_centered_on_position() {
    let mut rng = StdRng::seed_from_u64(0xE5);
    for _ in 0..200 {
        let size = random_vector(&mut rng, 0, 400);
        let position = random_vector(&mut rng, -500, 500);

        let outline = Rectangle::calculate(size, position, 0.0);

        assert_eq!(outline.points.len(), 4);
        assert_eq!(outline.edges, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(outline.centroid(), Some(position));
    }
}

#[test]
fn test_rotate_then_translate_matches_translate_then_rotate() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let size = random_vector(&mut rng, 0, 400);
        let position = random_vector(&mut rng, -500, 500);
        let rotation = rng.random_range(-360.0..360.0_f32);

        let rotated = Rectangle::calculate(size, position, rotation);
        let translated = Rectangle::calculate(size, position, 0.0);

        let center = Vec2::from(position);
        let rotor = Vec2::from_angle(rotation.to_radians());
        for (a, b) in rotated.points.iter().zip(&translated.points) {
            let expected = rotor.rotate(Vec2::from(*b) - center) + center;
            assert!(
                (Vec2::from(*a) - expected).length() <= TOLERANCE,
                "{a} vs {expected} at {rotation} degrees"
            );
        }
    }
}

#[test]
fn test_rotation_preserves_edge_lengths() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let size = random_vector(&mut rng, 1, 300);
        let position = random_vector(&mut rng, -200, 200);
        let rotation = rng.random_range(-360.0..360.0_f32);

        let flat = Triangle::calculate(TriangleType::Scalene, size, position, 0.0);
        let turned = Triangle::calculate(TriangleType::Scalene, size, position, rotation);

        for &(start, end) in &flat.edges {
            let flat_len = Vec2::from(flat.points[start]).distance(Vec2::from(flat.points[end]));
            let turned_len =
                Vec2::from(turned.points[start]).distance(Vec2::from(turned.points[end]));
            assert!((flat_len - turned_len).abs() < 1e-2);
        }
    }
}
