use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("line {line} references point {index}, but the shape has {len} points")]
    PointOutOfRange {
        line: usize,
        index: usize,
        len: usize,
    },
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },
}
