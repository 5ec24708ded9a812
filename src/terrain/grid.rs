// src/terrain/grid.rs

/// Row-major elevation storage: the value for cell `(x, y)` lives at
/// `y * width + x`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl HeightGrid {
    /// Zero-filled grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0.0; width * height],
            width,
            height,
        }
    }

    /// Wrap existing row-major data.
    pub fn from_vec(data: Vec<f32>, width: usize, height: usize) -> Self {
        assert!(data.len() == width * height);
        Self { data, width, height }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, value: f32) {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x] = value;
    }

    /// The full grid as a flat row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
