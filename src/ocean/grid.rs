use rustfft::num_complex::Complex32;

/// Square row-major 2D field of samples. The same storage backs
/// frequency-domain spectra, spatial fields and the final height field.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
  size: usize,
  data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
  pub fn new(size: usize) -> Self {
    Self {
      size,
      data: vec![T::default(); size * size],
    }
  }
}

impl<T> Grid<T> {
  pub fn from_vec(size: usize, data: Vec<T>) -> Self {
    assert_eq!(data.len(), size * size, "grid data must hold size * size samples");
    Self { size, data }
  }

  pub fn size(&self) -> usize {
    self.size
  }

  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.data
  }

  pub fn into_vec(self) -> Vec<T> {
    self.data
  }
}

impl<T> std::ops::Index<(usize, usize)> for Grid<T> {
  type Output = T;

  fn index(&self, (row, col): (usize, usize)) -> &T {
    &self.data[row * self.size + col]
  }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Grid<T> {
  fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
    &mut self.data[row * self.size + col]
  }
}

impl Grid<Complex32> {
  /// Splits the interleaved complex samples into two parallel channel
  /// vectors (real, imaginary).
  pub fn to_split(&self) -> (Vec<f32>, Vec<f32>) {
    let re = self.data.iter().map(|v| v.re).collect();
    let im = self.data.iter().map(|v| v.im).collect();
    (re, im)
  }

  /// Rebuilds an interleaved grid from two parallel channel vectors.
  pub fn from_split(re: &[f32], im: &[f32]) -> Self {
    assert_eq!(re.len(), im.len(), "channel lengths must match");
    let size = (re.len() as f64).sqrt() as usize;
    assert_eq!(size * size, re.len(), "channel length must be a square");

    let data = re
      .iter()
      .zip(im.iter())
      .map(|(&re, &im)| Complex32::new(re, im))
      .collect();
    Self { size, data }
  }
}

/// Two-channel output sample. Both the real and imaginary channel of the
/// inverse transform are carried through to the consumer; collapsing them
/// to a single scalar height is the renderer's decision.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HeightSample {
  pub re: f32,
  pub im: f32,
}

pub type HeightField = Grid<HeightSample>;

impl Grid<HeightSample> {
  /// Raw byte view of the samples, for handing to a renderer as a
  /// two-channel float texture.
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.data)
  }

  pub fn to_split(&self) -> (Vec<f32>, Vec<f32>) {
    let re = self.data.iter().map(|v| v.re).collect();
    let im = self.data.iter().map(|v| v.im).collect();
    (re, im)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn indexes_row_major() {
    let mut grid: Grid<f32> = Grid::new(4);
    grid[(1, 2)] = 5.0;
    assert_eq!(grid.as_slice()[1 * 4 + 2], 5.0);
  }

  #[test]
  fn split_round_trips_losslessly() {
    let data = (0..16)
      .map(|i| Complex32::new(i as f32, -(i as f32) * 0.5))
      .collect();
    let grid = Grid::from_vec(4, data);

    let (re, im) = grid.to_split();
    let rebuilt = Grid::from_split(&re, &im);
    assert_eq!(grid, rebuilt);
  }

  #[test]
  fn height_field_byte_view() {
    let field: HeightField = Grid::new(2);
    assert_eq!(field.as_bytes().len(), 2 * 2 * std::mem::size_of::<HeightSample>());
  }
}
