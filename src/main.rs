use std::time::Instant;

use spectral_ocean::{HeightField, OceanSurface, WaveParameters};

const FRAMES: u32 = 60;
const FRAME_DT: f32 = 1.0 / 30.0;

fn main() {
  env_logger::init();

  let params = WaveParameters::default();
  let surface = OceanSurface::new(params, Some(42)).expect("valid default parameters");

  let started = Instant::now();
  let mut last = surface.step(0.0);
  for frame in 1..FRAMES {
    last = surface.step(frame as f32 * FRAME_DT);
  }
  log::info!(
    "{} frames of {}x{} in {:?}",
    FRAMES,
    params.size,
    params.size,
    started.elapsed()
  );

  write_png(&last, "ocean_heightfield.png");
}

fn write_png(field: &HeightField, path: &str) {
  let n = field.size() as u32;
  let img = image::GrayImage::from_fn(n, n, |x, y| {
    let v = field[(y as usize, x as usize)].re.clamp(0.0, 1.0);
    image::Luma([(v * 255.0) as u8])
  });
  img.save(path).expect("failed to write height-field image");
  log::info!("wrote {}", path);
}
