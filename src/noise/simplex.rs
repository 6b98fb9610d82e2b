//! Seeded simplex noise.
//!
//! 2D simplex noise after Stefan Gustavson. One-dimensional sampling walks a
//! slanted line through the 2D field, which avoids the visible regularity of
//! 1D gradient noise at integer coordinates.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::white_noise::WhiteNoise;
use super::CoherentNoise;

/// Skewing factor, (sqrt(3) - 1) / 2.
const F2: f64 = 0.366_025_403_784_438_6;

/// Unskewing factor, (3 - sqrt(3)) / 6.
const G2: f64 = 0.211_324_865_405_187_13;

const GRADIENTS: [[f64; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

#[derive(Debug, Clone)]
pub struct SimplexNoise {
    perm: [u8; 512],
}

impl Default for SimplexNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SimplexNoise {
    pub fn new(seed: u32) -> Self {
        let mut noise = Self { perm: [0; 512] };
        noise.seed(seed);

        noise
    }

    /// Rebuild the permutation table from a seed.
    pub fn seed(&mut self, seed: u32) {
        let mut rng = WhiteNoise::new(seed);
        let mut source = [0u8; 256];

        for (i, value) in source.iter_mut().enumerate() {
            *value = i as u8;
        }

        // Fisher-Yates
        for i in (1..256).rev() {
            let j = ((rng.get_word() as u64 * (i as u64 + 1)) >> 32) as usize;
            source.swap(i, j);
        }

        self.perm[..256].copy_from_slice(&source);
        self.perm[256..].copy_from_slice(&source);

        log::debug!("Simplex noise seeded with {seed:#010x}");
    }

    /// Sample the 2D field. Result is in range -1.0..1.0
    pub fn sample_2d(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = (x + s).floor() as i64;
        let j = (y + s).floor() as i64;

        let t = (i + j) as f64 * G2;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);

        // Lower or upper triangle of the skewed cell.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let gi0 = self.hash(ii, jj);
        let gi1 = self.hash(ii + i1, jj + j1);
        let gi2 = self.hash(ii + 1, jj + 1);

        70.0 * (corner(gi0, x0, y0) + corner(gi1, x1, y1) + corner(gi2, x2, y2))
    }

    #[inline]
    fn hash(&self, i: usize, j: usize) -> usize {
        self.perm[i + self.perm[j] as usize] as usize
    }
}

impl CoherentNoise for SimplexNoise {
    #[inline]
    fn sample_1d(&self, t: f64) -> f32 {
        self.sample_2d(t * 1.2, -t * 0.7) as f32
    }
}

#[inline]
fn corner(hash: usize, x: f64, y: f64) -> f64 {
    let t = 0.5 - x * x - y * y;

    if t < 0.0 {
        0.0
    } else {
        let g = &GRADIENTS[hash % 12];
        let t2 = t * t;
        t2 * t2 * (g[0] * x + g[1] * y)
    }
}
