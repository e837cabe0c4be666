use image::Rgb;

// Anchor points of the terrain colormap: (position, r, g, b).
const TERRAIN: [(f32, [f32; 3]); 6] = [
    (0.00, [0.2, 0.2, 0.6]),
    (0.15, [0.0, 0.6, 1.0]),
    (0.25, [0.0, 0.8, 0.4]),
    (0.50, [1.0, 1.0, 0.6]),
    (0.75, [0.5, 0.36, 0.33]),
    (1.00, [1.0, 1.0, 1.0]),
];

/// Discrete colors indexed by digit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb<u8>>) -> Self {
        assert!(!colors.is_empty(), "palette needs at least one color");
        Self { colors }
    }

    /// `n` colors sampled from the terrain colormap at evenly spaced
    /// positions over `[0, 1]`.
    pub fn terrain(n: usize) -> Self {
        let n = n.max(1);
        let colors = (0..n)
            .map(|i| {
                let t = if n == 1 {
                    0.0
                } else {
                    i as f32 / (n - 1) as f32
                };
                terrain_at(t)
            })
            .collect();
        Self { colors }
    }

    /// Color for `digit`; values past the end wrap around.
    pub fn color(&self, digit: u8) -> Rgb<u8> {
        self.colors[digit as usize % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::terrain(10)
    }
}

fn terrain_at(t: f32) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let hi = TERRAIN
        .iter()
        .position(|&(p, _)| p >= t)
        .unwrap_or(TERRAIN.len() - 1)
        .max(1);
    let (p0, c0) = TERRAIN[hi - 1];
    let (p1, c1) = TERRAIN[hi];
    let w = if p1 > p0 { (t - p0) / (p1 - p0) } else { 0.0 };

    let mut out = [0u8; 3];
    for (o, (a, b)) in out.iter_mut().zip(c0.iter().zip(c1.iter())) {
        *o = ((a + (b - a) * w) * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    Rgb(out)
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::Palette;

    #[test]
    fn terrain_endpoints() {
        let p = Palette::terrain(10);

        assert_eq!(p.len(), 10);
        assert_eq!(p.color(0), Rgb([51, 51, 153]));
        assert_eq!(p.color(9), Rgb([255, 255, 255]));
    }

    #[test]
    fn terrain_colors_are_distinct() {
        let p = Palette::default();
        for a in 0..10u8 {
            for b in (a + 1)..10u8 {
                assert_ne!(p.color(a), p.color(b), "digits {a} and {b}");
            }
        }
    }

    #[test]
    fn colors_wrap() {
        let p = Palette::new(vec![Rgb([1, 2, 3]), Rgb([4, 5, 6])]);
        assert_eq!(p.color(3), Rgb([4, 5, 6]));
    }
}
