/// Color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn gray(level: f64, a: f64) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
            a,
        }
    }

    pub fn from_hsl(h: f64, s: f64, l: f64, a: f64) -> Self {
        let [r, g, b] = hsl_to_rgb(h, s, l);
        Self { r, g, b, a }
    }

    /// Channels scaled to bytes.
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|x| (x.clamp(0., 1.) * 255.).round() as u8)
    }
}

/// `h` in degrees (any range), `s` and `l` in `[0, 1]`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let h = h.rem_euclid(360.) / 60.;
    let c = (1. - (2. * l - 1.).abs()) * s;
    let x = c * (1. - (h % 2. - 1.).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.),
        1 => (x, c, 0.),
        2 => (0., c, x),
        3 => (0., x, c),
        4 => (x, 0., c),
        _ => (c, 0., x),
    };
    let m = l - c / 2.;
    [r + m, g + m, b + m]
}
