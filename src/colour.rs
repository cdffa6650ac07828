use std::fmt;

/// The colour text is drawn in, in one of the device colour spaces a default
/// appearance string can select
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB; components range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK; components range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray; 0.0 is black
    Grey { g: f32 },
}

impl Colour {
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// RGB from 0..=255 components, e.g. from a hex colour in a mapping file
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        let scale = |v: u8| v as f32 / 255.0;
        Colour::new_rgb(scale(r), scale(g), scale(b))
    }

    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Find the fill colour set by a default appearance string (`g`, `rg` or `k`).
    /// When the string sets it more than once, the last one wins, as it would
    /// when the operators run.
    pub fn from_default_appearance(da: &str) -> Option<Colour> {
        let tokens: Vec<&str> = da.split_whitespace().collect();
        let mut found = None;
        for (i, token) in tokens.iter().enumerate() {
            let arity = match *token {
                "g" => 1,
                "rg" => 3,
                "k" => 4,
                _ => continue,
            };
            let Some(operands) = i.checked_sub(arity).map(|start| &tokens[start..i]) else {
                continue;
            };
            let Ok(values) = operands
                .iter()
                .map(|v| v.parse::<f32>())
                .collect::<Result<Vec<f32>, _>>()
            else {
                continue;
            };
            found = match values[..] {
                [g] => Some(Colour::new_grey(g)),
                [r, g, b] => Some(Colour::new_rgb(r, g, b)),
                [c, m, y, k] => Some(Colour::new_cmyk(c, m, y, k)),
                _ => found,
            };
        }
        found
    }
}

/// Commonly used text colours
pub mod colours {
    use super::Colour;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

impl fmt::Display for Colour {
    /// Formats the colour as the operator that makes it the fill colour
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Colour::RGB { r, g, b } => write!(f, "{r} {g} {b} rg"),
            Colour::CMYK { c, m, y, k } => write!(f, "{c} {m} {y} {k} k"),
            Colour::Grey { g } => write!(f, "{g} g"),
        }
    }
}
