//! Fixed color palette for the bouncing object

/// A named RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedColor {
    pub name: &'static str,
    pub rgba: [f32; 4],
}

impl NamedColor {
    const fn new(name: &'static str, r: f32, g: f32, b: f32) -> Self {
        Self {
            name,
            rgba: [r, g, b, 1.0],
        }
    }
}

/// The colors `C` cycles through, in order
pub const DEFAULT_COLORS: [NamedColor; 8] = [
    NamedColor::new("red", 1.0, 0.0, 0.0),
    NamedColor::new("green", 0.0, 1.0, 0.0),
    NamedColor::new("blue", 0.0, 0.0, 1.0),
    NamedColor::new("cyan", 0.0, 1.0, 1.0),
    NamedColor::new("white", 1.0, 1.0, 1.0),
    NamedColor::new("magenta", 1.0, 0.0, 1.0),
    NamedColor::new("yellow", 1.0, 1.0, 0.0),
    NamedColor::new("black", 0.0, 0.0, 0.0),
];

/// Ordered, non-empty list of colors indexed with wrap-around
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<NamedColor>,
}

impl Palette {
    /// Builds a palette, or `None` when `colors` is empty
    pub fn new(colors: Vec<NamedColor>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapping past the end
    pub fn get(&self, index: usize) -> NamedColor {
        self.colors[index % self.colors.len()]
    }

    pub fn rgba(&self, index: usize) -> [f32; 4] {
        self.get(index).rgba
    }

    pub fn name(&self, index: usize) -> &'static str {
        self.get(index).name
    }

    /// Index following `index`
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.colors.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 8);
        let names: Vec<_> = (0..8).map(|i| palette.name(i)).collect();
        assert_eq!(
            names,
            ["red", "green", "blue", "cyan", "white", "magenta", "yellow", "black"]
        );
        assert_eq!(palette.rgba(5), [1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_wraps() {
        let palette = Palette::default();
        assert_eq!(palette.get(8), palette.get(0));
        assert_eq!(palette.next_index(7), 0);
        assert!(Palette::new(Vec::new()).is_none());
    }
}
