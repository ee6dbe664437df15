use plotters::style::RGBColor;

pub struct Theme {
    pub bg: RGBColor,
    pub fg: RGBColor,
    pub title: RGBColor,
    pub bar: RGBColor,
    pub bar_edge: RGBColor,
    pub highlight: RGBColor,
    pub mean: RGBColor,
    pub lower: RGBColor,
    pub density_bar: RGBColor,
    pub density_edge: RGBColor,
    pub density_mean: RGBColor,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            bg: RGBColor(255, 255, 255),
            fg: RGBColor(0, 0, 0),
            title: RGBColor(139, 0, 0),      // darkred
            bar: RGBColor(0, 100, 0),        // darkgreen
            bar_edge: RGBColor(255, 255, 255),
            highlight: RGBColor(205, 133, 63), // peru
            mean: RGBColor(139, 0, 0),
            lower: RGBColor(0, 100, 0),
            density_bar: RGBColor(0, 128, 0),
            density_edge: RGBColor(0, 0, 0),
            density_mean: RGBColor(255, 0, 0),
        }
    }
    pub fn colorblind() -> Self {
        Self {
            bg: RGBColor(255, 255, 255),
            fg: RGBColor(0, 0, 0),
            title: RGBColor(0, 0, 0),
            bar: RGBColor(0, 114, 178),       // blue instead of green
            bar_edge: RGBColor(255, 255, 255),
            highlight: RGBColor(230, 159, 0), // orange
            mean: RGBColor(213, 94, 0),       // vermillion instead of red
            lower: RGBColor(0, 114, 178),
            density_bar: RGBColor(0, 114, 178),
            density_edge: RGBColor(0, 0, 0),
            density_mean: RGBColor(213, 94, 0),
        }
    }
    pub fn from_name(name: &str) -> Self {
        match name {
            "colorblind" => Self::colorblind(),
            _ => Self::classic(),
        }
    }
}
