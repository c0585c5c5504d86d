//! Footer styling.
//!
//! The footer takes its look from a [`FooterStyle`] value handed in by the
//! page shell instead of reading global theme state. Helpers turn the
//! style into inline CSS strings for the render function.

/// Colors used by the footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: String,
    pub text: String,
    /// Secondary text: links, contact lines, copyright
    pub muted: String,
    /// Headings' icons and hover color
    pub accent: String,
    /// Rule between the columns and the bottom bar
    pub divider: String,
}

/// Explicit style object for [`crate::components::Footer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterStyle {
    pub palette: Palette,
    /// Base spacing unit in px; paddings and gaps are multiples of it
    pub spacing: u16,
    /// Narrowest a column may get before the grid wraps
    pub min_column_width: u16,
    /// Cap on the content width
    pub max_width: u16,
    pub font_family: String,
}

impl Default for FooterStyle {
    /// Dark brand theme.
    fn default() -> Self {
        Self {
            palette: Palette {
                background: "#0f172a".to_string(),
                text: "#f8fafc".to_string(),
                muted: "#94a3b8".to_string(),
                accent: "#38bdf8".to_string(),
                divider: "#1e293b".to_string(),
            },
            spacing: 8,
            min_column_width: 180,
            max_width: 1200,
            font_family: "Inter, system-ui, sans-serif".to_string(),
        }
    }
}

impl FooterStyle {
    /// Light variant for pages with a white background.
    pub fn light() -> Self {
        Self {
            palette: Palette {
                background: "#f8fafc".to_string(),
                text: "#0f172a".to_string(),
                muted: "#475569".to_string(),
                accent: "#0284c7".to_string(),
                divider: "#e2e8f0".to_string(),
            },
            ..Self::default()
        }
    }

    /// `n` spacing units in px.
    pub fn space(&self, n: u16) -> u32 {
        u32::from(self.spacing) * u32::from(n)
    }

    /// Outer `<footer>` element.
    pub fn container(&self) -> String {
        format!(
            "background-color: {}; color: {}; font-family: {}; padding: {}px {}px {}px;",
            self.palette.background,
            self.palette.text,
            self.font_family,
            self.space(8),
            self.space(3),
            self.space(4),
        )
    }

    /// Centered content wrapper.
    pub fn inner(&self) -> String {
        format!("max-width: {}px; margin: 0 auto;", self.max_width)
    }

    /// Brand block plus nav columns. Wraps on narrow screens.
    pub fn grid(&self) -> String {
        format!(
            "display: grid; grid-template-columns: repeat(auto-fit, minmax({}px, 1fr)); gap: {}px;",
            self.min_column_width,
            self.space(4),
        )
    }

    pub fn brand(&self) -> String {
        format!(
            "display: flex; align-items: center; gap: {}px; font-size: 1.5rem; font-weight: 800; letter-spacing: 0.08em; margin: 0 0 {}px;",
            self.space(1),
            self.space(2),
        )
    }

    pub fn tagline(&self) -> String {
        format!(
            "color: {}; line-height: 1.6; margin: 0 0 {}px;",
            self.palette.muted,
            self.space(3),
        )
    }

    /// Column heading.
    pub fn heading(&self) -> String {
        format!(
            "display: flex; align-items: center; gap: {}px; font-size: 1rem; font-weight: 700; margin: 0 0 {}px;",
            self.space(1),
            self.space(2),
        )
    }

    pub fn list(&self) -> String {
        format!(
            "list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: {}px;",
            self.space(1) + self.space(1) / 2,
        )
    }

    pub fn link(&self) -> String {
        format!(
            "color: {}; text-decoration: none; font-size: 0.9rem;",
            self.palette.muted
        )
    }

    /// Line in the contact block.
    pub fn contact(&self) -> String {
        format!(
            "display: flex; align-items: center; gap: {}px; color: {}; font-size: 0.9rem; margin: 0 0 {}px;",
            self.space(1),
            self.palette.muted,
            self.space(1),
        )
    }

    pub fn social_row(&self) -> String {
        format!(
            "display: flex; gap: {}px; margin-top: {}px;",
            self.space(1),
            self.space(2),
        )
    }

    /// Round button around a social icon.
    pub fn social_button(&self) -> String {
        format!(
            "display: inline-flex; align-items: center; justify-content: center; width: {size}px; height: {size}px; border-radius: 50%; border: 1px solid {}; color: {};",
            self.palette.divider,
            self.palette.text,
            size = self.space(5),
        )
    }

    pub fn icon_accent(&self) -> String {
        format!("color: {};", self.palette.accent)
    }

    pub fn divider(&self) -> String {
        format!(
            "border: none; border-top: 1px solid {}; margin: {}px 0 {}px;",
            self.palette.divider,
            self.space(6),
            self.space(3),
        )
    }

    /// Copyright line and legal links.
    pub fn bottom_bar(&self) -> String {
        format!(
            "display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: {}px; color: {}; font-size: 0.8rem;",
            self.space(2),
            self.palette.muted,
        )
    }

    pub fn legal_links(&self) -> String {
        format!("display: flex; flex-wrap: wrap; gap: {}px;", self.space(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_scales_with_unit() {
        let mut style = FooterStyle::default();
        assert_eq!(style.space(3), 24);
        style.spacing = 4;
        assert_eq!(style.space(3), 12);
        assert!(style.grid().contains("gap: 16px"));
    }

    #[test]
    fn test_grid_uses_min_column_width() {
        let style = FooterStyle {
            min_column_width: 220,
            ..FooterStyle::default()
        };
        assert!(style.grid().contains("minmax(220px, 1fr)"));
    }

    #[test]
    fn test_palette_flows_into_css() {
        let style = FooterStyle::light();
        assert!(style.container().contains("background-color: #f8fafc"));
        assert!(style.link().contains(&style.palette.muted));
        assert!(style.divider().contains(&style.palette.divider));
    }

    #[test]
    fn test_light_keeps_layout() {
        let dark = FooterStyle::default();
        let light = FooterStyle::light();
        assert_ne!(dark.palette, light.palette);
        assert_eq!(dark.spacing, light.spacing);
        assert_eq!(dark.max_width, light.max_width);
    }
}
