//! Shared styles.

use crate::buffer::bprintf;

use super::{Color, Kml};

/// Icon appearance for `<IconStyle>`.
///
/// Scale, heading and hotspot are only written when they differ from the
/// KML defaults (1.0, 0.0 and the icon center).
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub color: Color,
    pub scale: f64,
    /// Rotation in degrees.
    pub heading: f64,
    /// Hotspot position as fractions of the icon size.
    pub hotspot: (f64, f64),
    /// Icon image URL.
    pub icon: Option<String>,
}

impl IconStyle {
    pub const DEFAULT_SCALE: f64 = 1.0;
    pub const DEFAULT_HEADING: f64 = 0.0;
    pub const DEFAULT_HOTSPOT: (f64, f64) = (0.5, 0.5);

    pub fn new(color: Color) -> Self {
        Self {
            color,
            scale: Self::DEFAULT_SCALE,
            heading: Self::DEFAULT_HEADING,
            hotspot: Self::DEFAULT_HOTSPOT,
            icon: None,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    pub fn with_hotspot(mut self, x: f64, y: f64) -> Self {
        self.hotspot = (x, y);
        self
    }

    pub fn with_icon(mut self, href: impl Into<String>) -> Self {
        self.icon = Some(href.into());
        self
    }
}

impl Kml {
    /// Open a `<Style>`; `None` writes an anonymous style.
    pub fn style_header(&mut self, id: Option<&str>) {
        match id {
            Some(id) => bprintf!(self.buf, "<Style id=\"{}\">\n", id),
            None => bprintf!(self.buf, "<Style>\n"),
        };
        self.buf.push_indent();
    }

    pub fn style_footer(&mut self) {
        self.buf.pop_indent();
        bprintf!(self.buf, "</Style>\n");
    }

    pub fn line_style(&mut self, color: &Color, width: i32) {
        let buf = &mut self.buf;
        bprintf!(buf, "<LineStyle>\n");
        buf.push_indent();
        bprintf!(buf, "<color>{}</color>\n", color);
        bprintf!(buf, "<width>{}</width>\n", width);
        buf.pop_indent();
        bprintf!(buf, "</LineStyle>\n");
    }

    pub fn poly_style(&mut self, color: &Color) {
        let buf = &mut self.buf;
        bprintf!(buf, "<PolyStyle>\n");
        buf.push_indent();
        bprintf!(buf, "<color>{}</color>\n", color);
        buf.pop_indent();
        bprintf!(buf, "</PolyStyle>\n");
    }

    pub fn icon_style(&mut self, style: &IconStyle) {
        let buf = &mut self.buf;
        bprintf!(buf, "<IconStyle>\n");
        buf.push_indent();
        bprintf!(buf, "<color>{}</color>\n", style.color);

        if style.scale != IconStyle::DEFAULT_SCALE {
            bprintf!(buf, "<scale>{:.6}</scale>\n", style.scale);
        }
        if style.heading != IconStyle::DEFAULT_HEADING {
            bprintf!(buf, "<heading>{:.6}</heading>\n", style.heading);
        }
        if style.hotspot != IconStyle::DEFAULT_HOTSPOT {
            let (x, y) = style.hotspot;
            bprintf!(
                buf,
                "<hotSpot x=\"{:.6}\" y=\"{:.6}\" xunits=\"fraction\" yunits=\"fraction\"/>\n",
                x,
                y
            );
        }
        if let Some(href) = &style.icon {
            bprintf!(buf, "<Icon>\n");
            buf.push_indent();
            bprintf!(buf, "<href>{}</href>\n", href);
            buf.pop_indent();
            bprintf!(buf, "</Icon>\n");
        }

        buf.pop_indent();
        bprintf!(buf, "</IconStyle>\n");
    }
}
