//! Placemarks, geometries and coordinate tuples.
//!
//! Point, LineString and LinearRing headers leave a `<coordinates>` element
//! open with no line break; the tuples that follow are written on that same
//! line and the footer closes it. Polygons hold boundary wrappers, each of
//! which holds a LinearRing.

use crate::buffer::{bprintf, bprintf_noindent};

use super::Kml;

/// How altitude values in coordinates are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AltitudeMode {
    /// Ignore altitude; the default, so nothing is written.
    #[default]
    ClampToGround,
    RelativeToGround,
    Absolute,
}

impl AltitudeMode {
    /// The `<altitudeMode>` token, or `None` for the default mode.
    pub fn token(self) -> Option<&'static str> {
        match self {
            AltitudeMode::ClampToGround => None,
            AltitudeMode::RelativeToGround => Some("relativeToGround"),
            AltitudeMode::Absolute => Some("absolute"),
        }
    }
}

/// Options shared by every geometry header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Geometry {
    pub extrude: bool,
    pub tessellate: bool,
    pub altitude_mode: AltitudeMode,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect the geometry to the ground.
    pub fn extrude(mut self) -> Self {
        self.extrude = true;
        self
    }

    /// Follow the terrain.
    pub fn tessellate(mut self) -> Self {
        self.tessellate = true;
        self
    }

    pub fn with_altitude_mode(mut self, mode: AltitudeMode) -> Self {
        self.altitude_mode = mode;
        self
    }
}

impl Kml {
    /// Open a `<Placemark>` with optional name, description and style reference.
    pub fn placemark_header(
        &mut self,
        name: Option<&str>,
        desc: Option<&str>,
        style_id: Option<&str>,
    ) {
        bprintf!(self.buf, "<Placemark>\n");
        self.buf.push_indent();
        if let Some(name) = name {
            self.name(name);
        }
        if let Some(desc) = desc {
            self.description(desc);
        }
        if let Some(id) = style_id {
            self.style_url(None, id);
        }
    }

    pub fn placemark_footer(&mut self) {
        self.buf.pop_indent();
        bprintf!(self.buf, "</Placemark>\n");
    }

    pub fn point_header(&mut self, geometry: &Geometry) {
        self.shape_header("Point", geometry);
        self.coordinates_header();
    }

    pub fn point_footer(&mut self) {
        self.coordinates_footer();
        self.shape_footer("Point");
    }

    pub fn linestring_header(&mut self, geometry: &Geometry) {
        self.shape_header("LineString", geometry);
        self.coordinates_header();
    }

    pub fn linestring_footer(&mut self) {
        self.coordinates_footer();
        self.shape_footer("LineString");
    }

    pub fn linearring_header(&mut self, geometry: &Geometry) {
        self.shape_header("LinearRing", geometry);
        self.coordinates_header();
    }

    pub fn linearring_footer(&mut self) {
        self.coordinates_footer();
        self.shape_footer("LinearRing");
    }

    pub fn polygon_header(&mut self, geometry: &Geometry) {
        self.shape_header("Polygon", geometry);
    }

    pub fn polygon_footer(&mut self) {
        self.shape_footer("Polygon");
    }

    pub fn outer_boundary_header(&mut self) {
        bprintf!(self.buf, "<outerBoundaryIs>\n");
        self.buf.push_indent();
    }

    pub fn outer_boundary_footer(&mut self) {
        self.buf.pop_indent();
        bprintf!(self.buf, "</outerBoundaryIs>\n");
    }

    pub fn inner_boundary_header(&mut self) {
        bprintf!(self.buf, "<innerBoundaryIs>\n");
        self.buf.push_indent();
    }

    pub fn inner_boundary_footer(&mut self) {
        self.buf.pop_indent();
        bprintf!(self.buf, "</innerBoundaryIs>\n");
    }

    /// Append an `x,y ` tuple to the open coordinate list.
    pub fn coordinates_2d(&mut self, x: f64, y: f64) {
        self.coords.write_2d(&mut self.buf, x, y);
    }

    /// Append an `x,y,z ` tuple to the open coordinate list.
    pub fn coordinates_3d(&mut self, x: f64, y: f64, z: f64) {
        self.coords.write_3d(&mut self.buf, x, y, z);
    }

    fn shape_header(&mut self, tag: &str, geometry: &Geometry) {
        let buf = &mut self.buf;
        bprintf!(buf, "<{}>\n", tag);
        buf.push_indent();
        if geometry.extrude {
            bprintf!(buf, "<extrude>1</extrude>\n");
        }
        if geometry.tessellate {
            bprintf!(buf, "<tessellate>1</tessellate>\n");
        }
        if let Some(token) = geometry.altitude_mode.token() {
            bprintf!(buf, "<altitudeMode>{}</altitudeMode>\n", token);
        }
    }

    fn shape_footer(&mut self, tag: &str) {
        self.buf.pop_indent();
        bprintf!(self.buf, "</{}>\n", tag);
    }

    fn coordinates_header(&mut self) {
        bprintf!(self.buf, "<coordinates>");
        self.buf.push_indent();
    }

    fn coordinates_footer(&mut self) {
        self.buf.pop_indent();
        bprintf_noindent!(self.buf, "</coordinates>\n");
    }
}
