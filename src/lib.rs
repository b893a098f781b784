//! # kmlkit
//!
//! Incrementally build KML documents and package them as KMZ archives.
//!
//! ## Features
//!
//! - Append-only, indent-aware text [`Buffer`] with predictable doubling growth
//! - Paired header/footer builder calls for documents, placemarks, geometries,
//!   styles, time primitives and network links
//! - Coordinates written with a fixed number of significant digits per document
//! - Colors given as conventional `rrggbb` and written in KML `aabbggrr` order
//! - Several documents written into one zip container, in insertion order
//!
//! ## Quick Start
//!
//! ```no_run
//! use kmlkit::{Color, Geometry, Kml};
//!
//! let mut kml = Kml::new("route.kml", 6);
//! kml.header();
//! kml.style_header(Some("route"));
//! kml.line_style(&Color::new("0000ff", "ff")?, 4);
//! kml.style_footer();
//!
//! kml.placemark_header(Some("Route"), None, Some("route"));
//! kml.linestring_header(&Geometry::new().tessellate());
//! kml.coordinates_2d(-122.084, 37.422);
//! kml.coordinates_2d(-122.086, 37.423);
//! kml.linestring_footer();
//! kml.placemark_footer();
//! kml.footer();
//!
//! kml.write()?;
//! # Ok::<(), kmlkit::Error>(())
//! ```
//!
//! Multiple documents go into a [`Kmz`], which owns them and writes them as
//! archive members in the order they were added.

pub mod buffer;
pub mod error;
pub mod kml;
pub mod kmz;

pub use buffer::Buffer;
pub use error::{Error, Result};
pub use kml::{
    AltitudeMode, Color, DEFAULT_PRECISION, Geometry, IconStyle, Kml, Significant, Time, escape,
};
pub use kmz::{Archive, Kmz, KmzConfig, ZipContainer};
