//! End-to-end document building tests.

use kmlkit::{AltitudeMode, Color, Geometry, IconStyle, Kml, Time};
use quick_xml::Reader;
use quick_xml::events::Event;
use tempfile::TempDir;

/// Walk the document and return the element names in open order.
/// Fails if any end tag does not match the innermost open element.
fn check_well_formed(text: &str) -> Vec<String> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<String> = Vec::new();
    let mut opened = Vec::new();

    loop {
        match reader.read_event().expect("XML should parse") {
            Event::Start(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                opened.push(name.clone());
                stack.push(name);
            }
            Event::End(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                assert_eq!(stack.pop().as_deref(), Some(name.as_str()), "mismatched close");
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert!(stack.is_empty(), "unclosed elements: {stack:?}");
    opened
}

fn line_containing<'a>(text: &'a str, needle: &str) -> &'a str {
    text.lines()
        .find(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("no line containing {needle}"))
}

#[test]
fn test_placemark_linestring_scenario() {
    let mut kml = Kml::new("scenario.kml", 6);
    kml.header();
    kml.placemark_header(Some("A"), None, Some("s1"));
    kml.linestring_header(&Geometry::default());
    kml.coordinates_2d(-122.084, 37.4219998);
    kml.coordinates_2d(-122.085, 37.4225);
    kml.coordinates_2d(-122.0861234, 37.42301);
    kml.linestring_footer();
    kml.placemark_footer();
    kml.footer();

    assert!(kml.is_balanced());
    let text = kml.buffer().as_str();

    let opened = check_well_formed(text);
    assert_eq!(
        opened,
        ["kml", "Document", "Placemark", "name", "styleUrl", "LineString", "coordinates"]
    );
    assert!(!text.contains("<description>"));

    let coords = line_containing(text, "<coordinates>");
    assert_eq!(
        coords,
        "      <coordinates>-122.084,37.422 -122.085,37.4225 -122.086,37.423 </coordinates>"
    );
}

#[test]
fn test_full_document_layout() {
    let mut kml = Kml::new("full.kml", 6);
    kml.header();
    kml.name("Layout");
    kml.style_header(Some("pin"));
    kml.icon_style(&IconStyle::new(Color::new("FFFF00", "FF").unwrap()).with_scale(2.0));
    kml.style_footer();
    kml.placemark_header(Some("Pin"), Some("A pin"), Some("pin"));
    kml.timestamp(&Time::year(2008).with_month(5).with_day(16));
    let geometry = Geometry::new()
        .extrude()
        .with_altitude_mode(AltitudeMode::RelativeToGround);
    kml.point_header(&geometry);
    kml.coordinates_3d(-122.084, 37.422, 100.0);
    kml.point_footer();
    kml.placemark_footer();
    kml.footer();

    let expected = r#"<?xml version="1.0" encoding="utf-8" ?>
<kml xmlns="http://www.opengis.net/kml/2.2">
<Document>
  <name>Layout</name>
  <Style id="pin">
    <IconStyle>
      <color>FF00FFFF</color>
      <scale>2.000000</scale>
    </IconStyle>
  </Style>
  <Placemark>
    <name>Pin</name>
    <description>A pin</description>
    <styleUrl>#pin</styleUrl>
    <TimeStamp>
      <when>2008-05-16</when>
    </TimeStamp>
    <Point>
      <extrude>1</extrude>
      <altitudeMode>relativeToGround</altitudeMode>
      <coordinates>-122.084,37.422,100 </coordinates>
    </Point>
  </Placemark>
</Document>
</kml>
"#;
    assert_eq!(kml.buffer().as_str(), expected);
    check_well_formed(kml.buffer().as_str());
}

#[test]
fn test_large_document_grows_buffer() {
    let mut kml = Kml::new("big.kml", 8);
    kml.header();
    kml.placemark_header(Some("Long"), None, None);
    kml.linestring_header(&Geometry::new().tessellate());
    for i in 0..5_000 {
        let t = f64::from(i) / 5_000.0;
        kml.coordinates_3d(-120.0 + t, 35.0 + t, t * 1000.0);
    }
    kml.linestring_footer();
    kml.placemark_footer();
    kml.footer();

    let buf = kml.buffer();
    assert!(buf.capacity() > kmlkit::buffer::INITIAL_CAPACITY);
    assert!(buf.capacity() >= buf.len() + 1);
    assert!((buf.capacity() / kmlkit::buffer::INITIAL_CAPACITY).is_power_of_two());

    let text = buf.as_str();
    check_well_formed(text);
    let coords = line_containing(text, "<coordinates>");
    assert_eq!(coords.matches(' ').count() - 6, 5_000);
}

#[test]
fn test_write_creates_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("out.kml");

    let mut kml = Kml::new(path.to_string_lossy(), 6);
    kml.header();
    kml.network_link("http://example.com/live.kml");
    kml.footer();
    kml.write().expect("Failed to write KML");

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, kml.buffer().as_str());
    check_well_formed(&written);
}

#[test]
fn test_write_truncates_existing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("out.kml");
    std::fs::write(&path, "x".repeat(10_000)).unwrap();

    let mut kml = Kml::new(path.to_string_lossy(), 6);
    kml.header();
    kml.footer();
    kml.write().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), kml.buffer().as_str());
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("no/such/dir/out.kml");

    let mut kml = Kml::new(path.to_string_lossy(), 6);
    kml.header();
    kml.footer();
    assert!(matches!(kml.write(), Err(kmlkit::Error::Io(_))));
}

#[test]
fn test_escaped_text_stays_well_formed() {
    let mut kml = Kml::new("esc.kml", 6);
    kml.header();
    kml.placemark_header(
        Some(&*kmlkit::escape("Fish & Chips")),
        Some(&*kmlkit::escape("<open> late")),
        None,
    );
    kml.placemark_footer();
    kml.footer();

    let text = kml.buffer().as_str();
    assert!(text.contains("<name>Fish &amp; Chips</name>"));
    assert!(text.contains("<description>&lt;open&gt; late</description>"));
    check_well_formed(text);
}
