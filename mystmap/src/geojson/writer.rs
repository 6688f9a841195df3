//! Streaming FeatureCollection writer.
//!
//! Features are written one at a time as they are generated, so a Zone of a
//! million tiles never has to be held in memory. The writer owns comma
//! placement between features, rings, positions and properties; callers only
//! describe what to write.

use std::io::{self, Write};

use super::property::Properties;
use crate::coord::ExactCoordinate;

/// Geometry of one feature.
#[derive(Debug, Clone, Copy)]
pub enum Geometry<'a> {
    /// A polygon with a single (outer) ring.
    Polygon(&'a [ExactCoordinate]),
    /// A polygon with no coordinates, used for punched-out Zone tiles.
    EmptyPolygon,
    /// A single polygon given as outer ring followed by inner rings, written
    /// as a `MultiPolygon`.
    MultiPolygon(&'a [Vec<ExactCoordinate>]),
}

/// One feature to write.
#[derive(Debug, Clone, Copy)]
pub struct Feature<'a> {
    /// Optional numeric feature id
    pub id: Option<u64>,
    pub geometry: Geometry<'a>,
    pub properties: &'a Properties,
}

/// Writes a single `FeatureCollection` to a sink.
///
/// Call [`GeoJsonWriter::begin`], then [`GeoJsonWriter::write_feature`] for
/// each feature, then [`GeoJsonWriter::finish`] to close the collection and
/// flush. Dropping the writer without finishing leaves an unterminated
/// document.
pub struct GeoJsonWriter<W: Write> {
    sink: W,
    features: u64,
}

impl<W: Write> GeoJsonWriter<W> {
    /// Open the collection.
    pub fn begin(mut sink: W) -> io::Result<Self> {
        sink.write_all(br#"{"type":"FeatureCollection","features":["#)?;
        Ok(Self { sink, features: 0 })
    }

    /// Number of features written so far.
    pub fn features_written(&self) -> u64 {
        self.features
    }

    /// Append a feature. Keys are written in the order
    /// `type`, `id`, `geometry`, `properties`.
    pub fn write_feature(&mut self, feature: &Feature<'_>) -> io::Result<()> {
        if self.features > 0 {
            self.sink.write_all(b",")?;
        }
        self.sink.write_all(br#"{"type":"Feature""#)?;
        if let Some(id) = feature.id {
            write!(self.sink, r#","id":{}"#, id)?;
        }
        self.sink.write_all(br#","geometry":"#)?;
        write_geometry(&mut self.sink, &feature.geometry)?;
        self.sink.write_all(br#","properties":"#)?;
        write_properties(&mut self.sink, feature.properties)?;
        self.sink.write_all(b"}")?;
        self.features += 1;
        Ok(())
    }

    /// Close the collection, flush, and hand back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.sink.write_all(b"]}\n")?;
        self.sink.flush()?;
        Ok(self.sink)
    }
}

/// Write `items` separated by commas.
fn write_separated<W, I, F>(sink: &mut W, items: I, mut write_item: F) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    F: FnMut(&mut W, I::Item) -> io::Result<()>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            sink.write_all(b",")?;
        }
        write_item(sink, item)?;
    }
    Ok(())
}

fn write_position<W: Write>(sink: &mut W, position: &ExactCoordinate) -> io::Result<()> {
    write!(sink, "[{},{}]", position.lon, position.lat)
}

fn write_ring<W: Write>(sink: &mut W, ring: &[ExactCoordinate]) -> io::Result<()> {
    sink.write_all(b"[")?;
    write_separated(sink, ring, write_position)?;
    sink.write_all(b"]")
}

fn write_geometry<W: Write>(sink: &mut W, geometry: &Geometry<'_>) -> io::Result<()> {
    match geometry {
        Geometry::Polygon(ring) => {
            sink.write_all(br#"{"type":"Polygon","coordinates":["#)?;
            write_ring(sink, ring)?;
            sink.write_all(b"]}")
        }
        Geometry::EmptyPolygon => sink.write_all(br#"{"type":"Polygon","coordinates":[]}"#),
        Geometry::MultiPolygon(rings) => {
            sink.write_all(br#"{"type":"MultiPolygon","coordinates":[["#)?;
            write_separated(sink, rings.iter(), |sink, ring| write_ring(sink, ring))?;
            sink.write_all(b"]]}")
        }
    }
}

fn write_properties<W: Write>(sink: &mut W, properties: &Properties) -> io::Result<()> {
    sink.write_all(b"{")?;
    write_separated(sink, properties.iter(), |sink, (name, value)| {
        serde_json::to_writer(&mut *sink, name)?;
        write!(sink, ":{}", value.as_literal())
    })?;
    sink.write_all(b"}")
}
