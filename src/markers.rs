extern crate nalgebra as na;

use std::io::Write;

use na::Vector3;
use tracing::debug;

use crate::error::Result;
use crate::paths::random_path::RandomPath;
use crate::sampler::sample_uniform;

/// Scene collaborator that receives sampled path positions.
pub trait MarkerSink {
    fn place_marker_at(&mut self, pos: &Vector3<f64>) -> Result<()>;
}

/// Keeps placed markers in memory.
#[derive(Debug, Clone, Default)]
pub struct MarkerCollector {
    pub markers: Vec<Vector3<f64>>,
}

impl MarkerSink for MarkerCollector {
    fn place_marker_at(&mut self, pos: &Vector3<f64>) -> Result<()> {
        self.markers.push(*pos);
        Ok(())
    }
}

/// Writes one `x,y,z` CSV row per marker.
pub struct CsvMarkerSink<W: Write> {
    wtr: csv::Writer<W>,
}

impl<W: Write> CsvMarkerSink<W> {
    pub fn new(writer: W) -> Result<CsvMarkerSink<W>> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["x", "y", "z"])?;
        Ok(CsvMarkerSink { wtr })
    }

    pub fn into_inner(self) -> Result<W> {
        self.wtr
            .into_inner()
            .map_err(|e| std::io::Error::new(e.error().kind(), e.error().to_string()).into())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.wtr.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkerSink for CsvMarkerSink<W> {
    fn place_marker_at(&mut self, pos: &Vector3<f64>) -> Result<()> {
        self.wtr.write_record(&[
            pos[0].to_string(),
            pos[1].to_string(),
            pos[2].to_string(),
        ])?;
        Ok(())
    }
}

/// Samples the path every `step` of its parameter and places a marker at
/// each sample. Returns the number of markers placed.
pub fn scatter_markers(path: &RandomPath, step: f64, sink: &mut impl MarkerSink) -> Result<usize> {
    let samples = sample_uniform(path.points(), step)?;
    for pos in &samples {
        sink.place_marker_at(pos)?;
    }
    debug!("placed {} markers along {} path points", samples.len(), path.len());
    Ok(samples.len())
}
