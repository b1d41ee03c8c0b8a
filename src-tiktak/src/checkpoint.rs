//! Phase artefacts written for offline inspection and reload.
//!
//! When a checkpoint directory is configured, the coordinator writes one JSON
//! artefact right after the phase that produced it: the full seed-evaluation
//! list, the retained promising seeds, the sorted local minima, and the final
//! incumbent. Each file is self-describing and re-loadable without the
//! coordinator running.

use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::TikTakError;
use crate::frontier::EvaluatedPoint;

pub const QUASIRANDOM_POINTS_FILE: &str = "quasirandom_points.json";
pub const ALL_POINTS_FILE: &str = "all_points.json";
pub const LOCAL_MINIMA_FILE: &str = "local_minima.json";
pub const GLOBAL_MINIMUM_FILE: &str = "global_minimum.json";

/// Handle on a checkpoint directory.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    dir: PathBuf,
}

impl Checkpoint {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), TikTakError> {
        create_dir_all(&self.dir)?;
        let file = File::create(self.dir.join(name))?;
        serde_json::to_writer_pretty(BufWriter::new(file), value)?;
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Result<T, TikTakError> {
        let file = File::open(self.dir.join(name))?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn write_quasirandom_points(&self, points: &[EvaluatedPoint]) -> Result<(), TikTakError> {
        self.write(QUASIRANDOM_POINTS_FILE, &points)
    }

    pub fn load_quasirandom_points(&self) -> Result<Vec<EvaluatedPoint>, TikTakError> {
        self.read(QUASIRANDOM_POINTS_FILE)
    }

    pub fn write_all_points(&self, points: &[EvaluatedPoint]) -> Result<(), TikTakError> {
        self.write(ALL_POINTS_FILE, &points)
    }

    pub fn load_all_points(&self) -> Result<Vec<EvaluatedPoint>, TikTakError> {
        self.read(ALL_POINTS_FILE)
    }

    pub fn write_local_minima(&self, points: &[EvaluatedPoint]) -> Result<(), TikTakError> {
        self.write(LOCAL_MINIMA_FILE, &points)
    }

    pub fn load_local_minima(&self) -> Result<Vec<EvaluatedPoint>, TikTakError> {
        self.read(LOCAL_MINIMA_FILE)
    }

    pub fn write_global_minimum(&self, point: &EvaluatedPoint) -> Result<(), TikTakError> {
        self.write(GLOBAL_MINIMUM_FILE, point)
    }

    pub fn load_global_minimum(&self) -> Result<EvaluatedPoint, TikTakError> {
        self.read(GLOBAL_MINIMUM_FILE)
    }
}
