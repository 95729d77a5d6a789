use std::path::{Path, PathBuf};

use super::shared::read_file;
use crate::media::{Capacity, LsbCount};
use crate::{engine, Result, SteganoError};

pub fn prepare() -> CapacityApi {
    CapacityApi::default()
}

#[derive(Default, Debug)]
pub struct CapacityApi {
    cover: Option<PathBuf>,
    lsb_count: LsbCount,
}

impl CapacityApi {
    pub fn with_cover<A: AsRef<Path>>(mut self, cover: A) -> Self {
        self.cover = Some(cover.as_ref().to_path_buf());
        self
    }

    pub fn with_lsb_count(mut self, lsb_count: LsbCount) -> Self {
        self.lsb_count = lsb_count;
        self
    }

    pub fn execute(self) -> Result<Capacity> {
        let Some(cover) = self.cover else {
            return Err(SteganoError::CarrierNotSet);
        };

        engine::capacity(&read_file(&cover)?, self.lsb_count)
    }
}
