//! PhotoReader port - turns a user-selected image file into a data URI

use std::path::Path;

use crate::domain::value_objects::Photo;
use crate::error::PaintshopResult;

pub trait PhotoReader {
    fn read_photo(&self, path: &Path) -> PaintshopResult<Photo>;
}
