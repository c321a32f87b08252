//! Append-only container of geometric objects sharing one dimension.

use crate::dimension::{Dimension, GeomObject};
use crate::error::{GeomError, Result};

/// Flat, growing list of objects; every appended member has the space's dimension.
#[derive(Debug, Default)]
pub struct Space {
    dim: Dimension,
    objects: Vec<Box<dyn GeomObject>>,
}

impl Space {
    /// Empty 2D space.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimension(size: i64) -> Result<Self> {
        Ok(Self {
            dim: Dimension::new(size)?,
            objects: Vec::new(),
        })
    }

    /// Dimension taken from the first object. The list is taken as is; only
    /// later `add_object` calls are checked.
    pub fn from_objects(objects: Vec<Box<dyn GeomObject>>) -> Result<Self> {
        let dim = objects
            .first()
            .map(|o| o.dimension())
            .ok_or_else(|| GeomError::invalid_argument("space needs at least one object"))?;
        Ok(Self { dim, objects })
    }

    /// Append `obj`; `DimensionMismatch` leaves the space untouched.
    pub fn add_object(&mut self, obj: Box<dyn GeomObject>) -> Result<()> {
        if let Err(err) = self.dim.ensure_same(obj.dimension()) {
            tracing::debug!(
                space = self.dim.get(),
                object = obj.dimension().get(),
                "rejected object"
            );
            return Err(err);
        }
        self.objects.push(obj);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[Box<dyn GeomObject>] {
        &self.objects
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn GeomObject + 'static)> + '_ {
        self.objects.iter().map(|o| o.as_ref())
    }
}

impl GeomObject for Space {
    fn dimension(&self) -> Dimension {
        self.dim
    }
}
