use geo::{BoundingRect, Rect};

use super::county::County;

/// The full county boundary collection, in file order. Immutable once loaded.
#[derive(Debug, Default)]
pub struct CountyLayer {
    counties: Vec<County>,
}

impl CountyLayer {
    pub fn new(counties: Vec<County>) -> Self {
        Self { counties }
    }

    pub fn counties(&self) -> &[County] { &self.counties }

    pub fn get(&self, index: usize) -> Option<&County> { self.counties.get(index) }

    pub fn len(&self) -> usize { self.counties.len() }

    pub fn is_empty(&self) -> bool { self.counties.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &County> { self.counties.iter() }

    /// Bounding box of every county's geometry, or `None` if no county has coordinates.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.counties.iter()
            .filter_map(|county| county.geometry.bounding_rect())
            .reduce(|a, b| Rect::new(
                (a.min().x.min(b.min().x), a.min().y.min(b.min().y)),
                (a.max().x.max(b.max().x), a.max().y.max(b.max().y)),
            ))
    }
}
