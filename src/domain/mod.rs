mod entity;
mod geo_point;

pub use entity::{EntitySet, LocatedEntity};
pub use geo_point::{CoordinateError, GeoPoint};
