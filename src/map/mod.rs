mod county;
mod geo_id;
mod io;
mod layer;

pub use county::County;
pub use geo_id::{FIPS_LEN, fips_key};
pub use layer::CountyLayer;
