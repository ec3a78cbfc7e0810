pub mod compress;
pub mod error;
pub mod format;
pub mod load;
pub mod quantize;
pub mod save;

pub use error::PersistError;
pub use format::{Encoding, MapHeader};
pub use load::{load, LoadedMap};
pub use save::save;
