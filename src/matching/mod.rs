pub mod driver;
pub mod error;
pub mod friendly;
pub mod group;
pub mod io;
pub mod solve;
pub mod types;

pub use driver::*;
pub use error::Error;
pub use friendly::is_friendly;
pub use group::group_by_length;
pub use io::*;
pub use solve::friendly_count;
pub use types::{Bucket, BucketResult, CountReport, Word};
