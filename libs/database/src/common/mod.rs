//! Types shared by every database backend

mod error;

pub use error::{DatabaseError, DatabaseResult};
