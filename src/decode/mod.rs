//! Partition decoder module
//!
//! Reads the ethnicity, nationality and gender result files returned by
//! the NamSor batch endpoints.
//!
//! # Overview
//!
//! Each entry shape is an explicit schema, so a missing or mistyped field
//! fails the read with a `Decode` error naming the file and the field.

mod decoders;
mod types;

pub use decoders::{decode_partition, read_partition, read_partitions};
pub use types::{EthnicityEntry, GenderEntry, NationalityEntry, PartitionEntry, PartitionFile};
