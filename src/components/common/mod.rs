mod fields;

pub use fields::{TextField, TimestampField};
