//! Infer an Avro record schema from one sample JSON document.
//!
//! Given a schema name, raw JSON bytes, and a nullability flag, [`infer`]
//! returns the serialized schema plus a list of warnings for anything it
//! had to skip:
//!
//! ```
//! let inferred = json_to_avro::infer("test", br#"{"string": "Avengers"}"#, false).unwrap();
//! assert_eq!(
//!     String::from_utf8(inferred.schema).unwrap(),
//!     r#"{"name":"test","type":"record","fields":[{"name":"string","type":"string"}]}"#,
//! );
//! ```

pub mod avro;
pub mod cli;
pub mod inference;
pub mod names;

pub use inference::{InferError, Inferred, Warning, infer};
