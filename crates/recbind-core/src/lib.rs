//! # recbind-core
//!
//! A small JSON codec and structural-binding engine: a single-pass JSON
//! parser, a streaming JSON serializer, a bidirectional mapper between
//! record values and key-value maps, and a name-casing utility that
//! reconciles JSON payload names with record field names.
//!
//! The core exposes four operations: serialize ([`to_json`] /
//! [`record_to_json`]), parse ([`parse`]), and the typed bindings
//! ([`bind`], [`bind_list`]). Everything else in this crate exists to feed
//! them.
//!
//! ## Quick start
//!
//! ```rust
//! use recbind_core::{bind, record, record_to_json};
//!
//! record! {
//!     pub struct Account {
//!         id: i32,
//!         display_name: String,
//!     }
//! }
//!
//! // Binding resolves snake/kebab/upper-case names against record fields.
//! let account: Account = bind(r#"{"id":7,"DISPLAY_NAME":"Ada"}"#).unwrap();
//! assert_eq!(account.id, 7);
//! assert_eq!(account.display_name, "Ada");
//!
//! // Serialize → parse → bind round trip.
//! let json = record_to_json(&account);
//! let back: Account = bind(&json).unwrap();
//! assert_eq!(back, account);
//! ```
//!
//! ## Modules
//!
//! - [`reader`]: single-pass parser, JSON text → generic value or record
//! - [`builder`]: streaming serializer, value graph / record → JSON text
//! - [`records`]: record ↔ map conversion and the name-case fallback
//! - [`name`]: camelCase → snake/kebab transforms
//! - [`store`]: file-backed key-value store over the four codec operations
//! - [`error`]: the closed failure taxonomy
//! - [`value`]: the untyped `JsonValue` union

pub mod builder;
pub mod error;
pub mod name;
pub mod reader;
pub mod records;
pub mod store;
pub mod value;

pub use builder::{record_to_json, to_json, JsonBuilder};
pub use error::{BindError, Result};
pub use name::NameTransform;
pub use reader::{bind, bind_list, parse, JsonReader};
pub use records::{from_map, from_map_opt, from_property_discover, to_map, Field, Record};
pub use store::FileStore;
pub use value::JsonValue;
