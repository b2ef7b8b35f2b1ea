//! JSON Import/Export für Kachelkarten.
//!
//! Format: ein Objekt mit den Listen `tiles` und `objects`. Jeder Eintrag trägt
//! einen `class`-Tag, der über die `TypeRegistry` zum Subtyp aufgelöst wird.

pub mod parser;
pub mod writer;

pub use parser::{load_map, load_map_file, load_map_with_report, LoadPolicy, LoadReport};
pub use writer::{save_map, save_map_file, SaveStyle};
