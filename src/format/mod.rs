//! JSON file I/O for graphs.

pub mod reader;
pub mod schema;
pub mod writer;

pub use reader::JsonReader;
pub use writer::JsonWriter;
