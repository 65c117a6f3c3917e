//! Filesystem helpers
//!
//! Listing, small text files, properties files, and basic file/directory
//! operations. Every handle is scoped to the call that opens it.

pub mod name;
pub mod ops;
pub mod properties;
pub mod text;
pub mod walker;

pub use name::{file_name_without_extension, name_without_extension};
pub use ops::{
    copy_file, create_directory, create_temp_directory, delete_dir_all, delete_file,
    delete_files, file_exists,
};
pub use properties::{
    parse_properties, read_properties, to_properties_string, write_properties,
    write_properties_with_comment, Properties,
};
pub use text::{
    read_lines, read_lines_encoded, read_lines_with_encoding, read_text,
    read_text_with_encoding, resolve_encoding, save_text,
};
pub use walker::{list_files, list_files_by_extension, Walker, WalkerConfig};
