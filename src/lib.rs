// Generics Toolkit
// Small stateless helpers parameterised by type: swapping, sequence building
// and mapping, higher-order application, reverse lookup and extremum search.

pub mod config;
pub mod error;
pub mod inventory;
pub mod lookup;
pub mod sequence;
pub mod swap;
pub mod transform;

pub use error::{Result, ToolkitError};
pub use lookup::find_key_by_value;
pub use sequence::{duplicate, map_sequence, max_element, try_map_sequence};
pub use swap::swap_values;
pub use transform::{int_to_string, square, string_to_int, transform};
