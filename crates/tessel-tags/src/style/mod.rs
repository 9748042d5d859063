//! Style descriptors shared by the tag generator and attribute compilers.
//!
//! - [`StyleDescriptor`]: ordered attribute name to value pairs
//! - [`StyleValue`]: a flag, a color family, or an inert number
//! - [`DescriptorError`]: errors from loading descriptors out of documents
//!
//! Key order is significant: it decides how generated tags nest, so the
//! descriptor is an ordered list rather than a hash map.

mod descriptor;
mod error;
mod value;

pub use descriptor::StyleDescriptor;
pub use error::DescriptorError;
pub use value::StyleValue;
