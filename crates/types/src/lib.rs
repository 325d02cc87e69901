pub mod descriptor;
pub mod fragment;
pub mod ids;

pub use descriptor::{AttrValue, Attribute, PropertyDescriptor, TypeDescriptor, short_name};
pub use fragment::{DocElement, DocFragment, DocNode};
pub use ids::DocId;
