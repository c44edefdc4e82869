//! refdoc: render API reference documentation from extracted signatures.
//!
//! An extractor (outside this crate) walks source definitions and hands over
//! records describing functions, methods, and classes. refdoc turns those
//! records into AsciiDoc:
//!
//! - [`markup`]: the node set (`Rule`, `Text`, `Heading`, `List`, `Table`) and `flatten`
//! - [`model`]: validated, immutable records
//! - [`policy`]: naming conventions of the documented language
//! - [`reference`]: per-record templates, table rows, call shapes, detail sections
//! - [`page`]: a whole module reference, loadable from the extractor's JSON

pub mod markup;
pub mod model;
pub mod page;
pub mod policy;
pub mod reference;

pub use markup::{flatten, flatten_unstripped, List, Node, Table};
pub use model::{ClassRecord, ConstructorRecord, FunctionRecord, MethodRecord, Parameter};
pub use page::Page;
pub use policy::{Policy, PolicyConfig};
pub use reference::Reference;
