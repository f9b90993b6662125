//! Grammar rules of the declaration subset.
//!
//! Each file adds an `impl Parser` block:
//! - `items` - item dispatch and the scope-forming declarations
//! - `declarations` - parameters, data, nets, ports, typedefs, instances
//! - `types` - data types, type references, dimensions
//! - `opaque` - expressions and balanced behavioral items

mod declarations;
mod items;
mod opaque;
mod types;

/// Which item list is being parsed; decides how ambiguous item starts are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ItemContext {
    /// Top level of a file
    CompilationUnit,
    Package,
    /// Module, interface or generate region body
    Module,
    Class,
    /// Function or task body
    Block,
}
