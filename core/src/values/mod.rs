//! Runtime values and the host capabilities they wrap.

pub mod dynamic;
pub mod function;
pub mod object;

pub use dynamic::Value;
pub use function::{Function, FunctionError, NativeFn, NativeFunction};
pub use object::{Object, Record};
