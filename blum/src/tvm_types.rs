mod from_tvm_stack;
mod to_tvm_stack;
mod tvm_stack;
mod tvm_stack_value;

pub use from_tvm_stack::*;
pub use to_tvm_stack::*;
pub use tvm_stack::*;
pub use tvm_stack_value::*;
