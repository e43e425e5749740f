//! 服务层模块

mod codegen;
mod prompt;
mod reply;

pub use codegen::{CodegenService, ANALYSIS_TYPES};
