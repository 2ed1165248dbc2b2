//! Infrastructure Layer - 基础设施层
//!
//! - http: RESTful API
//! - memory: 进程内只读用户目录

pub mod http;
pub mod memory;
