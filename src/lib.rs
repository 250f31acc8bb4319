//! # Product API
//!
//! 单一“产品”资源的 CRUD 服务，基于 Axum + SQLx：
//! - 应用层：路由、处理器、业务服务、传输对象
//! - 核心层：统一错误类型、校验提取器、请求日志中间件
//! - 基础设施层：PostgreSQL / 内存存储、连接池、日志

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{create_routes, AppState};
pub use config::Config;
