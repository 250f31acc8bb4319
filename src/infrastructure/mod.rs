//! 基础设施层：数据库、存储实现、日志

pub mod database;
pub mod logger;
pub mod memory;
pub mod postgres;
