//! 产品模块

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
