//! LMS 计算核心
//!
//! 开课冲突检测、成绩册汇总与 GPA 计算，基于 Actix Web 对外提供服务。
//!
//! # 架构
//! - `config`: 配置管理
//! - `engine`: 纯计算逻辑（时间段、冲突检测、成绩、GPA）
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层
//! - `utils`: 工具函数

pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
