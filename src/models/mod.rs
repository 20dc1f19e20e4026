//! 数据模型定义
//!
//! 每个业务域按 `entities` / `requests` / `responses` 拆分。

pub mod common;

pub mod offerings {
    pub mod entities;
    pub mod requests;
    pub mod responses;
}

pub mod gradebook {
    pub mod entities;
    pub mod requests;
    pub mod responses;
}

pub mod students {
    pub mod responses;
}

pub use common::{ApiResponse, AppStartTime, ErrorCode};
