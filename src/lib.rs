//! # lsb_exfil 库
//!
//! 本库包含 LSB 隐写数据外传模拟工具的核心逻辑。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod exfil;
pub mod generator;
pub mod handler;
pub mod steganography;
