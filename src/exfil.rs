//! # 数据外传模拟模块
//!
//! 仅以日志消息的形式模拟数据外传协议：不产生任何网络 I/O，
//! 也没有任何数据离开本进程。

use clap::ValueEnum;

/// 可供模拟的数据外传协议。
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExfilProtocol {
    /// 模拟通过 HTTP 请求外传数据。
    Http,
    /// 模拟通过 DNS 隧道外传数据。
    Dns,
}

impl ExfilProtocol {
    /// 返回协议在状态消息中使用的显示名称。
    pub fn label(self) -> &'static str {
        match self {
            ExfilProtocol::Http => "HTTP",
            ExfilProtocol::Dns => "DNS tunneling",
        }
    }
}

/// 执行一次空操作的外传模拟，返回状态消息。
///
/// 真实攻击会在这一步把隐写图像发送到远端服务器；本工具只返回
/// 一条说明性的状态消息，不触碰网络。
pub fn simulate(protocol: ExfilProtocol) -> String {
    format!(
        "{} exfiltration simulation complete. (No actual data sent.)",
        protocol.label()
    )
}
