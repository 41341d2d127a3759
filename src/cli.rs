//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::DEFAULT_FAKE_DATA_SIZE;
use crate::exfil::ExfilProtocol;
use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的数据外传模拟工具，用于把任意字节载荷嵌入无损格式图像 (如 PNG, BMP) 或从中恢复。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的数据外传模拟工具：把任意字节载荷 (或生成的伪造敏感记录) 嵌入无损格式图像 (如 PNG, BMP) 的像素低位中，也可以从嵌入过的图像中恢复载荷。外传流程仅以日志形式模拟，不会有任何数据离开本机。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：embed (嵌入) 和 extract (恢复)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 把载荷数据嵌入无损格式图像 (如 PNG, BMP) 的像素中。
    Embed(EmbedArgs),

    /// 从嵌入过载荷的图像中恢复隐藏数据。
    Extract(ExtractArgs),
}

/// 'embed' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EmbedArgs {
    /// 用作载体的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要嵌入的载荷文件路径。未提供时将生成伪造数据。
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// 生成伪造的敏感记录作为载荷 (优先于 --data)。
    #[arg(short, long)]
    pub generate: bool,

    /// 生成伪造数据的字节数 (仅与 --generate 搭配生效)。
    #[arg(short, long, default_value_t = DEFAULT_FAKE_DATA_SIZE)]
    pub size: usize,

    /// 嵌入完成后要模拟的数据外传协议 (仅打印日志，不发送数据)。
    #[arg(short, long, value_enum)]
    pub exfil: Option<ExfilProtocol>,

    /// 嵌入完成后，保存结果图像的输出路径。默认在输入图像旁生成带 embedded_ 前缀的 PNG。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 已嵌入载荷数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复载荷后，保存载荷内容的输出路径。默认在输入图像旁生成带 recovered_ 前缀的 .bin 文件。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}
