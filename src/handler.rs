//! # 命令处理逻辑模块
//!
//! 包含处理 `embed` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责协调图像解码与保存、载荷来源选择、调用核心隐写编解码器，
//! 以及向用户报告结果。

use crate::cli::{EmbedArgs, ExtractArgs};
use crate::constants::DEFAULT_FAKE_DATA_SIZE;
use crate::exfil;
use crate::generator;
use crate::steganography;
use anyhow::{Context, Result};
use colored::Colorize;
use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Embed' 命令的执行逻辑。
///
/// 负责解码载体图像、确定载荷来源 (文件或伪造数据)、检查嵌入空间是否足够、
/// 调用核心编码器写入载荷帧，最后把结果保存为无损格式图像。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与载荷来源选项的 `EmbedArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像，或无法读取载荷文件。
/// * 图像没有足够的像素来容纳载荷帧。
/// * 输出路径指向有损或无法识别的图像格式。
/// * 输出文件已存在且未指定 `--force`，或无法写入目标图像文件。
pub fn handle_embed(args: EmbedArgs) -> Result<()> {
    let cover = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read cover image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    let mut pixels = cover.to_rgba8();

    let payload = if args.generate {
        let data = generator::fake_records(args.size);
        println!(
            "Generated {} bytes of fake records.",
            data.len().to_string().green().bold()
        );
        data
    } else if let Some(data_file) = &args.data {
        let data = fs::read(data_file).with_context(|| {
            format!(
                "Unable to read payload file: {}",
                data_file.to_string_lossy().red().bold()
            )
        })?;
        println!(
            "Read {} bytes of payload from: {}",
            data.len().to_string().green().bold(),
            data_file.to_string_lossy().green().bold()
        );
        data
    } else {
        println!(
            "No payload source specified. Generating default fake records ({DEFAULT_FAKE_DATA_SIZE} bytes)."
        );
        generator::fake_records(DEFAULT_FAKE_DATA_SIZE)
    };

    let required = payload.len();
    let available = steganography::payload_capacity(pixels.as_raw());

    anyhow::ensure!(
        available >= required,
        "Not enough space in the cover image to embed the payload. \nRequired: {} bytes, Available: {} bytes",
        required.to_string().red().bold(),
        available.to_string().green().bold()
    );

    steganography::embed(&mut pixels, &payload)
        .with_context(|| "Failed to embed the payload frame into the cover image.")?;

    let dest = args
        .output
        .unwrap_or_else(|| derive_sibling(&args.image, "embedded_", "png"));

    ensure_lossless(&dest)?;

    anyhow::ensure!(
        args.force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    pixels.save(&dest).with_context(|| {
        format!(
            "Unable to write target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload has been successfully embedded and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    if let Some(protocol) = args.exfil {
        println!(
            "Simulating exfiltration via {}...",
            protocol.label().cyan().bold()
        );
        println!("{}", exfil::simulate(protocol));
    }

    Ok(())
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 负责解码经过嵌入的图像、调用核心解码器恢复载荷帧中的数据，
/// 最后把恢复的载荷字节写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `ExtractArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像。
/// * 图像中不存在格式合法的载荷帧 (可能已损坏或从未嵌入过数据)。
/// * 输出文件已存在且未指定 `--force`，或无法写入目标载荷文件。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let stego = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    let pixels = stego.to_rgba8();

    let payload = steganography::extract(pixels.as_raw()).with_context(|| {
        format!(
            "Failed to recover a payload from: {}. \nThe image may not contain embedded data or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let dest = args
        .output
        .unwrap_or_else(|| derive_sibling(&args.image, "recovered_", "bin"));

    anyhow::ensure!(
        args.force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    fs::write(&dest, &payload).with_context(|| {
        format!(
            "Unable to write target payload file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload ({} bytes) has been successfully recovered and saved: {}",
        payload.len().to_string().green().bold(),
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 根据输入文件名派生带前缀的同目录输出路径。
fn derive_sibling(path: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{prefix}{stem}.{extension}"))
}

/// 校验输出路径指向受支持的无损图像格式。
///
/// 有损压缩会破坏通道低位中的载荷比特，因此必须在写入前拒绝。
fn ensure_lossless(dest: &Path) -> Result<()> {
    let format = ImageFormat::from_path(dest).with_context(|| {
        format!(
            "Unrecognized output image format: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        matches!(
            format,
            ImageFormat::Png
                | ImageFormat::Bmp
                | ImageFormat::Tiff
                | ImageFormat::WebP
                | ImageFormat::Qoi
        ),
        "Refusing to save to a lossy image format: {}. \nLossless formats (PNG, BMP, TIFF, WebP, QOI) are required to keep the embedded bits intact.",
        dest.to_string_lossy().red().bold()
    );

    Ok(())
}
