//! # LSB 隐写编解码核心模块
//!
//! 把带长度前缀的载荷帧写入 RGBA 像素的通道低位，或从中恢复载荷。
//! 像素缓冲区是行优先 (光栅) 顺序的原始 RGBA8 字节序列，
//! 第 `i` 个像素占据字节 `[4i, 4i+4)`。
//!
//! 载荷帧的布局是固定约定，编码与解码必须严格对称：
//!
//! ```text
//! [4 字节] 载荷长度 L (大端序 u32)
//! [L 字节] 载荷内容
//! ```
//!
//! 每个像素承载 1 字节帧数据：字节按最高位在前拆成 4 个 2 位组
//! (bits [7:6], [5:4], [3:2], [1:0])，依次写入 R、G、B、A 通道的
//! 最低 2 位，通道的其余 6 位保持不变。帧之后的像素原样保留。

use crate::constants::{
    BITS_PER_CHANNEL, CHANNEL_CLEAR_MASK, CHANNELS_PER_PIXEL, GROUP_MASK, LENGTH_PREFIX_BYTES,
};
use thiserror::Error;

/// 嵌入失败：载荷帧放不进载体图像。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapacityError {
    /// 帧字节数 (长度前缀 + 载荷) 超过可用像素数。
    #[error("payload frame needs {required} pixels but the cover image only has {available}")]
    CoverTooSmall { required: usize, available: usize },

    /// 载荷长度超出 4 字节长度前缀的表示范围。
    #[error("payload of {len} bytes cannot be represented by the 4-byte length prefix")]
    PayloadTooLong { len: usize },
}

/// 恢复失败：图像中不存在格式合法的载荷帧。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// 图像的像素数连长度前缀都放不下。
    #[error("image with {pixels} pixels is too small to carry a length prefix")]
    MissingPrefix { pixels: usize },

    /// 声明的载荷长度超过图像容量，图像可能已损坏或从未嵌入过数据。
    #[error("declared payload length {declared} exceeds the image capacity of {capacity} bytes")]
    LengthOutOfBounds { declared: usize, capacity: usize },
}

/// 返回像素缓冲区最多能嵌入的载荷字节数 (不含长度前缀)。
pub fn payload_capacity(pixels: &[u8]) -> usize {
    (pixels.len() / CHANNELS_PER_PIXEL).saturating_sub(LENGTH_PREFIX_BYTES)
}

/// 把载荷帧嵌入像素缓冲区的通道低位。
///
/// 容量检查在任何写入发生之前完成，返回错误时缓冲区保持原样；
/// 帧之后的像素不会被触碰。
pub fn embed(pixels: &mut [u8], payload: &[u8]) -> Result<(), CapacityError> {
    let len = u32::try_from(payload.len())
        .map_err(|_| CapacityError::PayloadTooLong { len: payload.len() })?;

    let available = pixels.len() / CHANNELS_PER_PIXEL;
    let required = LENGTH_PREFIX_BYTES.saturating_add(payload.len());
    if required > available {
        return Err(CapacityError::CoverTooSmall {
            required,
            available,
        });
    }

    let mut frame = Vec::with_capacity(required);
    frame.extend_from_slice(&len.to_be_bytes());
    frame.extend_from_slice(payload);

    for (pixel, &byte) in pixels
        .chunks_exact_mut(CHANNELS_PER_PIXEL)
        .zip(frame.iter())
    {
        spread_byte(pixel, byte);
    }

    Ok(())
}

/// 从像素缓冲区的通道低位恢复载荷。
///
/// 先从前 4 个像素读出大端序长度，再按相同的位序读出载荷本身。
/// 对从未嵌入过数据的图像，低位拼出的长度几乎总会超出容量并返回
/// [`FormatError::LengthOutOfBounds`]，绝不会越界读取。
pub fn extract(pixels: &[u8]) -> Result<Vec<u8>, FormatError> {
    let available = pixels.len() / CHANNELS_PER_PIXEL;
    if available < LENGTH_PREFIX_BYTES {
        return Err(FormatError::MissingPrefix { pixels: available });
    }

    let mut prefix = [0u8; LENGTH_PREFIX_BYTES];
    for (byte, pixel) in prefix
        .iter_mut()
        .zip(pixels.chunks_exact(CHANNELS_PER_PIXEL))
    {
        *byte = gather_byte(pixel);
    }

    let declared = u32::from_be_bytes(prefix) as usize;
    let capacity = available - LENGTH_PREFIX_BYTES;
    if declared > capacity {
        return Err(FormatError::LengthOutOfBounds { declared, capacity });
    }

    let payload = pixels
        .chunks_exact(CHANNELS_PER_PIXEL)
        .skip(LENGTH_PREFIX_BYTES)
        .take(declared)
        .map(gather_byte)
        .collect();

    Ok(payload)
}

/// 把一个帧字节拆成 2 位组，写入单个像素 4 个通道的低位。
fn spread_byte(pixel: &mut [u8], byte: u8) {
    for (i, channel) in pixel.iter_mut().enumerate() {
        let shift = (CHANNELS_PER_PIXEL - 1 - i) * BITS_PER_CHANNEL;
        *channel = (*channel & CHANNEL_CLEAR_MASK) | ((byte >> shift) & GROUP_MASK);
    }
}

/// 从单个像素 4 个通道的低位拼回一个帧字节。
fn gather_byte(pixel: &[u8]) -> u8 {
    pixel.iter().fold(0, |byte, &channel| {
        (byte << BITS_PER_CHANNEL) | (channel & GROUP_MASK)
    })
}
