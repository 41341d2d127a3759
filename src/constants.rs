/// 载荷帧长度前缀所占的字节数。
/// 载荷长度以大端序 `u32` 存储，因此单个载荷最大为 2^32 - 1 字节，
/// 前缀本身占用帧开头的 4 个像素。
pub const LENGTH_PREFIX_BYTES: usize = 4;

/// 每个颜色通道中用于承载帧数据的最低有效位数。
pub const BITS_PER_CHANNEL: usize = 2;

/// 每个像素的通道数 (R, G, B, A)。
/// 由于 4 通道 × 2 bits = 8 bits，每个像素恰好承载 1 字节帧数据。
pub const CHANNELS_PER_PIXEL: usize = 4;

/// 清除通道最低 2 位的掩码。
/// 写入数据组之前先用它保留通道的高 6 位。
pub const CHANNEL_CLEAR_MASK: u8 = 0b1111_1100;

/// 从字节或通道中取出一个 2 位数据组的掩码。
pub const GROUP_MASK: u8 = 0b0000_0011;

/// 未指定载荷来源时，生成伪造记录的默认字节数。
pub const DEFAULT_FAKE_DATA_SIZE: usize = 1024;
