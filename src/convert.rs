//! 原始寄存器数值到物理量的换算(纯函数)

/// SHT30低两位为状态位，换算前需要清零
const SHT30_STATUS_BITS: u16 = 0x0003;
/// SHT30原始数值满量程 2^16 - 1
const SHT30_RANGE: f32 = 65535.0;
/// BH1750光照强度换算系数
const BH1750_LUX_RATE: f32 = 1.2;

/// 温度换算: T(℃) = 175 * raw / 65535 - 45
pub fn temperature_celsius(raw: u16) -> f32 {
    let raw = raw & !SHT30_STATUS_BITS;
    175.0 * raw as f32 / SHT30_RANGE - 45.0
}

/// 相对湿度换算: RH(%) = 100 * raw / 65535
pub fn relative_humidity(raw: u16) -> f32 {
    let raw = raw & !SHT30_STATUS_BITS;
    100.0 * raw as f32 / SHT30_RANGE
}

/// 光照强度换算: lux = ((高字节 << 8) + 低字节) / 1.2
pub fn luminance_lux(data: [u8; 2]) -> f32 {
    u16::from_be_bytes(data) as f32 / BH1750_LUX_RATE
}
