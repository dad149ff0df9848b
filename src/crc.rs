//! SHT30应答数据的CRC8校验
//!
//! - 生成多项式: x^8 + x^5 + x^4 + 1 (0x131)
//! - 初始值: 0xFF
//! - 高位在前，无输入/输出反转，无最终异或

/// 生成多项式0x131去掉最高位(x^8)后参与移位异或的低8位
const POLYNOMIAL: u8 = 0x31;
/// CRC8初始值
const INIT: u8 = 0xFF;

/// 计算CRC8校验和
pub fn calc_crc8(data: &[u8]) -> u8 {
    // 声明CRC8校验和结果
    let mut crc8_sum = INIT;
    // 遍历处理每一个字节
    for b in data {
        // 当前字节与已经计算的结果进行按位异或运算
        crc8_sum ^= b;
        // 再单独处理每一位二进制，从高位到低位
        for _ in 0..8 {
            if crc8_sum & 0x80 != 0 {
                crc8_sum = (crc8_sum << 1) ^ POLYNOMIAL;
            } else {
                crc8_sum <<= 1;
            }
        }
    }
    // OK
    crc8_sum
}

/// 校验数据与传感器发送过来的校验值是否一致
pub fn check(data: &[u8], checksum: u8) -> bool {
    calc_crc8(data) == checksum
}
