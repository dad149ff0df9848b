use embedded_hal::i2c::I2c;
use log::{debug, warn};

use crate::{convert, crc, error::Error};

/// SHT30默认从设备地址(ADDR引脚接地)
pub const DEFAULT_ADDR: u8 = 0x44;

/// 周期测量模式命令: 每秒2次，低重复性
const CMD_PERIODIC_MODE: [u8; 2] = [0x22, 0x36];
/// 周期测量模式下取回最近一次测量结果的命令
const CMD_FETCH_DATA: [u8; 2] = [0xE0, 0x00];

/// SHT30驱动状态
///
/// 读取过程(写命令 -> 读6字节 -> 校验 -> 换算)只存在于`read`调用期间，
/// `read`持有`&mut self`，外部观察不到这个中间状态。
/// 无论读取成功还是总线失败，调用结束后状态都是`Configured`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// 尚未下发测量模式
    Uninitialized,
    /// 已下发周期测量模式
    Configured,
}

/// 一次读取的结果
///
/// CRC校验失败的字段为`None`，温度和湿度互不影响
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurement {
    /// 温度(℃)
    pub temperature: Option<f32>,
    /// 相对湿度(%RH)
    pub humidity: Option<f32>,
}

/// SHT30温度湿度传感器封装对象
#[derive(Debug)]
pub struct SHT30 {
    /// I2C从设备地址
    /// - SHT30的地址通常为: 0x44
    i2c_addr: u8,
    /// 驱动状态
    state: State,
}

/// 实现SHT30传感器操作
impl SHT30 {
    /// 创建SHT30传感器实例(尚未与设备通信)
    pub fn new(i2c_addr: u8) -> Self {
        Self {
            i2c_addr,
            state: State::Uninitialized,
        }
    }

    /// 当前驱动状态
    pub fn state(&self) -> State {
        self.state
    }

    /// 初始化传感器，设置周期测量模式
    ///
    /// 写入失败时依旧进入`Configured`状态，之后的数据由CRC校验把关，
    /// 错误会返回给调用方用于记录
    pub fn init<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<(), Error<I2C::Error>> {
        let result = i2c
            .write(self.i2c_addr, &CMD_PERIODIC_MODE)
            .map_err(Error::Bus);
        self.state = State::Configured;

        if let Err(err) = &result {
            warn!("SHT30设置周期测量模式失败: {}", err);
        }
        result
    }

    /// 读取温度和湿度
    ///
    /// - I2C读写失败时整个读取失败，不做部分解析
    /// - 温度、湿度分别做CRC校验，校验失败的字段为`None`
    pub fn read<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<Measurement, Error<I2C::Error>> {
        if self.state == State::Uninitialized {
            return Err(Error::NotInitialized);
        }

        // 发送取数命令
        i2c.write(self.i2c_addr, &CMD_FETCH_DATA)
            .map_err(Error::Bus)?;

        // 读取6字节数据
        // 第1~3个字节: 温度高位 + 温度低位 + 温度CRC8
        // 第4~6个字节: 湿度高位 + 湿度低位 + 湿度CRC8
        let mut data = [0u8; 6];
        i2c.read(self.i2c_addr, &mut data).map_err(Error::Bus)?;
        debug!("SHT30原始数据: {:02x?}", data);

        let [temp_h, temp_l, temp_crc, hum_h, hum_l, hum_crc] = data;

        let temperature = match checked_word::<I2C::Error>([temp_h, temp_l], temp_crc) {
            Ok(raw) => Some(convert::temperature_celsius(raw)),
            Err(err) => {
                warn!("SHT30温度数据{}", err);
                None
            }
        };

        let humidity = match checked_word::<I2C::Error>([hum_h, hum_l], hum_crc) {
            Ok(raw) => Some(convert::relative_humidity(raw)),
            Err(err) => {
                warn!("SHT30湿度数据{}", err);
                None
            }
        };

        // OK
        Ok(Measurement {
            temperature,
            humidity,
        })
    }
}

/// 校验两字节数据并按高位在前拼成16位原始值
fn checked_word<E>(word: [u8; 2], checksum: u8) -> Result<u16, Error<E>> {
    if !crc::check(&word, checksum) {
        return Err(Error::Checksum {
            expected: checksum,
            computed: crc::calc_crc8(&word),
        });
    }
    Ok(u16::from_be_bytes(word))
}
