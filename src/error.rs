use std::fmt::{self, Debug, Display};

use crate::sensor::actuator::Device;

/// 传感器采集错误
///
/// 泛型参数`E`为底层HAL(I2C总线或GPIO)的错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum Error<E> {
    /// I2C读写没有完成
    Bus(E),
    /// GPIO电平设置失败
    Gpio(E),
    /// CRC8校验失败
    Checksum {
        /// 传感器发送过来的校验值
        expected: u8,
        /// 本地计算出来的校验值
        computed: u8,
    },
    /// 设备身份(WHO_AM_I)与预期不符
    IdentityMismatch {
        /// 预期的设备标识
        expected: u8,
        /// 实际读取到的设备标识
        found: u8,
    },
    /// 传感器尚未初始化
    NotInitialized,
    /// 读取光照数据前没有启动测量
    MeasurementNotStarted,
    /// 当前扩展板上没有接入该执行器
    NotWired(Device),
}

impl<E: Debug> Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "I2C通信失败: {:?}", err),
            Self::Gpio(err) => write!(f, "GPIO电平设置失败: {:?}", err),
            Self::Checksum { expected, computed } => write!(
                f,
                "CRC8校验失败: 接收到 {:#04x}, 计算得到 {:#04x}",
                expected, computed
            ),
            Self::IdentityMismatch { expected, found } => write!(
                f,
                "设备身份校验失败: 预期 {:#04x}, 读取到 {:#04x}",
                expected, found
            ),
            Self::NotInitialized => f.write_str("传感器尚未初始化"),
            Self::MeasurementNotStarted => f.write_str("尚未启动测量"),
            Self::NotWired(device) => write!(f, "扩展板未接入执行器: {:?}", device),
        }
    }
}

impl<E: Debug> std::error::Error for Error<E> {}
