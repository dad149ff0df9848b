//! MPU6050寄存器地址

/// 从设备地址(AD0接地)，WHO_AM_I寄存器的值也是它
pub const SLAVE_ADDRESS: u8 = 0x68;

/// 外部同步采样与数字低通滤波器配置
pub const CONFIG: u8 = 0x1A;
/// 加速度量程与高通滤波器配置
pub const ACCEL_CONFIG: u8 = 0x1C;
/// 运动检测阈值
pub const MOT_THR: u8 = 0x1F;
/// 运动检测持续时间(单位1ms)
pub const MOT_DUR: u8 = 0x20;
/// FIFO使能
pub const FIFO_EN: u8 = 0x23;
/// 中断引脚配置
pub const INT_PIN_CFG: u8 = 0x37;
/// 中断使能
pub const INT_ENABLE: u8 = 0x38;
/// 加速度输出起始寄存器，X/Y/Z各两字节，高位在前
pub const ACCEL_XOUT_H: u8 = 0x3B;
/// 用户控制(I2C主模式、FIFO等)
pub const USER_CTRL: u8 = 0x6A;
/// 电源管理1
pub const PWR_MGMT_1: u8 = 0x6B;
/// 设备标识
pub const WHO_AM_I: u8 = 0x75;
