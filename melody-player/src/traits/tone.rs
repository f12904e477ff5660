/// 方波音调输出 trait
///
/// 用于抽象不同平台的音调发生器实现，包括：
/// - 硬件 PWM / 定时器外设（如 ESP32 的 LEDC、AVR 的 TIMER 输出比较）
/// - 主机端模拟输出
///
/// 输出引脚归适配器所有，在构造适配器时绑定。
pub trait ToneDriver {
    /// 错误类型
    type Error;

    /// 在绑定的引脚上输出指定频率的连续方波，替换之前的输出
    ///
    /// 有效发声范围为 31~65535Hz。频率 0 表示静音，播放器不会以 0
    /// 调用此方法，静音统一走 [`set_silence`](ToneDriver::set_silence)。
    fn set_tone(&mut self, frequency_hz: u16) -> Result<(), Self::Error>;

    /// 停止输出
    fn set_silence(&mut self) -> Result<(), Self::Error>;
}
