/// 周期定时器 trait
///
/// 用于抽象驱动播放器的定时器源。平台适配器负责把定时器中断路由到
/// [`MelodyPlayer::on_tick`](crate::MelodyPlayer::on_tick)，本 trait 只负责
/// 开关中断和提供毫秒计数。
///
/// 中断周期必须小于旋律中最短的音符时长，否则会跳过音符。
pub trait TickTimer {
    /// 单调毫秒计数，按字长回绕
    ///
    /// 播放器内部始终用回绕减法计算耗时，计数回绕不影响播放。
    fn now_millis(&self) -> u32;

    /// 使能周期中断
    fn enable_tick(&mut self);

    /// 关闭周期中断
    fn disable_tick(&mut self);
}
