use core::convert::Infallible;
use core::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use melody_player::{MelodyPlayer, TickTimer, ToneDriver};

static TICK_ENABLED: AtomicBool = AtomicBool::new(false);

/// Simulated tone output: every command is logged instead of driving a pin.
pub struct SimulatedBuzzer;

impl ToneDriver for SimulatedBuzzer {
    type Error = Infallible;

    fn set_tone(&mut self, frequency_hz: u16) -> Result<(), Self::Error> {
        log::info!("[Simulated Buzzer] tone {} Hz", frequency_hz);
        Ok(())
    }

    fn set_silence(&mut self) -> Result<(), Self::Error> {
        log::info!("[Simulated Buzzer] silence");
        Ok(())
    }
}

/// Simulated timer source backed by the host clock.
pub struct SimulatedTicker {
    started: Instant,
}

impl SimulatedTicker {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SimulatedTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TickTimer for SimulatedTicker {
    fn now_millis(&self) -> u32 {
        self.started.elapsed().as_millis() as u32
    }

    fn enable_tick(&mut self) {
        TICK_ENABLED.store(true, Ordering::SeqCst);
        log::debug!("Periodic tick enabled");
    }

    fn disable_tick(&mut self) {
        TICK_ENABLED.store(false, Ordering::SeqCst);
        log::debug!("Periodic tick disabled");
    }
}

pub type SimulatedPlayer = MelodyPlayer<SimulatedBuzzer, SimulatedTicker>;

/// Spawns the thread that stands in for the periodic timer interrupt.
pub fn start_ticker(player: &'static SimulatedPlayer, period_ms: u64) {
    std::thread::spawn(move || loop {
        std::thread::sleep(Duration::from_millis(period_ms));
        if TICK_ENABLED.load(Ordering::SeqCst) {
            player.on_tick();
        }
    });
}
