use std::thread;
use std::time::Duration;

use log::info;
use melody_player::pitch::*;
use melody_player::{Melody, MelodyPlayer, PlayMode};
use simulated_buzzer::{start_ticker, SimulatedBuzzer, SimulatedPlayer, SimulatedTicker};
use static_cell::StaticCell;

// 小星星片段 (频率, 时长)
static TWINKLE: [u16; 28] = [
    NOTE_C4, 250, NOTE_C4, 250, NOTE_G4, 250, NOTE_G4, 250, NOTE_A4, 250, NOTE_A4, 250, NOTE_G4,
    500, NOTE_F4, 250, NOTE_F4, 250, NOTE_E4, 250, NOTE_E4, 250, NOTE_D4, 250, NOTE_D4, 250,
    NOTE_C4, 500,
];

static PLAYER: StaticCell<SimulatedPlayer> = StaticCell::new();

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let player = PLAYER.init(MelodyPlayer::new(SimulatedBuzzer, SimulatedTicker::new()));
    start_ticker(player, 1);

    let melody = Melody::from_table(&TWINKLE);

    info!("Playing once in wait mode");
    player.start(melody, PlayMode::Wait).unwrap();
    info!("Wait-mode start returned, playing = {}", player.is_playing());

    info!("Looping for 5 seconds");
    player.start(melody, PlayMode::Loop).unwrap();
    thread::sleep(Duration::from_secs(5));
    player.stop();
    info!("Stopped, playing = {}", player.is_playing());
}
