//! Headless fly-through demo for the vantage camera kernel.

use std::path::Path;
use std::time::Duration;

use vantage::camera::CameraRig;
use vantage::input::{InputEvent, InputProcessor};
use vantage::math::Vec3;
use vantage::options::Options;
use vantage::util::frame_clock::FrameClock;

const FRAMES: u32 = 240;
const TARGET_FPS: u32 = 60;
const LOG_EVERY: u32 = 30;

/// Scripted input for a headless fly-through: (frame, event).
fn script() -> Vec<(u32, InputEvent)> {
    let key = |key: &str| key.to_owned();
    vec![
        (0, InputEvent::KeyPressed { key: key("KeyW") }),
        (10, InputEvent::CursorMoved { x: 512.0, y: 384.0 }),
        (11, InputEvent::CursorMoved { x: 560.0, y: 370.0 }),
        (40, InputEvent::KeyReleased { key: key("KeyW") }),
        (45, InputEvent::Scroll { delta: 10.0 }),
        (60, InputEvent::KeyPressed { key: key("Digit3") }),
        (61, InputEvent::KeyReleased { key: key("Digit3") }),
        (70, InputEvent::KeyPressed { key: key("ArrowRight") }),
        (100, InputEvent::KeyReleased { key: key("ArrowRight") }),
        (120, InputEvent::KeyPressed { key: key("Digit3") }),
        (121, InputEvent::KeyReleased { key: key("Digit3") }),
        (130, InputEvent::KeyPressed { key: key("ArrowUp") }),
        (150, InputEvent::KeyReleased { key: key("ArrowUp") }),
        (160, InputEvent::KeyPressed { key: key("KeyD") }),
        (200, InputEvent::KeyReleased { key: key("KeyD") }),
    ]
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut rig = CameraRig::from_options(
        Vec3::new(0.0, 140.0, 340.5),
        Vec3::ZERO,
        &options,
    );
    let mut input = InputProcessor::new(options.input.clone());
    let mut clock = FrameClock::new(TARGET_FPS);
    let script = script();

    for frame in 0..FRAMES {
        while !clock.should_render() {
            std::thread::sleep(Duration::from_millis(1));
        }
        let dt = clock.tick();

        for (_, event) in script.iter().filter(|(at, _)| *at == frame) {
            if let Some(command) = input.handle_event(event.clone()) {
                rig.execute(command);
            }
        }
        rig.execute_all(input.held_commands(dt));

        let mode = rig.mode();
        let uniform = rig.uniform();
        if frame % LOG_EVERY == 0 {
            log::info!(
                "frame {frame:>3} {mode:?} eye {:?} zoom {:.1}",
                uniform.view_position,
                uniform.zoom,
            );
            log::debug!("view {:?}", uniform.view);
        }
    }

    log::info!("{FRAMES} frames, {:.0} fps", clock.fps());
}
