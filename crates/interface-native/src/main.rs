mod scene;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use glam::Vec2;
use interface_core::FRAME_INTERVAL_SEC;
use rand::prelude::*;

use scene::Scene;

const BUBBLE_SIZE: Vec2 = Vec2::new(240.0, 64.0);
const SCREEN_SIZE: Vec2 = Vec2::new(390.0, 844.0);
const SCENARIO_SEED: u64 = 7;

// Pinch traces as (magnification, seconds since gesture start)
const FAST_PINCH: [(f32, f64); 4] = [(1.0, 0.0), (0.95, 0.016), (0.85, 0.032), (0.7, 0.048)];
const SLOW_PINCH: [(f32, f64); 4] = [(1.0, 0.0), (0.95, 0.3), (0.9, 0.6), (0.88, 0.9)];

type SharedScene = Arc<Mutex<Scene>>;

fn with_scene<R>(shared: &SharedScene, f: impl FnOnce(&mut Scene) -> R) -> anyhow::Result<R> {
    let mut guard = shared
        .lock()
        .map_err(|_| anyhow!("scene lock poisoned"))?;
    Ok(f(&mut guard))
}

fn spawn_frame_driver(
    shared: SharedScene,
    running: Arc<AtomicBool>,
    clock: Instant,
) -> anyhow::Result<thread::JoinHandle<()>> {
    let handle = thread::Builder::new()
        .name("frame-driver".into())
        .spawn(move || {
            let frame = Duration::from_secs_f64(FRAME_INTERVAL_SEC);
            while running.load(Ordering::Acquire) {
                let now_sec = clock.elapsed().as_secs_f64();
                match shared.lock() {
                    Ok(mut scene) => scene.tick(now_sec),
                    Err(_) => {
                        log::error!("[driver] scene lock poisoned; stopping");
                        break;
                    }
                }
                thread::sleep(frame);
            }
            log::debug!("[driver] stopped");
        })
        .context("spawning frame driver")?;
    Ok(handle)
}

fn play_pinch(
    shared: &SharedScene,
    clock: Instant,
    trace: &[(f32, f64)],
) -> anyhow::Result<()> {
    let begin = clock.elapsed().as_secs_f64();
    for &(magnification, offset) in trace {
        let target = begin + offset;
        let wait = target - clock.elapsed().as_secs_f64();
        if wait > 0.0 {
            thread::sleep(Duration::from_secs_f64(wait));
        }
        with_scene(shared, |s| s.pinch_changed(magnification, target))?;
    }
    with_scene(shared, |s| s.pinch_ended())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let scene = Scene::new(BUBBLE_SIZE, SCREEN_SIZE).context("building scene")?;
    let shared: SharedScene = Arc::new(Mutex::new(scene));
    let running = Arc::new(AtomicBool::new(true));
    let clock = Instant::now();
    let driver = spawn_frame_driver(Arc::clone(&shared), Arc::clone(&running), clock)?;
    let mut rng = StdRng::seed_from_u64(SCENARIO_SEED);

    log::info!("[native] double tap on the bubble");
    let origin = Vec2::new(
        rng.gen_range(0.0..BUBBLE_SIZE.x),
        rng.gen_range(0.0..BUBBLE_SIZE.y),
    );
    with_scene(&shared, |s| s.double_tap(origin, clock.elapsed().as_secs_f64()))?;
    thread::sleep(Duration::from_millis(1200));

    log::info!("[native] slow pinch");
    play_pinch(&shared, clock, &SLOW_PINCH)?;
    log::info!("[native] fast pinch");
    play_pinch(&shared, clock, &FAST_PINCH)?;
    let morph = with_scene(&shared, |s| s.morph())?;
    log::info!(
        "[native] morph frame {:.0}x{:.0}, corner {:.0}",
        morph.size.x,
        morph.size.y,
        morph.corner_radius
    );
    with_scene(&shared, |s| s.tap_collapsed())?;

    log::info!("[native] pixelate sweep in and out");
    for _ in 0..2 {
        with_scene(&shared, |s| s.tap(clock.elapsed().as_secs_f64()))?;
        thread::sleep(Duration::from_millis(700));
    }

    // a burst cut short by teardown
    with_scene(&shared, |s| s.double_tap(origin, clock.elapsed().as_secs_f64()))?;
    thread::sleep(Duration::from_millis(200));
    let visible = with_scene(&shared, |s| s.visible_hearts())?;
    log::info!("[native] {} heart(s) on screen at teardown: {:?}", visible.len(), visible);

    running.store(false, Ordering::Release);
    driver
        .join()
        .map_err(|_| anyhow!("frame driver panicked"))?;
    let (cleared, stats, settled) = with_scene(&shared, |s| {
        let now = clock.elapsed().as_secs_f64();
        (s.teardown(), s.stats, s.is_settled(now))
    })?;

    log::info!(
        "[native] done: {} ticks, {} like(s), {} ripple(s), {} collapse(s), {} sweep(s); teardown cleared {} heart(s), settled={}",
        stats.ticks,
        stats.likes,
        stats.ripples,
        stats.collapses,
        stats.pixelate_sweeps,
        cleared,
        settled
    );
    log::info!(
        "[native] feedback light={} medium={} heavy={}",
        stats.feedback_light,
        stats.feedback_medium,
        stats.feedback_heavy
    );
    Ok(())
}
