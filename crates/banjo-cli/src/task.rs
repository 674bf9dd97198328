// crates/banjo-cli/src/task.rs
//
// Background-task adapter for the pure generator: one worker thread, a
// progress channel for stderr reporting, and a shared cancellation flag
// the generator polls at its checkpoints. The generator itself holds no
// state, so a timed-out run leaves nothing to clean up.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use banjo_core::finder::find_all_combinations;
use banjo_core::{LatheConfig, PitchSetup};

pub fn generate_with_timeout(
    config: &LatheConfig,
    timeout: Duration,
) -> anyhow::Result<Vec<PitchSetup>> {
    let cancel = Arc::new(AtomicBool::new(false));
    let (progress_tx, progress_rx) = mpsc::channel::<f64>();
    let (done_tx, done_rx) = mpsc::channel::<Vec<PitchSetup>>();

    let worker_config = config.clone();
    let worker_cancel = Arc::clone(&cancel);
    let handle = thread::spawn(move || {
        let mut report = |fraction: f64| {
            let _ = progress_tx.send(fraction);
        };
        let combos = find_all_combinations(&worker_config, Some(&mut report), Some(&worker_cancel));
        let _ = done_tx.send(combos);
    });

    let deadline = Instant::now() + timeout;
    let mut last_decile = 0u32;
    loop {
        match progress_rx.recv_timeout(Duration::from_millis(25)) {
            Ok(fraction) => {
                let decile = (fraction * 10.0) as u32;
                if decile > last_decile {
                    last_decile = decile;
                    eprintln!("generate: {:>3.0}%", fraction * 100.0);
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }
        if Instant::now() >= deadline {
            cancel.store(true, Ordering::Relaxed);
            let _ = handle.join();
            anyhow::bail!("generation timed out after {} ms", timeout.as_millis());
        }
    }

    let combos = done_rx.recv()?;
    let _ = handle.join();
    Ok(combos)
}
