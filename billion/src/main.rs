use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use xsd_duration::Codec;

const WORKERS: u64 = 10;
const PER_WORKER: u64 = 100_000_000;
const REPORT_EVERY: u64 = 5_000_000;

fn main() {
    env_logger::builder()
        .filter_module("xsd_duration", log::LevelFilter::Warn)
        .filter_module("billion", log::LevelFilter::Trace)
        .parse_default_env()
        .init();

    let codec = Codec::new();
    let failures = Arc::new(AtomicU64::new(0));

    let start = Instant::now();

    let handles = (0..WORKERS)
        .map(|worker| {
            let failures = failures.clone();

            std::thread::spawn(move || {
                use rand::Rng;

                let mut rng = rand::thread_rng();

                for idx in 0..PER_WORKER {
                    let value: i64 = rng.gen();
                    let encoded = codec.encode(value);

                    match codec.decode(&encoded) {
                        Ok(decoded) if decoded == value => {}
                        Ok(decoded) => {
                            failures.fetch_add(1, Ordering::Relaxed);
                            log::error!("{value} => {encoded:?} => {decoded}");
                        }
                        Err(e) => {
                            failures.fetch_add(1, Ordering::Relaxed);
                            log::error!("{value} => {encoded:?} rejected: {e}");
                        }
                    }

                    if idx > 0 && idx % REPORT_EVERY == 0 {
                        let done = u128::from(idx * WORKERS);
                        let ns_per_item = start.elapsed().as_nanos() / done;

                        log::info!("[worker {worker}] round-tripped {idx} - ~{ns_per_item}ns per item");
                    }
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        if handle.join().is_err() {
            log::error!("worker panicked");
            failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    let elapsed = start.elapsed();
    let total = WORKERS * PER_WORKER;

    log::info!("round-tripped {total} values in {elapsed:?}");
    log::info!(
        "latency per item: {}ns",
        elapsed.as_nanos() / u128::from(total)
    );

    let failures = failures.load(Ordering::Relaxed);
    if failures > 0 {
        log::error!("{failures} values did not survive a round trip");
        std::process::exit(1);
    }
}
