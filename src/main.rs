//! Benchmark runner for the transpose strategies.

use anyhow::Context;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use transpose::verify::{FIXTURE_INPUT, verify_against_reference, verify_fixture};
use transpose::timing::time_strategy;
use transpose::{BenchConfig, Pool};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BenchConfig::from_args(std::env::args().skip(1)).context("invalid arguments")?;
    info!(
        "strategy={} size={}x{} iterations={} seed={} check={}",
        config.strategy, config.width, config.height, config.iterations, config.seed, config.cross_check
    );

    // Verify the 4×4 fixture before touching any large buffer
    print_grid(&FIXTURE_INPUT);
    let fixture_out = verify_fixture(config.strategy).context("fixture verification failed")?;
    print_grid(&fixture_out);

    let pool = Pool::create(config.pool_elements()).context("could not reserve benchmark buffers")?;
    let n = config.elements();
    let src = pool.allocate(n)?;
    let out = pool.allocate(n)?;
    debug!("pool: {} of {} elements in use", pool.used(), pool.capacity());

    let mut rng = StdRng::seed_from_u64(config.seed);
    src.iter_mut().for_each(|v| *v = rng.next_u32() as i32);

    let timing = time_strategy(&config, src, out).context("invalid benchmark settings")?;
    println!("{}: \t {} us", config.strategy, timing.average_us);
    if config.iterations > 1 {
        println!("best: \t {} us", timing.best_us);
    }

    if config.cross_check {
        let reference = pool.allocate(n)?;
        verify_against_reference(config.strategy, src, out, reference, config.width, config.height)
            .context("output differs from naive transpose")?;
        info!("output matches naive transpose");
    }

    pool.release();
    Ok(())
}

fn print_grid(m: &[i32; 16]) {
    for row in m.chunks(4) {
        for v in row {
            print!(" {:2}", v);
        }
        println!();
    }
    println!();
}
