//! The interactive loop: poll input, update the model, step, redraw.

use std::time::{Duration, Instant};

use crate::driver::CrosstermDriver;
use crate::model::{Effect, Msg, Visualizer};

/// Step cadence used when none is given: one expansion every 50 ms.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(50);

/// Run the visualizer until the user quits.
///
/// While a search is running, the model receives one [`Msg::Tick`] per
/// `delay`. Input is handled between ticks, so pausing or resetting takes
/// effect before the next step. The terminal is restored on every exit path.
pub fn run(
    model: &mut Visualizer,
    driver: &mut CrosstermDriver,
    delay: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    driver.init()?;
    let result = run_loop(model, driver, delay);
    driver.close();
    result
}

fn run_loop(
    model: &mut Visualizer,
    driver: &mut CrosstermDriver,
    delay: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    driver.draw(model)?;
    let mut last_tick = Instant::now();

    loop {
        let timeout = delay.saturating_sub(last_tick.elapsed());
        let msgs = driver.poll_msgs(timeout, model.size())?;
        let mut dirty = !msgs.is_empty();

        for msg in msgs {
            if let Some(Effect::End) = model.update(msg) {
                log::debug!("quit requested");
                return Ok(());
            }
        }

        if last_tick.elapsed() >= delay {
            last_tick = Instant::now();
            if model.is_running() {
                model.update(Msg::Tick);
                dirty = true;
            }
        }

        if dirty {
            driver.draw(model)?;
        }
    }
}
