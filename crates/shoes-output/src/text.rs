//! Plain-text dashboard: one frame per snapshot.
//!
//! ```text
//! == Approaching Obstacle ==
//! steps 12  battery 100%  speed 3.4 km/h  status Active
//!   left    123 cm  WARN
//! * center  165 cm  CLEAR
//!   right   118 cm  WARN
//!   down     98 cm  WARN
//! gps 37.5514°, 127.0748°  walked 42 m  mode Normal  sensitivity 50%
//! center ▇▇▆▅▄▃▂
//! ```
//!
//! The `*` marks the horizontal sensor with the nearest obstacle.

use std::fmt;
use std::io;

use shoes_core::Tick;
use shoes_sensor::SensorReading;
use shoes_sensor::reading::HORIZONTAL_RANGE_CM;
use shoes_sim::{DashboardObserver, Snapshot};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render one dashboard frame.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_frame(&mut out, snapshot);
    out
}

fn write_frame(out: &mut impl fmt::Write, snapshot: &Snapshot) -> fmt::Result {
    let title = snapshot.scenario.map_or("Starting", |s| s.label());
    writeln!(out, "== {title} ==")?;
    writeln!(
        out,
        "steps {}  battery {}%  speed {:.1} km/h  status {}",
        snapshot.step_count,
        snapshot.battery_percent(),
        snapshot.walking_speed,
        snapshot.status,
    )?;
    for (dir, cm, zone) in snapshot.zones() {
        let marker = if dir == snapshot.closest { '*' } else { ' ' };
        writeln!(out, "{marker} {:<6} {cm:>4} cm  {zone}", dir.as_str())?;
    }
    writeln!(
        out,
        "gps {}  walked {:.0} m  mode {}  sensitivity {}",
        snapshot.gps, snapshot.distance_walked_m, snapshot.operation_mode, snapshot.sensitivity,
    )?;
    writeln!(out, "center {}", sparkline(&snapshot.history))
}

/// Center-channel history as block characters, oldest first.
fn sparkline(history: &[SensorReading]) -> String {
    let (lo, hi) = HORIZONTAL_RANGE_CM;
    let span = (hi - lo) as usize;
    history
        .iter()
        .map(|r| {
            let offset = r.center.saturating_sub(lo) as usize;
            SPARK_LEVELS[offset * (SPARK_LEVELS.len() - 1) / span]
        })
        .collect()
}

// ── TextDashboard ─────────────────────────────────────────────────────────────

/// A [`DashboardObserver`] that writes a text frame to `out` on every
/// snapshot.
///
/// Like the CSV observer, the first I/O error is stored and returned by
/// [`take_error`][Self::take_error]; later frames are skipped once a write
/// has failed.
pub struct TextDashboard<W: io::Write> {
    out:        W,
    frames:     u64,
    last_error: Option<io::Error>,
}

impl<W: io::Write> TextDashboard<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0, last_error: None }
    }

    /// Write one frame immediately.
    pub fn draw(&mut self, tick: Option<Tick>, snapshot: &Snapshot) -> io::Result<()> {
        if let Some(tick) = tick {
            writeln!(self.out, "[{tick}]")?;
        }
        self.out.write_all(render(snapshot).as_bytes())?;
        writeln!(self.out)?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> DashboardObserver for TextDashboard<W> {
    fn on_snapshot(&mut self, tick: Tick, snapshot: &Snapshot) {
        if self.last_error.is_some() {
            return;
        }
        if let Err(e) = self.draw(Some(tick), snapshot) {
            self.last_error = Some(e);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        if self.last_error.is_none() {
            if let Err(e) = self.out.flush() {
                self.last_error = Some(e);
            }
        }
    }
}
