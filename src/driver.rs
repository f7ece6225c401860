use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::{Bounds, Error, Pattern, Pos, PosSet, Seeder, World};

const CMD_POLL_TIMEOUT: Duration = Duration::from_millis(10);
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(10);
const MAX_TICK_INTERVAL: Duration = Duration::from_secs(2);

/// What a host must be able to do with cells that change state. Mirrors
/// an engine that instantiates an object per live cell and destroys it on
/// death; `present` marks the end of a generation for renderers that draw
/// frames rather than retaining objects.
pub trait CellRenderer {
    fn spawn(&mut self, pos: Pos);
    fn despawn(&mut self, pos: Pos);
    fn present(&mut self) {}
}

/// Discards every cell event, for running the simulation headless.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl CellRenderer for NullRenderer {
    fn spawn(&mut self, _pos: Pos) {}
    fn despawn(&mut self, _pos: Pos) {}
}

/// Control messages fed to [`TickDriver::run`], typically from a keyboard
/// thread.
#[derive(Debug)]
pub enum DriverCmd {
    Toggle,
    Reset,
    Faster,
    Slower,
    Quit,
}

/// Owns the world and paces it: seeds on construction, steps at a fixed
/// interval while playing, and forwards every state change to the
/// renderer. The simulation runs entirely on the thread that calls
/// [`TickDriver::run`]; commands arrive over a channel.
#[derive(Debug)]
pub struct TickDriver<S, R>
where
    S: Seeder,
    R: CellRenderer,
{
    world: World,
    patterns: Vec<Pattern>,
    seeder: S,
    renderer: R,
    interval: Duration,
    playing: bool,
}

impl<S, R> TickDriver<S, R>
where
    S: Seeder,
    R: CellRenderer,
{
    /// Seeds the grid, presents the first generation and starts playing.
    pub fn new(
        patterns: Vec<Pattern>,
        bounds: Bounds,
        interval: Duration,
        seeder: S,
        renderer: R,
    ) -> Result<Self, Error> {
        let mut driver = Self {
            world: World::new(bounds, PosSet::default())?,
            patterns,
            seeder,
            renderer,
            interval,
            playing: false,
        };
        driver.reset()?;
        Ok(driver)
    }

    /// Throws the current population away and reseeds. The new live set
    /// is computed before anything is despawned, so a failing seed leaves
    /// the previous generation on screen untouched.
    pub fn reset(&mut self) -> Result<(), Error> {
        let bounds = self.world.bounds();
        let seed = self.seeder.seed(&self.patterns, bounds)?;
        let next = World::new(bounds, seed)?;

        for &pos in self.world.alive() {
            self.renderer.despawn(pos);
        }
        self.world = next;
        for &pos in self.world.alive() {
            self.renderer.spawn(pos);
        }
        self.play();
        self.renderer.present();
        Ok(())
    }

    /// Advances one generation and pushes the deltas out, births first.
    pub fn tick(&mut self) {
        let delta = self.world.step();
        for &pos in &delta.born {
            self.renderer.spawn(pos);
        }
        for &pos in &delta.died {
            self.renderer.despawn(pos);
        }
        self.renderer.present();
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn faster(&mut self) {
        self.interval = (self.interval / 2).max(MIN_TICK_INTERVAL);
    }

    pub fn slower(&mut self) {
        self.interval = (self.interval * 2).min(MAX_TICK_INTERVAL);
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Drives the simulation until `Quit` arrives or every sender hangs
    /// up. One command is handled per wake-up; between commands the world
    /// ticks whenever the interval has elapsed and the driver is playing.
    pub fn run(&mut self, commands: Receiver<DriverCmd>) -> Result<(), Error> {
        let mut last_tick = Instant::now();
        loop {
            match commands.try_recv() {
                Ok(DriverCmd::Toggle) => self.toggle(),
                Ok(DriverCmd::Reset) => {
                    self.reset()?;
                    last_tick = Instant::now();
                }
                Ok(DriverCmd::Faster) => self.faster(),
                Ok(DriverCmd::Slower) => self.slower(),
                Ok(DriverCmd::Quit) | Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => {}
            }

            if self.playing && last_tick.elapsed() >= self.interval {
                self.tick();
                last_tick = Instant::now();
            }

            thread::sleep(CMD_POLL_TIMEOUT);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::mpsc;

    use super::*;
    use crate::QuadrantSeeder;

    #[derive(Debug, Default)]
    struct Events {
        spawned: Vec<Pos>,
        despawned: Vec<Pos>,
        frames: usize,
    }

    /// Test renderer sharing its event log with the test body.
    #[derive(Debug, Default, Clone)]
    struct Recorder(Rc<RefCell<Events>>);

    impl Recorder {
        fn spawned(&self) -> PosSet {
            self.0.borrow().spawned.iter().copied().collect()
        }

        fn despawned(&self) -> PosSet {
            self.0.borrow().despawned.iter().copied().collect()
        }

        fn frames(&self) -> usize {
            self.0.borrow().frames
        }

        fn clear(&self) {
            *self.0.borrow_mut() = Events::default();
        }
    }

    impl CellRenderer for Recorder {
        fn spawn(&mut self, pos: Pos) {
            self.0.borrow_mut().spawned.push(pos);
        }

        fn despawn(&mut self, pos: Pos) {
            self.0.borrow_mut().despawned.push(pos);
        }

        fn present(&mut self) {
            self.0.borrow_mut().frames += 1;
        }
    }

    fn blinker_driver(recorder: &Recorder) -> TickDriver<QuadrantSeeder, Recorder> {
        // One available pattern makes the random choice irrelevant, so
        // the seeded grid is six blinkers at the fixed anchors.
        let patterns = vec![Pattern::parse("blinker", "xxx").unwrap()];
        let bounds = Bounds::new(40, 40).unwrap();
        TickDriver::new(
            patterns,
            bounds,
            Duration::from_millis(100),
            QuadrantSeeder::seeded(3),
            recorder.clone(),
        )
        .unwrap()
    }

    #[test]
    fn construction_spawns_the_seeded_cells() {
        let recorder = Recorder::default();
        let driver = blinker_driver(&recorder);

        assert_eq!(driver.world().population(), 18);
        assert!(driver.playing());
        assert_eq!(recorder.spawned(), driver.world().alive().clone());
        assert!(recorder.despawned().is_empty());
        assert_eq!(recorder.frames(), 1);
    }

    #[test]
    fn ticks_forward_births_and_deaths() {
        let recorder = Recorder::default();
        let mut driver = blinker_driver(&recorder);
        let before = driver.world().alive().clone();
        recorder.clear();

        driver.tick();

        // Every horizontal blinker flips vertical: its ends die and a
        // cell above and below the center is born.
        let after = driver.world().alive().clone();
        let born: PosSet = after.difference(&before).copied().collect();
        let died: PosSet = before.difference(&after).copied().collect();
        assert_eq!(born.len(), 12);
        assert_eq!(died.len(), 12);
        assert_eq!(recorder.spawned(), born);
        assert_eq!(recorder.despawned(), died);
        assert_eq!(recorder.frames(), 1);
    }

    #[test]
    fn reset_replaces_the_population() {
        let recorder = Recorder::default();
        let mut driver = blinker_driver(&recorder);
        driver.tick();
        driver.pause();
        let before_reset = driver.world().alive().clone();
        recorder.clear();

        driver.reset().unwrap();

        assert!(driver.playing());
        assert_eq!(recorder.despawned(), before_reset);
        assert_eq!(recorder.spawned(), driver.world().alive().clone());
        assert_eq!(driver.world().population(), 18);
    }

    #[test]
    fn toggle_flips_play_state() {
        let recorder = Recorder::default();
        let mut driver = blinker_driver(&recorder);
        assert!(driver.playing());
        driver.toggle();
        assert!(!driver.playing());
        driver.toggle();
        assert!(driver.playing());
    }

    #[test]
    fn interval_changes_stay_clamped() {
        let recorder = Recorder::default();
        let mut driver = blinker_driver(&recorder);
        for _ in 0..10 {
            driver.faster();
        }
        assert_eq!(driver.interval(), MIN_TICK_INTERVAL);
        for _ in 0..10 {
            driver.slower();
        }
        assert_eq!(driver.interval(), MAX_TICK_INTERVAL);
    }

    fn headless_driver() -> TickDriver<QuadrantSeeder, NullRenderer> {
        let patterns = vec![Pattern::parse("block", "xx\nxx").unwrap()];
        let bounds = Bounds::new(20, 20).unwrap();
        TickDriver::new(
            patterns,
            bounds,
            Duration::from_millis(10),
            QuadrantSeeder::seeded(0),
            NullRenderer,
        )
        .unwrap()
    }

    #[test]
    fn run_ticks_only_while_playing() {
        let recorder = Recorder::default();
        let patterns = vec![Pattern::parse("blinker", "xxx").unwrap()];
        let bounds = Bounds::new(40, 40).unwrap();
        let mut driver = TickDriver::new(
            patterns,
            bounds,
            Duration::ZERO,
            QuadrantSeeder::seeded(3),
            recorder.clone(),
        )
        .unwrap();

        // Paused before the interval check, so a zero interval still never
        // ticks; one frame from construction.
        let (sender, receiver) = mpsc::channel();
        sender.send(DriverCmd::Toggle).unwrap();
        sender.send(DriverCmd::Quit).unwrap();
        driver.run(receiver).unwrap();
        assert_eq!(recorder.frames(), 1);

        // Resumed for exactly one loop iteration: exactly one more frame.
        let (sender, receiver) = mpsc::channel();
        sender.send(DriverCmd::Toggle).unwrap();
        sender.send(DriverCmd::Toggle).unwrap();
        sender.send(DriverCmd::Quit).unwrap();
        driver.run(receiver).unwrap();
        assert_eq!(recorder.frames(), 2);
    }

    #[test]
    fn run_stops_on_quit() {
        let (sender, receiver) = mpsc::channel();
        sender.send(DriverCmd::Quit).unwrap();
        headless_driver().run(receiver).unwrap();
    }

    #[test]
    fn run_stops_when_the_channel_disconnects() {
        let (sender, receiver) = mpsc::channel::<DriverCmd>();
        drop(sender);
        headless_driver().run(receiver).unwrap();
    }
}
