use std::{env::args, io::stdout, process::exit, sync::mpsc, thread, time::Duration};

use termion::raw::IntoRawMode;

use torlife::{pattern, view, Bounds, QuadrantSeeder, TermView, TickDriver};

const GRID_ROWS: i32 = 50;
const GRID_COLS: i32 = 50;
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn main() {
    let patterns = match args().nth(1) {
        Some(dir) => pattern::load_dir(dir),
        None => Ok(pattern::builtin()),
    }
    .unwrap_or_else(|err| {
        eprintln!("[error] {err}");
        exit(1);
    });

    let bounds = Bounds::new(GRID_ROWS, GRID_COLS).unwrap();
    let renderer = TermView::new(bounds);
    let mut driver = TickDriver::new(
        patterns,
        bounds,
        TICK_INTERVAL,
        QuadrantSeeder::new(),
        renderer,
    )
    .unwrap_or_else(|err| {
        eprintln!("[error] {err}");
        exit(1);
    });

    let raw = stdout().into_raw_mode().unwrap();
    let (sender, receiver) = mpsc::channel();
    thread::spawn(|| view::input_loop(sender));

    let outcome = driver.run(receiver);
    drop(raw);
    println!();

    if let Err(err) = outcome {
        eprintln!("[error] {err}");
        exit(1);
    }
}
