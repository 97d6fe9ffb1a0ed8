use elementary::{Config, RuleTable, Session};
use log::{info, LevelFilter};
use sdl2::{
    self,
    event::{Event, WindowEvent},
    keyboard::Keycode,
    pixels::Color,
    rect::Rect,
    render::Canvas,
    video::Window,
};
use simple_logger::SimpleLogger;
use std::{
    env::args,
    error::Error,
    thread::sleep,
    time::{Duration, Instant},
};

const CELL_SIZE: u32 = 2;

/// `[size] [rule] [generations] [--scroll]`
fn parse_args() -> Result<Config, Box<dyn Error>> {
    let mut config = Config::default();
    let mut positional = 0;
    for arg in args().skip(1) {
        if arg == "--scroll" {
            config = config.set_scroll(true);
            continue;
        }
        config = match positional {
            0 => config.set_size(arg.parse()?),
            1 => config.set_rule(arg.parse::<RuleTable>()?.rule_id().into()),
            2 => config.set_generations(arg.parse()?),
            _ => return Err(format!("Unexpected argument: {}", arg).into()),
        };
        positional += 1;
    }
    Ok(config)
}

fn draw_row(canvas: &mut Canvas<Window>, row: &[u8], y: usize) -> Result<(), String> {
    for (x, _) in row.iter().enumerate().filter(|&(_, &cell)| cell == 1) {
        canvas.fill_rect(Rect::new(
            (x as u32 * CELL_SIZE) as i32,
            (y as u32 * CELL_SIZE) as i32,
            CELL_SIZE,
            CELL_SIZE,
        ))?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = parse_args()?;
    let mut session = Session::new(config.clone())?;
    // The window only keeps what is on screen, so the rows of the current run
    // are kept here for redrawing.
    let mut rows = vec![session.automaton().cells().to_vec()];

    let sdl = sdl2::init()?;
    let video_subsystem = sdl.video()?;
    let window = video_subsystem
        .window(
            "Cellular Automata",
            config.size as u32 * CELL_SIZE,
            config.generations.max(1) as u32 * CELL_SIZE,
        )
        .resizable()
        .build()?;
    let mut canvas = window.into_canvas().build()?;

    canvas.set_draw_color(Color::BLACK);
    canvas.clear();
    canvas.present();

    let mut is_running = false;
    let mut need_update = true;

    let mut now = Instant::now();
    const FRAME_TIME: Duration = Duration::from_millis(12);

    'mainloop: loop {
        let mut events = sdl.event_pump()?;

        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'mainloop,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    need_update = true;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    ..
                } => {
                    is_running = false;
                    if !session.is_finished() {
                        rows.push(session.step().to_vec());
                        need_update = true;
                    }
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Return),
                    ..
                } => {
                    if session.is_finished() {
                        session.reset(config.clone())?;
                        rows = vec![session.automaton().cells().to_vec()];
                        is_running = true;
                        need_update = true;
                    } else {
                        is_running ^= true;
                    }
                }
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    ..
                } => {
                    is_running = false;
                    session.reset(config.clone())?;
                    rows = vec![session.automaton().cells().to_vec()];
                    need_update = true;
                }
                _ => {}
            }
        }

        if is_running {
            if session.is_finished() {
                is_running = false;
                info!("Finished after {} rows", session.row());
            } else {
                rows.push(session.step().to_vec());
                need_update = true;
            }
        }

        if need_update {
            canvas.set_draw_color(Color::BLACK);
            canvas.clear();
            canvas.set_draw_color(Color::WHITE);
            for (y, row) in rows.iter().enumerate() {
                draw_row(&mut canvas, row, y)?;
            }
            canvas.present();
        }

        let time_taken = now.elapsed();
        if FRAME_TIME > time_taken {
            sleep(FRAME_TIME - time_taken);
        }

        if need_update {
            let automaton = session.automaton();
            info!(
                "{}\tRule: {}\tRow: {}/{}\tGen: {}\tPop: {}\tFps: {:.1}",
                if is_running { "Running" } else { "Paused" },
                automaton.rule(),
                session.row(),
                session.config().generations,
                automaton.generation(),
                automaton.population(),
                1.0 / now.elapsed().as_secs_f32(),
            );
        }
        need_update = false;
        now = Instant::now();
    }

    Ok(())
}
