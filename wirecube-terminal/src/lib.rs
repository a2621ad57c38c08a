/// Terminal front end: frame loop, mouse input and half-block presentation
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use wirecube_core::{Scene, SceneConfig};

pub mod canvas;
pub mod input;

pub use canvas::Canvas;
pub use input::Pointer;

/// Default sleep between frames
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(10);

/// Settings for a [`TerminalApp`]
#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    pub scene: SceneConfig,
    pub frame_delay: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }
}

/// Main application struct for the terminal cube
pub struct TerminalApp {
    scene: Scene,
    canvas: Canvas,
    pointer: Pointer,
    frame_delay: Duration,
    running: bool,
    show_status: bool,
    last_frame: Instant,
    frame_count: u32,
    total_frames: u64,
    fps: f32,
}

impl TerminalApp {
    pub fn new(options: AppOptions) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        Ok(Self::with_size(options, columns, rows))
    }

    /// Build an app for a terminal of the given size without querying it
    pub fn with_size(options: AppOptions, columns: u16, rows: u16) -> Self {
        Self {
            scene: Scene::new(options.scene),
            canvas: Canvas::new(columns as usize, rows as usize),
            pointer: Pointer::new(),
            frame_delay: options.frame_delay,
            running: true,
            show_status: false,
            last_frame: Instant::now(),
            frame_count: 0,
            total_frames: 0,
            fps: 0.0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;
        info!(
            columns = self.canvas.columns(),
            rows = self.canvas.rows(),
            cadence = self.scene.config().cadence(),
            decay = self.scene.config().decay(),
            "frame loop started"
        );

        let result = self.main_loop();

        // Cleanup, even when the loop failed
        let restored = execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        let raw_mode = terminal::disable_raw_mode();
        info!(frames = self.total_frames, "frame loop stopped");

        result.and(restored).and(raw_mode)
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let mut stdout = stdout();

        while self.running {
            // Handle input
            while event::poll(Duration::ZERO)? {
                let event = event::read()?;
                self.handle_event(&event);
            }
            if !self.running {
                break;
            }

            self.frame();
            self.present(&mut stdout)?;

            // Update FPS counter
            self.frame_count += 1;
            self.total_frames += 1;
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }

            std::thread::sleep(self.frame_delay);
        }

        Ok(())
    }

    /// Apply one terminal event to the app state
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.pointer.handle(mouse),
            Event::Resize(columns, rows) => {
                debug!(columns, rows, "terminal resized");
                self.canvas.resize(*columns as usize, *rows as usize);
            }
            Event::FocusLost => self.pointer.release(),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Char('r') => {
                debug!("orientation reset");
                self.scene.reset();
            }
            KeyCode::Char('h') => {
                self.show_status = !self.show_status;
            }
            _ => {}
        }
    }

    /// Advance the scene one tick and redraw the canvas
    pub fn frame(&mut self) {
        let width = self.canvas.width() as u32;
        let height = self.canvas.height() as u32;

        self.canvas.clear();
        self.scene
            .tick(self.pointer.sample(), width, height, &mut self.canvas);
    }

    fn present<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.canvas.draw(writer)?;

        if self.show_status {
            let (vx, vy) = self.scene.controller().velocity();
            let state = if self.scene.controller().is_dragging() {
                "dragging"
            } else {
                "spinning"
            };
            queue!(
                writer,
                cursor::MoveTo(0, 0),
                SetBackgroundColor(Color::Black),
                SetForegroundColor(Color::Yellow),
                Print(format!(
                    "wirecube | FPS: {:.1} | {} | velocity ({:.2}, {:.2}) | drag=rotate r=reset h=help q=quit",
                    self.fps, state, vx, vy
                )),
                ResetColor
            )?;
        }

        writer.flush()?;
        Ok(())
    }
}
