//! Terminal renderer
//!
//! Maps the 800x600 world onto an 80x24 character grid under a one-line
//! HUD. Entity facing picks the marker glyph, standing in for the sprite
//! flip a graphical frontend would do.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{self, ClearType},
};

use super::Renderer;
use super::particles::{MoteField, collectible_spin};
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::settings::Settings;
use crate::sim::{Facing, PlatformKind, Snapshot};

/// World units per character cell
const CELL_W: f32 = 10.0;
const CELL_H: f32 = 25.0;

pub const COLS: usize = (WORLD_WIDTH / CELL_W) as usize;
pub const ROWS: usize = (WORLD_HEIGHT / CELL_H) as usize;

/// Collectible glyphs cycled by the spin phase
const SPIN_GLYPHS: [char; 4] = ['o', '*', '+', 'x'];

/// Frames a HUD notice stays up
const NOTICE_FRAMES: u32 = 180;

pub struct AsciiRenderer {
    out: Stdout,
    motes: MoteField,
    spin_enabled: bool,
    show_fps: bool,
    fps: u32,
    notice: Option<(String, u32)>,
}

impl AsciiRenderer {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            out: io::stdout(),
            motes: MoteField::new(seed, settings.effective_mote_count()),
            spin_enabled: settings.effective_spin(),
            show_fps: settings.show_fps,
            fps: 0,
            notice: None,
        }
    }

    /// Show a one-line HUD notice for a few seconds
    pub fn notify(&mut self, message: &str) {
        self.notice = Some((message.to_string(), NOTICE_FRAMES));
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps;
    }

    /// Build one frame: a HUD line followed by the world grid
    pub fn frame_lines(&mut self, snapshot: &Snapshot) -> Vec<String> {
        let mut grid = vec![[' '; COLS]; ROWS];

        self.motes.update();
        for mote in self.motes.iter() {
            plot(&mut grid, mote.pos.x, mote.pos.y, '.');
        }

        for platform in &snapshot.platforms {
            let glyph = match platform.kind {
                PlatformKind::Ground => '=',
                PlatformKind::Floating => '-',
            };
            fill(
                &mut grid,
                platform.x,
                platform.y,
                platform.width,
                platform.height,
                glyph,
            );
        }

        let spin = if self.spin_enabled {
            collectible_spin(snapshot.time_ticks)
        } else {
            0.0
        };
        let glyph = SPIN_GLYPHS[(spin / (std::f32::consts::TAU / 4.0)) as usize % 4];
        for collectible in &snapshot.collectibles {
            if !collectible.collected {
                plot(&mut grid, collectible.pos.x, collectible.pos.y, glyph);
            }
        }

        if snapshot.exit.visible {
            let size = crate::consts::EXIT_SIZE;
            fill(&mut grid, snapshot.exit.pos.x, snapshot.exit.pos.y, size, size, 'D');
        }

        let pursuer = &snapshot.pursuer;
        fill(
            &mut grid,
            pursuer.pos.x,
            pursuer.pos.y,
            pursuer.size.x,
            pursuer.size.y,
            'X',
        );

        let player = &snapshot.player;
        fill(
            &mut grid,
            player.pos.x,
            player.pos.y,
            player.size.x,
            player.size.y,
            'P',
        );
        // Facing marker on the leading edge (the "sprite flip")
        let (marker, edge_x) = match player.facing {
            Facing::Right => ('>', player.pos.x + player.size.x - 1.0),
            Facing::Left => ('<', player.pos.x),
        };
        plot(&mut grid, edge_x, player.pos.y, marker);

        let mut lines = Vec::with_capacity(ROWS + 1);
        lines.push(self.hud_line(snapshot));
        for row in &grid {
            lines.push(row.iter().collect());
        }
        lines
    }

    fn hud_line(&mut self, snapshot: &Snapshot) -> String {
        let mut hud = format!("Acorns: {}  Level: {}", snapshot.score, snapshot.level);
        if self.show_fps {
            hud.push_str(&format!("  FPS: {}", self.fps));
        }
        if let Some((message, frames_left)) = self.notice.take() {
            hud.push_str("  ");
            hud.push_str(&message);
            if frames_left > 1 {
                self.notice = Some((message, frames_left - 1));
            }
        }
        hud.truncate(COLS);
        hud
    }

    fn present(&mut self, lines: &[String]) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;
        for line in lines {
            queue!(
                self.out,
                terminal::Clear(ClearType::UntilNewLine),
                Print(line),
                Print("\r\n")
            )?;
        }
        self.out.flush()
    }
}

impl Renderer for AsciiRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        let lines = self.frame_lines(snapshot);
        if let Err(err) = self.present(&lines) {
            log::warn!("render error: {err}");
        }
    }
}

/// Put one glyph at a world position
fn plot(grid: &mut [[char; COLS]], x: f32, y: f32, glyph: char) {
    let col = ((x / CELL_W) as usize).min(COLS - 1);
    let row = ((y / CELL_H) as usize).min(ROWS - 1);
    grid[row][col] = glyph;
}

/// Fill the cells covered by a world rectangle
fn fill(grid: &mut [[char; COLS]], x: f32, y: f32, width: f32, height: f32, glyph: char) {
    let col0 = ((x / CELL_W) as usize).min(COLS - 1);
    let col1 = (((x + width - 1.0) / CELL_W) as usize).min(COLS - 1);
    let row0 = ((y / CELL_H) as usize).min(ROWS - 1);
    let row1 = (((y + height - 1.0) / CELL_H) as usize).min(ROWS - 1);
    for row in grid.iter_mut().take(row1 + 1).skip(row0) {
        for cell in row.iter_mut().take(col1 + 1).skip(col0) {
            *cell = glyph;
        }
    }
}
