//! Rendering layer: all terminal output lives here.
//!
//! World coordinates are pixels on the configured play field; each terminal cell
//! covers `CELL_W` x `CELL_H` pixels.  Nothing here changes game state.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use platform_shooter::animation::Animations;
use platform_shooter::assets::{Sprite, SpriteAtlas};
use platform_shooter::config::ScreenConfig;
use platform_shooter::entities::{GamePhase, Rect, World};
use platform_shooter::game::Game;

const CELL_W: i32 = 10;
const CELL_H: i32 = 20;
/// Rows reserved above the play field for the HUD.
const HUD_ROWS: i32 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Cyan;
const C_TEXT: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::White;
const C_ZOMBIE: Color = Color::Green;
const C_PLATFORM: Color = Color::DarkYellow;
const C_PROJECTILE: Color = Color::Yellow;
const C_HUD: Color = Color::Yellow;
const C_BACKGROUND: Color = Color::DarkGrey;

#[derive(Clone, Copy)]
struct Screen {
    cols: u16,
    rows: u16,
}

impl Screen {
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.cols) && y < i32::from(self.rows)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for whatever phase the game is in.
pub fn render<W: Write>(out: &mut W, game: &Game, atlas: &SpriteAtlas) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let (cols, rows) = terminal::size()?;
    let screen = Screen { cols, rows };

    match game.phase() {
        GamePhase::Menu => draw_menu(out, screen)?,
        GamePhase::Playing | GamePhase::PlayerDying => {
            if let Some(world) = game.world() {
                draw_world(out, screen, &game.config().screen, world, game.animations(), atlas)?;
                draw_hud(out, world)?;
            }
        }
        GamePhase::GameOver => draw_banner(
            out,
            screen,
            "GAME OVER",
            Color::Red,
            "You were defeated!",
        )?,
        GamePhase::Victory => draw_banner(
            out,
            screen,
            "VICTORY!",
            Color::Green,
            "You destroyed every zombie!",
        )?,
        GamePhase::Quit => {}
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()
}

// ── Text screens ──────────────────────────────────────────────────────────────

fn print_centered<W: Write>(
    out: &mut W,
    screen: Screen,
    row: u16,
    text: &str,
    color: Color,
) -> io::Result<()> {
    let col = (screen.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_menu<W: Write>(out: &mut W, screen: Screen) -> io::Result<()> {
    let cy = screen.rows / 2;
    print_centered(out, screen, cy.saturating_sub(7), "PLATFORM  SHOOTER", C_TITLE)?;
    print_centered(out, screen, cy.saturating_sub(3), "Controls:", C_TEXT)?;

    let controls = [
        "A / D  or  ← / →   Move left / right",
        "W  or  ↑           Jump",
        "SPACE              Shoot",
        "ESC                Back to menu (in game)",
        "Q                  Quit",
    ];
    for (i, line) in controls.iter().enumerate() {
        print_centered(out, screen, cy.saturating_sub(1) + i as u16, line, C_HINT)?;
    }

    print_centered(out, screen, cy + 6, "Press ENTER to start", C_TEXT)?;
    Ok(())
}

fn draw_banner<W: Write>(
    out: &mut W,
    screen: Screen,
    title: &str,
    color: Color,
    subtitle: &str,
) -> io::Result<()> {
    print_centered(out, screen, screen.rows / 3, title, color)?;
    print_centered(out, screen, screen.rows / 2, subtitle, C_TEXT)?;
    print_centered(
        out,
        screen,
        screen.rows * 3 / 4,
        "Press ENTER to return to the menu",
        C_HINT,
    )?;
    Ok(())
}

// ── Play field ────────────────────────────────────────────────────────────────

/// Terminal cells covered by a world rectangle (at least one cell each way).
struct CellRect {
    col: i32,
    row: i32,
    cols: usize,
    rows: usize,
}

fn to_cells(rect: Rect) -> CellRect {
    CellRect {
        col: rect.x.div_euclid(CELL_W),
        row: rect.y.div_euclid(CELL_H) + HUD_ROWS,
        cols: ((rect.w + CELL_W / 2) / CELL_W).max(1) as usize,
        rows: ((rect.h + CELL_H / 2) / CELL_H).max(1) as usize,
    }
}

fn put<W: Write>(out: &mut W, screen: Screen, x: i32, y: i32, ch: char) -> io::Result<()> {
    if screen.contains(x, y) {
        out.queue(cursor::MoveTo(x as u16, y as u16))?;
        out.queue(Print(ch))?;
    }
    Ok(())
}

fn sprite_color(sprite: &Sprite, art_color: Color) -> Color {
    match sprite {
        Sprite::Placeholder(color) => *color,
        Sprite::Glyphs(_) => art_color,
    }
}

/// Stretch `sprite` over the cells of `rect`.
fn blit<W: Write>(
    out: &mut W,
    screen: Screen,
    rect: Rect,
    sprite: &Sprite,
    color: Color,
) -> io::Result<()> {
    let cells = to_cells(rect);
    out.queue(style::SetForegroundColor(sprite_color(sprite, color)))?;
    for r in 0..cells.rows {
        for c in 0..cells.cols {
            if let Some(ch) = sprite.sample(c, r, cells.cols, cells.rows) {
                put(out, screen, cells.col + c as i32, cells.row + r as i32, ch)?;
            }
        }
    }
    Ok(())
}

/// Repeat `tile` at its native size across the cells of `rect`.
fn tile<W: Write>(
    out: &mut W,
    screen: Screen,
    rect: Rect,
    tile: &Sprite,
    color: Color,
) -> io::Result<()> {
    let cells = to_cells(rect);
    let (tile_cols, tile_rows) = match tile {
        Sprite::Glyphs(rows) => (rows.first().map_or(1, Vec::len).max(1), rows.len().max(1)),
        Sprite::Placeholder(_) => (1, 1),
    };
    out.queue(style::SetForegroundColor(sprite_color(tile, color)))?;
    for r in 0..cells.rows {
        for c in 0..cells.cols {
            let glyph = tile.sample(c % tile_cols, r % tile_rows, tile_cols, tile_rows);
            if let Some(ch) = glyph {
                put(out, screen, cells.col + c as i32, cells.row + r as i32, ch)?;
            }
        }
    }
    Ok(())
}

fn draw_world<W: Write>(
    out: &mut W,
    screen: Screen,
    field: &ScreenConfig,
    world: &World,
    animations: &Animations,
    atlas: &SpriteAtlas,
) -> io::Result<()> {
    if let Some(background) = &atlas.background {
        let area = Rect::new(0, 0, field.width, field.height);
        tile(out, screen, area, background, C_BACKGROUND)?;
    }

    for platform in &world.platforms {
        tile(out, screen, platform.rect, &atlas.platform_tile, C_PLATFORM)?;
    }

    for zombie in world.enemies.iter().filter(|z| z.alive) {
        let sprite = atlas.zombie.sprite(zombie.frame());
        blit(out, screen, zombie.rect(), sprite, C_ZOMBIE)?;
    }

    out.queue(style::SetForegroundColor(C_PROJECTILE))?;
    for shot in &world.projectiles {
        let cells = to_cells(shot.rect);
        put(out, screen, cells.col, cells.row, '-')?;
    }

    let frame = world.player.frame(&animations.player);
    blit(out, screen, world.player.rect(), atlas.player.sprite(frame), C_PLAYER)?;
    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, world: &World) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Zombies left: {}/{}",
        world.living_enemies(),
        world.enemies.len()
    )))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("   A/D move  W jump  SPACE shoot  ESC menu  Q quit"))?;
    Ok(())
}
