use crate::{Engine, Grid, LifeError, Result};
use std::io::Write;

/// Characters used to print alive and dead cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    pub fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    pub fn glyph(&self, alive: bool) -> char {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new('#', '.')
    }
}

/// Writes `grid` top to bottom, one line per row, without any trailing metadata.
pub fn render<W: Write + ?Sized>(grid: &Grid, sink: &mut W, glyphs: Glyphs) -> Result<()> {
    let mut line = String::with_capacity(grid.columns() + 1);
    for y in 0..grid.rows() {
        line.clear();
        line.extend(grid.row(y).iter().map(|&c| glyphs.glyph(c)));
        line.push('\n');
        sink.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Renders and advances `engine` until its generation counter reaches `target`.
///
/// One frame is written per generation below `target`; the generation equal to
/// `target` is computed but not rendered. An engine already at or past `target`
/// is left untouched.
pub fn simulate<W: Write + ?Sized>(
    engine: &mut dyn Engine,
    target: u64,
    sink: &mut W,
    glyphs: Glyphs,
) -> Result<()> {
    if target == 0 {
        return Err(LifeError::InvalidTarget);
    }
    log::info!(
        "simulating from generation {} to {}",
        engine.generation(),
        target
    );
    while engine.generation() < target {
        render(&engine.snapshot(), sink, glyphs)?;
        sink.flush()?;
        engine.advance()?;
    }
    log::info!(
        "reached generation {} with population {}",
        engine.generation(),
        engine.population()
    );
    Ok(())
}
