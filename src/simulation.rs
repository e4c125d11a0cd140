use crate::{
    frame::{CellSprite, FrameMapper, Variant},
    GridResult, TorusGrid,
};

/// Draws the sprites produced for one frame.
pub trait Renderer {
    fn render(&mut self, sprites: &[CellSprite]);
}

/// Owns the grid and couples every rendered frame to exactly one generation.
pub struct Simulation {
    grid: TorusGrid,
    mapper: Box<dyn FrameMapper>,
    variant: Variant,
    sprites: Vec<CellSprite>,
}

impl Simulation {
    pub fn new(side: usize, seed: i64, variant: Variant) -> GridResult<Self> {
        Ok(Self::from_grid(TorusGrid::new(side, seed)?, variant))
    }

    pub fn from_grid(grid: TorusGrid, variant: Variant) -> Self {
        Self {
            grid,
            mapper: variant.mapper(),
            variant,
            sprites: vec![],
        }
    }

    pub fn grid(&self) -> &TorusGrid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn set_variant(&mut self, variant: Variant) {
        if variant != self.variant {
            log::debug!("switching to {:?} mapping", variant);
            self.variant = variant;
            self.mapper = variant.mapper();
        }
    }

    /// Replaces the mapper, e.g. to fit a different viewport.
    pub fn set_mapper(&mut self, mapper: Box<dyn FrameMapper>) {
        self.mapper = mapper;
    }

    /// Advances one generation and maps the result.
    pub fn frame(&mut self, time: f64) -> &[CellSprite] {
        self.grid.step();
        self.mapper.map(&self.grid, time, &mut self.sprites);
        &self.sprites
    }

    /// One scheduler tick: step, map, render.
    pub fn on_frame(&mut self, time: f64, renderer: &mut dyn Renderer) {
        self.frame(time);
        renderer.render(&self.sprites);
    }

    /// Renders the current generation again without stepping.
    pub fn redraw(&mut self, time: f64, renderer: &mut dyn Renderer) {
        self.mapper.map(&self.grid, time, &mut self.sprites);
        renderer.render(&self.sprites);
    }

    /// Reseeds the grid and renders the fresh generation 0 before returning.
    pub fn restart(&mut self, seed: i64, time: f64, renderer: &mut dyn Renderer) {
        self.grid.restart(seed);
        self.mapper.map(&self.grid, time, &mut self.sprites);
        renderer.render(&self.sprites);
    }
}
