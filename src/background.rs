use crate::constants::*;
use crate::core::{plan_tiles, TileConfig};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fills `.js-background` with clones of its `.js-word` tile.
pub struct BackgroundTiler {
    container: web::Element,
    config: TileConfig,
    rng: StdRng,
}

impl BackgroundTiler {
    pub fn new(document: &web::Document, config: TileConfig) -> anyhow::Result<Self> {
        let container = dom::query(document, BACKGROUND_SELECTOR)?;
        let mut tiler = Self {
            container,
            config,
            rng: StdRng::from_entropy(),
        };
        tiler.regenerate()?;
        Ok(tiler)
    }

    /// Rebuild the tiles for the current container size. Returns the number of
    /// tiles written, or `None` when the template has no height yet.
    pub fn regenerate(&mut self) -> anyhow::Result<Option<usize>> {
        let metrics = dom::measure(&self.container);
        let template = dom::query_within(&self.container, WORD_SELECTOR)?;
        let tile_height = template.client_height() as f64;

        let Some(plan) = plan_tiles(metrics, tile_height, &self.config, &mut self.rng) else {
            log::debug!("[background] template has no height, skipping");
            return Ok(None);
        };

        self.container.set_inner_html("");
        for tile in &plan {
            let word: web::HtmlElement = template
                .clone_node_with_deep(true)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .dyn_into()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            dom::set_css_var(&word, VAR_TILE_INDEX, &tile.index.to_string());
            dom::set_css_var(&word, VAR_TILE_POSITION, &tile.position.to_string());
            dom::set_css_var(&word, VAR_TILE_DURATION, &tile.duration.to_string());
            self.container
                .append_child(&word)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        log::debug!(
            "[background] {} tiles for {:.0}x{:.0}",
            plan.len(),
            metrics.width,
            metrics.height
        );
        Ok(Some(plan.len()))
    }
}
