use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use carousel::card::{render_card, Photo};
use carousel::constants::*;
use carousel::content::{load_section, GallerySection, VideoSection};
use carousel::gallery::Gallery;
use carousel::{Carousel, CarouselConfig, Frame, PagerConfig, Render, RevealPager};

#[derive(Parser)]
#[command(name = "carousel", about = "Drive the site's carousels and show-more grids without a browser")]
struct Cli {
    /// Log every navigation step
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a carousel through simulated time
    Carousel(CarouselArgs),
    /// Click through a show-more grid
    Pager(PagerArgs),
}

#[derive(Args)]
struct CarouselArgs {
    /// positions, videos, hero, compact or strip
    #[arg(long, default_value = "positions")]
    preset: String,
    /// JSON file overriding the preset
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of cards when no content file is given
    #[arg(long, default_value_t = 7)]
    items: usize,
    /// Video section document to take the cards from
    #[arg(long)]
    content: Option<PathBuf>,
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,
    #[arg(long)]
    card_size: Option<f32>,
    /// Auto-advance period in seconds
    #[arg(long)]
    interval: Option<f32>,
    /// Simulated run time in seconds
    #[arg(long, default_value_t = 30.0)]
    seconds: f32,
    /// Random viewer actions (clicks, hovers, resizes) per second
    #[arg(long, default_value_t = 0.0)]
    interaction_rate: f64,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct PagerArgs {
    /// photos or faculty
    #[arg(long, default_value = "photos")]
    preset: String,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of items when no content file is given
    #[arg(long, default_value_t = 20)]
    items: usize,
    /// Gallery section document
    #[arg(long)]
    content: Option<PathBuf>,
    #[arg(long, default_value = "all")]
    category: String,
    #[arg(long, default_value_t = 1280)]
    width: u32,
    /// How many times "show more" is pressed
    #[arg(long, default_value_t = 3)]
    clicks: usize,
}

/// Prints one line per cursor move.
struct TerminalView {
    clock: f32,
    titles: Vec<String>,
    last: Option<(usize, usize)>,
}

impl Render for TerminalView {
    fn render(&mut self, frame: &Frame) {
        // Repeated frames (timer tick on a single view, resize without change) are skipped
        let key = (frame.cursor, frame.items_in_view);
        if self.last == Some(key) {
            return;
        }
        self.last = Some(key);

        let dots: String = frame
            .dots()
            .iter()
            .map(|&active| if active { '●' } else { '○' })
            .collect();
        let shown: Vec<&str> = frame
            .visible_range()
            .filter_map(|i| self.titles.get(i).map(String::as_str))
            .collect();

        println!(
            "{:>7.2}s  cursor {}/{}  view {}  {}  {}  {}",
            self.clock,
            frame.cursor,
            frame.max_cursor,
            frame.items_in_view,
            dots,
            frame.translation,
            shown.join(" | ")
        );
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // --- Logging ---
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Carousel(args) => run_carousel(args),
        Command::Pager(args) => run_pager(args),
    }
}

fn run_carousel(args: CarouselArgs) -> anyhow::Result<()> {
    // --- Configuration: file, else preset, then flags on top ---
    let mut config = match &args.config {
        Some(path) => CarouselConfig::from_file(path)
            .with_context(|| format!("loading carousel config {}", path.display()))?,
        None => CarouselConfig::preset(&args.preset)?,
    };
    if let Some(interval) = args.interval {
        config.interval_secs = interval;
    }
    if let Some(card_size) = args.card_size {
        config.geometry.card_size = card_size;
        config.geometry.container_width = args.width as f32;
    }

    // --- Cards ---
    // A broken content file only costs this section its cards
    let titles: Vec<String> = match &args.content {
        Some(path) => match load_section::<VideoSection>(path) {
            Ok(section) => {
                info!(title = %section.section_title, videos = section.videos.len(), "content loaded");
                section.videos.iter().map(|v| render_card(v).title).collect()
            }
            Err(e) => {
                error!("Error loading content from '{}': {}", path.display(), e);
                Vec::new()
            }
        },
        None => (1..=args.items).map(|i| format!("card {i}")).collect(),
    };

    let view = TerminalView {
        clock: 0.0,
        titles: titles.clone(),
        last: None,
    };
    let mut carousel = Carousel::new(config, args.width, view)?;
    carousel.set_items(titles.len());
    info!(
        items = carousel.item_count(),
        items_in_view = carousel.items_in_view(),
        max_cursor = carousel.max_cursor(),
        "carousel ready"
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // --- Main loop ---
    let total_frames = (args.seconds * FPS as f32).round() as u32;
    let mut auto_steps = 0;
    for frame in 0..total_frames {
        let dt = FRAME_TIME;
        carousel.renderer_mut().clock = frame as f32 * FRAME_TIME;

        // 1. Viewer input
        if args.interaction_rate > 0.0 && rng.random_bool((args.interaction_rate * dt as f64).min(1.0)) {
            simulate_viewer(&mut carousel, &mut rng);
        }

        // 2. Timers (debounced resize, auto-advance)
        auto_steps += carousel.update(dt);
    }

    carousel.teardown();
    info!(auto_steps, final_cursor = carousel.cursor(), "simulation finished");
    Ok(())
}

fn simulate_viewer<R: Render>(carousel: &mut Carousel<R>, rng: &mut StdRng) {
    match rng.random_range(0..5) {
        0 => {
            debug!("viewer: next");
            carousel.next();
        }
        1 => {
            debug!("viewer: prev");
            carousel.prev();
        }
        2 => {
            let dot = rng.random_range(0..carousel.dot_count());
            debug!(dot, "viewer: dot");
            carousel.select_dot(dot);
        }
        3 => {
            let hovered = !carousel.is_hovered();
            debug!(hovered, "viewer: hover");
            carousel.set_hovered(hovered);
        }
        _ => {
            let width = rng.random_range(320..=1920);
            debug!(width, "viewer: resize");
            carousel.resize(width);
        }
    }
}

fn run_pager(args: PagerArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => PagerConfig::from_file(path)
            .with_context(|| format!("loading pager config {}", path.display()))?,
        None => PagerConfig::preset(&args.preset)?,
    };

    if let Some(path) = &args.content {
        let section = match load_section::<GallerySection>(path) {
            Ok(section) => section,
            Err(e) => {
                error!("Error loading gallery from '{}': {}", path.display(), e);
                GallerySection::default()
            }
        };
        info!(title = %section.page_title, photos = section.photos.len(), "gallery loaded");
        return run_gallery(section.photos, config, &args);
    }

    let mut pager = RevealPager::new(config.batch.items_for(args.width), args.items)?;
    println!("showing {} of {}", pager.visible(), pager.item_count());
    for _ in 0..args.clicks {
        if !pager.can_show_more() {
            println!("show more hidden");
            break;
        }
        let added = pager.next_batch();
        println!("show more: +{} -> {} of {}", added.len(), pager.visible(), pager.item_count());
    }
    if pager.can_show_less() {
        println!("show less -> {}", pager.show_less());
    }
    Ok(())
}

fn run_gallery(photos: Vec<Photo>, config: PagerConfig, args: &PagerArgs) -> anyhow::Result<()> {
    let mut gallery = Gallery::new(photos, config.batch, args.width)?;
    gallery.select_category(&args.category);

    let print = |gallery: &Gallery<Photo>| {
        let titles: Vec<String> = gallery.visible_items().map(|p| render_card(p).title).collect();
        println!(
            "[{}] {} of {}: {}",
            gallery.category(),
            titles.len(),
            gallery.len(),
            titles.join(", ")
        );
    };

    print(&gallery);
    for _ in 0..args.clicks {
        if !gallery.pager().can_show_more() {
            println!("show more hidden");
            break;
        }
        gallery.show_more();
        print(&gallery);
    }
    Ok(())
}
